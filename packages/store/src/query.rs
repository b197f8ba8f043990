//! # Query predicates
//!
//! A [`Query`] is a list of [`Clause`]s, each pairing a field name with a
//! [`Predicate`]. The predicate set is closed:
//!
//! - [`Predicate::Equals`]: strict equality against a scalar field.
//! - [`Predicate::RelationEquals`]: follow a to-one relation and apply a nested
//!   predicate to a field of the related record (e.g. remarks whose
//!   `owner.username` equals `"henghao"`).
//!
//! Before a query runs it is checked against the model's schema and lowered into
//! a [`Plan`]. Only three shapes are accepted: no clause (match everything), a
//! single scalar equality, and a single one-level relation traversal ending in an
//! equality. Every other combination is rejected with
//! [`StoreError::UnsupportedQuery`] or [`StoreError::UnknownField`].

use crate::error::StoreError;
use crate::models::{FieldKind, Fields, Model, Value};

#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    Equals(Value),
    RelationEquals(String, Box<Predicate>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Clause {
    pub field: String,
    pub predicate: Predicate,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Query {
    pub clauses: Vec<Clause>,
}

impl Query {
    /// Query matching every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// `{ field: { equals: value } }`
    pub fn eq(field: &str, value: impl Into<Value>) -> Self {
        Self::all().and(field, Predicate::Equals(value.into()))
    }

    /// `{ relation: { field: { equals: value } } }`
    pub fn related(relation: &str, field: &str, value: impl Into<Value>) -> Self {
        Self::all().and(
            relation,
            Predicate::RelationEquals(field.to_string(), Box::new(Predicate::Equals(value.into()))),
        )
    }

    /// Add another clause.
    pub fn and(mut self, field: &str, predicate: Predicate) -> Self {
        self.clauses.push(Clause {
            field: field.to_string(),
            predicate,
        });
        self
    }

    /// Check the query against `model`'s schema.
    pub(crate) fn plan(&self, model: Model) -> Result<Plan<'_>, StoreError> {
        let clause = match self.clauses.as_slice() {
            [] => return Ok(Plan::All),
            [clause] => clause,
            _ => {
                return Err(StoreError::UnsupportedQuery {
                    model,
                    reason: format!("{} field predicates in one query", self.clauses.len()),
                })
            }
        };

        let kind = model
            .field_kind(&clause.field)
            .ok_or_else(|| StoreError::UnknownField {
                model,
                field: clause.field.clone(),
            })?;

        match (kind, &clause.predicate) {
            (FieldKind::Scalar, Predicate::Equals(value)) => Ok(Plan::Equals {
                field: &clause.field,
                value,
            }),
            (FieldKind::ToOne(target), Predicate::RelationEquals(field, nested)) => {
                match target.field_kind(field) {
                    None => Err(StoreError::UnknownField {
                        model: target,
                        field: field.clone(),
                    }),
                    Some(FieldKind::Scalar) => match nested.as_ref() {
                        Predicate::Equals(value) => Ok(Plan::Related {
                            relation: &clause.field,
                            target,
                            field,
                            value,
                        }),
                        Predicate::RelationEquals(..) => Err(StoreError::UnsupportedQuery {
                            model,
                            reason: format!("nested traversal below `{}`", clause.field),
                        }),
                    },
                    Some(_) => Err(StoreError::UnsupportedQuery {
                        model,
                        reason: format!("`{}.{field}` is not a scalar field", clause.field),
                    }),
                }
            }
            (FieldKind::Scalar, Predicate::RelationEquals(..)) => Err(StoreError::UnsupportedQuery {
                model,
                reason: format!("`{}` is not a relation", clause.field),
            }),
            (FieldKind::ToOne(_), Predicate::Equals(_)) => Err(StoreError::UnsupportedQuery {
                model,
                reason: format!("`{}` is a relation, compare one of its fields", clause.field),
            }),
            (FieldKind::ToMany(_), _) => Err(StoreError::UnsupportedQuery {
                model,
                reason: format!("`{}` is a to-many relation", clause.field),
            }),
        }
    }
}

/// A validated query.
#[derive(Debug)]
pub(crate) enum Plan<'q> {
    All,
    Equals {
        field: &'q str,
        value: &'q Value,
    },
    Related {
        relation: &'q str,
        target: Model,
        field: &'q str,
        value: &'q Value,
    },
}

/// Looks up records of any model by primary key.
pub(crate) trait Resolver {
    fn resolve(&self, model: Model, key: &str) -> Option<&dyn Fields>;
}

pub(crate) fn matches<R: Resolver + ?Sized>(record: &dyn Fields, plan: &Plan<'_>, resolver: &R) -> bool {
    match plan {
        Plan::All => true,
        Plan::Equals { field, value } => record.value(field).as_ref() == Some(*value),
        Plan::Related {
            relation,
            target,
            field,
            value,
        } => record
            .related_key(relation)
            .and_then(|key| resolver.resolve(*target, key))
            .and_then(|related| related.value(field))
            .is_some_and(|found| found == **value),
    }
}
