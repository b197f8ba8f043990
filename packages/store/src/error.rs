use thiserror::Error;

use crate::models::Model;

/// Failures raised by [`crate::Store`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no {model} with key `{key}`")]
    NotFound { model: Model, key: String },

    #[error("a {model} with key `{key}` already exists")]
    DuplicateKey { model: Model, key: String },

    #[error("{model}.{field} references a missing record `{key}`")]
    MissingRelation {
        model: Model,
        field: &'static str,
        key: String,
    },

    #[error("{model} has no field `{field}`")]
    UnknownField { model: Model, field: String },

    #[error("unsupported query on {model}: {reason}")]
    UnsupportedQuery { model: Model, reason: String },
}
