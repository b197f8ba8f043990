//! # Domain models for users and remarks
//!
//! Defines the two record types held by a [`crate::Store`] together with the
//! drafts used to create them and the patches used to update them. Records are
//! `Serialize + Deserialize` so they can be handed to the page renderer as-is.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | A profile. `username` is the external lookup key used in URLs; `name` is optional and falls back to `username` for display. |
//! | [`Remark`] | A short note with a `title` and free-text `content`, owned by exactly one user through `owner_id`. |
//! | [`NewUser`] / [`NewRemark`] | Creation drafts. A draft without an `id` gets a generated key. |
//! | [`UserPatch`] / [`RemarkPatch`] | Partial updates. `None` fields are left untouched. |
//!
//! ## The [`Entity`] trait
//!
//! Both record types implement [`Entity`], which is what lets the store operations
//! be generic over the entity type: the associated [`Model`] names the collection,
//! [`Entity::Draft`] and [`Entity::Patch`] name the create/update payloads, and
//! [`Entity::links`] lists the to-one relations that must resolve at creation
//! time. Only [`Remark`] implements [`Deletable`]; users have no delete path.
//!
//! Field access for queries goes through [`Fields`], the object-safe half of the
//! contract, so that relation traversal can inspect a record of another type.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::memory::Stored;

/// Name of an entity collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Model {
    User,
    Remark,
}

/// How a field of a model behaves in a query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// A plain value compared with [`crate::Predicate::Equals`].
    Scalar,
    /// A many-to-one link to a record of another model.
    ToOne(Model),
    /// The reverse side of a [`FieldKind::ToOne`], computed on demand.
    ToMany(Model),
}

impl Model {
    pub fn as_str(self) -> &'static str {
        match self {
            Model::User => "user",
            Model::Remark => "remark",
        }
    }

    /// Schema lookup used to validate queries before they run.
    pub fn field_kind(self, field: &str) -> Option<FieldKind> {
        match (self, field) {
            (Model::User, "id" | "email" | "username" | "name" | "created_at") => {
                Some(FieldKind::Scalar)
            }
            (Model::User, "remarks") => Some(FieldKind::ToMany(Model::Remark)),
            (Model::Remark, "id" | "title" | "content" | "created_at") => Some(FieldKind::Scalar),
            (Model::Remark, "owner") => Some(FieldKind::ToOne(Model::User)),
            _ => None,
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Model {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Model::User),
            "remark" => Ok(Model::Remark),
            other => Err(format!("unknown model: {other}")),
        }
    }
}

/// A scalar field value as seen by the query matcher.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Option<String>> for Value {
    fn from(value: Option<String>) -> Self {
        value.map_or(Value::Null, Value::Text)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Timestamp(value)
    }
}

/// A to-one relation that must point at an existing record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link<'a> {
    pub field: &'static str,
    pub target: Model,
    pub key: &'a str,
}

/// Object-safe field access used by the query matcher.
pub trait Fields {
    /// Value of a scalar field, `None` when the field is not a scalar.
    fn value(&self, field: &str) -> Option<Value>;

    /// Key of the record a to-one field points at.
    fn related_key(&self, field: &str) -> Option<&str>;
}

/// A record type the store can hold.
pub trait Entity: Fields + Stored + Clone + fmt::Debug + Send + Sync + 'static {
    const MODEL: Model;

    type Draft;
    type Patch;

    /// Primary key.
    fn key(&self) -> &str;

    /// Key supplied by the caller, if any.
    fn draft_key(draft: &Self::Draft) -> Option<&str>;

    fn from_draft(draft: Self::Draft, key: String, created_at: DateTime<Utc>) -> Self;

    /// To-one relations of this record.
    fn links(&self) -> Vec<Link<'_>>;

    /// Apply a patch in place. Keys, timestamps and relations are never touched.
    fn apply(&mut self, patch: Self::Patch);
}

/// Entities that may be removed from the store.
pub trait Deletable: Entity {}

/// A user profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    /// External lookup key, e.g. the `{userId}` segment of `/users/{userId}`.
    pub username: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Get display name, falling back to the username if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.username)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub id: Option<String>,
    pub email: String,
    pub username: String,
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    pub email: Option<String>,
    pub username: Option<String>,
    /// `Some(None)` clears the name.
    pub name: Option<Option<String>>,
}

impl Fields for User {
    fn value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            "username" => Some(self.username.as_str().into()),
            "name" => Some(self.name.clone().into()),
            "created_at" => Some(self.created_at.into()),
            _ => None,
        }
    }

    fn related_key(&self, _field: &str) -> Option<&str> {
        None
    }
}

impl Entity for User {
    const MODEL: Model = Model::User;

    type Draft = NewUser;
    type Patch = UserPatch;

    fn key(&self) -> &str {
        &self.id
    }

    fn draft_key(draft: &NewUser) -> Option<&str> {
        draft.id.as_deref()
    }

    fn from_draft(draft: NewUser, key: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: key,
            email: draft.email,
            username: draft.username,
            name: draft.name,
            created_at,
        }
    }

    fn links(&self) -> Vec<Link<'_>> {
        Vec::new()
    }

    fn apply(&mut self, patch: UserPatch) {
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
    }
}

/// A note owned by a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remark {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Primary key of the owning [`User`].
    pub owner_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRemark {
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub owner_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemarkPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Fields for Remark {
    fn value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.as_str().into()),
            "title" => Some(self.title.as_str().into()),
            "content" => Some(self.content.as_str().into()),
            "created_at" => Some(self.created_at.into()),
            _ => None,
        }
    }

    fn related_key(&self, field: &str) -> Option<&str> {
        match field {
            "owner" => Some(&self.owner_id),
            _ => None,
        }
    }
}

impl Entity for Remark {
    const MODEL: Model = Model::Remark;

    type Draft = NewRemark;
    type Patch = RemarkPatch;

    fn key(&self) -> &str {
        &self.id
    }

    fn draft_key(draft: &NewRemark) -> Option<&str> {
        draft.id.as_deref()
    }

    fn from_draft(draft: NewRemark, key: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: key,
            title: draft.title,
            content: draft.content,
            created_at,
            owner_id: draft.owner_id,
        }
    }

    fn links(&self) -> Vec<Link<'_>> {
        vec![Link {
            field: "owner",
            target: Model::User,
            key: &self.owner_id,
        }]
    }

    fn apply(&mut self, patch: RemarkPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
    }
}

impl Deletable for Remark {}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: Option<&str>) -> User {
        User {
            id: "0badc0de".to_string(),
            email: "ada@example.com".to_string(),
            username: "ada".to_string(),
            name: name.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        assert_eq!(user(Some("Ada Lovelace")).display_name(), "Ada Lovelace");
        assert_eq!(user(None).display_name(), "ada");
    }

    #[test]
    fn test_model_names() {
        assert_eq!("user".parse::<Model>(), Ok(Model::User));
        assert_eq!("remark".parse::<Model>(), Ok(Model::Remark));
        assert!("note".parse::<Model>().is_err());
        assert_eq!(Model::Remark.to_string(), "remark");
    }

    #[test]
    fn test_remark_patch_leaves_other_fields() {
        let mut remark = Remark {
            id: "f7c0e59f".to_string(),
            title: "Before".to_string(),
            content: "Body".to_string(),
            created_at: Utc::now(),
            owner_id: "0badc0de".to_string(),
        };
        let before = remark.clone();

        remark.apply(RemarkPatch {
            title: Some("After".to_string()),
            content: None,
        });

        assert_eq!(remark.title, "After");
        assert_eq!(remark.content, before.content);
        assert_eq!(remark.id, before.id);
        assert_eq!(remark.created_at, before.created_at);
        assert_eq!(remark.owner_id, before.owner_id);
    }

    #[test]
    fn test_user_name_value_is_null_when_absent() {
        assert_eq!(user(None).value("name"), Some(Value::Null));
        assert_eq!(user(None).value("remarks"), None);
    }
}
