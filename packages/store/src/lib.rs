//! # Store crate: the mock relational data layer behind Remark
//!
//! Holds `user` and `remark` records in process memory, with a one-to-many
//! ownership relation between them, generated primary keys and a small
//! equality-based query language.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | `User`, `Remark`, their drafts/patches, and the [`Entity`] trait |
//! | [`query`] | [`Query`] / [`Predicate`] and the matcher |
//! | [`repo`] | The [`Store`] trait |
//! | [`key`] | 8-character hex key generation |
//! | [`seed`] | The demo dataset |

pub mod error;
pub mod key;
pub mod models;
pub mod query;
pub mod repo;
pub mod seed;

mod memory;
pub use memory::MemoryStore;

pub use error::StoreError;
pub use models::{
    Deletable, Entity, Model, NewRemark, NewUser, Remark, RemarkPatch, User, UserPatch, Value,
};
pub use query::{Clause, Predicate, Query};
pub use repo::Store;
