//! # Store: CRUD operations over typed collections
//!
//! [`Store`] is the interface page loaders talk to. Operations are generic over
//! the record type ([`Entity`]) so one trait covers both the `user` and `remark`
//! collections, and deletion is only available for [`Deletable`] entities.
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`create`](Store::create) | Inserts a record from its draft. Generates a key when none is supplied, rejects duplicate keys and dangling relations. |
//! | [`find_first`](Store::find_first) | First record matching a [`Query`], in insertion order. |
//! | [`find_many`](Store::find_many) | All records matching a [`Query`], in insertion order. Empty when nothing matches. |
//! | [`update`](Store::update) | Applies a patch to the record with the given key. |
//! | [`delete`](Store::delete) | Removes and returns the record with the given key. No cascade. |
//! | [`remarks_of`](Store::remarks_of) | The reverse side of `Remark.owner`, computed on demand. |
//!
//! All operations are synchronous and complete before returning. The in-memory
//! implementation lives in [`crate::MemoryStore`].

use crate::error::StoreError;
use crate::models::{Deletable, Entity, Remark, User};
use crate::query::Query;

pub trait Store: Clone + Send + Sync + 'static {
    fn create<E: Entity>(&self, draft: E::Draft) -> Result<E, StoreError>;

    fn find_first<E: Entity>(&self, query: &Query) -> Result<Option<E>, StoreError>;

    fn find_many<E: Entity>(&self, query: &Query) -> Result<Vec<E>, StoreError>;

    fn update<E: Entity>(&self, key: &str, patch: E::Patch) -> Result<E, StoreError>;

    fn delete<E: Deletable>(&self, key: &str) -> Result<E, StoreError>;

    fn remarks_of(&self, owner: &User) -> Result<Vec<Remark>, StoreError>;
}
