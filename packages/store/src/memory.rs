use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use crate::error::StoreError;
use crate::key;
use crate::models::{Deletable, Entity, Fields, Model, Remark, User};
use crate::query::{matches, Query, Resolver};
use crate::repo::Store;
use crate::seed;

/// Backing collections, in insertion order.
#[derive(Debug, Default)]
pub struct Tables {
    users: Vec<User>,
    remarks: Vec<Remark>,
}

/// Ties an entity type to its collection in [`Tables`].
pub trait Stored: Sized {
    fn rows(tables: &Tables) -> &Vec<Self>;
    fn rows_mut(tables: &mut Tables) -> &mut Vec<Self>;
}

impl Stored for User {
    fn rows(tables: &Tables) -> &Vec<Self> {
        &tables.users
    }

    fn rows_mut(tables: &mut Tables) -> &mut Vec<Self> {
        &mut tables.users
    }
}

impl Stored for Remark {
    fn rows(tables: &Tables) -> &Vec<Self> {
        &tables.remarks
    }

    fn rows_mut(tables: &mut Tables) -> &mut Vec<Self> {
        &mut tables.remarks
    }
}

impl Resolver for Tables {
    fn resolve(&self, model: Model, key: &str) -> Option<&dyn Fields> {
        match model {
            Model::User => self.users.iter().find(|u| u.id == key).map(|u| u as &dyn Fields),
            Model::Remark => self.remarks.iter().find(|r| r.id == key).map(|r| r as &dyn Fields),
        }
    }
}

/// In-memory Store shared by every request of the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the demo user and their remarks.
    pub fn seeded() -> Result<Self, StoreError> {
        let store = Self::new();
        seed::populate(&store)?;
        Ok(store)
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Store for MemoryStore {
    fn create<E: Entity>(&self, draft: E::Draft) -> Result<E, StoreError> {
        let mut tables = self.tables();

        let key = match E::draft_key(&draft) {
            Some(key) if E::rows(&tables).iter().any(|row| row.key() == key) => {
                return Err(StoreError::DuplicateKey {
                    model: E::MODEL,
                    key: key.to_string(),
                });
            }
            Some(key) => key.to_string(),
            None => key::generate(|candidate| E::rows(&tables).iter().any(|row| row.key() == candidate)),
        };

        let record = E::from_draft(draft, key, Utc::now());
        for link in record.links() {
            if tables.resolve(link.target, link.key).is_none() {
                return Err(StoreError::MissingRelation {
                    model: E::MODEL,
                    field: link.field,
                    key: link.key.to_string(),
                });
            }
        }

        E::rows_mut(&mut tables).push(record.clone());
        tracing::debug!(model = %E::MODEL, key = record.key(), "record created");
        Ok(record)
    }

    fn find_first<E: Entity>(&self, query: &Query) -> Result<Option<E>, StoreError> {
        let tables = self.tables();
        let plan = query.plan(E::MODEL)?;
        Ok(E::rows(&tables)
            .iter()
            .find(|row| matches(*row, &plan, &*tables))
            .cloned())
    }

    fn find_many<E: Entity>(&self, query: &Query) -> Result<Vec<E>, StoreError> {
        let tables = self.tables();
        let plan = query.plan(E::MODEL)?;
        Ok(E::rows(&tables)
            .iter()
            .filter(|row| matches(*row, &plan, &*tables))
            .cloned()
            .collect())
    }

    fn update<E: Entity>(&self, key: &str, patch: E::Patch) -> Result<E, StoreError> {
        let mut tables = self.tables();
        let record = E::rows_mut(&mut tables)
            .iter_mut()
            .find(|row| row.key() == key)
            .ok_or_else(|| StoreError::NotFound {
                model: E::MODEL,
                key: key.to_string(),
            })?;
        record.apply(patch);
        tracing::debug!(model = %E::MODEL, key, "record updated");
        Ok(record.clone())
    }

    fn delete<E: Deletable>(&self, key: &str) -> Result<E, StoreError> {
        let mut tables = self.tables();
        let rows = E::rows_mut(&mut tables);
        let index = rows
            .iter()
            .position(|row| row.key() == key)
            .ok_or_else(|| StoreError::NotFound {
                model: E::MODEL,
                key: key.to_string(),
            })?;
        tracing::debug!(model = %E::MODEL, key, "record deleted");
        Ok(rows.remove(index))
    }

    fn remarks_of(&self, owner: &User) -> Result<Vec<Remark>, StoreError> {
        Ok(self
            .tables()
            .remarks
            .iter()
            .filter(|remark| remark.owner_id == owner.id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::is_generated_key;
    use crate::models::{NewRemark, NewUser, RemarkPatch, UserPatch, Value};
    use crate::seed::{SEED_USERNAME, SEED_USER_ID};
    use std::collections::HashSet;

    fn store_with_user(username: &str) -> (MemoryStore, User) {
        let store = MemoryStore::new();
        let user = store
            .create::<User>(NewUser {
                email: format!("{username}@example.com"),
                username: username.to_string(),
                ..Default::default()
            })
            .unwrap();
        (store, user)
    }

    fn remark_for(owner: &User, title: &str) -> NewRemark {
        NewRemark {
            title: title.to_string(),
            content: format!("{title} body"),
            owner_id: owner.id.clone(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_generates_unique_keys() {
        let (store, owner) = store_with_user("ada");
        let mut seen = HashSet::new();
        for i in 0..200 {
            let remark = store
                .create::<Remark>(remark_for(&owner, &format!("note {i}")))
                .unwrap();
            assert!(is_generated_key(&remark.id));
            assert!(seen.insert(remark.id), "duplicate key generated");
        }
        assert!(is_generated_key(&owner.id));
    }

    #[test]
    fn test_create_rejects_duplicate_key() {
        let (store, owner) = store_with_user("ada");
        let draft = NewRemark {
            id: Some("cafebabe".to_string()),
            ..remark_for(&owner, "first")
        };
        store.create::<Remark>(draft.clone()).unwrap();

        assert_eq!(
            store.create::<Remark>(draft).unwrap_err(),
            StoreError::DuplicateKey {
                model: Model::Remark,
                key: "cafebabe".to_string(),
            }
        );
        assert_eq!(store.find_many::<Remark>(&Query::all()).unwrap().len(), 1);
    }

    #[test]
    fn test_create_requires_existing_owner() {
        let store = MemoryStore::new();
        let err = store
            .create::<Remark>(NewRemark {
                title: "orphan".to_string(),
                content: "nobody owns me".to_string(),
                owner_id: "deadbeef".to_string(),
                ..Default::default()
            })
            .unwrap_err();

        assert_eq!(
            err,
            StoreError::MissingRelation {
                model: Model::Remark,
                field: "owner",
                key: "deadbeef".to_string(),
            }
        );
        assert!(store.find_many::<Remark>(&Query::all()).unwrap().is_empty());
    }

    #[test]
    fn test_find_first_is_strict_equality() {
        let (store, owner) = store_with_user("ada");
        store.create::<Remark>(remark_for(&owner, "Hello")).unwrap();
        store.create::<Remark>(remark_for(&owner, "Hello, world")).unwrap();

        let found = store
            .find_first::<Remark>(&Query::eq("title", "Hello"))
            .unwrap()
            .unwrap();
        assert_eq!(found.title, "Hello");

        assert!(store
            .find_first::<Remark>(&Query::eq("title", "hello"))
            .unwrap()
            .is_none());
        assert!(store
            .find_first::<Remark>(&Query::eq("title", "Hell"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_find_many_by_owner_username() {
        let (store, ada) = store_with_user("ada");
        let grace = store
            .create::<User>(NewUser {
                email: "grace@example.com".to_string(),
                username: "grace".to_string(),
                name: Some("Grace".to_string()),
                ..Default::default()
            })
            .unwrap();
        for title in ["one", "two", "three"] {
            store.create::<Remark>(remark_for(&ada, title)).unwrap();
        }
        store.create::<Remark>(remark_for(&grace, "other")).unwrap();

        let titles: Vec<_> = store
            .find_many::<Remark>(&Query::related("owner", "username", "ada"))
            .unwrap()
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, ["one", "two", "three"]);

        assert!(store
            .find_many::<Remark>(&Query::related("owner", "username", "nobody"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_find_by_null_name() {
        let (store, ada) = store_with_user("ada");
        let found = store
            .find_first::<User>(&Query::eq("name", Value::Null))
            .unwrap()
            .unwrap();
        assert_eq!(found, ada);
    }

    #[test]
    fn test_unsupported_query_raises() {
        let (store, _) = store_with_user("ada");
        let query = Query::eq("username", "ada").and("email", crate::Predicate::Equals("x".into()));
        assert!(matches!(
            store.find_many::<User>(&query),
            Err(StoreError::UnsupportedQuery { .. })
        ));
    }

    #[test]
    fn test_update_changes_only_patched_fields() {
        let (store, owner) = store_with_user("ada");
        let before = store.create::<Remark>(remark_for(&owner, "draft")).unwrap();

        let after = store
            .update::<Remark>(
                &before.id,
                RemarkPatch {
                    content: Some("final".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(after.content, "final");
        assert_eq!(after.title, before.title);
        assert_eq!(after.id, before.id);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.owner_id, before.owner_id);

        let stored = store
            .find_first::<Remark>(&Query::eq("id", before.id.as_str()))
            .unwrap()
            .unwrap();
        assert_eq!(stored, after);
    }

    #[test]
    fn test_update_user_sets_and_clears_name() {
        let (store, before) = store_with_user("ada");

        let named = store
            .update::<User>(
                &before.id,
                UserPatch {
                    name: Some(Some("Ada Lovelace".to_string())),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(named.display_name(), "Ada Lovelace");
        assert_eq!(named.username, before.username);
        assert_eq!(named.email, before.email);

        let renamed = store
            .update::<User>(
                &before.id,
                UserPatch {
                    username: Some("countess".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(renamed.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(renamed.username, "countess");

        let cleared = store
            .update::<User>(
                &before.id,
                UserPatch {
                    name: Some(None),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(cleared.name, None);
        assert_eq!(cleared.display_name(), "countess");
        assert_eq!(cleared.id, before.id);
        assert_eq!(cleared.created_at, before.created_at);

        let stored = store
            .find_first::<User>(&Query::eq("username", "countess"))
            .unwrap()
            .unwrap();
        assert_eq!(stored, cleared);
        assert!(store
            .find_first::<User>(&Query::eq("username", "ada"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_update_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(
            store
                .update::<Remark>("00000000", RemarkPatch::default())
                .unwrap_err(),
            StoreError::NotFound {
                model: Model::Remark,
                key: "00000000".to_string(),
            }
        );
    }

    #[test]
    fn test_delete_then_find() {
        let (store, owner) = store_with_user("ada");
        let remark = store.create::<Remark>(remark_for(&owner, "gone")).unwrap();

        let deleted = store.delete::<Remark>(&remark.id).unwrap();
        assert_eq!(deleted, remark);
        assert!(store
            .find_first::<Remark>(&Query::eq("id", remark.id.as_str()))
            .unwrap()
            .is_none());
        assert!(matches!(
            store.delete::<Remark>(&remark.id),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_remarks_of_follows_owner() {
        let (store, ada) = store_with_user("ada");
        let stranger = store
            .create::<User>(NewUser {
                email: "stranger@example.com".to_string(),
                username: "stranger".to_string(),
                ..Default::default()
            })
            .unwrap();
        store.create::<Remark>(remark_for(&ada, "mine")).unwrap();

        assert_eq!(store.remarks_of(&ada).unwrap().len(), 1);
        assert!(store.remarks_of(&stranger).unwrap().is_empty());
    }

    #[test]
    fn test_clones_share_tables() {
        let (store, owner) = store_with_user("ada");
        let handle = store.clone();
        handle.create::<Remark>(remark_for(&owner, "shared")).unwrap();
        assert_eq!(store.remarks_of(&owner).unwrap().len(), 1);
    }

    #[test]
    fn test_seeded_store() {
        let store = MemoryStore::seeded().unwrap();

        let user = store
            .find_first::<User>(&Query::eq("username", SEED_USERNAME))
            .unwrap()
            .unwrap();
        assert_eq!(user.id, SEED_USER_ID);
        assert_eq!(user.name.as_deref(), Some("Heng-Hao"));

        let remarks = store
            .find_many::<Remark>(&Query::related("owner", "username", SEED_USERNAME))
            .unwrap();
        assert_eq!(remarks.len(), 11);
        assert_eq!(remarks[0].id, "f7c0e59f");
        assert_eq!(remarks[10].id, "a946d139");
        assert_eq!(store.remarks_of(&user).unwrap(), remarks);
    }
}
