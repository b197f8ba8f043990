//! Page loaders: read the data a page needs, or fail with a [`RouteFailure`].

use serde::{Deserialize, Serialize};
use store::{Query, Remark, Store, User};

use crate::failure::{ensure_found, RouteFailure};

/// Data of the remark list layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemarkList {
    pub owner: User,
    pub remarks: Vec<Remark>,
}

/// Look up a user by the `{userId}` path segment, which is their username.
pub fn load_profile<S: Store>(store: &S, user_id: &str) -> Result<User, RouteFailure> {
    let user = store.find_first::<User>(&Query::eq("username", user_id))?;
    ensure_found(user, "User not found")
}

pub fn load_remark_list<S: Store>(store: &S, user_id: &str) -> Result<RemarkList, RouteFailure> {
    let owner = load_profile(store, user_id)?;
    let remarks = store.find_many::<Remark>(&Query::related("owner", "username", user_id))?;
    Ok(RemarkList { owner, remarks })
}

pub fn load_remark<S: Store>(store: &S, remark_id: &str) -> Result<Remark, RouteFailure> {
    let remark = store.find_first::<Remark>(&Query::eq("id", remark_id))?;
    ensure_found(remark, "Remark not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::seed::SEED_USERNAME;
    use store::MemoryStore;

    #[test]
    fn test_load_profile() {
        let store = MemoryStore::seeded().unwrap();
        let user = load_profile(&store, SEED_USERNAME).unwrap();
        assert_eq!(user.display_name(), "Heng-Hao");

        assert_eq!(
            load_profile(&store, "nobody"),
            Err(RouteFailure::not_found("User not found"))
        );
    }

    #[test]
    fn test_load_remark_list() {
        let store = MemoryStore::seeded().unwrap();
        let list = load_remark_list(&store, SEED_USERNAME).unwrap();
        assert_eq!(list.owner.username, SEED_USERNAME);
        assert_eq!(list.remarks.len(), 11);

        assert_eq!(
            load_remark_list(&store, "nobody").unwrap_err().status_code(),
            Some(404)
        );
    }

    #[test]
    fn test_load_remark() {
        let store = MemoryStore::seeded().unwrap();
        assert_eq!(load_remark(&store, "5ffccf15").unwrap().title, "Hello, again!");
        assert_eq!(
            load_remark(&store, "100001"),
            Err(RouteFailure::not_found("Remark not found"))
        );
    }
}
