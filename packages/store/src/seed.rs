//! Demo dataset loaded by [`crate::MemoryStore::seeded`].
//!
//! One user and eleven remarks. The last three remarks repeat their sentence 500
//! times so the detail view has something long enough to scroll.

use crate::error::StoreError;
use crate::models::{NewRemark, NewUser, Remark, User};
use crate::repo::Store;

pub const SEED_USER_ID: &str = "f7c0e59f5ffccf157d0ab6b1a946d132";
pub const SEED_USERNAME: &str = "henghao";

const LONG_CONTENT_REPEAT: usize = 500;

/// `(id, title, content, repeat)`
const SEED_REMARKS: [(&str, &str, &str, usize); 11] = [
    ("f7c0e59f", "Hello, world!", "This is my first remark.", 1),
    ("5ffccf15", "Hello, again!", "This is my second remark.", 1),
    ("7d0ab6b1", "Hello, one more time!(3)", "This is my third remark.", 1),
    ("a946d132", "Hello, one more time!(4)", "This is my fourth remark.", 1),
    ("a946d133", "Hello, one more time!(5)", "This is my fifth remark.", 1),
    ("a946d134", "Hello, one more time!(6)", "This is my sixth remark.", 1),
    ("a946d135", "Hello, one more time!(7)", "This is my seventh remark.", 1),
    ("a946d136", "Hello, one more time!(8)", "This is my eighth remark.", 1),
    ("a946d137", "Hello, one more time!(9)", "This is my ninth remark. ", LONG_CONTENT_REPEAT),
    ("a946d138", "Hello, one more time!(10)", "This is my tenth remark. ", LONG_CONTENT_REPEAT),
    ("a946d139", "Hello, one more time!(11)", "This is my eleventh remark. ", LONG_CONTENT_REPEAT),
];

/// Insert the demo user and their remarks, returning the user.
pub fn populate<S: Store>(store: &S) -> Result<User, StoreError> {
    let owner = store.create::<User>(NewUser {
        id: Some(SEED_USER_ID.to_string()),
        email: "henghao@hpu.dev".to_string(),
        username: SEED_USERNAME.to_string(),
        name: Some("Heng-Hao".to_string()),
    })?;

    for (id, title, content, repeat) in SEED_REMARKS {
        store.create::<Remark>(NewRemark {
            id: Some(id.to_string()),
            title: title.to_string(),
            content: content.repeat(repeat),
            owner_id: owner.id.clone(),
        })?;
    }

    tracing::info!(
        username = %owner.username,
        remarks = SEED_REMARKS.len(),
        "seeded store"
    );
    Ok(owner)
}
