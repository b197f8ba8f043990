//! Canonical URLs of the application's pages.
//!
//! Redirects always use full paths rather than relative ones.

pub fn profile(user_id: &str) -> String {
    format!("/users/{user_id}")
}

pub fn remarks(user_id: &str) -> String {
    format!("/users/{user_id}/remarks")
}

pub fn remark(user_id: &str, remark_id: &str) -> String {
    format!("/users/{user_id}/remarks/{remark_id}")
}

pub fn remark_edit(user_id: &str, remark_id: &str) -> String {
    format!("/users/{user_id}/remarks/{remark_id}/edit")
}
