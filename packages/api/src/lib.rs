//! # API crate: page loaders and form actions for Remark
//!
//! Everything a route does between "request matched" and "render the page" lives
//! here, independent of the HTTP server and of the UI components.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`failure`] | [`RouteFailure`], the classified/unclassified failure the error boundary dispatches on, plus the `invariant` helpers |
//! | [`loaders`] | Read-side: profile, remark list, single remark |
//! | [`actions`] | Write-side: delete and save a remark |
//! | [`validation`] | `garde` validation of the remark editor form |
//! | [`params`] | Route path parameters handed to error handlers |
//! | [`paths`] | Canonical page URLs used for links and redirects |

pub mod actions;
pub mod failure;
pub mod loaders;
pub mod params;
pub mod paths;
pub mod validation;

pub use actions::{delete_remark, save_remark, ActionOutcome};
pub use failure::{ensure_found, invariant, RouteFailure, StatusFailure};
pub use loaders::{load_profile, load_remark, load_remark_list, RemarkList};
pub use params::RouteParams;
pub use validation::{FormErrors, RemarkEditorForm, CONTENT_MAX_LENGTH, TITLE_MAX_LENGTH};
