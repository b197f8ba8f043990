//! This crate contains all shared UI for the workspace: the page components,
//! the general error boundary, and the helpers rendering them to HTML.

mod error_boundary;
pub use error_boundary::{
    dispatch, select, ErrorHandlers, Fallback, GeneralErrorBoundary, GeneralErrorBoundaryProps,
    StatusHandler, StatusInfo, UnexpectedHandler,
};

mod layout;
pub use layout::Layout;

pub mod render;
pub use render::{render_document, render_error, render_index, render_profile, render_remarks};

pub mod views;
pub use views::{remark_edit_handlers, RemarkOutlet};
