use api::{RouteFailure, RouteParams};
use dioxus::prelude::*;

use crate::{ErrorHandlers, GeneralErrorBoundary, Layout};

/// Full-page fallback for failures that happen before any layout could load.
#[component]
pub fn ErrorPage(
    failure: RouteFailure,
    #[props(default)] params: RouteParams,
    #[props(default)] handlers: ErrorHandlers,
) -> Element {
    rsx! {
        Layout {
            page_title: "Remark".to_string(),
            GeneralErrorBoundary { failure: failure, params: params, handlers: handlers }
        }
    }
}
