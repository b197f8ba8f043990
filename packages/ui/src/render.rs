//! Server-side rendering of pages to HTML strings.

use api::{RemarkList, RouteFailure, RouteParams};
use dioxus::prelude::*;
use store::User;

use crate::views::{
    ErrorPage, ErrorPageProps, IndexPage, ProfilePage, ProfilePageProps, RemarkOutlet, RemarksPage,
    RemarksPageProps,
};
use crate::ErrorHandlers;

/// Build `dom` and serialize it as a complete HTML document.
pub fn render_document(mut dom: VirtualDom) -> String {
    dom.rebuild_in_place();
    format!("<!DOCTYPE html>{}", dioxus_ssr::render(&dom))
}

pub fn render_index() -> String {
    render_document(VirtualDom::new(IndexPage))
}

pub fn render_profile(user: User) -> String {
    render_document(VirtualDom::new_with_props(
        ProfilePage,
        ProfilePageProps::builder().user(user).build(),
    ))
}

pub fn render_remarks(list: RemarkList, outlet: RemarkOutlet) -> String {
    render_document(VirtualDom::new_with_props(
        RemarksPage,
        RemarksPageProps::builder().list(list).outlet(outlet).build(),
    ))
}

pub fn render_error(failure: RouteFailure, params: RouteParams, handlers: ErrorHandlers) -> String {
    render_document(VirtualDom::new_with_props(
        ErrorPage,
        ErrorPageProps::builder()
            .failure(failure)
            .params(params)
            .handlers(handlers)
            .build(),
    ))
}
