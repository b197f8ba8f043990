use api::{FormErrors, RemarkEditorForm, RemarkList, RouteFailure, RouteParams};
use dioxus::prelude::*;
use store::Remark;

use super::{RemarkDetail, RemarkEditor, RemarksPlaceholder};
use crate::{ErrorHandlers, GeneralErrorBoundary, Layout};

/// What the remark list layout shows next to the list.
#[derive(Clone, Debug, PartialEq)]
pub enum RemarkOutlet {
    Empty,
    Detail(Remark),
    Editor {
        remark_id: String,
        values: RemarkEditorForm,
        errors: FormErrors,
    },
    Failure {
        remark_id: String,
        failure: RouteFailure,
        params: RouteParams,
        handlers: ErrorHandlers,
    },
}

impl RemarkOutlet {
    fn selected(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Detail(remark) => Some(&remark.id),
            Self::Editor { remark_id, .. } | Self::Failure { remark_id, .. } => Some(remark_id),
        }
    }
}

fn link_class(active: bool) -> &'static str {
    if active {
        "hover:underline p-4 bg-accent"
    } else {
        "hover:underline p-4"
    }
}

/// The remark list of one user, with the child route rendered in the outlet.
#[component]
pub fn RemarksPage(list: RemarkList, outlet: RemarkOutlet) -> Element {
    let user_id = list.owner.username.clone();
    let display_name = list.owner.display_name().to_string();
    let profile_href = api::paths::profile(&user_id);
    let selected = outlet.selected().map(str::to_string);

    let outlet_view = match outlet {
        RemarkOutlet::Empty => rsx! { RemarksPlaceholder {} },
        RemarkOutlet::Detail(remark) => rsx! {
            RemarkDetail { user_id: user_id.clone(), remark: remark }
        },
        RemarkOutlet::Editor { remark_id, values, errors } => rsx! {
            RemarkEditor {
                user_id: user_id.clone(),
                remark_id: remark_id,
                values: values,
                errors: errors,
            }
        },
        RemarkOutlet::Failure { failure, params, handlers, .. } => rsx! {
            GeneralErrorBoundary { failure: failure, params: params, handlers: handlers }
        },
    };

    rsx! {
        Layout {
            page_title: format!("{display_name}'s Remarks | Remark"),
            div {
                class: "flex h-full border-8 border-blue-500 p-4 gap-4",
                div {
                    class: "flex flex-col",
                    h1 { class: "text-h1", "{display_name}'s Remarks" }
                    a {
                        class: "hover:underline p-4 font-semibold",
                        href: "{profile_href}",
                        "Back to Profile"
                    }
                    if list.remarks.is_empty() {
                        p { class: "p-4 text-neutral-600", "No remarks yet." }
                    }
                    nav {
                        class: "flex flex-col overflow-y-auto",
                        for remark in list.remarks.iter() {
                            a {
                                key: "{remark.id}",
                                class: link_class(selected.as_deref() == Some(remark.id.as_str())),
                                href: api::paths::remark(&user_id, &remark.id),
                                "{remark.title}"
                            }
                        }
                    }
                }
                div {
                    class: "grow h-full",
                    {outlet_view}
                }
            }
        }
    }
}

/// Status handlers of the remark edit route.
pub fn remark_edit_handlers() -> ErrorHandlers {
    ErrorHandlers::new().on_status(404, |info| {
        let remark_id = info.params.get("remarkId").unwrap_or_default().to_string();
        rsx! {
            p { "Remark with remarkId {remark_id} doesn't exist." }
        }
    })
}
