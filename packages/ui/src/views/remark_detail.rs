use dioxus::prelude::*;
use store::Remark;

/// A single remark with its delete and edit controls.
#[component]
pub fn RemarkDetail(user_id: String, remark: Remark) -> Element {
    let edit_href = api::paths::remark_edit(&user_id, &remark.id);

    rsx! {
        div {
            class: "p-4 h-full flex flex-col",
            h2 { class: "text-2xl font-medium pb-4 pr-4", "{remark.title}" }
            div {
                class: "overflow-y-auto grow",
                p { "{remark.content}" }
            }
            div {
                class: "flex justify-between",
                // posts back to the detail route, whose action deletes
                form {
                    method: "post",
                    button { r#type: "submit", class: "btn btn-destructive", "Delete" }
                }
                a { class: "btn", href: "{edit_href}", "Edit" }
            }
        }
    }
}
