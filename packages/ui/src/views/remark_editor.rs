use api::{FormErrors, RemarkEditorForm, CONTENT_MAX_LENGTH, TITLE_MAX_LENGTH};
use dioxus::prelude::*;

const EDITOR_ID: &str = "remark-editor";

#[component]
fn ErrorList(id: String, errors: Vec<String>) -> Element {
    if errors.is_empty() {
        return rsx! {};
    }

    rsx! {
        ul {
            id: "{id}",
            class: "flex flex-col gap-1",
            for error in errors.iter() {
                li { class: "text-[10px] text-foreground-destructive", "{error}" }
            }
        }
    }
}

/// Id of the error list for `scope`, when that list is rendered.
fn described_by(has_errors: bool, scope: &str) -> Option<String> {
    has_errors.then(|| format!("{EDITOR_ID}-{scope}-errors"))
}

/// Edit form for a remark. `values` pre-fills the fields; `errors` is empty
/// unless a submission was rejected.
#[component]
pub fn RemarkEditor(
    user_id: String,
    remark_id: String,
    values: RemarkEditorForm,
    #[props(default)] errors: FormErrors,
) -> Element {
    let cancel_href = api::paths::remark(&user_id, &remark_id);
    let title_max = TITLE_MAX_LENGTH.to_string();
    let content_max = CONTENT_MAX_LENGTH.to_string();
    let form_described = described_by(!errors.form_errors.is_empty(), "form");
    let title_described = described_by(!errors.field("title").is_empty(), "title");
    let content_described = described_by(!errors.field("content").is_empty(), "content");

    rsx! {
        div {
            class: "p-4 h-full",
            form {
                id: EDITOR_ID,
                method: "post",
                class: "h-full",
                tabindex: "-1",
                "aria-invalid": form_described.is_some().then_some("true"),
                "aria-describedby": form_described.clone(),
                div {
                    class: "h-full flex flex-col gap-6",
                    div {
                        class: "grid gap-2",
                        label { class: "block", r#for: "{EDITOR_ID}-title", "Title" }
                        input {
                            id: "{EDITOR_ID}-title",
                            name: "title",
                            value: "{values.title}",
                            required: true,
                            maxlength: "{title_max}",
                            autofocus: true,
                            "aria-invalid": title_described.is_some().then_some("true"),
                            "aria-describedby": title_described.clone(),
                        }
                        div {
                            class: "min-h-[32px] px-4 pb-3 pt-1",
                            ErrorList {
                                id: format!("{EDITOR_ID}-title-errors"),
                                errors: errors.field("title").to_vec(),
                            }
                        }
                    }
                    div {
                        class: "flex flex-col gap-2 grow",
                        label { r#for: "{EDITOR_ID}-content", "Content" }
                        textarea {
                            id: "{EDITOR_ID}-content",
                            class: "grow",
                            name: "content",
                            required: true,
                            maxlength: "{content_max}",
                            "aria-invalid": content_described.is_some().then_some("true"),
                            "aria-describedby": content_described.clone(),
                            "{values.content}"
                        }
                        div {
                            class: "min-h-[32px] px-4 pb-3 pt-1",
                            ErrorList {
                                id: format!("{EDITOR_ID}-content-errors"),
                                errors: errors.field("content").to_vec(),
                            }
                        }
                    }
                    ErrorList {
                        id: format!("{EDITOR_ID}-form-errors"),
                        errors: errors.form_errors.clone(),
                    }
                    div {
                        class: "flex justify-between",
                        button { r#type: "reset", class: "btn btn-outline", "Reset" }
                        div {
                            class: "grid grid-cols-2 gap-2",
                            a { class: "btn btn-outline", href: "{cancel_href}", "Cancel" }
                            button { r#type: "submit", class: "btn", "Save" }
                        }
                    }
                }
            }
        }
    }
}
