use dioxus::prelude::*;

/// Empty state shown in the remark list outlet when no remark is selected.
#[component]
pub fn RemarksPlaceholder() -> Element {
    rsx! {
        div {
            class: "flex-1 flex flex-col items-center justify-center text-neutral-600",
            h2 { class: "m-0 mb-2 font-normal text-neutral-800 text-lg", "Select a remark" }
            p { class: "m-0 text-sm text-neutral-600", "Choose a remark from the list to read it." }
        }
    }
}
