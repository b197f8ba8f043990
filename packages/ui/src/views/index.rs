use dioxus::prelude::*;
use store::seed::SEED_USERNAME;

use crate::Layout;

#[component]
pub fn IndexPage() -> Element {
    let demo_profile = api::paths::profile(SEED_USERNAME);

    rsx! {
        Layout {
            page_title: "Remark".to_string(),
            div {
                class: "leading-5 p-4",
                h1 { class: "text-xl pb-4", "Welcome to Remark!" }
                a {
                    class: "hover:underline",
                    href: "{demo_profile}",
                    "Visit the demo profile"
                }
            }
        }
    }
}
