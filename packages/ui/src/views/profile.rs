use dioxus::prelude::*;
use store::User;

use crate::Layout;

/// A user's profile with a link to their remarks.
#[component]
pub fn ProfilePage(user: User) -> Element {
    let display_name = user.display_name().to_string();
    let remarks_href = api::paths::remarks(&user.username);

    rsx! {
        Layout {
            page_title: format!("{display_name} | Remark"),
            div {
                class: "h-full border-8 border-orange-500 p-4",
                h1 { class: "text-h1 mb-4", "{display_name}'s Profile" }
                a {
                    class: "hover:underline",
                    href: "{remarks_href}",
                    "{display_name}'s Remarks"
                }
            }
        }
    }
}
