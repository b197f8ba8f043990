use chrono::{Datelike, Utc};
use dioxus::prelude::*;

/// Document shell shared by every page: head, header with the home link, footer.
#[component]
pub fn Layout(page_title: String, children: Element) -> Element {
    let year = Utc::now().year();

    rsx! {
        html {
            lang: "en",
            class: "h-full",
            head {
                meta { charset: "utf-8" }
                meta { name: "viewport", content: "width=device-width, initial-scale=1" }
                meta { name: "description", content: "Welcome to Remark" }
                title { "{page_title}" }
            }
            body {
                class: "h-full flex flex-col",
                header {
                    class: "container flex",
                    a {
                        class: "flex items-center p-4",
                        href: "/",
                        p { class: "text-3xl font-medium hover:underline", "Remark" }
                    }
                }
                div {
                    class: "container h-full overflow-y-hidden",
                    {children}
                }
                footer {
                    class: "container py-2",
                    div { class: "text-center", "© {year} Remark" }
                }
            }
        }
    }
}
