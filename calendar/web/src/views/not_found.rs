use dioxus::prelude::*;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    rsx! {
        div { class: "not-found",
            h1 { "404" }
            h2 { "Page Not Found" }
            p { "The page you're looking for doesn't exist." }
            Link {
                to: "/",
                class: "today-btn",
                "Back to the calendar"
            }
        }
    }
}
