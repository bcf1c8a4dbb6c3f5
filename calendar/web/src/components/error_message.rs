use dioxus::prelude::*;

/// An error banner component for displaying failed service calls
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "error-banner",
            p { "{message}" }
        }
    }
}
