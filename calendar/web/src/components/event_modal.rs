use calendar_core::{DEFAULT_COLOR, EVENT_COLOR_PALETTE};
use chrono::NaiveDate;
use dioxus::prelude::*;

/// Modal dialog for adding an event to the selected day
#[component]
pub fn EventModal(
    date: NaiveDate,
    on_submit: EventHandler<(String, String)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut title_input = use_signal(String::new);
    let mut color = use_signal(|| DEFAULT_COLOR.to_string());
    let mut error = use_signal(|| None::<String>);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let title = title_input().trim().to_string();

        if title.is_empty() {
            error.set(Some("Please enter an event title".to_string()));
            return;
        }

        error.set(None);
        on_submit.call((title, color()));
    };

    let handle_input = move |evt: FormEvent| {
        title_input.set(evt.value());
        if error().is_some() {
            error.set(None);
        }
    };

    let date_label = date.format("%A, %B %-d, %Y").to_string();

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_cancel.call(()),

            div {
                class: "modal-content",
                onclick: move |evt| evt.stop_propagation(),

                h3 { "Add Event" }
                p { class: "modal-date", "{date_label}" }

                form { onsubmit: handle_submit,
                    input {
                        r#type: "text",
                        placeholder: "Event title",
                        value: "{title_input}",
                        oninput: handle_input,
                        class: "event-input",
                        autofocus: true,
                    }

                    if let Some(error_msg) = error() {
                        div { class: "input-error", "{error_msg}" }
                    }

                    div { class: "color-picker",
                        label { "Color:" }
                        div { class: "color-options",
                            for palette_color in EVENT_COLOR_PALETTE {
                                div {
                                    key: "{palette_color}",
                                    class: if color() == palette_color { "color-option selected" } else { "color-option" },
                                    style: "background-color: {palette_color}",
                                    onclick: move |_| color.set(palette_color.to_string()),
                                }
                            }
                        }
                    }

                    div { class: "modal-actions",
                        button {
                            r#type: "button",
                            class: "cancel-btn",
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "add-btn",
                            "Add Event"
                        }
                    }
                }
            }
        }
    }
}
