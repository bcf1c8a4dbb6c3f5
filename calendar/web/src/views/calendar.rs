use calendar_core::{Event, MonthGrid, YearMonth, events_on_day};
use chrono::{Datelike, Local, NaiveDate};
use dioxus::prelude::*;

use crate::api;
use crate::components::{ErrorMessage, EventModal, LoadingSpinner};

const DAYS_OF_WEEK: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Month-grid calendar view backed by the event store service.
#[component]
pub fn Calendar() -> Element {
    let mut events = use_signal(Vec::<Event>::new);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| None::<String>); // persistent fetch failure banner
    let mut submit_error = use_signal(|| None::<String>); // non-fatal add failure
    let mut current_month = use_signal(|| YearMonth::containing(Local::now().date_naive()));
    let mut selected_date = use_signal(|| None::<NaiveDate>);

    // Initial load: fetch the full collection once on mount.
    use_effect(move || {
        spawn(async move {
            match api::fetch_events().await {
                Ok(fetched) => {
                    events.set(fetched);
                    loading.set(false);
                }
                Err(e) => {
                    load_error.set(Some(format!(
                        "Failed to load events: {e}. Is the event service running?"
                    )));
                    loading.set(false);
                }
            }
        });
    });

    let handle_add_event = move |(title, color): (String, String)| {
        let Some(date) = selected_date() else { return };
        spawn(async move {
            let new_event = api::NewEvent {
                title,
                date: date.format("%Y-%m-%d").to_string(),
                color,
            };
            match api::create_event(&new_event).await {
                Ok(created) => {
                    events.write().push(created);
                    submit_error.set(None);
                    selected_date.set(None);
                }
                Err(e) => {
                    // Local state is untouched; the modal stays open.
                    submit_error.set(Some(format!("Failed to add event: {e}")));
                }
            }
        });
    };

    let month = current_month();
    let grid = MonthGrid::build(month);
    let today = Local::now().date_naive();
    let all_events = events();
    let month_label = month.label();

    rsx! {
        div { class: "calendar-container",
            header { class: "calendar-header",
                h1 { "Event Calendar" }
                div { class: "calendar-controls",
                    button {
                        class: "today-btn",
                        onclick: move |_| {
                            current_month.set(YearMonth::containing(Local::now().date_naive()));
                        },
                        "Today"
                    }
                    button {
                        class: "nav-btn",
                        onclick: move |_| {
                            let month = current_month();
                            current_month.set(month.prev());
                        },
                        "‹"
                    }
                    h2 { class: "current-month", "{month_label}" }
                    button {
                        class: "nav-btn",
                        onclick: move |_| {
                            let month = current_month();
                            current_month.set(month.next());
                        },
                        "›"
                    }
                }
            }

            if let Some(error_msg) = load_error() {
                ErrorMessage { message: error_msg }
            }
            if let Some(error_msg) = submit_error() {
                ErrorMessage { message: error_msg }
            }

            if loading() {
                LoadingSpinner { message: "Loading events...".to_string() }
            } else {
                div { class: "calendar-grid",
                    div { class: "calendar-days-header",
                        for day_name in DAYS_OF_WEEK {
                            div { key: "{day_name}", class: "day-header", "{day_name}" }
                        }
                    }
                    div { class: "calendar-days",
                        for blank in 0..grid.leading_blanks {
                            div { key: "empty-{blank}", class: "calendar-day empty" }
                        }
                        for date in grid.days() {
                            DayCell {
                                key: "{date}",
                                date,
                                is_today: date == today,
                                events: events_on_day(&all_events, date)
                                    .into_iter()
                                    .cloned()
                                    .collect::<Vec<_>>(),
                                on_select: move |date| {
                                    submit_error.set(None);
                                    selected_date.set(Some(date));
                                },
                            }
                        }
                    }
                }
            }

            if let Some(date) = selected_date() {
                EventModal {
                    date,
                    on_submit: handle_add_event,
                    on_cancel: move |_| {
                        submit_error.set(None);
                        selected_date.set(None);
                    },
                }
            }
        }
    }
}

/// A single day cell with its event markers.
#[component]
fn DayCell(
    date: NaiveDate,
    is_today: bool,
    events: Vec<Event>,
    on_select: EventHandler<NaiveDate>,
) -> Element {
    let day_number = date.day();

    rsx! {
        div {
            class: if is_today { "calendar-day today" } else { "calendar-day" },
            onclick: move |_| on_select.call(date),

            div { class: "day-number", "{day_number}" }
            div { class: "day-events",
                for event in events.iter() {
                    div {
                        key: "{event.id}",
                        class: "event-dot",
                        style: "background-color: {event.color}",
                        title: "{event.title}",
                        span { class: "event-title", "{event.title}" }
                    }
                }
            }
        }
    }
}
