//! Core domain models and month-grid logic for the calendar.
pub mod event;
pub mod grid;

pub use event::{
    DEFAULT_COLOR, EVENT_COLOR_PALETTE, Event, EventDateError, normalize_color, parse_event_date,
};
pub use grid::{MonthGrid, YearMonth, events_on_day};
