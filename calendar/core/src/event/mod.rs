use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The fixed six-color palette events may be tagged with.
pub const EVENT_COLOR_PALETTE: [&str; 6] = [
    "#4285f4", "#ea4335", "#34a853", "#fbbc04", "#9b51e0", "#00bcd4",
];

/// Color assigned when a client supplies none.
pub const DEFAULT_COLOR: &str = "#4285f4";

/// A titled, dated, colored record displayed on the calendar.
///
/// `date` is a normalized absolute timestamp; grid placement compares
/// events by calendar day only, ignoring the time-of-day component.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub date: DateTime<Utc>,
    pub color: String,
}

impl Event {
    /// Whether this event belongs to the given calendar day,
    /// independent of its time-of-day.
    pub fn falls_on(&self, day: NaiveDate) -> bool {
        self.date.date_naive() == day
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventDateError {
    #[error("Unrecognized date format: '{0}'")]
    Unrecognized(String),
}

/// Parses a client-supplied date into a normalized UTC timestamp.
///
/// Accepts RFC 3339 timestamps, bare `YYYY-MM-DD` dates (treated as
/// midnight UTC), and naive `YYYY-MM-DDTHH:MM:SS` datetimes.
pub fn parse_event_date(input: &str) -> Result<DateTime<Utc>, EventDateError> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(input) {
        return Ok(date_time.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(date_time) = date.and_hms_opt(0, 0, 0) {
            return Ok(date_time.and_utc());
        }
    }
    if let Ok(date_time) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Ok(date_time.and_utc());
    }
    Err(EventDateError::Unrecognized(input.to_string()))
}

/// Resolves an optional color token, falling back to [`DEFAULT_COLOR`]
/// when the value is absent or blank.
pub fn normalize_color(color: Option<String>) -> String {
    match color {
        Some(color) if !color.trim().is_empty() => color,
        _ => DEFAULT_COLOR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn parses_rfc3339_timestamps() {
        let parsed = parse_event_date("2025-11-05T14:30:00Z").expect("should parse");
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 11, 5, 14, 30, 0).unwrap());
    }

    #[test]
    fn parses_rfc3339_with_offset_into_utc() {
        let parsed = parse_event_date("2025-11-05T02:00:00+05:00").expect("should parse");
        assert_eq!(parsed.date_naive().day(), 4);
        assert_eq!(parsed.hour(), 21);
    }

    #[test]
    fn parses_bare_dates_as_midnight_utc() {
        let parsed = parse_event_date("2025-11-05").expect("should parse");
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 11, 5, 0, 0, 0).unwrap());
    }

    #[test]
    fn parses_naive_datetimes() {
        let parsed = parse_event_date("2025-11-05T09:15:00").expect("should parse");
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 11, 5, 9, 15, 0).unwrap());
    }

    #[test]
    fn rejects_unrecognized_input() {
        let result = parse_event_date("next tuesday");
        assert_eq!(
            result,
            Err(EventDateError::Unrecognized("next tuesday".to_string()))
        );
    }

    #[test]
    fn event_falls_on_its_calendar_day_regardless_of_time() {
        let event = Event {
            id: 1,
            title: "Team Meeting".to_string(),
            date: Utc.with_ymd_and_hms(2025, 11, 5, 23, 59, 59).unwrap(),
            color: DEFAULT_COLOR.to_string(),
        };
        let day = NaiveDate::from_ymd_opt(2025, 11, 5).unwrap();
        assert!(event.falls_on(day));
        assert!(!event.falls_on(day.succ_opt().unwrap()));
    }

    #[test]
    fn color_defaults_when_absent_or_blank() {
        assert_eq!(normalize_color(None), DEFAULT_COLOR);
        assert_eq!(normalize_color(Some(String::new())), DEFAULT_COLOR);
        assert_eq!(normalize_color(Some("  ".to_string())), DEFAULT_COLOR);
        assert_eq!(normalize_color(Some("#00bcd4".to_string())), "#00bcd4");
    }

    #[test]
    fn default_color_is_in_the_palette() {
        assert!(EVENT_COLOR_PALETTE.contains(&DEFAULT_COLOR));
    }
}
