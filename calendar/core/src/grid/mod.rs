use chrono::{Datelike, NaiveDate};

use crate::event::Event;

/// A calendar month identified by year and 1-based month index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// The month containing the given date.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The previous month, rolling the year back across January.
    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The next month, rolling the year forward across December.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The first day of this month.
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// Day-of-week index of day 1, with Sunday as 0. This is the number
    /// of leading blank cells in the month grid.
    pub fn first_weekday_offset(self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    /// Number of days in this month, leap-year aware.
    pub fn day_count(self) -> u32 {
        self.next().first_day().pred_opt().map_or(31, |d| d.day())
    }

    /// Human-readable "Month Year" label, e.g. "November 2025".
    pub fn label(self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

/// Layout of a month grid: leading blank cells for the weekday offset of
/// day 1, followed by one cell per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub leading_blanks: u32,
    pub day_count: u32,
}

impl MonthGrid {
    pub fn build(month: YearMonth) -> Self {
        Self {
            month,
            leading_blanks: month.first_weekday_offset(),
            day_count: month.day_count(),
        }
    }

    /// The calendar date of a 1-based day cell, if it exists in this month.
    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        if day == 0 || day > self.day_count {
            return None;
        }
        NaiveDate::from_ymd_opt(self.month.year, self.month.month, day)
    }

    /// Iterates over the dates of every day cell in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (1..=self.day_count)
            .filter_map(move |day| NaiveDate::from_ymd_opt(self.month.year, self.month.month, day))
    }
}

/// Every event whose date matches the given calendar day, ignoring
/// time-of-day, in collection order.
pub fn events_on_day(events: &[Event], day: NaiveDate) -> Vec<&Event> {
    events.iter().filter(|event| event.falls_on(day)).collect()
}
