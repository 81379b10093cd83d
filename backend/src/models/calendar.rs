//! Calendar-day helpers.
//!
//! All holiday comparisons happen on whole calendar days. Anything carrying a
//! time of day is truncated first so that daylight-saving shifts and the hour
//! of the reference instant never change a result.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// Truncation of a date-like value to its calendar day.
pub trait CalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    /// The date as seen on the wall clock of the value's own time zone.
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

/// Whole days from `from` to `to`; negative when `to` is earlier.
pub fn days_between(from: impl CalendarDay, to: impl CalendarDay) -> i64 {
    (to.calendar_day() - from.calendar_day()).num_days()
}

/// Parse a date string from the holiday source.
///
/// The source writes ISO-8601 timestamps such as `2026-07-11T00:00:00.000Z`.
/// The calendar date written in the string is taken as-is, without shifting
/// it into another time zone. Bare `YYYY-MM-DD` dates are accepted as well.
pub fn parse_source_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.naive_local().date());
    }

    if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(timestamp.date());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
