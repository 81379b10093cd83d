//! Next-vacation resolution.
//!
//! Only periods that start on or after the reference day are candidates. A
//! vacation that began yesterday and is still running is not "next".
//! None of these functions assume the input is sorted.

use serde::Serialize;

use crate::models::{days_between, CalendarDay, Region, Season, VacationPeriod};

/// The next vacation and the whole days until it starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub period: VacationPeriod,
    pub days_remaining: i64,
}

impl Countdown {
    pub fn season(&self) -> Season {
        self.period.season()
    }
}

/// Periods of one region, in input order.
pub fn periods_for_region(
    periods: &[VacationPeriod],
    region: Region,
) -> impl Iterator<Item = &VacationPeriod> + '_ {
    periods.iter().filter(move |period| period.region() == region)
}

/// The earliest period of `region` starting on or after `reference`'s day.
///
/// Equal start dates resolve to the first one in input order. `None` means
/// there is nothing left this school year, which is not an error.
pub fn next_upcoming(
    periods: &[VacationPeriod],
    region: Region,
    reference: impl CalendarDay,
) -> Option<&VacationPeriod> {
    let today = reference.calendar_day();
    periods_for_region(periods, region)
        .filter(|period| period.start() >= today)
        .min_by_key(|period| period.start())
}

/// Whole calendar days from `reference` to the start of `period`.
///
/// `0` when the period starts today, `1` tomorrow; negative once it has
/// started.
pub fn days_remaining(period: &VacationPeriod, reference: impl CalendarDay) -> i64 {
    days_between(reference, period.start())
}

/// [`next_upcoming`] and [`days_remaining`] together.
pub fn countdown(
    periods: &[VacationPeriod],
    region: Region,
    reference: impl CalendarDay,
) -> Option<Countdown> {
    let today = reference.calendar_day();
    next_upcoming(periods, region, today).map(|period| Countdown {
        period: period.clone(),
        days_remaining: days_remaining(period, today),
    })
}
