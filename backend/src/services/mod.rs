//! Service layer for business logic and orchestration.
//!
//! Services sit between the [`source`](crate::source) layer and the callers
//! (HTTP handlers, the session state holder). They work with any
//! [`HolidaySource`](crate::source::HolidaySource) implementation.
//!
//! - [`availability`]: which school years the source currently serves
//! - [`countdown`]: the next vacation for a region and the days until it
//! - [`holidays`]: fetch-and-normalize for display
//! - [`session`]: settings plus the latest fetched view, guarded against stale results

pub mod availability;
pub mod countdown;
pub mod holidays;
pub mod session;

#[cfg(test)]
#[path = "services_tests.rs"]
mod services_tests;

pub use availability::{resolve_available_years, school_year_exists, DEFAULT_PROBE_CONCURRENCY};
pub use countdown::{countdown, days_remaining, next_upcoming, periods_for_region, Countdown};
pub use holidays::{fetch_vacations, HolidayService};
pub use session::{HolidaySession, HolidayView, RefreshOutcome, Settings};
