//! School-year availability probing.
//!
//! The source publishes documents for a handful of school years at a time.
//! Which ones exist is discovered by probing a fixed window of candidates
//! around a reference year.

use futures::stream::{self, StreamExt};
use log::{debug, info, warn};

use crate::models::SchoolYear;
use crate::parsing::vacation_entries;
use crate::source::HolidaySource;

/// Simultaneous probe requests when the caller does not configure a limit.
pub const DEFAULT_PROBE_CONCURRENCY: usize = 4;

/// Check whether the source serves a non-empty vacation list for `school_year`.
///
/// Any fetch failure counts as "does not exist"; it is logged and swallowed.
pub async fn school_year_exists<S>(source: &S, school_year: SchoolYear) -> bool
where
    S: HolidaySource + ?Sized,
{
    match source.fetch(school_year).await {
        Ok(document) => !vacation_entries(&document).is_empty(),
        Err(e) => {
            debug!("Probe for {} failed: {}", school_year, e);
            false
        }
    }
}

/// Resolve the school years the source currently serves.
///
/// Probes `reference_year - 2` through `reference_year + 8`, at most
/// `concurrency` at a time. The result is ascending regardless of the order
/// in which probes complete. When nothing is found, the school year starting
/// in `reference_year` is returned on its own, so the result is never empty.
///
/// # Arguments
/// * `source` - Source implementation
/// * `reference_year` - Calendar year the window is centred on (usually the current year)
/// * `concurrency` - Maximum simultaneous probes; `0` is treated as `1`
pub async fn resolve_available_years<S>(
    source: &S,
    reference_year: i32,
    concurrency: usize,
) -> Vec<SchoolYear>
where
    S: HolidaySource + ?Sized,
{
    let candidates = SchoolYear::candidates_around(reference_year);

    // `buffered` yields in input order, so results line up with `candidates`
    let exists: Vec<bool> = stream::iter(candidates.iter().copied())
        .map(|school_year| school_year_exists(source, school_year))
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let available: Vec<SchoolYear> = candidates
        .into_iter()
        .zip(exists)
        .filter_map(|(school_year, exists)| exists.then_some(school_year))
        .collect();

    if available.is_empty() {
        let fallback = SchoolYear::starting(reference_year);
        warn!(
            "No school years available from {}; falling back to {}",
            source.describe(),
            fallback
        );
        return vec![fallback];
    }

    info!(
        "Available school years: {}",
        available
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    available
}
