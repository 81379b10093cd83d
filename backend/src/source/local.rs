//! In-memory holiday source.
//!
//! Serves documents registered up front, which makes it suitable for unit
//! tests and local development without network access. Failures and
//! per-year latency can be injected to exercise the probing and session
//! logic.

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::{HolidaySource, SourceError, SourceResult};
use crate::models::SchoolYear;

/// In-memory source.
///
/// Clones share the same data, so a test can keep a handle and change what
/// the source returns while a service holds another clone.
///
/// # Example
/// ```
/// use school_holidays::models::SchoolYear;
/// use school_holidays::source::{HolidaySource, LocalSource};
///
/// let source = LocalSource::new()
///     .with_document(SchoolYear::starting(2026), serde_json::json!({ "content": [] }));
/// let runtime = tokio::runtime::Runtime::new().unwrap();
/// assert!(runtime.block_on(source.fetch(SchoolYear::starting(2026))).is_ok());
/// assert!(runtime.block_on(source.fetch(SchoolYear::starting(2027))).is_err());
/// ```
#[derive(Clone, Default)]
pub struct LocalSource {
    data: Arc<RwLock<LocalData>>,
    stats: Arc<FetchStats>,
}

#[derive(Default)]
struct LocalData {
    entries: HashMap<SchoolYear, LocalEntry>,
    delays: HashMap<SchoolYear, Duration>,
}

#[derive(Clone)]
enum LocalEntry {
    Document(Value),
    Failure(SourceError),
}

#[derive(Default)]
struct FetchStats {
    total: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

/// Decrements the in-flight counter when a fetch finishes, including on
/// cancellation.
struct InFlight<'a>(&'a FetchStats);

impl<'a> InFlight<'a> {
    fn enter(stats: &'a FetchStats) -> Self {
        stats.total.fetch_add(1, Ordering::SeqCst);
        let now = stats.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        stats.peak_in_flight.fetch_max(now, Ordering::SeqCst);
        InFlight(stats)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

impl LocalSource {
    /// Create an empty source; every year answers 404.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`insert_document`](Self::insert_document).
    pub fn with_document(self, school_year: SchoolYear, document: Value) -> Self {
        self.insert_document(school_year, document);
        self
    }

    /// Serve `document` for `school_year`, replacing any previous entry.
    pub fn insert_document(&self, school_year: SchoolYear, document: Value) {
        self.data
            .write()
            .entries
            .insert(school_year, LocalEntry::Document(document));
    }

    /// Fail every fetch of `school_year` with `error`.
    pub fn insert_failure(&self, school_year: SchoolYear, error: SourceError) {
        self.data
            .write()
            .entries
            .insert(school_year, LocalEntry::Failure(error));
    }

    /// Forget `school_year`; subsequent fetches answer 404.
    pub fn remove(&self, school_year: SchoolYear) {
        self.data.write().entries.remove(&school_year);
    }

    /// Delay every fetch of `school_year` by `delay` before answering.
    pub fn set_delay(&self, school_year: SchoolYear, delay: Duration) {
        self.data.write().delays.insert(school_year, delay);
    }

    /// Number of fetches issued so far.
    pub fn fetch_count(&self) -> usize {
        self.stats.total.load(Ordering::SeqCst)
    }

    /// Highest number of fetches that were running at the same time.
    pub fn peak_in_flight(&self) -> usize {
        self.stats.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HolidaySource for LocalSource {
    async fn fetch(&self, school_year: SchoolYear) -> SourceResult<Value> {
        let _in_flight = InFlight::enter(&self.stats);

        let delay = self.data.read().delays.get(&school_year).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let entry = self.data.read().entries.get(&school_year).cloned();
        match entry {
            Some(LocalEntry::Document(document)) => Ok(document),
            Some(LocalEntry::Failure(error)) => Err(error),
            None => Err(SourceError::http(404, school_year)),
        }
    }

    fn describe(&self) -> String {
        "local".to_string()
    }
}
