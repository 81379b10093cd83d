//! Fetch-and-normalize for display.
//!
//! Unlike availability probing, a failed fetch here is returned to the caller
//! so it can be shown to the user. Nothing is retried automatically.

use std::sync::Arc;

use log::{debug, warn};

use super::availability::{resolve_available_years, DEFAULT_PROBE_CONCURRENCY};
use crate::config::HolidaysConfig;
use crate::models::{RegionLabels, SchoolYear, VacationPeriod};
use crate::parsing::VacationNormalizer;
use crate::source::{HolidaySource, SourceFactory, SourceResult};

/// Fetch one school year and normalize it.
pub async fn fetch_vacations<S>(
    source: &S,
    normalizer: &VacationNormalizer,
    school_year: SchoolYear,
) -> SourceResult<Vec<VacationPeriod>>
where
    S: HolidaySource + ?Sized,
{
    let document = source.fetch(school_year).await.map_err(|e| {
        warn!("Fetching vacations for {} failed: {}", school_year, e);
        e
    })?;

    let periods = normalizer.normalize(&document);
    debug!("Normalized {} vacation periods for {}", periods.len(), school_year);
    Ok(periods)
}

/// A source paired with the label vocabulary used to normalize its documents.
#[derive(Clone)]
pub struct HolidayService {
    source: Arc<dyn HolidaySource>,
    normalizer: VacationNormalizer,
    probe_concurrency: usize,
}

impl HolidayService {
    pub fn new(source: Arc<dyn HolidaySource>, labels: RegionLabels) -> Self {
        Self {
            source,
            normalizer: VacationNormalizer::new(labels),
            probe_concurrency: DEFAULT_PROBE_CONCURRENCY,
        }
    }

    pub fn with_probe_concurrency(mut self, probe_concurrency: usize) -> Self {
        self.probe_concurrency = probe_concurrency.max(1);
        self
    }

    /// Build the configured source and wrap it.
    pub fn from_config(config: &HolidaysConfig) -> SourceResult<Self> {
        let source = SourceFactory::create(&config.source)?;
        Ok(Self::new(source, config.regions.clone())
            .with_probe_concurrency(config.source.probe_concurrency))
    }

    pub fn source(&self) -> &Arc<dyn HolidaySource> {
        &self.source
    }

    pub fn normalizer(&self) -> &VacationNormalizer {
        &self.normalizer
    }

    pub fn probe_concurrency(&self) -> usize {
        self.probe_concurrency
    }

    /// Ordered vacation periods of `school_year`.
    pub async fn vacations(&self, school_year: SchoolYear) -> SourceResult<Vec<VacationPeriod>> {
        fetch_vacations(self.source.as_ref(), &self.normalizer, school_year).await
    }

    /// School years the source serves around `reference_year`; never empty.
    pub async fn available_years(&self, reference_year: i32) -> Vec<SchoolYear> {
        resolve_available_years(self.source.as_ref(), reference_year, self.probe_concurrency).await
    }
}

impl std::fmt::Debug for HolidayService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidayService")
            .field("source", &self.source.describe())
            .field("probe_concurrency", &self.probe_concurrency)
            .finish()
    }
}
