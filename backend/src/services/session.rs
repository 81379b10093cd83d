//! Settings plus the latest fetched view.
//!
//! State is replaced as whole values behind `RwLock<Arc<_>>`; readers take a
//! cheap `Arc` snapshot. Changing what gets fetched (the school year or the
//! loaded flag) bumps a generation counter, and a refresh only commits if the
//! generation it started with is still current, so a slow fetch for an old
//! school year never overwrites newer state. The region only filters fetched
//! periods and is read live by [`HolidaySession::countdown`] and
//! [`HolidaySession::overview`].

use std::sync::Arc;

use log::{debug, info};
use parking_lot::RwLock;
use serde::Serialize;

use super::countdown::{self, Countdown};
use super::holidays::HolidayService;
use crate::models::{CalendarDay, Region, SchoolYear, VacationPeriod};

/// User-selected parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub region: Region,
    pub school_year: SchoolYear,
    /// Set once persisted settings have been read; fetches wait for it
    pub loaded: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            region: Region::North,
            school_year: SchoolYear::starting(2025),
            loaded: false,
        }
    }
}

/// What the UI shows for the current settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HolidayView {
    /// All regions, ordered by start date
    pub periods: Vec<VacationPeriod>,
    /// User-visible message of the last failed fetch
    pub error: Option<String>,
    pub loading: bool,
}

/// Result of [`HolidaySession::refresh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Fresh periods were committed
    Applied,
    /// The fetch failed and the error was committed
    Failed,
    /// The school year changed while fetching; the result was discarded
    Stale,
    /// Settings are not loaded yet; nothing was fetched
    NotLoaded,
}

struct Versioned {
    generation: u64,
    settings: Arc<Settings>,
}

pub struct HolidaySession {
    service: HolidayService,
    settings: RwLock<Versioned>,
    view: RwLock<Arc<HolidayView>>,
    years: RwLock<Arc<Vec<SchoolYear>>>,
}

impl HolidaySession {
    pub fn new(service: HolidayService) -> Self {
        Self::with_settings(service, Settings::default())
    }

    pub fn with_settings(service: HolidayService, settings: Settings) -> Self {
        let years = vec![settings.school_year];
        Self {
            service,
            settings: RwLock::new(Versioned {
                generation: 0,
                settings: Arc::new(settings),
            }),
            view: RwLock::new(Arc::new(HolidayView::default())),
            years: RwLock::new(Arc::new(years)),
        }
    }

    pub fn service(&self) -> &HolidayService {
        &self.service
    }

    pub fn settings(&self) -> Arc<Settings> {
        Arc::clone(&self.settings.read().settings)
    }

    pub fn generation(&self) -> u64 {
        self.settings.read().generation
    }

    pub fn view(&self) -> Arc<HolidayView> {
        Arc::clone(&self.view.read())
    }

    /// Last resolved year list; the selected year until the first resolve.
    pub fn years(&self) -> Arc<Vec<SchoolYear>> {
        Arc::clone(&self.years.read())
    }

    /// Replace the settings with a modified copy.
    ///
    /// The generation is bumped when the school year or the loaded flag
    /// changes; a pending `loading` flag is cleared then, since any fetch in
    /// flight can no longer commit. Returns the current generation.
    pub fn update_settings(&self, change: impl FnOnce(&mut Settings)) -> u64 {
        // Same lock order as `commit`: view, then settings
        let mut view = self.view.write();
        let mut guard = self.settings.write();

        let mut next = Settings::clone(&guard.settings);
        change(&mut next);
        let refetch = next.school_year != guard.settings.school_year || next.loaded != guard.settings.loaded;
        guard.settings = Arc::new(next);

        if refetch {
            guard.generation += 1;
            debug!("Fetch parameters changed (generation {})", guard.generation);
            if view.loading {
                let idle = HolidayView {
                    loading: false,
                    ..HolidayView::clone(&view)
                };
                *view = Arc::new(idle);
            }
        }
        guard.generation
    }

    /// Apply persisted settings and allow fetching.
    pub fn load_settings(&self, region: Region, school_year: SchoolYear) -> u64 {
        self.update_settings(|s| {
            s.region = region;
            s.school_year = school_year;
            s.loaded = true;
        })
    }

    pub fn set_region(&self, region: Region) -> u64 {
        self.update_settings(|s| s.region = region)
    }

    pub fn set_school_year(&self, school_year: SchoolYear) -> u64 {
        self.update_settings(|s| s.school_year = school_year)
    }

    /// Fetch and normalize the selected school year.
    ///
    /// Clears the previous error and marks the view as loading. The view is
    /// only written while the generation observed at the start is still
    /// current; a region change in the meantime does not affect it.
    pub async fn refresh(&self) -> RefreshOutcome {
        let (generation, settings) = {
            let guard = self.settings.read();
            (guard.generation, Arc::clone(&guard.settings))
        };
        if !settings.loaded {
            return RefreshOutcome::NotLoaded;
        }

        self.commit(generation, |view| HolidayView {
            periods: view.periods.clone(),
            error: None,
            loading: true,
        });

        let result = self.service.vacations(settings.school_year).await;

        let (outcome, committed) = match result {
            Ok(periods) => (
                RefreshOutcome::Applied,
                self.commit(generation, |_| HolidayView {
                    periods,
                    error: None,
                    loading: false,
                }),
            ),
            Err(e) => (
                RefreshOutcome::Failed,
                self.commit(generation, |_| HolidayView {
                    periods: Vec::new(),
                    error: Some(e.to_string()),
                    loading: false,
                }),
            ),
        };

        if committed {
            outcome
        } else {
            debug!(
                "Discarding result for {} (generation {} superseded)",
                settings.school_year, generation
            );
            RefreshOutcome::Stale
        }
    }

    /// Resolve the available years around `reference_year` and make sure the
    /// selected school year is one of them.
    pub async fn resolve_years(&self, reference_year: i32) -> Arc<Vec<SchoolYear>> {
        let years = Arc::new(self.service.available_years(reference_year).await);
        *self.years.write() = Arc::clone(&years);

        let selected = self.settings().school_year;
        if let Some(first) = years.first().copied() {
            if !years.contains(&selected) {
                info!("School year {} is not available; selecting {}", selected, first);
                self.set_school_year(first);
            }
        }
        years
    }

    /// Periods of the selected region, in view order.
    pub fn overview(&self) -> Vec<VacationPeriod> {
        let region = self.settings().region;
        countdown::periods_for_region(&self.view().periods, region)
            .cloned()
            .collect()
    }

    /// Next vacation of the selected region as seen from `reference`.
    pub fn countdown(&self, reference: impl CalendarDay) -> Option<Countdown> {
        let region = self.settings().region;
        countdown::countdown(&self.view().periods, region, reference)
    }

    fn commit(&self, generation: u64, build: impl FnOnce(&HolidayView) -> HolidayView) -> bool {
        let mut view = self.view.write();
        if self.settings.read().generation != generation {
            return false;
        }
        *view = Arc::new(build(&view));
        true
    }
}

impl std::fmt::Debug for HolidaySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidaySession")
            .field("service", &self.service)
            .field("settings", &self.settings())
            .field("generation", &self.generation())
            .finish()
    }
}
