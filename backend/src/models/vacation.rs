//! Normalized vacation periods.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::region::Region;

/// A vacation in a single region.
///
/// Periods are produced by the normalizer and never modified afterwards;
/// a new fetch yields a new collection rather than an update of this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VacationPeriod {
    name: String,
    region: Region,
    start: NaiveDate,
    end: NaiveDate,
    compulsory: bool,
}

impl VacationPeriod {
    /// Build a period, returning `None` when `start` is after `end`.
    pub fn new(
        name: impl Into<String>,
        region: Region,
        start: NaiveDate,
        end: NaiveDate,
        compulsory: bool,
    ) -> Option<Self> {
        if start > end {
            return None;
        }

        Some(Self {
            name: name.into(),
            region,
            start,
            end,
            compulsory,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether attendance restrictions apply for the whole period.
    pub fn compulsory(&self) -> bool {
        self.compulsory
    }

    /// True when `day` falls within the period, both ends inclusive.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Length of the period in days, counting both the first and last day.
    pub fn length_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn season(&self) -> Season {
        Season::from_vacation_name(&self.name)
    }
}

/// Season a vacation belongs to, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Classify a Dutch vacation name.
    ///
    /// Christmas and spring break ("voorjaarsvakantie", held in February)
    /// count as winter; May break as spring. Unrecognised names fall back to
    /// spring.
    pub fn from_vacation_name(name: &str) -> Season {
        let name = name.to_lowercase();
        if name.contains("zomer") {
            Season::Summer
        } else if name.contains("herfst") {
            Season::Autumn
        } else if name.contains("kerst") || name.contains("voorjaar") {
            Season::Winter
        } else {
            // "mei" and anything unrecognised
            Season::Spring
        }
    }
}
