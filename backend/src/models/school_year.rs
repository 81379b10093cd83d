//! School-year identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of years before the reference year probed for availability.
const WINDOW_BEFORE: i32 = 2;
/// Number of years after the reference year probed for availability.
const WINDOW_AFTER: i32 = 8;

/// A school year such as `2026-2027`.
///
/// Only the starting calendar year is stored; the second year is always the
/// first plus one, so an inconsistent identifier cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SchoolYear {
    start: i32,
}

/// Error returned for malformed school-year identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseSchoolYearError {
    #[error("School year '{0}' is not of the form YYYY-YYYY")]
    Format(String),

    #[error("School year '{0}' must span consecutive years")]
    NotConsecutive(String),
}

impl SchoolYear {
    /// The school year that starts in `year`.
    pub fn starting(year: i32) -> Self {
        Self { start: year }
    }

    pub fn start_year(&self) -> i32 {
        self.start
    }

    pub fn end_year(&self) -> i32 {
        self.start + 1
    }

    /// Candidate identifiers probed around `reference_year`, ascending:
    /// two years back through eight years ahead.
    pub fn candidates_around(reference_year: i32) -> Vec<SchoolYear> {
        (reference_year - WINDOW_BEFORE..=reference_year + WINDOW_AFTER)
            .map(SchoolYear::starting)
            .collect()
    }
}

fn parse_year(part: &str) -> Option<i32> {
    if part.len() == 4 && part.bytes().all(|b| b.is_ascii_digit()) {
        part.parse().ok()
    } else {
        None
    }
}

impl FromStr for SchoolYear {
    type Err = ParseSchoolYearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (first, second) = trimmed
            .split_once('-')
            .ok_or_else(|| ParseSchoolYearError::Format(s.to_string()))?;

        let (first, second) = match (parse_year(first), parse_year(second)) {
            (Some(first), Some(second)) => (first, second),
            _ => return Err(ParseSchoolYearError::Format(s.to_string())),
        };

        if second != first + 1 {
            return Err(ParseSchoolYearError::NotConsecutive(s.to_string()));
        }

        Ok(Self::starting(first))
    }
}

impl TryFrom<String> for SchoolYear {
    type Error = ParseSchoolYearError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SchoolYear> for String {
    fn from(year: SchoolYear) -> Self {
        year.to_string()
    }
}

impl fmt::Display for SchoolYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end_year())
    }
}
