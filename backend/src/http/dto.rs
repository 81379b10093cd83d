//! Data Transfer Objects for the HTTP API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Region, SchoolYear, Season, VacationPeriod};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Response for the school-year list.
#[derive(Debug, Clone, Serialize)]
pub struct SchoolYearsResponse {
    /// Ascending, never empty
    pub school_years: Vec<SchoolYear>,
}

/// Optional region filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegionQuery {
    pub region: Option<String>,
}

/// Response for the vacation list of one school year.
#[derive(Debug, Clone, Serialize)]
pub struct VacationsResponse {
    pub school_year: SchoolYear,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    pub periods: Vec<VacationPeriod>,
    pub total: usize,
}

/// Query parameters for the countdown endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountdownQuery {
    pub region: Option<String>,
    /// Reference day; today when absent
    pub date: Option<String>,
}

/// Countdown to the next vacation. `period` is `null` when none is left.
#[derive(Debug, Clone, Serialize)]
pub struct CountdownResponse {
    pub school_year: SchoolYear,
    pub region: Region,
    pub reference_date: NaiveDate,
    pub period: Option<VacationPeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_remaining: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
}
