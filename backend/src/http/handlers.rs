//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;

use super::dto::{
    CountdownQuery, CountdownResponse, HealthResponse, RegionQuery, SchoolYearsResponse,
    VacationsResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::{parse_source_date, Region, SchoolYear};
use crate::services::countdown;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    }))
}

// =============================================================================
// School years
// =============================================================================

/// GET /v1/school-years
///
/// School years the source currently serves. Resolved on the first request.
pub async fn list_school_years(State(state): State<AppState>) -> HandlerResult<SchoolYearsResponse> {
    let school_years = state.available_years().await.to_vec();
    Ok(Json(SchoolYearsResponse { school_years }))
}

/// GET /v1/school-years/{year}/vacations?region=
///
/// Ordered vacation periods of one school year, optionally for one region.
pub async fn get_vacations(
    State(state): State<AppState>,
    Path(year): Path<String>,
    Query(query): Query<RegionQuery>,
) -> HandlerResult<VacationsResponse> {
    let school_year: SchoolYear = year.parse()?;
    let region = parse_region(query.region.as_deref())?;

    let mut periods = state.service.vacations(school_year).await?;
    if let Some(region) = region {
        periods.retain(|period| period.region() == region);
    }

    let total = periods.len();
    Ok(Json(VacationsResponse {
        school_year,
        region,
        periods,
        total,
    }))
}

/// GET /v1/school-years/{year}/countdown?region=&date=
///
/// Next vacation of a region starting on or after `date` (default today).
/// Region defaults to north.
pub async fn get_countdown(
    State(state): State<AppState>,
    Path(year): Path<String>,
    Query(query): Query<CountdownQuery>,
) -> HandlerResult<CountdownResponse> {
    let school_year: SchoolYear = year.parse()?;
    let region = parse_region(query.region.as_deref())?.unwrap_or(Region::North);
    let reference_date = match query.date.as_deref() {
        Some(raw) => parse_source_date(raw)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid date: '{}'", raw)))?,
        None => today(),
    };

    let periods = state.service.vacations(school_year).await?;
    let next = countdown::countdown(&periods, region, reference_date);

    let (period, days_remaining, season) = match next {
        Some(next) => {
            let season = next.season();
            (Some(next.period), Some(next.days_remaining), Some(season))
        }
        None => (None, None, None),
    };

    Ok(Json(CountdownResponse {
        school_year,
        region,
        reference_date,
        period,
        days_remaining,
        season,
    }))
}

// =============================================================================
// Helpers
// =============================================================================

fn parse_region(raw: Option<&str>) -> Result<Option<Region>, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => Ok(Some(raw.parse()?)),
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
