//! Normalization of the school-holiday JSON document.
//!
//! The source publishes one document per school year:
//!
//! ```text
//! { "content": [ { "vacations": [
//!     { "type": "Herfstvakantie ",
//!       "compulsorydates": "false",
//!       "regions": [ { "region": "noord",
//!                      "startdate": "2026-10-17T00:00:00.000Z",
//!                      "enddate": "2026-10-25T00:00:00.000Z" } ] } ] } ] }
//! ```
//!
//! The document is loosely structured. Missing levels are read as empty,
//! and entries that cannot be interpreted are dropped one by one. Nothing in
//! this module fails; the worst outcome is an empty collection.

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::models::region::collapse_whitespace;
use crate::models::{parse_source_date, Region, RegionLabels, RegionMatch, VacationPeriod};

/// One entry of the `vacations` array.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawVacation {
    #[serde(rename = "type")]
    vacation_type: Option<String>,
    /// Stringly typed boolean: `"true"` / `"false"`
    compulsorydates: Value,
    regions: Value,
}

/// One entry of a vacation's `regions` array.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRegionDates {
    region: Option<String>,
    startdate: Option<String>,
    enddate: Option<String>,
}

/// Converts raw source documents into ordered vacation periods.
///
/// The only state is the [`RegionLabels`] table deciding which source labels
/// map to which region.
#[derive(Debug, Clone, Default)]
pub struct VacationNormalizer {
    labels: RegionLabels,
}

impl VacationNormalizer {
    pub fn new(labels: RegionLabels) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &RegionLabels {
        &self.labels
    }

    /// Normalize a parsed document.
    ///
    /// Output is sorted ascending by start date. Periods sharing a start date
    /// keep the order in which the source listed them.
    pub fn normalize(&self, payload: &Value) -> Vec<VacationPeriod> {
        let mut periods = Vec::new();

        for (index, entry) in vacation_entries(payload).iter().enumerate() {
            let raw = match RawVacation::deserialize(entry) {
                Ok(raw) => raw,
                Err(e) => {
                    debug!("Skipping vacation entry {}: {}", index, e);
                    continue;
                }
            };

            let name = collapse_whitespace(raw.vacation_type.as_deref().unwrap_or_default());
            let compulsory = parse_compulsory(&raw.compulsorydates);

            for region_entry in raw.regions.as_array().map(Vec::as_slice).unwrap_or_default() {
                self.push_region_entry(&mut periods, &name, compulsory, region_entry);
            }
        }

        // Stable: equal start dates stay in source order
        periods.sort_by_key(VacationPeriod::start);
        periods
    }

    fn push_region_entry(
        &self,
        out: &mut Vec<VacationPeriod>,
        name: &str,
        compulsory: bool,
        entry: &Value,
    ) {
        let raw = match RawRegionDates::deserialize(entry) {
            Ok(raw) => raw,
            Err(e) => {
                debug!("Skipping region entry of '{}': {}", name, e);
                return;
            }
        };

        let label = collapse_whitespace(raw.region.as_deref().unwrap_or_default()).to_lowercase();
        let regions: Vec<Region> = match self.labels.resolve(&label) {
            Some(RegionMatch::WholeCountry) => Region::ALL.to_vec(),
            Some(RegionMatch::Single(region)) => vec![region],
            None => {
                debug!("Dropping '{}': unrecognised region label '{}'", name, label);
                return;
            }
        };

        let start = raw.startdate.as_deref().and_then(parse_source_date);
        let end = raw.enddate.as_deref().and_then(parse_source_date);
        let (start, end) = match (start, end) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                debug!(
                    "Dropping '{}' ({}): unparseable dates {:?} / {:?}",
                    name, label, raw.startdate, raw.enddate
                );
                return;
            }
        };

        for region in regions {
            match VacationPeriod::new(name, region, start, end, compulsory) {
                Some(period) => out.push(period),
                None => {
                    debug!("Dropping '{}' ({}): starts {} after it ends {}", name, region, start, end);
                    return;
                }
            }
        }
    }
}

/// Normalize with the default region labels.
pub fn normalize(payload: &Value) -> Vec<VacationPeriod> {
    VacationNormalizer::default().normalize(payload)
}

/// Parse and normalize a JSON string with the default region labels.
///
/// Only invalid JSON syntax is an error; an unexpected shape yields an
/// empty collection.
pub fn normalize_str(json: &str) -> Result<Vec<VacationPeriod>, serde_json::Error> {
    let payload: Value = serde_json::from_str(json)?;
    Ok(normalize(&payload))
}

/// The `content[0].vacations` array, or an empty slice when any level is
/// missing or has the wrong type.
pub fn vacation_entries(payload: &Value) -> &[Value] {
    payload
        .get("content")
        .and_then(|content| content.get(0))
        .and_then(|document| document.get("vacations"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Only the string `"true"` in any letter case counts as true. A JSON `true`
/// is accepted since its string form is the same.
fn parse_compulsory(value: &Value) -> bool {
    match value {
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        Value::Bool(b) => *b,
        _ => false,
    }
}
