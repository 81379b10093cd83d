//! Holiday regions.
//!
//! School holidays in the Netherlands are staggered over three regions. The
//! set is closed: a label that does not resolve to one of them is never
//! turned into a [`Region`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three holiday regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[serde(alias = "noord")]
    North,
    #[serde(alias = "midden")]
    Middle,
    #[serde(alias = "zuid")]
    South,
}

/// Error returned when a string does not name a region.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown region: '{0}' (expected north, middle or south)")]
pub struct ParseRegionError(pub String);

impl Region {
    /// Every region, in north-to-south order.
    pub const ALL: [Region; 3] = [Region::North, Region::Middle, Region::South];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "north",
            Region::Middle => "middle",
            Region::South => "south",
        }
    }

    /// Label used for this region by the government data source.
    pub fn source_label(&self) -> &'static str {
        match self {
            Region::North => "noord",
            Region::Middle => "midden",
            Region::South => "zuid",
        }
    }

    /// Map a Dutch province name to its holiday region.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace. Both
    /// hyphenated and spaced spellings of the compound provinces are accepted.
    pub fn from_province(province: &str) -> Option<Region> {
        match province.trim().to_lowercase().as_str() {
            "groningen" | "friesland" | "drenthe" | "flevoland" | "overijssel"
            | "noord-holland" | "noord holland" => Some(Region::North),
            "utrecht" | "zuid-holland" | "zuid holland" | "gelderland" => Some(Region::Middle),
            "zeeland" | "noord-brabant" | "noord brabant" | "limburg" => Some(Region::South),
            _ => None,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = ParseRegionError;

    /// Accepts the English names and the source's Dutch labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "north" | "noord" => Ok(Region::North),
            "middle" | "midden" => Ok(Region::Middle),
            "south" | "zuid" => Ok(Region::South),
            _ => Err(ParseRegionError(s.to_string())),
        }
    }
}

/// Result of resolving a source region label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionMatch {
    /// The entry applies to every region.
    WholeCountry,
    Single(Region),
}

/// Recognised source spellings for each region and for "whole country".
///
/// Labels are compared after whitespace collapsing and lower-casing, on both
/// the configured side and the payload side. `whole_country` entries are
/// tokens: a label containing any of them is nationwide, and that check runs
/// before the per-region lists, which must match exactly. Extra spellings
/// discovered in the wild belong here rather than in the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionLabels {
    #[serde(default = "default_whole_country")]
    pub whole_country: Vec<String>,
    #[serde(default = "default_north")]
    pub north: Vec<String>,
    #[serde(default = "default_middle")]
    pub middle: Vec<String>,
    #[serde(default = "default_south")]
    pub south: Vec<String>,
}

fn default_whole_country() -> Vec<String> {
    vec!["heel".to_string()]
}

fn default_north() -> Vec<String> {
    vec![Region::North.source_label().to_string()]
}

fn default_middle() -> Vec<String> {
    vec![Region::Middle.source_label().to_string()]
}

fn default_south() -> Vec<String> {
    vec![Region::South.source_label().to_string()]
}

impl Default for RegionLabels {
    fn default() -> Self {
        Self {
            whole_country: default_whole_country(),
            north: default_north(),
            middle: default_middle(),
            south: default_south(),
        }
    }
}

impl RegionLabels {
    /// Resolve an already cleaned, lower-cased label.
    pub fn resolve(&self, label: &str) -> Option<RegionMatch> {
        let nationwide = self
            .whole_country
            .iter()
            .map(|token| collapse_whitespace(token).to_lowercase())
            .any(|token| !token.is_empty() && label.contains(&token));
        if nationwide {
            return Some(RegionMatch::WholeCountry);
        }

        let matches = |candidates: &[String]| {
            candidates
                .iter()
                .any(|candidate| collapse_whitespace(candidate).to_lowercase() == label)
        };

        Region::ALL
            .into_iter()
            .find(|region| matches(self.labels_for(*region)))
            .map(RegionMatch::Single)
    }

    fn labels_for(&self, region: Region) -> &[String] {
        match region {
            Region::North => &self.north,
            Region::Middle => &self.middle,
            Region::South => &self.south,
        }
    }
}

/// Collapse every run of whitespace to a single space and trim the ends.
pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
