//! Parsers for the school-holiday source payload.
//!
//! # Parsers
//!
//! - [`vacations`]: normalize the year-indexed JSON document into sorted
//!   per-region [`VacationPeriod`](crate::models::VacationPeriod) records
//!
//! # Example
//!
//! ```
//! use school_holidays::parsing::vacations::normalize;
//!
//! let payload = serde_json::json!({
//!     "content": [{
//!         "vacations": [{
//!             "type": "Zomervakantie",
//!             "compulsorydates": "true",
//!             "regions": [{
//!                 "region": "noord",
//!                 "startdate": "2026-07-04T00:00:00.000Z",
//!                 "enddate": "2026-08-16T00:00:00.000Z"
//!             }]
//!         }]
//!     }]
//! });
//!
//! let periods = normalize(&payload);
//! assert_eq!(periods.len(), 1);
//! ```

pub mod vacations;


pub use vacations::{normalize, normalize_str, vacation_entries, VacationNormalizer};
