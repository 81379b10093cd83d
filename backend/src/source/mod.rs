//! Access to the published school-holiday documents.
//!
//! The source is an external collaborator: given a school year it returns the
//! raw JSON document or fails. Everything downstream (normalization, year
//! probing, countdown) works against the [`HolidaySource`] trait so the
//! backend can be swapped.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Services (availability, holidays, session)   │
//! └───────────────────┬──────────────────────────┘
//!                     │ HolidaySource::fetch(year)
//!     ┌───────────────┴────────────────┐
//!     │                                 │
//! ┌───▼──────────────┐     ┌───────────▼───────────┐
//! │ HttpSource       │     │ LocalSource           │
//! │ (open data API)  │     │ (in-memory)           │
//! └──────────────────┘     └───────────────────────┘
//! ```

pub mod error;
pub mod factory;
#[cfg(feature = "http-source")]
pub mod http;
pub mod local;

use async_trait::async_trait;
use serde_json::Value;

use crate::models::SchoolYear;

pub use error::{SourceError, SourceResult};
pub use factory::{SourceFactory, SourceType};
#[cfg(feature = "http-source")]
pub use http::HttpSource;
pub use local::LocalSource;

/// A provider of raw school-holiday documents.
///
/// # Thread Safety
/// Implementations must be `Send + Sync`; the availability probe issues
/// several fetches concurrently against one instance.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    /// Fetch the raw document for `school_year`.
    ///
    /// # Returns
    /// * `Ok(Value)` - The parsed JSON body, whatever its shape
    /// * `Err(SourceError)` - Non-success status, transport failure or an unparseable body
    async fn fetch(&self, school_year: SchoolYear) -> SourceResult<Value>;

    /// Short name for logs.
    fn describe(&self) -> String;
}
