//! Source factory for dependency injection.
//!
//! Creates the configured [`HolidaySource`] implementation at runtime.

use std::str::FromStr;
use std::sync::Arc;

use super::local::LocalSource;
use super::{HolidaySource, SourceError, SourceResult};
use crate::config::SourceSettings;

/// Source type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    /// Government open-data API
    Http,
    /// In-memory source
    Local,
}

impl FromStr for SourceType {
    type Err = String;

    /// Parse source type from string.
    ///
    /// # Arguments
    /// * `s` - String representation ("http", "local")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "http" | "https" | "remote" => Ok(Self::Http),
            "local" | "memory" => Ok(Self::Local),
            _ => Err(format!("Unknown source type: {}", s)),
        }
    }
}

/// Factory for creating source instances.
///
/// # Example
/// ```
/// use school_holidays::config::SourceSettings;
/// use school_holidays::source::{HolidaySource, SourceFactory};
///
/// let settings = SourceSettings { source_type: "local".to_string(), ..SourceSettings::default() };
/// let source = SourceFactory::create(&settings).unwrap();
/// assert_eq!(source.describe(), "local");
/// ```
pub struct SourceFactory;

impl SourceFactory {
    /// Create a source instance from settings.
    ///
    /// # Returns
    /// * `Ok(Arc<dyn HolidaySource>)` - Shared source instance
    /// * `Err(SourceError)` - If the settings are invalid or the backend is not compiled in
    pub fn create(settings: &SourceSettings) -> SourceResult<Arc<dyn HolidaySource>> {
        let source_type = settings
            .source_type()
            .map_err(|e| SourceError::Configuration(e.to_string()))?;

        match source_type {
            SourceType::Http => {
                #[cfg(feature = "http-source")]
                {
                    let http = Self::create_http(settings)?;
                    Ok(http as Arc<dyn HolidaySource>)
                }
                #[cfg(not(feature = "http-source"))]
                {
                    Err(SourceError::Configuration(
                        "HTTP source feature not enabled".to_string(),
                    ))
                }
            }
            SourceType::Local => Ok(Self::create_local() as Arc<dyn HolidaySource>),
        }
    }

    /// Create an HTTP source for the configured endpoint.
    #[cfg(feature = "http-source")]
    pub fn create_http(settings: &SourceSettings) -> SourceResult<Arc<super::HttpSource>> {
        let source = super::HttpSource::new(settings.base_url.clone(), settings.timeout())?;
        Ok(Arc::new(source))
    }

    /// Create an empty in-memory source.
    pub fn create_local() -> Arc<LocalSource> {
        Arc::new(LocalSource::new())
    }
}
