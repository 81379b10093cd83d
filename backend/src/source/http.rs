//! Holiday source backed by the government open-data API.

use async_trait::async_trait;
use log::debug;
use serde_json::Value;
use std::time::Duration;

use super::{HolidaySource, SourceError, SourceResult};
use crate::models::SchoolYear;

/// Fetches `{base_url}/{school_year}?output=json` over HTTPS.
#[derive(Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    /// Build a source with its own connection pool.
    ///
    /// # Arguments
    /// * `base_url` - Endpoint up to, but excluding, the school-year segment
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> SourceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, school_year: SchoolYear) -> String {
        format!("{}/{}?output=json", self.base_url, school_year)
    }
}

#[async_trait]
impl HolidaySource for HttpSource {
    async fn fetch(&self, school_year: SchoolYear) -> SourceResult<Value> {
        let url = self.url_for(school_year);
        debug!("Fetching school holidays from {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::timeout(format!("Request to {} timed out: {}", url, e))
            } else {
                SourceError::transport(format!("Request to {} failed: {}", url, e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::http(status.as_u16(), school_year));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::transport(format!("Failed to read response body: {}", e)))?;

        serde_json::from_str(&body).map_err(|e| SourceError::malformed(e.to_string(), school_year))
    }

    fn describe(&self) -> String {
        format!("http ({})", self.base_url)
    }
}
