//! Application state for the HTTP server.

use std::sync::Arc;

use chrono::Datelike;
use tokio::sync::OnceCell;

use crate::models::SchoolYear;
use crate::services::HolidayService;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: HolidayService,
    /// Year list resolved on first request and reused for the process lifetime
    years: Arc<OnceCell<Vec<SchoolYear>>>,
}

impl AppState {
    pub fn new(service: HolidayService) -> Self {
        Self {
            service,
            years: Arc::new(OnceCell::new()),
        }
    }

    /// Available school years, probed around the current calendar year.
    pub async fn available_years(&self) -> &[SchoolYear] {
        self.years
            .get_or_init(|| async {
                let reference_year = chrono::Local::now().year();
                self.service.available_years(reference_year).await
            })
            .await
    }
}
