//! School holidays HTTP server binary.
//!
//! # Usage
//!
//! ```bash
//! # Against the government open-data API (default)
//! cargo run --bin holidays-server
//!
//! # Custom endpoint and verbose logging
//! HOLIDAYS_BASE_URL=http://localhost:9000/schoolyear RUST_LOG=debug \
//!   cargo run --bin holidays-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `HOLIDAYS_SOURCE`: `http` or `local` (default: http)
//! - `HOLIDAYS_BASE_URL`, `HOLIDAYS_TIMEOUT_SECS`, `HOLIDAYS_PROBE_CONCURRENCY`
//! - `RUST_LOG`: Log filter (default: info)

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use school_holidays::config::HolidaysConfig;
use school_holidays::http::{create_router, AppState};
use school_holidays::services::HolidayService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting school holidays HTTP server");

    let config = HolidaysConfig::load()?;
    let service = HolidayService::from_config(&config)?;
    info!(
        "Source: {} (probe concurrency {})",
        service.source().describe(),
        service.probe_concurrency()
    );

    let app = create_router(AppState::new(service));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
