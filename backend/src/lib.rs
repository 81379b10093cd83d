//! # School Holidays Backend
//!
//! Normalization and countdown pipeline for Dutch school holidays.
//!
//! The government open-data service publishes one loosely structured JSON
//! document per school year. This crate turns those documents into ordered,
//! per-region vacation periods, discovers which school years are currently
//! published and tells how many days remain until the next vacation.
//!
//! ## Features
//!
//! - **Normalization**: Pure conversion of raw documents into [`models::VacationPeriod`]s
//! - **Year Discovery**: Bounded, order-preserving probing of candidate school years
//! - **Countdown**: Next vacation of a region relative to an explicit reference day
//! - **Session State**: Settings and fetched data with stale-result protection
//! - **HTTP API**: RESTful endpoints via Axum
//!
//! ## Architecture
//!
//! - [`models`]: Regions, school years, vacation periods and calendar-day helpers
//! - [`parsing`]: Raw document normalization
//! - [`source`]: The [`source::HolidaySource`] trait and its implementations
//! - [`services`]: Availability, countdown, fetch-and-normalize, session state
//! - [`config`]: TOML file and environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod config;
pub mod models;
pub mod parsing;
pub mod services;
pub mod source;

#[cfg(feature = "http-server")]
pub mod http;
