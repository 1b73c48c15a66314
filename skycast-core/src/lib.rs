//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The flattened forecast record model
//! - Fetching and flattening of WeatherAPI.com forecast documents
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod model;
pub mod parse;

pub use client::{FORECAST_DAYS, ForecastError, ForecastSource, WeatherApiClient};
pub use config::{Config, DEFAULT_CITY};
pub use model::WeatherRecord;
