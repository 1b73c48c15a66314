//! WeatherAPI.com forecast client.
//!
//! API docs: <https://www.weatherapi.com/docs/>

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::{model::WeatherRecord, parse};

const FORECAST_URL: &str = "https://api.weatherapi.com/v1/forecast.json";

/// Fixed forecast depth; the daily view shows exactly this many entries.
pub const FORECAST_DAYS: u8 = 3;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("forecast request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("forecast request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to parse forecast document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Anything that can produce a flattened forecast for a city name.
///
/// The interactive session talks to this seam so tests can substitute a
/// canned source for the real API.
#[async_trait]
pub trait ForecastSource: Send + Sync {
    async fn forecast(&self, city: &str) -> Result<Vec<WeatherRecord>, ForecastError>;
}

#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    api_key: String,
    http: Client,
}

impl WeatherApiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl ForecastSource for WeatherApiClient {
    async fn forecast(&self, city: &str) -> Result<Vec<WeatherRecord>, ForecastError> {
        let days = FORECAST_DAYS.to_string();

        let res = self
            .http
            .get(FORECAST_URL)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", city),
                ("days", days.as_str()),
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ForecastError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        Ok(parse::daily_records(&body)?)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_name_the_status_and_body() {
        let err = ForecastError::Status {
            status: StatusCode::UNAUTHORIZED,
            body: r#"{"error":{"code":2006,"message":"API key is invalid."}}"#.to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("API key is invalid"));
    }

    #[test]
    fn parse_failures_convert_into_forecast_errors() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ForecastError = parse_err.into();

        assert!(matches!(err, ForecastError::Parse(_)));
    }

    #[test]
    fn truncate_body_caps_long_bodies() {
        let long = "x".repeat(500);
        let truncated = truncate_body(&long);

        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncate_body("short"), "short");
    }
}
