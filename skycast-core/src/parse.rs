//! Flattening of WeatherAPI.com forecast documents into [`WeatherRecord`]s.
//!
//! The API nests everything under `location` / `current` / `forecast`; the
//! rest of the crate only ever sees the flat record shape.

use serde::Deserialize;
use serde_json::{Number, Value};

use crate::model::WeatherRecord;

#[derive(Debug, Deserialize)]
struct ForecastDocument {
    location: Location,
    current: CurrentConditions,
    forecast: Forecast,
}

#[derive(Debug, Deserialize)]
struct Location {
    name: String,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    last_updated: String,
    temp_c: Number,
}

#[derive(Debug, Deserialize)]
struct Forecast {
    forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Deserialize)]
struct ForecastDay {
    date: String,
    day: DaySummary,
    #[serde(default)]
    hour: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct DaySummary {
    maxtemp_c: Number,
    mintemp_c: Number,
    condition: Condition,
}

#[derive(Debug, Deserialize)]
struct Condition {
    text: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct HourEntry {
    time: String,
    temp_c: Number,
    condition: Condition,
}

/// Flatten a forecast document into one record per forecast day, in document
/// order.
///
/// The location name is stamped on every record, and the first record is
/// overlaid with the live observation time and temperature. An empty body
/// yields an empty forecast rather than a parse error.
pub fn daily_records(body: &str) -> Result<Vec<WeatherRecord>, serde_json::Error> {
    if body.is_empty() {
        return Ok(Vec::new());
    }

    let document: ForecastDocument = serde_json::from_str(body)?;
    let city = document.location.name;

    let mut records: Vec<WeatherRecord> = document
        .forecast
        .forecastday
        .into_iter()
        .map(|entry| WeatherRecord {
            city: city.clone(),
            time: entry.date,
            current_temp: None,
            condition: entry.day.condition.text,
            icon: entry.day.condition.icon,
            max_temp: entry.day.maxtemp_c.to_string(),
            min_temp: entry.day.mintemp_c.to_string(),
            hours: entry.hour,
        })
        .collect();

    if let Some(first) = records.first_mut() {
        first.time = document.current.last_updated;
        first.current_temp = Some(document.current.temp_c.to_string());
    }

    Ok(records)
}

/// Flatten a day's raw hourly sub-documents into hour records.
///
/// Runs on demand when an hourly view is opened. Temperatures are cut to
/// whole degrees and suffixed with the unit, ready for display.
pub fn hourly_records(hours: &[Value]) -> Result<Vec<WeatherRecord>, serde_json::Error> {
    hours
        .iter()
        .map(|value| {
            let entry: HourEntry = serde_json::from_value(value.clone())?;

            Ok(WeatherRecord {
                city: String::new(),
                time: entry.time,
                current_temp: Some(format!("{}°C", whole_degrees(&entry.temp_c))),
                condition: entry.condition.text,
                icon: entry.condition.icon,
                max_temp: String::new(),
                min_temp: String::new(),
                hours: Vec::new(),
            })
        })
        .collect()
}

/// Whole degrees, truncated toward zero.
fn whole_degrees(value: &Number) -> String {
    value
        .as_f64()
        .map(|v| (v as i64).to_string())
        .unwrap_or_else(|| value.to_string())
}
