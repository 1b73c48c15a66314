use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One flattened forecast entry. Day records come straight out of a forecast
/// document; hour records are produced on demand from a day's `hours`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub city: String,
    /// Date of a day record, `HH:MM` timestamp of an hour record, or the
    /// observation time when live conditions were overlaid.
    pub time: String,
    /// Live temperature; only the overlaid first record and hour records
    /// carry one.
    pub current_temp: Option<String>,
    pub condition: String,
    /// Protocol-relative icon fragment as the API hands it out.
    pub icon: String,
    pub max_temp: String,
    pub min_temp: String,
    /// Raw hourly sub-documents of a day record; empty for hour records.
    pub hours: Vec<Value>,
}

impl WeatherRecord {
    /// Day records keep their hourly data and can be drilled into; hour
    /// records cannot.
    pub fn is_day(&self) -> bool {
        !self.hours.is_empty()
    }

    /// Absolute icon URL.
    pub fn icon_url(&self) -> String {
        format!("https:{}", self.icon)
    }
}
