//! Plain-string rendering of forecast records.
//!
//! Everything here returns a `String` so it can be tested without a
//! terminal.

use chrono::NaiveDate;
use skycast_core::WeatherRecord;

/// The main card for the current selection.
pub fn card(record: Option<&WeatherRecord>) -> String {
    let Some(record) = record else {
        return "\nNo forecast loaded yet. Try `Search city` or `Refresh`.\n".to_string();
    };

    format!(
        "\n{}\n{}\n{}\n{}  {}\n{}\nicon: {}\n",
        "=".repeat(44),
        record.time,
        record.city,
        headline_temperature(record),
        record.condition,
        range_label(record),
        record.icon_url(),
    )
}

/// One row of the day list.
pub fn day_line(record: &WeatherRecord) -> String {
    format!(
        "{}  {}  {}",
        weekday_label(&record.time),
        record.condition,
        list_temperature(record)
    )
}

/// One row of the hour list.
pub fn hour_line(record: &WeatherRecord) -> String {
    format!(
        "{}  {}  {}",
        record.time,
        record.condition,
        list_temperature(record)
    )
}

fn headline_temperature(record: &WeatherRecord) -> String {
    match record.current_temp.as_deref() {
        Some(temp) => format!("{}°C", whole_degrees(temp)),
        None => range_label(record),
    }
}

/// `max°C/min°C` with whole degrees, as the card shows the range.
fn range_label(record: &WeatherRecord) -> String {
    format!(
        "{}°C/{}°C",
        whole_degrees(&record.max_temp),
        whole_degrees(&record.min_temp)
    )
}

/// The raw live value when present; the list shows it untouched. Hour
/// records arrive with the unit already baked in.
fn list_temperature(record: &WeatherRecord) -> String {
    match &record.current_temp {
        Some(temp) => temp.clone(),
        None => format!("{}°C/{}°C", record.max_temp, record.min_temp),
    }
}

/// Day rows get a weekday prefix when the label is a plain date; the first
/// record's label is an observation timestamp and stays as is.
fn weekday_label(time: &str) -> String {
    match NaiveDate::parse_from_str(time, "%Y-%m-%d") {
        Ok(date) => format!("{} {}", date.format("%a"), time),
        Err(_) => time.to_string(),
    }
}

/// Whole degrees, truncated toward zero; non-numeric labels pass through.
fn whole_degrees(value: &str) -> String {
    value
        .parse::<f64>()
        .map(|v| (v as i64).to_string())
        .unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day_record() -> WeatherRecord {
        WeatherRecord {
            city: "London".into(),
            time: "2024-05-03".into(),
            condition: "Sunny".into(),
            icon: "//cdn.weatherapi.com/weather/64x64/day/113.png".into(),
            max_temp: "17.0".into(),
            min_temp: "8.2".into(),
            ..Default::default()
        }
    }

    #[test]
    fn card_headline_truncates_the_live_temperature() {
        let mut record = day_record();
        record.time = "2024-05-01 13:15".into();
        record.current_temp = Some("10.3".into());

        let rendered = card(Some(&record));

        assert!(rendered.contains("10°C  Sunny"));
        assert!(rendered.contains("London"));
        assert!(rendered.contains("2024-05-01 13:15"));
    }

    #[test]
    fn card_headline_falls_back_to_the_range() {
        let rendered = card(Some(&day_record()));

        assert!(rendered.contains("17°C/8°C  Sunny"));
    }

    #[test]
    fn card_names_the_icon_url() {
        let rendered = card(Some(&day_record()));

        assert!(rendered.contains("icon: https://cdn.weatherapi.com/weather/64x64/day/113.png"));
    }

    #[test]
    fn card_without_a_record_is_a_placeholder() {
        let rendered = card(None);

        assert!(rendered.contains("No forecast loaded"));
    }

    #[test]
    fn day_line_prefixes_the_weekday() {
        let line = day_line(&day_record());

        assert!(line.starts_with("Fri 2024-05-03"));
        assert!(line.contains("Sunny"));
        assert!(line.contains("17.0°C/8.2°C"));
    }

    #[test]
    fn day_line_keeps_live_temperatures_verbatim() {
        let mut record = day_record();
        record.time = "2024-05-01 13:15".into();
        record.current_temp = Some("10.3".into());

        let line = day_line(&record);

        assert_eq!(line, "2024-05-01 13:15  Sunny  10.3");
    }

    #[test]
    fn hour_line_shows_the_suffixed_temperature() {
        let record = WeatherRecord {
            time: "2024-05-01 05:00".into(),
            current_temp: Some("12°C".into()),
            condition: "Clear".into(),
            ..Default::default()
        };

        assert_eq!(hour_line(&record), "2024-05-01 05:00  Clear  12°C");
    }

    #[test]
    fn whole_degrees_truncates_toward_zero() {
        assert_eq!(whole_degrees("25.9"), "25");
        assert_eq!(whole_degrees("-3.7"), "-3");
        assert_eq!(whole_degrees("7"), "7");
        assert_eq!(whole_degrees("n/a"), "n/a");
    }
}
