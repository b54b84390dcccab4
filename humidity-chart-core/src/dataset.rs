use humidity_chart_common::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One daily weather record. The source data carries many more fields;
/// only `humidity` is consumed here and the rest are ignored on parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub humidity: f64,
}

pub fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Unified loader: dispatches to HTTP or local file based on the input string.
pub fn load_records(input: &str) -> Result<Vec<WeatherRecord>> {
    if is_url(input) {
        fetch_records(input)
    } else {
        read_records(Path::new(input))
    }
}

pub fn read_records(path: &Path) -> Result<Vec<WeatherRecord>> {
    let content = std::fs::read_to_string(path)?;
    let records: Vec<WeatherRecord> = serde_json::from_str(&content)?;
    Ok(records)
}

pub fn fetch_records(url: &str) -> Result<Vec<WeatherRecord>> {
    let records: Vec<WeatherRecord> = reqwest::blocking::get(url)?
        .error_for_status()?
        .json()?;
    Ok(records)
}

pub fn humidity_values(records: &[WeatherRecord]) -> Vec<f64> {
    records.iter().map(|r| r.humidity).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_dispatch() {
        assert!(is_url("https://example.com/data.json"));
        assert!(is_url("http://example.com/data.json"));
        assert!(!is_url("./data/my_weather_data.json"));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let json = r#"[{"humidity": 0.55, "time": 1609459200, "summary": "Clear"}]"#;
        let records: Vec<WeatherRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].humidity, 0.55);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let records: std::result::Result<Vec<WeatherRecord>, _> =
            serde_json::from_str("{not json");
        assert!(records.is_err());
    }
}
