//! Core data types for forecast samples and daily summaries

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::conditions::{ConditionGroup, IconVariant};

/// Timestamp type (Unix epoch seconds)
pub type Timestamp = i64;

/// One 3-hour forecast slot as delivered by the feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntervalSample {
    /// Unix timestamp of the slot (UTC)
    pub timestamp_utc: Timestamp,

    pub temperature: f64,

    /// Relative humidity (0-100)
    pub humidity_percent: u8,

    pub wind_speed: f64,

    /// Probability of precipitation (0.0-1.0), absent means 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precipitation_probability: Option<f64>,

    /// Provider condition code (e.g. 800 = clear sky)
    pub weather_condition_id: u16,

    /// Provider icon identifier (e.g. "01d")
    pub icon_code: String,
}

impl IntervalSample {
    pub fn precipitation_or_zero(&self) -> f64 {
        self.precipitation_probability.unwrap_or(0.0)
    }

    pub fn datetime_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp_utc, 0)
    }
}

/// Aggregated forecast for a single calendar day (UTC)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySummary {
    pub calendar_date: NaiveDate,
    pub max_temperature: f64,
    pub min_temperature: f64,

    /// Mean humidity, rounded to the nearest integer
    pub average_humidity_percent: u8,

    /// Mean wind speed, unrounded
    pub average_wind_speed: f64,

    pub peak_precipitation_probability: f64,

    /// Most frequent condition of the day
    pub dominant_condition_id: u16,

    /// Icon of the sample closest to noon
    pub representative_icon_code: String,

    /// The day's samples in feed order
    pub samples: Vec<IntervalSample>,
}

impl DailySummary {
    pub fn condition(&self) -> ConditionGroup {
        ConditionGroup::from_condition_id(self.dominant_condition_id)
    }

    pub fn is_daytime_icon(&self) -> bool {
        IconVariant::from_icon_code(&self.representative_icon_code) == IconVariant::Day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_serde_missing_precipitation() {
        let json = r#"{"timestamp_utc":1700000000,"temperature":12.5,"humidity_percent":80,
            "wind_speed":3.2,"weather_condition_id":500,"icon_code":"10d"}"#;
        let sample: IntervalSample = serde_json::from_str(json).unwrap();

        assert_eq!(sample.precipitation_probability, None);
        assert_eq!(sample.precipitation_or_zero(), 0.0);
        assert_eq!(sample.humidity_percent, 80);
    }

    #[test]
    fn test_sample_datetime() {
        let sample = IntervalSample {
            timestamp_utc: 0,
            temperature: 0.0,
            humidity_percent: 0,
            wind_speed: 0.0,
            precipitation_probability: Some(0.4),
            weather_condition_id: 800,
            icon_code: "01n".to_string(),
        };

        let dt = sample.datetime_utc().unwrap();
        assert_eq!(dt.date_naive(), NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        assert_eq!(sample.precipitation_or_zero(), 0.4);
    }
}
