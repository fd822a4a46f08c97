//! Decoding of the provider's 5-day / 3-hour forecast payload

use crate::{ForecastError, ForecastResult, IntervalSample, Timestamp};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Top-level forecast response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cnt: Option<u32>,

    pub list: Vec<ForecastEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<City>,
}

/// One 3-hour slot of the forecast list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastEntry {
    pub dt: Timestamp,
    pub main: MainReadings,
    pub wind: Wind,

    /// Probability of precipitation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pop: Option<f64>,

    pub weather: Vec<WeatherCondition>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MainReadings {
    pub temp: f64,
    pub humidity: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feels_like: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wind {
    pub speed: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deg: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherCondition {
    pub id: u16,
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct City {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Offset from UTC in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<i32>,
}

impl ForecastResponse {
    pub fn from_reader<R: Read>(mut reader: R) -> ForecastResult<Self> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Self::from_str(&buf)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> ForecastResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Convert the forecast list into interval samples, in feed order
    pub fn into_samples(self) -> ForecastResult<Vec<IntervalSample>> {
        self.list.into_iter().map(ForecastEntry::into_sample).collect()
    }
}

impl ForecastEntry {
    /// Build a sample from this entry using its first weather condition
    pub fn into_sample(self) -> ForecastResult<IntervalSample> {
        let humidity = self.main.humidity;
        let humidity_percent = u8::try_from(humidity)
            .ok()
            .filter(|h| *h <= 100)
            .ok_or(ForecastError::InvalidHumidity {
                timestamp: self.dt,
                value: humidity,
            })?;

        let condition = self
            .weather
            .into_iter()
            .next()
            .ok_or(ForecastError::MissingCondition { timestamp: self.dt })?;

        Ok(IntervalSample {
            timestamp_utc: self.dt,
            temperature: self.main.temp,
            humidity_percent,
            wind_speed: self.wind.speed,
            precipitation_probability: self.pop,
            weather_condition_id: condition.id,
            icon_code: condition.icon,
        })
    }
}
