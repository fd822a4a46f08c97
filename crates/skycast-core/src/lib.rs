//! Core data types and daily aggregation for 3-hour forecast feeds
//!
//! This crate turns the provider's flat, time-ordered interval samples into
//! one summary per calendar day. Day boundaries and the noon reference are
//! both taken in UTC.

pub mod conditions;
pub mod daily;
pub mod feed;
pub mod types;

pub use conditions::*;
pub use daily::*;
pub use feed::*;
pub use types::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(Timestamp),

    #[error("Forecast entry at {timestamp} has no weather condition")]
    MissingCondition { timestamp: Timestamp },

    #[error("Forecast entry at {timestamp} has invalid humidity: {value}")]
    InvalidHumidity { timestamp: Timestamp, value: i64 },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ForecastResult<T> = Result<T, ForecastError>;
