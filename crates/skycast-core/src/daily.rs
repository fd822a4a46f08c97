//! Daily aggregation of interval samples
//!
//! Samples are bucketed by their UTC calendar date and folded into one
//! `DayAccumulator` per day. The buckets live in an ordered map, so the
//! summaries come out sorted by date without depending on insertion order.

use crate::{DailySummary, ForecastError, ForecastResult, IntervalSample, Timestamp};
use chrono::{NaiveDate, NaiveTime};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, instrument};

const NOON_OFFSET_SECONDS: i64 = 12 * 3600;

/// Unix timestamp of 12:00 UTC on `date`
pub fn noon_utc(date: NaiveDate) -> Timestamp {
    date.and_time(NaiveTime::MIN).and_utc().timestamp() + NOON_OFFSET_SECONDS
}

/// Running state for one calendar day.
///
/// Always seeded with the day's first sample, so the sample list is never
/// empty and the running leaders always point at a real sample.
#[derive(Debug, Clone)]
pub(crate) struct DayAccumulator {
    date: NaiveDate,
    noon: Timestamp,
    samples: Vec<IntervalSample>,
    min_temperature: f64,
    max_temperature: f64,
    humidity_sum: u32,
    wind_sum: f64,
    peak_precipitation: f64,
    condition_counts: HashMap<u16, usize>,
    dominant_condition_id: u16,
    noon_distance: u64,
    representative: usize,
}

impl DayAccumulator {
    fn seed(date: NaiveDate, sample: IntervalSample) -> Self {
        let noon = noon_utc(date);
        let mut condition_counts = HashMap::new();
        condition_counts.insert(sample.weather_condition_id, 1);

        Self {
            date,
            noon,
            min_temperature: sample.temperature,
            max_temperature: sample.temperature,
            humidity_sum: u32::from(sample.humidity_percent),
            wind_sum: sample.wind_speed,
            peak_precipitation: sample.precipitation_or_zero(),
            condition_counts,
            dominant_condition_id: sample.weather_condition_id,
            noon_distance: sample.timestamp_utc.abs_diff(noon),
            representative: 0,
            samples: vec![sample],
        }
    }

    fn push(&mut self, sample: IntervalSample) {
        self.min_temperature = self.min_temperature.min(sample.temperature);
        self.max_temperature = self.max_temperature.max(sample.temperature);
        self.humidity_sum += u32::from(sample.humidity_percent);
        self.wind_sum += sample.wind_speed;
        self.peak_precipitation = self.peak_precipitation.max(sample.precipitation_or_zero());

        // Leader changes only on a strict lead, so the first condition to
        // reach a count keeps it on ties.
        let count = {
            let entry = self
                .condition_counts
                .entry(sample.weather_condition_id)
                .or_insert(0);
            *entry += 1;
            *entry
        };
        let leader_count = self
            .condition_counts
            .get(&self.dominant_condition_id)
            .copied()
            .unwrap_or(0);
        if count > leader_count {
            self.dominant_condition_id = sample.weather_condition_id;
        }

        let distance = sample.timestamp_utc.abs_diff(self.noon);
        if distance < self.noon_distance {
            self.noon_distance = distance;
            self.representative = self.samples.len();
        }

        self.samples.push(sample);
    }

    fn finish(self) -> DailySummary {
        let count = self.samples.len().max(1) as f64;
        let representative_icon_code = self
            .samples
            .get(self.representative)
            .map(|s| s.icon_code.clone())
            .unwrap_or_default();

        DailySummary {
            calendar_date: self.date,
            max_temperature: self.max_temperature,
            min_temperature: self.min_temperature,
            average_humidity_percent: (f64::from(self.humidity_sum) / count).round() as u8,
            average_wind_speed: self.wind_sum / count,
            peak_precipitation_probability: self.peak_precipitation,
            dominant_condition_id: self.dominant_condition_id,
            representative_icon_code,
            samples: self.samples,
        }
    }
}

/// Reduce time-ordered interval samples into one summary per UTC day.
///
/// Summaries are sorted ascending by date and each keeps its samples in
/// input order. An empty input yields an empty result.
#[instrument(level = "debug", skip_all, fields(samples = samples.len()))]
pub fn aggregate(samples: &[IntervalSample]) -> ForecastResult<Vec<DailySummary>> {
    let mut days: BTreeMap<NaiveDate, DayAccumulator> = BTreeMap::new();

    for sample in samples {
        let date = sample
            .datetime_utc()
            .ok_or(ForecastError::TimestampOutOfRange(sample.timestamp_utc))?
            .date_naive();

        match days.entry(date) {
            Entry::Vacant(slot) => {
                slot.insert(DayAccumulator::seed(date, sample.clone()));
            }
            Entry::Occupied(mut slot) => slot.get_mut().push(sample.clone()),
        }
    }

    let summaries: Vec<DailySummary> = days.into_values().map(DayAccumulator::finish).collect();

    debug!(days = summaries.len(), "Aggregated forecast samples");
    Ok(summaries)
}
