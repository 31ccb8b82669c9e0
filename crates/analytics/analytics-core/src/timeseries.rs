//! Interval bucketing and per-metric smoothing / projection.

use std::collections::BTreeMap;

use analytics_spi::{AnalyticsError, EntityRecord, Interval, MetricSet, Result, Series};
use chrono::{Datelike, Duration, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::engine::AnalyticsEngine;

const SPACE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A dated observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedValue {
    /// Accepts both `2024-01-31T10:00:00` and `2024-01-31 10:00:00`.
    #[serde(deserialize_with = "deserialize_datetime")]
    pub date: NaiveDateTime,
    pub value: f64,
}

impl DatedValue {
    pub fn new(date: NaiveDateTime, value: f64) -> Self {
        Self { date, value }
    }
}

/// Parse a timestamp in ISO (`T`) or space-separated form.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    s.parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(s, SPACE_FORMAT))
        .map_err(|e| AnalyticsError::Parse(format!("invalid timestamp '{}': {}", s, e)))
}

fn deserialize_datetime<'de, D>(deserializer: D) -> std::result::Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_datetime(&raw).map_err(serde::de::Error::custom)
}

/// Bucket key of a timestamp.
///
/// `YYYY-MM-DD`, `YYYY-MM-DD - Week W` (ISO week), `YYYY-MM`, `YYYY-Qn` or
/// `YYYY`.
pub fn interval_key(at: NaiveDateTime, interval: Interval) -> String {
    match interval {
        Interval::Daily => at.date().to_string(),
        Interval::Weekly => format!("{} - Week {}", at.date(), at.iso_week().week()),
        Interval::Monthly => format!("{}-{:02}", at.year(), at.month()),
        Interval::Quarterly => format!("{}-Q{}", at.year(), (at.month() - 1) / 3 + 1),
        Interval::Yearly => at.year().to_string(),
    }
}

/// Bucket key for counting creations.
///
/// Like [`interval_key`], except a week is keyed by its Monday (`YYYY-MM-DD`)
/// so that every day of the week lands in the same bucket.
pub fn creation_key(at: NaiveDateTime, interval: Interval) -> String {
    match interval {
        Interval::Weekly => {
            let date = at.date();
            let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
            monday.to_string()
        }
        other => interval_key(at, other),
    }
}

/// Number of entities created per bucket, ordered by key.
///
/// `start` and `end` are inclusive bounds on the creation timestamp. Entities
/// without a creation timestamp are not counted.
pub fn entity_time_series(
    entities: &[EntityRecord],
    interval: Interval,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> Vec<(String, u64)> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for created in entities.iter().filter_map(|e| e.created_at) {
        if start.is_some_and(|s| created < s) || end.is_some_and(|e| created > e) {
            continue;
        }
        *counts.entry(creation_key(created, interval)).or_insert(0) += 1;
    }

    debug!(
        entities = entities.len(),
        buckets = counts.len(),
        %interval,
        "entity creation series built"
    );
    counts.into_iter().collect()
}

/// Group observations by interval key, keeping arrival order in each bucket.
pub fn bucket_by_interval(points: &[DatedValue], interval: Interval) -> Result<MetricSet> {
    let mut buckets: BTreeMap<String, Series> = BTreeMap::new();
    for point in points {
        buckets
            .entry(interval_key(point.date, interval))
            .or_default()
            .push(point.value);
    }

    let mut set = MetricSet::new();
    for (key, values) in buckets {
        set.insert(key, values)?;
    }
    Ok(set)
}

/// Input series with their moving averages and growth projections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesReport {
    pub time_series_data: BTreeMap<String, Series>,
    pub moving_averages: BTreeMap<String, Series>,
    pub forecasts: BTreeMap<String, Series>,
}

/// Moving average (window 7) and 12-point projection for every metric.
pub fn process_time_series(metrics: &MetricSet) -> TimeSeriesReport {
    AnalyticsEngine::default().process_time_series(metrics)
}
