//! Named metric series.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};

/// One metric over discrete time buckets.
pub type Series = Vec<f64>;

/// Metric series as they arrive from the data boundary, with absent samples.
pub type RawMetrics = BTreeMap<String, Vec<Option<f64>>>;

/// A snapshot of named metrics, the unit the aggregation works on.
///
/// Every stored value is finite. Absent samples are stored as `0.0`.
/// Iteration is ordered by metric name, so anything derived from a set is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMetrics", into = "BTreeMap<String, Series>")]
pub struct MetricSet {
    metrics: BTreeMap<String, Series>,
}

impl MetricSet {
    /// Create an empty metric set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a metric, rejecting non-finite values.
    pub fn insert(&mut self, name: impl Into<String>, values: Series) -> Result<()> {
        let name = name.into();
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(AnalyticsError::NonFiniteValue {
                metric: name,
                index,
            });
        }
        self.metrics.insert(name, values);
        Ok(())
    }

    /// Insert a metric whose samples may be absent; absent samples become `0.0`.
    pub fn insert_optional(&mut self, name: impl Into<String>, values: &[Option<f64>]) -> Result<()> {
        self.insert(name, values.iter().map(|v| v.unwrap_or(0.0)).collect())
    }

    /// Builder-style insert.
    pub fn with_metric(mut self, name: impl Into<String>, values: Series) -> Result<Self> {
        self.insert(name, values)?;
        Ok(self)
    }

    /// Get a metric by name.
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.metrics.get(name).map(Vec::as_slice)
    }

    /// Iterate metrics in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.metrics.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Metric names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.metrics.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

impl TryFrom<RawMetrics> for MetricSet {
    type Error = AnalyticsError;

    fn try_from(raw: RawMetrics) -> Result<Self> {
        let mut set = MetricSet::new();
        for (name, values) in raw {
            set.insert_optional(name, &values)?;
        }
        Ok(set)
    }
}

impl From<MetricSet> for BTreeMap<String, Series> {
    fn from(set: MetricSet) -> Self {
        set.metrics
    }
}
