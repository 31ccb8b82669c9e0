//! Composite report over a metric set.
//!
//! This is what the dashboards consume: field names of these types are read
//! by chart and table code and must stay stable.

use std::collections::BTreeMap;

use analytics_spi::{
    AnomalyResult, CorrelationSummary, MetricSet, NestedCorrelations, OutlierResult,
    PatternResult, SeasonalityResult, TrendResult,
};
use serde::{Deserialize, Serialize};

use crate::engine::AnalyticsEngine;

/// Trend, seasonality and pairwise correlation per metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendsSection {
    pub trends: BTreeMap<String, TrendResult>,
    pub seasonality: BTreeMap<String, SeasonalityResult>,
    /// Both directions of every computed pair.
    pub correlations: NestedCorrelations,
}

/// Anomalies, outliers and pattern label per metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnomaliesSection {
    pub anomalies: BTreeMap<String, AnomalyResult>,
    pub outliers: BTreeMap<String, OutlierResult>,
    pub patterns: BTreeMap<String, PatternResult>,
}

/// Everything the dashboard renders for one metric set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    pub trends: TrendsSection,
    pub anomalies: AnomaliesSection,
    pub correlations: CorrelationSummary,
}

impl AggregateReport {
    /// Names of metrics that received per-metric results.
    pub fn metric_names(&self) -> impl Iterator<Item = &str> {
        self.trends.trends.keys().map(String::as_str)
    }
}

/// Aggregate with the default configuration.
///
/// Never fails: metrics too short for a computation carry that
/// computation's default, and empty metrics are left out of the per-metric
/// maps.
pub fn aggregate(metrics: &MetricSet) -> AggregateReport {
    AnalyticsEngine::default().aggregate(metrics)
}
