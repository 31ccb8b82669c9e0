//! Configured analytics engine.

use std::collections::BTreeMap;

use analytics_api::AnalyticsConfig;
use analytics_spi::{
    AnomalyDetector, AnomalyResult, CorrelationSummary, Forecaster, MetricSet, OutlierDetector,
    OutlierResult, PatternClassifier, PatternResult, Result, SeasonalityDetector,
    SeasonalityResult, Series, TrendEstimator, TrendResult,
};
use tracing::{debug, trace};

use crate::aggregate::{AggregateReport, AnomaliesSection, TrendsSection};
use crate::anomalies::{moving_average, MovingAverageDetector};
use crate::correlation::{classify, correlation_matrix};
use crate::forecast::GrowthForecaster;
use crate::outliers::IqrOutlierDetector;
use crate::pattern::DirectionalPatternClassifier;
use crate::seasonality::AutocorrelationSeasonality;
use crate::timeseries::TimeSeriesReport;
use crate::trend::LinearTrend;

/// Bundles every detector, configured from one [`AnalyticsConfig`].
///
/// Stateless after construction; every method is a pure function of its
/// input and can be called concurrently from several threads.
#[derive(Debug, Clone)]
pub struct AnalyticsEngine {
    config: AnalyticsConfig,
    trend: LinearTrend,
    seasonality: AutocorrelationSeasonality,
    outliers: IqrOutlierDetector,
    anomalies: MovingAverageDetector,
    patterns: DirectionalPatternClassifier,
    forecaster: GrowthForecaster,
}

impl AnalyticsEngine {
    /// Create an engine, rejecting invalid configuration.
    pub fn new(config: AnalyticsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: AnalyticsConfig) -> Self {
        Self {
            trend: LinearTrend::new(),
            seasonality: AutocorrelationSeasonality::from_config(&config.seasonality),
            outliers: IqrOutlierDetector::from_config(&config.outlier),
            anomalies: MovingAverageDetector::from_config(&config.anomaly),
            patterns: DirectionalPatternClassifier::from_config(
                &config.pattern,
                &config.seasonality,
            ),
            forecaster: GrowthForecaster::new(),
            config,
        }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn trend(&self, data: &[f64]) -> TrendResult {
        self.trend.estimate_or_default(data)
    }

    pub fn seasonality(&self, data: &[f64]) -> SeasonalityResult {
        self.seasonality.detect_or_default(data)
    }

    pub fn outliers(&self, data: &[f64]) -> OutlierResult {
        self.outliers.detect_or_default(data)
    }

    pub fn anomalies(&self, data: &[f64]) -> AnomalyResult {
        self.anomalies.detect_or_default(data)
    }

    pub fn pattern(&self, data: &[f64]) -> PatternResult {
        self.patterns.classify_or_default(data)
    }

    /// Projection over the configured horizon.
    pub fn forecast(&self, data: &[f64]) -> Series {
        self.forecaster
            .forecast_or_default(data, self.config.forecast.horizon)
    }

    /// Moving average over the configured window.
    pub fn moving_average(&self, data: &[f64]) -> Series {
        moving_average(data, self.config.anomaly.window)
    }

    /// Correlation matrix of the set, classified by sign and strength.
    pub fn correlations(&self, metrics: &MetricSet) -> CorrelationSummary {
        let matrix = correlation_matrix(metrics);
        classify(&matrix, self.config.correlation.strong_threshold)
    }

    /// Composite report over every metric in the set.
    pub fn aggregate(&self, metrics: &MetricSet) -> AggregateReport {
        debug!(metrics = metrics.len(), "aggregating metric set");

        let mut trends = TrendsSection::default();
        let mut anomalies = AnomaliesSection::default();

        for (name, data) in metrics.iter().filter(|(_, data)| !data.is_empty()) {
            trace!(
                metric = name,
                len = data.len(),
                seasonal_tested = data.len() >= self.config.seasonality.min_len,
                anomaly_tested = data.len() >= self.anomalies.min_len(),
                "analysing metric"
            );
            trends.trends.insert(name.to_string(), self.trend(data));
            trends
                .seasonality
                .insert(name.to_string(), self.seasonality(data));
            anomalies
                .anomalies
                .insert(name.to_string(), self.anomalies(data));
            anomalies
                .outliers
                .insert(name.to_string(), self.outliers(data));
            anomalies
                .patterns
                .insert(name.to_string(), self.pattern(data));
        }

        let mut matrix = correlation_matrix(metrics);
        // empty series carry no pairs
        matrix.retain(|a, b| trends.trends.contains_key(a) && trends.trends.contains_key(b));
        trends.correlations = matrix.symmetric();
        let correlations = classify(&matrix, self.config.correlation.strong_threshold);

        debug!(
            pairs = matrix.len(),
            strong = correlations.strong.values().map(BTreeMap::len).sum::<usize>(),
            "aggregation complete"
        );

        AggregateReport {
            trends,
            anomalies,
            correlations,
        }
    }

    /// Moving average and projection for every metric in the set.
    pub fn process_time_series(&self, metrics: &MetricSet) -> TimeSeriesReport {
        let mut report = TimeSeriesReport::default();
        for (name, data) in metrics.iter() {
            report
                .time_series_data
                .insert(name.to_string(), data.to_vec());
            report
                .moving_averages
                .insert(name.to_string(), self.moving_average(data));
            report
                .forecasts
                .insert(name.to_string(), self.forecast(data));
        }
        report
    }
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self::from_valid(AnalyticsConfig::default())
    }
}
