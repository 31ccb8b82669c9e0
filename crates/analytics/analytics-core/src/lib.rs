//! Analytics Core
//!
//! Implementations of the statistics, detectors and aggregation used by the
//! business-intelligence dashboards. Every function is pure: the same input
//! always produces the same output and nothing is mutated.

pub mod aggregate;
pub mod anomalies;
pub mod correlation;
pub mod descriptive;
pub mod distribution;
pub mod engine;
pub mod forecast;
pub mod outliers;
pub mod pattern;
pub mod scorecard;
pub mod seasonality;
pub mod timeseries;
pub mod trend;

// Re-export SPI traits for implementations
pub use analytics_spi::{
    AnalyticsError, AnomalyDetector, Forecaster, OutlierDetector, PatternClassifier, Result,
    SeasonalityDetector, TrendEstimator,
};

// Re-export main types
pub use aggregate::{aggregate, AggregateReport, AnomaliesSection, TrendsSection};
pub use anomalies::{anomalies, moving_average, try_anomalies, MovingAverageDetector};
pub use correlation::{classify, correlation, correlation_matrix, try_correlation};
pub use descriptive::{growth_rate, mean, median, quartiles, std_dev, variance};
pub use distribution::{
    entity_analytics, group_statistics, sector_analysis, shares, EntityAnalytics,
    GroupStatistics, SectorAnalysis, SectorTrend, Share,
};
pub use engine::AnalyticsEngine;
pub use forecast::{forecast, try_forecast, GrowthForecaster};
pub use outliers::{outliers, try_outliers, IqrOutlierDetector};
pub use pattern::{classify_pattern, try_classify_pattern, DirectionalPatternClassifier};
pub use scorecard::{
    scorecard, ActionItem, ActionItems, KpiStatus, Kpis, Performance, RankedGroup, Rankings,
    Rating, RiskLevel, Scorecard, ScorecardSummary, ScoreGrade,
};
pub use seasonality::{autocorrelation, seasonality, try_seasonality, AutocorrelationSeasonality};
pub use timeseries::{
    bucket_by_interval, creation_key, entity_time_series, interval_key, parse_datetime,
    process_time_series, DatedValue, TimeSeriesReport,
};
pub use trend::{linear_trend, try_linear_trend, LinearTrend};
