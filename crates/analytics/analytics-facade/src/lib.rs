//! Analytics Facade
//!
//! Unified re-exports for the analytics engine.
//!
//! This facade provides a single entry point:
//! - Result models, records, `AnalyticsError` and detector traits from SPI
//! - `AnalyticsConfig` and its builder from API
//! - Statistics, detectors, `AnalyticsEngine` and `aggregate` from Core

// Re-export everything from SPI
pub use analytics_spi::*;

// Re-export everything from API
pub use analytics_api::*;

// Re-export everything from Core
pub use analytics_core::*;

/// Common imports for dashboard code.
pub mod prelude {
    pub use analytics_api::prelude::*;
    pub use analytics_core::{aggregate, AggregateReport, AnalyticsEngine, TimeSeriesReport};
    pub use analytics_spi::{
        AnomalyDetector, Forecaster, Interval, MetricSet, OutlierDetector, PatternClassifier,
        SeasonalityDetector, TrendEstimator,
    };
}
