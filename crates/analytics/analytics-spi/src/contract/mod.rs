//! Trait contracts for the analytics engine.
//!
//! Each detector has a checked method that reports short input as
//! `AnalyticsError::InsufficientData`, and a provided lenient method that
//! substitutes the documented default.

mod detectors;
mod estimators;

pub use detectors::{AnomalyDetector, OutlierDetector, PatternClassifier, SeasonalityDetector};
pub use estimators::{Forecaster, TrendEstimator};
