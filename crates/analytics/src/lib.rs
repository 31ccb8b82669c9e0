//! # analytics
//!
//! Business-intelligence analytics for dashboard metric sets.
//! Provides descriptive statistics, correlation, trend and seasonality
//! estimation, outlier and anomaly detection, pattern labels and a naive
//! growth forecast, combined into one aggregate report.

pub use analytics_facade::*;
