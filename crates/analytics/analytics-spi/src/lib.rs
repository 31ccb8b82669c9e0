//! Analytics Service Provider Interface
//!
//! Defines the result models, record schemas, errors and detector traits
//! shared by every layer of the analytics engine.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{
    AnomalyDetector, Forecaster, OutlierDetector, PatternClassifier, SeasonalityDetector,
    TrendEstimator,
};
pub use error::{AnalyticsError, Result};
pub use model::{
    Anomaly, AnomalyResult, CorrelationMatrix, CorrelationSign, CorrelationSummary, Distribution,
    EntiteBusiness, EntiteContact, EntiteProducts, EntityRecord, GroupedValue, Interval, LabelRecord, MetricSet, NestedCorrelations,
    Outlier, OutlierResult, PatternResult, PatternType, RawMetrics, SeasonalityResult, Series,
    StrongCorrelation, TrendResult,
};
