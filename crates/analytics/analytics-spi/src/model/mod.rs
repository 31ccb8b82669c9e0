//! Data models for the analytics engine.
//!
//! Result types serialise with camelCase field names; downstream chart and
//! table rendering reads those names directly.

mod anomaly_result;
mod correlation;
mod distribution;
mod interval;
mod metric_set;
mod outlier_result;
mod pattern_result;
mod records;
mod seasonality_result;
mod trend_result;

pub use anomaly_result::{Anomaly, AnomalyResult};
pub use correlation::{
    CorrelationMatrix, CorrelationSign, CorrelationSummary, NestedCorrelations,
    StrongCorrelation,
};
pub use distribution::Distribution;
pub use interval::Interval;
pub use metric_set::{MetricSet, RawMetrics, Series};
pub use outlier_result::{Outlier, OutlierResult};
pub use pattern_result::{PatternResult, PatternType};
pub use records::{
    EntiteBusiness, EntiteContact, EntiteProducts, EntityRecord, GroupedValue, LabelRecord,
};
pub use seasonality_result::SeasonalityResult;
pub use trend_result::TrendResult;
