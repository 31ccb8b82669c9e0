//! Estimator trait definitions.

use crate::error::Result;
use crate::model::{Series, TrendResult};

/// Trend estimation over the series index.
pub trait TrendEstimator: Send + Sync {
    /// Fit a trend to the series.
    fn estimate(&self, data: &[f64]) -> Result<TrendResult>;

    /// Like [`estimate`](Self::estimate), reporting a flat zero trend for short input.
    fn estimate_or_default(&self, data: &[f64]) -> TrendResult {
        self.estimate(data).unwrap_or_default()
    }
}

/// Projection of future values.
pub trait Forecaster: Send + Sync {
    /// Project `horizon` points past the end of the series.
    fn forecast(&self, data: &[f64], horizon: usize) -> Result<Series>;

    /// Like [`forecast`](Self::forecast), reporting an empty projection for short input.
    fn forecast_or_default(&self, data: &[f64], horizon: usize) -> Series {
        self.forecast(data, horizon).unwrap_or_default()
    }
}
