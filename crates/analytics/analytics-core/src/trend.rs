//! Linear trend estimation.
//!
//! Fits `y = intercept + slope * t` by ordinary least squares, where `t` is
//! the position in the series.

use analytics_spi::{AnalyticsError, Result, TrendEstimator, TrendResult};

use crate::descriptive::{mean, rescaled, saturate};

/// OLS trend estimator over the series index.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearTrend;

impl LinearTrend {
    pub fn new() -> Self {
        Self
    }
}

impl TrendEstimator for LinearTrend {
    fn estimate(&self, data: &[f64]) -> Result<TrendResult> {
        let n = data.len();
        if n < 2 {
            return Err(AnalyticsError::insufficient(2, n));
        }

        // fit on a rescaled copy when squares could overflow, then scale back
        let (data, scale) = rescaled(data);

        let x_mean = (n - 1) as f64 / 2.0;
        let y_mean = mean(&data);

        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for (i, &y) in data.iter().enumerate() {
            let dx = i as f64 - x_mean;
            numerator += dx * (y - y_mean);
            denominator += dx * dx;
        }

        // n >= 2 keeps the index variance positive
        let slope = numerator / denominator;
        let intercept = y_mean - slope * x_mean;

        let ss_total: f64 = data.iter().map(|y| (y - y_mean).powi(2)).sum();
        let ss_residual: f64 = data
            .iter()
            .enumerate()
            .map(|(i, y)| (y - (slope * i as f64 + intercept)).powi(2))
            .sum();
        let r2 = if ss_total == 0.0 {
            0.0
        } else {
            (1.0 - ss_residual / ss_total).clamp(0.0, 1.0)
        };

        Ok(TrendResult::new(
            saturate(slope * scale),
            saturate(intercept * scale),
            saturate(r2),
        ))
    }
}

/// Linear trend, `{0, 0, 0}` for fewer than two points.
pub fn linear_trend(data: &[f64]) -> TrendResult {
    LinearTrend.estimate_or_default(data)
}

/// Linear trend reporting short input as an error.
pub fn try_linear_trend(data: &[f64]) -> Result<TrendResult> {
    LinearTrend.estimate(data)
}
