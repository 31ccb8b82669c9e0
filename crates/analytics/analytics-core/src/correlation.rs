//! Pearson correlation between metrics.

use analytics_spi::{
    AnalyticsError, CorrelationMatrix, CorrelationSign, CorrelationSummary, MetricSet, Result,
    StrongCorrelation,
};
use tracing::debug;

use crate::descriptive::{mean, rescaled};

/// Pearson product-moment correlation.
///
/// Returns `0.0` for mismatched lengths, fewer than two points, or when
/// either input has zero variance.
pub fn correlation(x: &[f64], y: &[f64]) -> f64 {
    try_correlation(x, y).unwrap_or(0.0)
}

/// Pearson correlation reporting length problems as errors.
///
/// Zero variance is not an error: the coefficient is `0.0`.
pub fn try_correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(AnalyticsError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(AnalyticsError::insufficient(2, x.len()));
    }

    // the coefficient is scale invariant
    let (x, _) = rescaled(x);
    let (y, _) = rescaled(y);

    let mean_x = mean(&x);
    let mean_y = mean(&y);

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (xi, yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return Ok(0.0);
    }
    let r = cov / (var_x.sqrt() * var_y.sqrt());
    if r.is_nan() {
        return Ok(0.0);
    }
    // rounding can push a perfect fit a hair past 1
    Ok(r.clamp(-1.0, 1.0))
}

/// Correlation of every unordered metric pair with equal lengths.
///
/// Pairs whose series differ in length are skipped.
pub fn correlation_matrix(metrics: &MetricSet) -> CorrelationMatrix {
    let entries: Vec<(&str, &[f64])> = metrics.iter().collect();
    let mut matrix = CorrelationMatrix::new();

    for (i, (name_a, a)) in entries.iter().enumerate() {
        for (name_b, b) in &entries[i + 1..] {
            if a.len() != b.len() {
                debug!(
                    metric_a = *name_a,
                    metric_b = *name_b,
                    "skipping correlation of series with different lengths"
                );
                continue;
            }
            matrix.insert(name_a, name_b, correlation(a, b));
        }
    }

    matrix
}

/// Split a matrix by sign, and collect pairs with `|r| >= threshold`.
///
/// Exact zeros are neither positive nor negative.
pub fn classify(matrix: &CorrelationMatrix, threshold: f64) -> CorrelationSummary {
    let mut summary = CorrelationSummary::default();

    for (a, b, value) in matrix.iter() {
        if value > 0.0 {
            summary
                .positive
                .entry(a.to_string())
                .or_default()
                .insert(b.to_string(), value);
        } else if value < 0.0 {
            summary
                .negative
                .entry(a.to_string())
                .or_default()
                .insert(b.to_string(), value);
        }

        if value.abs() >= threshold {
            let sign = if value > 0.0 {
                CorrelationSign::Positive
            } else {
                CorrelationSign::Negative
            };
            summary.strong.entry(a.to_string()).or_default().insert(
                b.to_string(),
                StrongCorrelation {
                    value,
                    sign,
                    strength: value.abs(),
                },
            );
        }
    }

    summary
}
