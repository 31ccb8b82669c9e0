//! Naive growth projection.
//!
//! This is a placeholder projection for dashboards, not a fitted model: the
//! overall growth rate between the first and last observation is applied
//! linearly to the last value. Do not expect forecasting accuracy from it.

use analytics_spi::{AnalyticsError, Forecaster, Result, Series};

use crate::descriptive::{growth_rate, saturate};

const MIN_LEN: usize = 2;

/// Projects `last * (1 + g / 100 * (k + 1))` for `k` in `0..horizon`, where
/// `g` is the first-to-last growth rate in percent (`0` when the first value
/// is zero).
#[derive(Debug, Clone, Copy, Default)]
pub struct GrowthForecaster;

impl GrowthForecaster {
    pub fn new() -> Self {
        Self
    }
}

impl Forecaster for GrowthForecaster {
    fn forecast(&self, data: &[f64], horizon: usize) -> Result<Series> {
        let last = match data.last() {
            Some(&last) if data.len() >= MIN_LEN => last,
            _ => return Err(AnalyticsError::insufficient(MIN_LEN, data.len())),
        };
        let rate = growth_rate(data) / 100.0;
        Ok((0..horizon)
            .map(|k| saturate(last * (1.0 + rate * (k + 1) as f64)))
            .collect())
    }
}

/// Growth projection of `horizon` points; empty for fewer than two points.
pub fn forecast(data: &[f64], horizon: usize) -> Series {
    GrowthForecaster.forecast_or_default(data, horizon)
}

/// Growth projection reporting short input as an error.
pub fn try_forecast(data: &[f64], horizon: usize) -> Result<Series> {
    GrowthForecaster.forecast(data, horizon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_doubling_series() {
        let projected = forecast(&[10.0, 20.0], 12);
        assert_eq!(projected.len(), 12);
        for (k, value) in projected.iter().enumerate() {
            assert_relative_eq!(*value, 20.0 * (1.0 + 1.0 * (k + 1) as f64));
        }
        assert_eq!(projected[0], 40.0);
        assert_eq!(projected[11], 260.0);
    }

    #[test]
    fn test_zero_first_value_is_flat() {
        assert_eq!(forecast(&[0.0, 5.0], 3), vec![5.0, 5.0, 5.0]);
    }

    #[test]
    fn test_declining_series() {
        let projected = forecast(&[100.0, 90.0, 80.0], 2);
        assert_relative_eq!(projected[0], 64.0, epsilon = 1e-9);
        assert_relative_eq!(projected[1], 48.0, epsilon = 1e-9);
    }

    #[test]
    fn test_short_input() {
        assert!(forecast(&[5.0], 12).is_empty());
        assert_eq!(
            try_forecast(&[], 12),
            Err(AnalyticsError::InsufficientData {
                required: 2,
                got: 0
            })
        );
    }

    #[test]
    fn test_projection_saturates() {
        let projected = forecast(&[1e300, 1e308], 3);
        assert_eq!(projected, vec![f64::MAX; 3]);
    }

    #[test]
    fn test_zero_horizon() {
        assert!(forecast(&[1.0, 2.0], 0).is_empty());
    }
}
