//! Autocorrelation-based seasonality detection.

use analytics_api::SeasonalityConfig;
use analytics_spi::{AnalyticsError, Result, SeasonalityDetector, SeasonalityResult};

use crate::descriptive::{mean, rescaled};

/// Seasonality detector that picks the lag with the highest autocorrelation.
///
/// Candidate lags are `1..=min(max_lag, n / 2)`. Series shorter than
/// `min_len` are not tested.
#[derive(Debug, Clone)]
pub struct AutocorrelationSeasonality {
    min_len: usize,
    max_lag: usize,
    threshold: f64,
}

impl AutocorrelationSeasonality {
    pub fn new(min_len: usize, max_lag: usize, threshold: f64) -> Self {
        Self {
            min_len,
            max_lag,
            threshold,
        }
    }

    /// Create from configuration.
    pub fn from_config(config: &SeasonalityConfig) -> Self {
        Self::new(config.min_len, config.max_lag, config.threshold)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for AutocorrelationSeasonality {
    fn default() -> Self {
        Self::from_config(&SeasonalityConfig::default())
    }
}

impl SeasonalityDetector for AutocorrelationSeasonality {
    fn detect(&self, data: &[f64]) -> Result<SeasonalityResult> {
        let n = data.len();
        if n < self.min_len {
            return Err(AnalyticsError::insufficient(self.min_len, n));
        }

        let centered = centered(data);

        // strict comparison keeps the smallest lag on ties
        let mut best_period = 1;
        let mut best_value = 0.0;
        for lag in 1..=self.max_lag.min(n / 2) {
            let value = lagged_autocorrelation(&centered, lag);
            if value > best_value {
                best_value = value;
                best_period = lag;
            }
        }

        let strength = best_value.abs();
        Ok(SeasonalityResult {
            has_seasonality: strength > self.threshold,
            period: Some(best_period),
            strength,
        })
    }
}

/// `sum(x[i] * x[i + lag]) / sum(x[i]^2)` over the overlapping range of an
/// already centred series. `0.0` when the denominator vanishes.
fn lagged_autocorrelation(centered: &[f64], lag: usize) -> f64 {
    if lag >= centered.len() {
        return 0.0;
    }
    let overlap = centered.len() - lag;
    let numerator: f64 = centered[..overlap]
        .iter()
        .zip(&centered[lag..])
        .map(|(a, b)| a * b)
        .sum();
    let denominator: f64 = centered[..overlap].iter().map(|a| a * a).sum();
    let value = numerator / denominator;
    if denominator == 0.0 || !value.is_finite() {
        0.0
    } else {
        value
    }
}

/// Demeaned copy, rescaled first when products could overflow.
fn centered(data: &[f64]) -> Vec<f64> {
    let (data, _) = rescaled(data);
    let m = mean(&data);
    data.iter().map(|x| x - m).collect()
}

/// Autocorrelation of `data` at a single lag, computed on the demeaned series.
pub fn autocorrelation(data: &[f64], lag: usize) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    lagged_autocorrelation(&centered(data), lag)
}

/// Seasonality with default thresholds; "none" for series shorter than 24.
pub fn seasonality(data: &[f64]) -> SeasonalityResult {
    AutocorrelationSeasonality::default().detect_or_default(data)
}

/// Seasonality reporting short input as an error.
pub fn try_seasonality(data: &[f64]) -> Result<SeasonalityResult> {
    AutocorrelationSeasonality::default().detect(data)
}
