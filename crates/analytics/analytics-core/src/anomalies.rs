//! Moving-average anomaly detection.

use analytics_api::AnomalyConfig;
use analytics_spi::{AnalyticsError, Anomaly, AnomalyDetector, AnomalyResult, Result};

use crate::descriptive;

/// Trailing moving average.
///
/// Position `i` averages the up-to-`window` values ending at `i`; the window
/// shrinks at the start instead of padding. Empty when `window` is zero.
pub fn moving_average(data: &[f64], window: usize) -> Vec<f64> {
    if window == 0 {
        return Vec::new();
    }
    (0..data.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            descriptive::mean(&data[start..=i])
        })
        .collect()
}

/// Flags points whose residual from the trailing moving average exceeds
/// `sigma` residual standard deviations.
///
/// Residuals are only taken once the window is full (index `window - 1`
/// onward).
#[derive(Debug, Clone)]
pub struct MovingAverageDetector {
    window: usize,
    sigma: f64,
}

impl MovingAverageDetector {
    pub fn new(window: usize, sigma: f64) -> Self {
        Self {
            window: window.max(1),
            sigma,
        }
    }

    /// Create from configuration.
    pub fn from_config(config: &AnomalyConfig) -> Self {
        Self::new(config.window, config.sigma)
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl Default for MovingAverageDetector {
    fn default() -> Self {
        Self::from_config(&AnomalyConfig::default())
    }
}

impl AnomalyDetector for MovingAverageDetector {
    fn detect(&self, data: &[f64]) -> Result<AnomalyResult> {
        if data.len() < self.window {
            return Err(AnalyticsError::insufficient(self.window, data.len()));
        }

        let ma = moving_average(data, self.window);
        let start = self.window - 1;
        let residuals: Vec<f64> = data[start..]
            .iter()
            .zip(&ma[start..])
            .map(|(x, avg)| descriptive::saturate(x - avg))
            .collect();

        let spread = descriptive::std_dev(&residuals);
        let scale = residuals.iter().fold(1.0_f64, |acc, r| acc.max(r.abs()));
        // a flat residual band carries no information about outliers
        if spread <= f64::EPSILON * scale {
            return Ok(AnomalyResult::new(Vec::new(), ma));
        }

        let threshold = self.sigma * spread;
        let anomalies = residuals
            .iter()
            .enumerate()
            .filter(|&(_, r)| r.abs() > threshold)
            .map(|(offset, r)| {
                let index = start + offset;
                Anomaly {
                    value: data[index],
                    index,
                    deviation: r.abs() / spread,
                }
            })
            .collect();

        Ok(AnomalyResult::new(anomalies, ma))
    }

    fn min_len(&self) -> usize {
        self.window
    }
}

/// Anomalies against a trailing moving average of `window` points, 2 sigma.
///
/// Empty result (including an empty moving average) when the series is
/// shorter than the window.
pub fn anomalies(data: &[f64], window: usize) -> AnomalyResult {
    MovingAverageDetector::new(window, 2.0).detect_or_default(data)
}

/// Anomalies reporting short input as an error.
pub fn try_anomalies(data: &[f64], window: usize) -> Result<AnomalyResult> {
    MovingAverageDetector::new(window, 2.0).detect(data)
}
