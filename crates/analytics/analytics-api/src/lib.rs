//! Analytics API
//!
//! Configuration types and builders for the analytics engine.
//!
//! The defaults reproduce the thresholds the dashboards were built against
//! (0.5 seasonality, 0.7 pattern and correlation strength, 2 sigma, 1.5 IQR,
//! 7-point window, 12-point horizon). They are empirical, not derived, and
//! every one of them can be overridden.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use analytics_spi::{AnalyticsError, Result};

// ============================================================================
// Detector Configuration
// ============================================================================

/// Autocorrelation seasonality configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonalityConfig {
    /// Shortest series that is tested at all (default: 24).
    pub min_len: usize,
    /// Largest candidate lag (default: 12).
    pub max_lag: usize,
    /// Autocorrelation above which seasonality is reported (default: 0.5).
    pub threshold: f64,
}

impl Default for SeasonalityConfig {
    fn default() -> Self {
        Self {
            min_len: 24,
            max_lag: 12,
            threshold: 0.5,
        }
    }
}

/// IQR outlier configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlierConfig {
    /// IQR multiplier for the fences (default: 1.5).
    pub multiplier: f64,
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self { multiplier: 1.5 }
    }
}

impl OutlierConfig {
    pub fn new(multiplier: f64) -> Self {
        Self { multiplier }
    }
}

/// Moving-average anomaly configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnomalyConfig {
    /// Trailing window of the moving average (default: 7).
    pub window: usize,
    /// Residual standard deviations beyond which a point is flagged (default: 2.0).
    pub sigma: f64,
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            window: 7,
            sigma: 2.0,
        }
    }
}

impl AnomalyConfig {
    pub fn new(window: usize, sigma: f64) -> Self {
        Self { window, sigma }
    }
}

/// Pattern classifier configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Minimum seasonality strength or directional fraction (default: 0.7).
    pub threshold: f64,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self { threshold: 0.7 }
    }
}

/// Forecast configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Number of projected points (default: 12).
    pub horizon: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self { horizon: 12 }
    }
}

/// Correlation classification configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrelationConfig {
    /// Absolute coefficient at which a pair counts as strong (default: 0.7).
    pub strong_threshold: f64,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            strong_threshold: 0.7,
        }
    }
}

// ============================================================================
// Engine Configuration
// ============================================================================

/// Complete engine configuration. Missing sections fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub seasonality: SeasonalityConfig,
    pub outlier: OutlierConfig,
    pub anomaly: AnomalyConfig,
    pub pattern: PatternConfig,
    pub forecast: ForecastConfig,
    pub correlation: CorrelationConfig,
}

impl AnalyticsConfig {
    /// Start a builder from the defaults.
    pub fn builder() -> AnalyticsConfigBuilder {
        AnalyticsConfigBuilder::new()
    }

    /// Check every parameter, reporting the first invalid one.
    pub fn validate(&self) -> Result<()> {
        check_unit("seasonality.threshold", self.seasonality.threshold)?;
        check_unit("pattern.threshold", self.pattern.threshold)?;
        check_unit("correlation.strong_threshold", self.correlation.strong_threshold)?;
        check_positive("outlier.multiplier", self.outlier.multiplier)?;
        check_positive("anomaly.sigma", self.anomaly.sigma)?;
        if self.seasonality.max_lag == 0 {
            return Err(invalid("seasonality.max_lag", "must be at least 1"));
        }
        if self.seasonality.min_len < 2 {
            return Err(invalid("seasonality.min_len", "must be at least 2"));
        }
        if self.anomaly.window == 0 {
            return Err(invalid("anomaly.window", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(name: &str, reason: &str) -> AnalyticsError {
    AnalyticsError::InvalidParameter {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

fn check_unit(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(name, "must be in range [0, 1]"))
    }
}

fn check_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(name, "must be positive"))
    }
}

/// Builder for [`AnalyticsConfig`].
#[derive(Debug, Default)]
pub struct AnalyticsConfigBuilder {
    config: AnalyticsConfig,
}

impl AnalyticsConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the seasonality threshold.
    pub fn seasonality_threshold(mut self, threshold: f64) -> Self {
        self.config.seasonality.threshold = threshold;
        self
    }

    /// Set the largest candidate seasonal lag.
    pub fn max_lag(mut self, max_lag: usize) -> Self {
        self.config.seasonality.max_lag = max_lag;
        self
    }

    /// Set the shortest series tested for seasonality.
    pub fn seasonality_min_len(mut self, min_len: usize) -> Self {
        self.config.seasonality.min_len = min_len;
        self
    }

    /// Set the IQR multiplier.
    pub fn iqr_multiplier(mut self, multiplier: f64) -> Self {
        self.config.outlier.multiplier = multiplier;
        self
    }

    /// Set the moving-average window.
    pub fn window(mut self, window: usize) -> Self {
        self.config.anomaly.window = window;
        self
    }

    /// Set the anomaly sigma multiplier.
    pub fn sigma(mut self, sigma: f64) -> Self {
        self.config.anomaly.sigma = sigma;
        self
    }

    /// Set the pattern threshold.
    pub fn pattern_threshold(mut self, threshold: f64) -> Self {
        self.config.pattern.threshold = threshold;
        self
    }

    /// Set the forecast horizon.
    pub fn horizon(mut self, horizon: usize) -> Self {
        self.config.forecast.horizon = horizon;
        self
    }

    /// Set the strong-correlation threshold.
    pub fn strong_threshold(mut self, threshold: f64) -> Self {
        self.config.correlation.strong_threshold = threshold;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<AnalyticsConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AnalyticsConfig, AnalyticsConfigBuilder, AnomalyConfig, CorrelationConfig,
        ForecastConfig, OutlierConfig, PatternConfig, SeasonalityConfig,
    };
    pub use analytics_spi::{AnalyticsError, Result};
}
