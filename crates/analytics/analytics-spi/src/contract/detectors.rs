//! Detector trait definitions.

use crate::error::Result;
use crate::model::{AnomalyResult, OutlierResult, PatternResult, SeasonalityResult};

/// Seasonality detection over a single series.
pub trait SeasonalityDetector: Send + Sync {
    /// Detect the dominant period of the series.
    fn detect(&self, data: &[f64]) -> Result<SeasonalityResult>;

    /// Like [`detect`](Self::detect), reporting "no seasonality" for short input.
    fn detect_or_default(&self, data: &[f64]) -> SeasonalityResult {
        self.detect(data).unwrap_or_default()
    }
}

/// Outlier detection over a static array.
pub trait OutlierDetector: Send + Sync {
    /// Find values outside the detector's fences.
    fn detect(&self, data: &[f64]) -> Result<OutlierResult>;

    /// Like [`detect`](Self::detect), reporting an empty result for short input.
    fn detect_or_default(&self, data: &[f64]) -> OutlierResult {
        self.detect(data).unwrap_or_default()
    }
}

/// Anomaly detection relative to a smoothed baseline.
pub trait AnomalyDetector: Send + Sync {
    /// Find points that stray too far from the baseline.
    fn detect(&self, data: &[f64]) -> Result<AnomalyResult>;

    /// Like [`detect`](Self::detect), reporting an empty result for short input.
    fn detect_or_default(&self, data: &[f64]) -> AnomalyResult {
        self.detect(data).unwrap_or_default()
    }

    /// Minimum number of points the detector needs.
    fn min_len(&self) -> usize;
}

/// Qualitative shape classification.
pub trait PatternClassifier: Send + Sync {
    /// Label the series as increasing, decreasing or cyclic.
    fn classify(&self, data: &[f64]) -> Result<PatternResult>;

    /// Like [`classify`](Self::classify), reporting "no pattern" for short input.
    fn classify_or_default(&self, data: &[f64]) -> PatternResult {
        self.classify(data).unwrap_or_default()
    }
}
