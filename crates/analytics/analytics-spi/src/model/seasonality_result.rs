//! Seasonality detection result.

use serde::{Deserialize, Serialize};

/// Dominant autocorrelation lag of a series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalityResult {
    pub has_seasonality: bool,
    /// Winning lag, `None` when the series was too short to test.
    pub period: Option<usize>,
    /// Absolute autocorrelation at the winning lag.
    pub strength: f64,
}

impl SeasonalityResult {
    /// Result reported for series shorter than the detection minimum.
    pub fn none() -> Self {
        Self::default()
    }
}
