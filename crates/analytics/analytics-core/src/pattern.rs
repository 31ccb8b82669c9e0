//! Qualitative pattern classification.

use analytics_api::{PatternConfig, SeasonalityConfig};
use analytics_spi::{
    AnalyticsError, PatternClassifier, PatternResult, PatternType, Result, SeasonalityDetector,
};

use crate::seasonality::AutocorrelationSeasonality;

const MIN_LEN: usize = 4;

/// Labels a series from its seasonality and the direction of adjacent steps.
///
/// First match wins: a strong seasonal signal is cyclic, then a dominant
/// share of rising steps is increasing, then falling steps is decreasing.
#[derive(Debug, Clone)]
pub struct DirectionalPatternClassifier {
    seasonality: AutocorrelationSeasonality,
    threshold: f64,
}

impl DirectionalPatternClassifier {
    pub fn new(seasonality: AutocorrelationSeasonality, threshold: f64) -> Self {
        Self {
            seasonality,
            threshold,
        }
    }

    /// Create from configuration.
    pub fn from_config(pattern: &PatternConfig, seasonality: &SeasonalityConfig) -> Self {
        Self::new(
            AutocorrelationSeasonality::from_config(seasonality),
            pattern.threshold,
        )
    }
}

impl Default for DirectionalPatternClassifier {
    fn default() -> Self {
        Self::from_config(&PatternConfig::default(), &SeasonalityConfig::default())
    }
}

impl PatternClassifier for DirectionalPatternClassifier {
    fn classify(&self, data: &[f64]) -> Result<PatternResult> {
        if data.len() < MIN_LEN {
            return Err(AnalyticsError::insufficient(MIN_LEN, data.len()));
        }

        let steps = (data.len() - 1) as f64;
        let (rising, falling) = data.windows(2).fold((0usize, 0usize), |(up, down), w| {
            if w[1] > w[0] {
                (up + 1, down)
            } else if w[1] < w[0] {
                (up, down + 1)
            } else {
                (up, down)
            }
        });
        let increasing = rising as f64 / steps;
        let decreasing = falling as f64 / steps;

        let seasonal = self.seasonality.detect_or_default(data);

        let result = if seasonal.has_seasonality && seasonal.strength > self.threshold {
            PatternResult::detected(PatternType::Cyclic, seasonal.strength)
        } else if increasing > self.threshold {
            PatternResult::detected(PatternType::Increasing, increasing)
        } else if decreasing > self.threshold {
            PatternResult::detected(PatternType::Decreasing, decreasing)
        } else {
            PatternResult::none()
        };
        Ok(result)
    }
}

/// Pattern with default thresholds; "no pattern" for fewer than four points.
pub fn classify_pattern(data: &[f64]) -> PatternResult {
    DirectionalPatternClassifier::default().classify_or_default(data)
}

/// Pattern reporting short input as an error.
pub fn try_classify_pattern(data: &[f64]) -> Result<PatternResult> {
    DirectionalPatternClassifier::default().classify(data)
}
