//! IQR outlier detection.

use analytics_api::OutlierConfig;
use analytics_spi::{AnalyticsError, Outlier, OutlierDetector, OutlierResult, Result};

use crate::descriptive::{quartiles, saturate};

/// Minimum series length for quartiles to be meaningful.
const MIN_LEN: usize = 4;

/// Interquartile Range (IQR) outlier detector.
///
/// Fences sit at `Q1 - k * IQR` and `Q3 + k * IQR`, with quartiles taken by
/// nearest rank.
#[derive(Debug, Clone)]
pub struct IqrOutlierDetector {
    multiplier: f64,
}

impl IqrOutlierDetector {
    /// Create a new IQR detector with given multiplier.
    pub fn new(multiplier: f64) -> Self {
        Self { multiplier }
    }

    /// Create from configuration.
    pub fn from_config(config: &OutlierConfig) -> Self {
        Self::new(config.multiplier)
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }
}

impl Default for IqrOutlierDetector {
    fn default() -> Self {
        Self::new(1.5)
    }
}

impl OutlierDetector for IqrOutlierDetector {
    fn detect(&self, data: &[f64]) -> Result<OutlierResult> {
        let (q1, q3) =
            quartiles(data).ok_or_else(|| AnalyticsError::insufficient(MIN_LEN, data.len()))?;

        let iqr = saturate(q3 - q1);
        let lower = saturate(q1 - self.multiplier * iqr);
        let upper = saturate(q3 + self.multiplier * iqr);

        let outliers = data
            .iter()
            .enumerate()
            .filter(|&(_, &x)| x < lower || x > upper)
            .map(|(index, &value)| Outlier { value, index })
            .collect();

        Ok(OutlierResult {
            outliers,
            lower_threshold: lower,
            upper_threshold: upper,
        })
    }
}

/// IQR outliers with the 1.5 multiplier; empty with zero fences when `n < 4`.
pub fn outliers(data: &[f64]) -> OutlierResult {
    IqrOutlierDetector::default().detect_or_default(data)
}

/// IQR outliers reporting short input as an error.
pub fn try_outliers(data: &[f64]) -> Result<OutlierResult> {
    IqrOutlierDetector::default().detect(data)
}
