//! IQR outlier result.

use serde::{Deserialize, Serialize};

/// A value outside the IQR fences, with its position in the original series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outlier {
    pub value: f64,
    pub index: usize,
}

/// Outliers of a series together with the fences used to find them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlierResult {
    /// Outliers in original series order.
    pub outliers: Vec<Outlier>,
    pub lower_threshold: f64,
    pub upper_threshold: f64,
}

impl OutlierResult {
    /// Indices of the reported outliers.
    pub fn indices(&self) -> Vec<usize> {
        self.outliers.iter().map(|o| o.index).collect()
    }

    /// Whether any outlier was reported.
    pub fn is_empty(&self) -> bool {
        self.outliers.is_empty()
    }
}
