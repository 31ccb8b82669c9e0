//! Linear trend result.

use serde::{Deserialize, Serialize};

/// Ordinary-least-squares fit of a series against its index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    /// Change per time bucket.
    pub slope: f64,
    /// Fitted value at index 0.
    pub intercept: f64,
    /// Coefficient of determination, 0 for a constant series.
    pub r2: f64,
}

impl TrendResult {
    /// Create a new trend result.
    pub fn new(slope: f64, intercept: f64, r2: f64) -> Self {
        Self {
            slope,
            intercept,
            r2,
        }
    }

    /// Fitted value at the given index.
    pub fn value_at(&self, index: usize) -> f64 {
        self.intercept + self.slope * index as f64
    }
}
