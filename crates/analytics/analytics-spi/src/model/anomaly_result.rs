//! Moving-average anomaly result.

use serde::{Deserialize, Serialize};

/// A point whose distance from the moving average exceeds the sigma band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub value: f64,
    pub index: usize,
    /// Absolute residual in units of residual standard deviation.
    pub deviation: f64,
}

/// Anomalies of a series and the moving average they were measured against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyResult {
    pub anomalies: Vec<Anomaly>,
    pub moving_average: Vec<f64>,
}

impl AnomalyResult {
    /// Create a new anomaly result.
    pub fn new(anomalies: Vec<Anomaly>, moving_average: Vec<f64>) -> Self {
        Self {
            anomalies,
            moving_average,
        }
    }

    /// Get indices of detected anomalies.
    pub fn anomaly_indices(&self) -> Vec<usize> {
        self.anomalies.iter().map(|a| a.index).collect()
    }

    /// Count of detected anomalies.
    pub fn anomaly_count(&self) -> usize {
        self.anomalies.len()
    }
}
