//! Label to count breakdowns.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Count of records per category label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution {
    counts: BTreeMap<String, u64>,
}

impl Distribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// A distribution where every given label starts at zero.
    pub fn with_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            counts: labels.into_iter().map(|l| (l.into(), 0)).collect(),
        }
    }

    /// Count one occurrence of each label.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut distribution = Self::new();
        for label in labels {
            distribution.increment(label);
        }
        distribution
    }

    /// Add one to a label, creating it if needed.
    pub fn increment(&mut self, label: impl Into<String>) {
        *self.counts.entry(label.into()).or_insert(0) += 1;
    }

    pub fn get(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Number of labels, including labels with a zero count.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
