//! Correlation matrix and its classification.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// `metric -> other metric -> coefficient`.
pub type NestedCorrelations = BTreeMap<String, BTreeMap<String, f64>>;

/// Pearson coefficients for unordered metric pairs.
///
/// Only the upper triangle is stored: each pair is keyed by its
/// lexicographically smaller name first. Lookups are symmetric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrelationMatrix {
    entries: NestedCorrelations,
}

impl CorrelationMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the coefficient for a pair. Self-pairs are ignored.
    pub fn insert(&mut self, a: &str, b: &str, value: f64) {
        if a == b {
            return;
        }
        let (first, second) = if a < b { (a, b) } else { (b, a) };
        self.entries
            .entry(first.to_string())
            .or_default()
            .insert(second.to_string(), value);
    }

    /// Coefficient for a pair in either order.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let (first, second) = if a < b { (a, b) } else { (b, a) };
        self.entries.get(first)?.get(second).copied()
    }

    /// Iterate `(first, second, value)` over the stored triangle.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.entries.iter().flat_map(|(a, row)| {
            row.iter()
                .map(move |(b, &value)| (a.as_str(), b.as_str(), value))
        })
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keep only the pairs for which `keep(first, second)` holds.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str, &str) -> bool,
    {
        for (a, row) in self.entries.iter_mut() {
            row.retain(|b, _| keep(a, b));
        }
        self.entries.retain(|_, row| !row.is_empty());
    }

    /// Both directions of every pair, as a nested map.
    pub fn symmetric(&self) -> NestedCorrelations {
        let mut out = NestedCorrelations::new();
        for (a, b, value) in self.iter() {
            out.entry(a.to_string())
                .or_default()
                .insert(b.to_string(), value);
            out.entry(b.to_string())
                .or_default()
                .insert(a.to_string(), value);
        }
        out
    }
}

/// Direction of a correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationSign {
    Positive,
    Negative,
}

/// A pair whose coefficient reached the strength threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrongCorrelation {
    pub value: f64,
    #[serde(rename = "type")]
    pub sign: CorrelationSign,
    /// Absolute value of the coefficient.
    pub strength: f64,
}

/// Correlations split by sign and strength.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrelationSummary {
    pub positive: NestedCorrelations,
    pub negative: NestedCorrelations,
    pub strong: BTreeMap<String, BTreeMap<String, StrongCorrelation>>,
}
