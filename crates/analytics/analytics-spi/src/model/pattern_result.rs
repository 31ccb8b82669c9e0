//! Qualitative pattern label.

use serde::{Deserialize, Serialize};

/// Shape of a series as seen by the pattern classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternType {
    Increasing,
    Decreasing,
    Cyclic,
}

impl std::fmt::Display for PatternType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PatternType::Increasing => "increasing",
            PatternType::Decreasing => "decreasing",
            PatternType::Cyclic => "cyclic",
        };
        write!(f, "{}", s)
    }
}

/// Pattern classification result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternResult {
    pub has_pattern: bool,
    pub pattern_type: Option<PatternType>,
    pub confidence: f64,
}

impl PatternResult {
    /// A detected pattern with the given confidence.
    pub fn detected(pattern_type: PatternType, confidence: f64) -> Self {
        Self {
            has_pattern: true,
            pattern_type: Some(pattern_type),
            confidence,
        }
    }

    /// No recognisable pattern.
    pub fn none() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_type_serializes_lowercase() {
        let json = serde_json::to_string(&PatternType::Cyclic).unwrap();
        assert_eq!(json, "\"cyclic\"");
    }

    #[test]
    fn test_pattern_result_field_names() {
        let result = PatternResult::detected(PatternType::Increasing, 0.8);
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["hasPattern"], true);
        assert_eq!(json["patternType"], "increasing");
        assert_eq!(json["confidence"], 0.8);
    }

    #[test]
    fn test_no_pattern_serializes_null_type() {
        let json = serde_json::to_value(PatternResult::none()).unwrap();
        assert_eq!(json["hasPattern"], false);
        assert!(json["patternType"].is_null());
    }
}
