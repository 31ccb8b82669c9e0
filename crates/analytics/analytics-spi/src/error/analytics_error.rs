//! Analytics error types.

use thiserror::Error;

/// Analytics engine errors.
///
/// Only the checked operations and the data boundary return these. The
/// lenient operations map `InsufficientData` to their documented defaults.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    #[error("Insufficient data: required {required}, got {got}")]
    InsufficientData { required: usize, got: usize },

    #[error("Length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Non-finite value in metric '{metric}' at index {index}")]
    NonFiniteValue { metric: String, index: usize },

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No entities found")]
    NoEntities,
}

impl AnalyticsError {
    /// Shorthand for an `InsufficientData` error.
    pub fn insufficient(required: usize, got: usize) -> Self {
        Self::InsufficientData { required, got }
    }

    /// Whether this error is the "series too short" case.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData { .. })
    }
}

/// Result type for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_display() {
        let error = AnalyticsError::InsufficientData {
            required: 24,
            got: 10,
        };
        assert_eq!(error.to_string(), "Insufficient data: required 24, got 10");
    }

    #[test]
    fn test_no_entities_display() {
        assert_eq!(AnalyticsError::NoEntities.to_string(), "No entities found");
        assert!(!AnalyticsError::NoEntities.is_insufficient_data());
    }

    #[test]
    fn test_length_mismatch_display() {
        let error = AnalyticsError::LengthMismatch { left: 3, right: 5 };
        assert_eq!(error.to_string(), "Length mismatch: 3 vs 5");
    }

    #[test]
    fn test_non_finite_display() {
        let error = AnalyticsError::NonFiniteValue {
            metric: "sales".to_string(),
            index: 4,
        };
        assert_eq!(
            error.to_string(),
            "Non-finite value in metric 'sales' at index 4"
        );
    }

    #[test]
    fn test_invalid_parameter_display() {
        let error = AnalyticsError::InvalidParameter {
            name: "window".to_string(),
            reason: "must be positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid parameter: window - must be positive"
        );
    }

    #[test]
    fn test_parse_display() {
        let error = AnalyticsError::Parse("bad date".to_string());
        assert_eq!(error.to_string(), "Parse error: bad date");
    }

    #[test]
    fn test_is_insufficient_data() {
        assert!(AnalyticsError::insufficient(4, 3).is_insufficient_data());
        assert!(!AnalyticsError::LengthMismatch { left: 1, right: 2 }.is_insufficient_data());
    }

    #[test]
    fn test_all_error_variants_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnalyticsError>();
    }
}
