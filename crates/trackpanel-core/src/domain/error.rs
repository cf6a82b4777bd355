//! Domain-level error taxonomy for Trackpanel.

/// Trackpanel report errors.
///
/// Individually malformed reviews are never an error: the normalizer drops
/// them and accounts for the drop. A run only fails when nothing valid is
/// left to aggregate.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Zero valid records survived normalization. Distinct from a valid
    /// report with an empty fix list: a panel with no reviews has no report.
    #[error("insufficient reviews: none of the {submitted} submitted records survived validation")]
    InsufficientReviews { submitted: usize },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for Trackpanel report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_reviews_display() {
        let err = ReportError::InsufficientReviews { submitted: 4 };
        let msg = err.to_string();
        assert!(msg.contains("insufficient reviews"));
        assert!(msg.contains('4'));
    }

    #[test]
    fn test_serialization_error_converts() {
        let bad = serde_json::from_str::<serde_json::Value>("{not json");
        let err: ReportError = bad.unwrap_err().into();
        assert!(err.to_string().contains("serialization error"));
    }
}
