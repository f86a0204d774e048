//! Error types for the analytics engine.

use navlens_core::NavlensError;
use thiserror::Error;

/// Unified error type for all analytics operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Too few observations for the requested statistic.
    #[error("insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required observations.
        required: usize,
        /// Actual number of observations.
        actual: usize,
    },

    /// Invalid input parameter.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Forecast model fitting or prediction failed.
    #[error("forecast failed: {0}")]
    ForecastFailed(String),

    /// Numerical error (singular system, overflow).
    #[error("math error: {0}")]
    MathError(String),
}

impl AnalyticsError {
    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    /// Creates a forecast failure error.
    #[must_use]
    pub fn forecast_failed(reason: impl Into<String>) -> Self {
        Self::ForecastFailed(reason.into())
    }
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl From<NavlensError> for AnalyticsError {
    fn from(err: NavlensError) -> Self {
        match err {
            NavlensError::InsufficientData { required, actual } => {
                AnalyticsError::InsufficientData { required, actual }
            }
            other => AnalyticsError::InvalidInput(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalyticsError::insufficient_data(2, 1);
        assert_eq!(err.to_string(), "insufficient data: need at least 2, got 1");
    }

    #[test]
    fn test_core_error_conversion() {
        let core = NavlensError::insufficient_data(3, 0);
        let err: AnalyticsError = core.into();
        assert_eq!(err, AnalyticsError::insufficient_data(3, 0));
    }
}
