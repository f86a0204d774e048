//! Error types for the Navlens core library.
//!
//! This module defines the error types used by the core domain types,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for Navlens core operations.
pub type NavlensResult<T> = Result<T, NavlensError>;

/// The main error type for Navlens core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavlensError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Invalid NAV value.
    #[error("Invalid NAV: {value} - {reason}")]
    InvalidNav {
        /// The offending NAV value.
        value: f64,
        /// Reason for invalidity.
        reason: String,
    },

    /// Invalid series structure (ordering, duplicates).
    #[error("Invalid series: {reason}")]
    InvalidSeries {
        /// Description of the structural problem.
        reason: String,
    },

    /// Insufficient data points for operation.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },
}

impl NavlensError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid NAV error.
    #[must_use]
    pub fn invalid_nav(value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidNav {
            value,
            reason: reason.into(),
        }
    }

    /// Creates an invalid series error.
    #[must_use]
    pub fn invalid_series(reason: impl Into<String>) -> Self {
        Self::InvalidSeries {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NavlensError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_insufficient_data_display() {
        let err = NavlensError::insufficient_data(2, 1);
        assert_eq!(err.to_string(), "Insufficient data: need at least 2, got 1");
    }
}
