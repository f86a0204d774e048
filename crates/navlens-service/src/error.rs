//! Error type for the analysis service.

use navlens_analytics::AnalyticsError;
use navlens_data::DataError;
use thiserror::Error;

/// A specialized Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the analysis service.
///
/// Wraps the failing layer's error unchanged: unknown funds and malformed
/// sheets come through as [`DataError`], statistical preconditions as
/// [`AnalyticsError`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ServiceError {
    /// Fund data could not be loaded.
    #[error(transparent)]
    Data(DataError),

    /// The analysis itself failed.
    #[error(transparent)]
    Analytics(AnalyticsError),
}

impl From<DataError> for ServiceError {
    fn from(err: DataError) -> Self {
        ServiceError::Data(err)
    }
}

impl From<AnalyticsError> for ServiceError {
    fn from(err: AnalyticsError) -> Self {
        ServiceError::Analytics(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_display_is_transparent() {
        let err: ServiceError = DataError::FundNotFound("Contra".to_string()).into();
        assert_eq!(err.to_string(), "fund not found: Contra");

        let err: ServiceError = AnalyticsError::insufficient_data(2, 0).into();
        assert_eq!(err.to_string(), "insufficient data: need at least 2, got 0");
    }
}
