//! Error types for fund data loading.

use navlens_core::NavlensError;
use thiserror::Error;

/// A specialized Result type for data loading operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors that can occur while loading fund data.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DataError {
    /// The fund identifier has no corresponding data source.
    #[error("fund not found: {0}")]
    FundNotFound(String),

    /// The sheet could not be read from disk.
    #[error("I/O error reading {path}: {message}")]
    Io {
        /// Path of the sheet that failed to read.
        path: String,
        /// Underlying I/O failure.
        message: String,
    },

    /// A required column is missing from the sheet.
    #[error("missing column '{column}' in sheet '{sheet}'")]
    MissingColumn {
        /// Sheet (fund) name.
        sheet: String,
        /// Canonical name of the missing column.
        column: String,
    },

    /// A cell or row could not be parsed.
    #[error("parse error in sheet '{sheet}': {reason}")]
    Parse {
        /// Sheet (fund) name.
        sheet: String,
        /// Description of the malformed content.
        reason: String,
    },
}

impl DataError {
    /// Creates a parse error for the given sheet.
    #[must_use]
    pub fn parse(sheet: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            sheet: sheet.into(),
            reason: reason.into(),
        }
    }

    /// Creates a missing column error for the given sheet.
    #[must_use]
    pub fn missing_column(sheet: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            sheet: sheet.into(),
            column: column.into(),
        }
    }

    /// Wraps a core validation failure as a parse error for the given sheet.
    #[must_use]
    pub fn from_core(sheet: impl Into<String>, err: &NavlensError) -> Self {
        Self::Parse {
            sheet: sheet.into(),
            reason: err.to_string(),
        }
    }
}
