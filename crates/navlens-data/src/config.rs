//! Configuration for the fund data store.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for a [`FundStore`](crate::store::FundStore).
///
/// Replaces implicit globals (source path, fund name list) with an explicit
/// object handed to the store at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding one CSV sheet per fund.
    pub data_dir: PathBuf,

    /// Fund identifiers the store serves. A fund maps to the sheet
    /// `<data_dir>/<fund>.csv`.
    pub funds: Vec<String>,
}

impl DataConfig {
    /// Creates a config rooted at the given data directory with no funds.
    #[must_use]
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            funds: Vec::new(),
        }
    }

    /// Sets the fund identifier list.
    #[must_use]
    pub fn with_funds<I, S>(mut self, funds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.funds = funds.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the given fund identifier is configured.
    #[must_use]
    pub fn contains(&self, fund: &str) -> bool {
        self.funds.iter().any(|f| f == fund)
    }

    /// Path of the sheet backing the given fund.
    #[must_use]
    pub fn sheet_path(&self, fund: &str) -> PathBuf {
        self.data_dir.join(format!("{fund}.csv"))
    }
}
