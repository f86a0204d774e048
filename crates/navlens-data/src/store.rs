//! File-backed fund store.
//!
//! Each fund is one CSV sheet with at minimum a date column and a NAV
//! column. Header names are trimmed and matched case-insensitively, then
//! mapped to the canonical date/NAV meaning.

use log::debug;

use navlens_core::{Date, FundSeries, NavObservation};

use crate::config::DataConfig;
use crate::error::{DataError, DataResult};

/// Canonical date column name.
const DATE_COLUMN: &str = "Date";
/// Canonical NAV column name.
const NAV_COLUMN: &str = "NAV";

/// Read-only store serving one [`FundSeries`] per configured fund.
///
/// The store holds no row data. Every [`load`](FundStore::load) re-reads
/// the sheet, so repeated loads of an unchanged source yield identical
/// series.
#[derive(Debug, Clone)]
pub struct FundStore {
    config: DataConfig,
}

impl FundStore {
    /// Creates a store over the given configuration.
    #[must_use]
    pub fn new(config: DataConfig) -> Self {
        Self { config }
    }

    /// The configured fund identifiers.
    #[must_use]
    pub fn funds(&self) -> &[String] {
        &self.config.funds
    }

    /// The store configuration.
    #[must_use]
    pub fn config(&self) -> &DataConfig {
        &self.config
    }

    /// Loads the NAV series for one fund.
    ///
    /// # Errors
    ///
    /// - `DataError::FundNotFound` if the fund is not configured or its
    ///   sheet file does not exist
    /// - `DataError::MissingColumn` if the date or NAV column is absent
    /// - `DataError::Parse` if a cell is malformed or the series violates
    ///   ordering/positivity invariants
    /// - `DataError::Io` if the sheet cannot be read
    pub fn load(&self, fund: &str) -> DataResult<FundSeries> {
        if !self.config.contains(fund) {
            return Err(DataError::FundNotFound(fund.to_string()));
        }

        let path = self.config.sheet_path(fund);
        if !path.exists() {
            return Err(DataError::FundNotFound(fund.to_string()));
        }

        let mut reader = csv::Reader::from_path(&path).map_err(|e| DataError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let headers = reader
            .headers()
            .map_err(|e| DataError::parse(fund, e.to_string()))?
            .clone();

        let date_idx = find_column(&headers, DATE_COLUMN)
            .ok_or_else(|| DataError::missing_column(fund, DATE_COLUMN))?;
        let nav_idx = find_column(&headers, NAV_COLUMN)
            .ok_or_else(|| DataError::missing_column(fund, NAV_COLUMN))?;

        let mut observations = Vec::new();
        for (row, result) in reader.records().enumerate() {
            let record = result.map_err(|e| DataError::parse(fund, e.to_string()))?;

            let date_cell = record
                .get(date_idx)
                .ok_or_else(|| DataError::parse(fund, format!("row {row}: missing date cell")))?
                .trim();
            let nav_cell = record
                .get(nav_idx)
                .ok_or_else(|| DataError::parse(fund, format!("row {row}: missing NAV cell")))?
                .trim();

            let date = Date::parse(date_cell)
                .map_err(|e| DataError::parse(fund, format!("row {row}: {e}")))?;
            let nav: f64 = nav_cell.parse().map_err(|_| {
                DataError::parse(fund, format!("row {row}: cannot parse NAV '{nav_cell}'"))
            })?;

            observations.push(NavObservation::new(date, nav));
        }

        debug!("loaded {} rows for fund '{fund}'", observations.len());

        FundSeries::new(fund, observations).map_err(|e| DataError::from_core(fund, &e))
    }
}

/// Finds a column by canonical name, ignoring case and surrounding
/// whitespace.
fn find_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
}
