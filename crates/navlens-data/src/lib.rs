//! # Navlens Data
//!
//! Spreadsheet-backed fund data store for the Navlens analytics library.
//!
//! The source is a directory of per-fund sheets, one CSV file per fund,
//! each containing at minimum a date column and a NAV column. Column names
//! are matched case- and whitespace-insensitively against `Date` and `NAV`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use navlens_data::prelude::*;
//!
//! let config = DataConfig::new("data/funds")
//!     .with_funds(["Flexi Cap", "Midcap"]);
//! let store = FundStore::new(config);
//!
//! let series = store.load("Midcap")?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod store;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::DataConfig;
    pub use crate::error::{DataError, DataResult};
    pub use crate::store::FundStore;
}

// Re-export main types at crate root
pub use config::DataConfig;
pub use error::{DataError, DataResult};
pub use store::FundStore;
