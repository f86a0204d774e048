//! # Navlens Service
//!
//! Stateless analysis façade over the Navlens data store and analytics
//! engine: one synchronous function per analysis type, plain data records
//! out, ready for whatever front end renders them.
//!
//! Every call loads the fund series fresh from the store and computes from
//! scratch; the service holds no mutable state, so concurrent calls for
//! different (or the same) funds are independent.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use navlens_data::prelude::*;
//! use navlens_service::prelude::*;
//!
//! let store = FundStore::new(DataConfig::new("data/funds").with_funds(["Midcap"]));
//! let service = AnalysisService::new(store, AnalysisConfig::default());
//!
//! let risk = service.risk("Midcap")?;
//! let forecast = service.forecast("Midcap")?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod service;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::AnalysisConfig;
    pub use crate::error::{ServiceError, ServiceResult};
    pub use crate::service::AnalysisService;
}

// Re-export main types at crate root
pub use config::AnalysisConfig;
pub use error::{ServiceError, ServiceResult};
pub use service::AnalysisService;
