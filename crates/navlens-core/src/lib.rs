//! # Navlens Core
//!
//! Core types and abstractions for the Navlens mutual fund analytics library.
//!
//! This crate provides the foundational building blocks used throughout
//! Navlens:
//!
//! - **Types**: Domain-specific types like [`Date`], [`NavObservation`],
//!   and [`FundSeries`]
//! - **Errors**: Structured error handling via [`NavlensError`]
//!
//! ## Design Philosophy
//!
//! - **Validated Construction**: A `FundSeries` cannot exist with unordered
//!   dates or non-positive NAVs
//! - **Plain Data Out**: Every type serializes with serde so downstream
//!   charting layers stay decoupled
//! - **Explicit Over Implicit**: Clear, self-documenting APIs
//!
//! ## Example
//!
//! ```rust
//! use navlens_core::prelude::*;
//!
//! let series = FundSeries::new(
//!     "Flexi Cap",
//!     vec![
//!         NavObservation::new(Date::from_ymd(2025, 1, 1).unwrap(), 10.0),
//!         NavObservation::new(Date::from_ymd(2025, 1, 2).unwrap(), 10.5),
//!     ],
//! ).unwrap();
//!
//! assert_eq!(series.returns(), vec![5.0]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{NavlensError, NavlensResult};
    pub use crate::types::{Date, FundSeries, NavObservation};
}

// Re-export commonly used types at crate root
pub use error::{NavlensError, NavlensResult};
pub use types::{Date, FundSeries, NavObservation};
