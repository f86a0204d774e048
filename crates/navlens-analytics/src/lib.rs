//! # Navlens Analytics
//!
//! Analytics engine for mutual fund NAV series.
//!
//! This crate consolidates the calculation logic of the Navlens library:
//!
//! - **Risk**: Historical Value-at-Risk and Conditional VaR from returns
//! - **Backtests**: Buy-and-hold and systematic investment terminal values
//! - **Simulation**: Monte Carlo NAV paths from empirical return moments
//! - **Forecasting**: Trend + seasonality prediction with confidence bands
//!
//! All entry points are pure functions of a [`FundSeries`](navlens_core::FundSeries)
//! and explicit parameters; results are plain serde-serializable records for
//! downstream charting.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use navlens_analytics::prelude::*;
//!
//! let metrics = historical_var_cvar(&series.returns(), 0.95)?;
//! let summary = backtest_both(&series, 1000.0)?;
//! let bundle = simulate_paths(&series, &SimulationConfig::default().with_seed(7))?;
//! let forecast = forecast_nav(&series, 6, &ForecastSpec::default())?;
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel path generation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]

pub mod backtest;
pub mod error;
pub mod forecast;
pub mod risk;
pub mod simulation;
pub mod stats;

// Re-export the error type
pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::backtest::{
        backtest_both, buy_and_hold, systematic_investment, BacktestReport, BacktestSummary,
        StrategyKind,
    };
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::forecast::{
        forecast_nav, ForecastModel, ForecastPoint, ForecastResult, ForecastSpec, GrowthMode,
        Seasonality, SeasonalityMode, SeasonalTrendModel,
    };
    pub use crate::risk::{historical_var_cvar, RiskMetrics};
    pub use crate::simulation::{simulate_paths, SimulationBundle, SimulationConfig};
}
