//! Configuration surface of the analysis service.

use serde::{Deserialize, Serialize};

use navlens_analytics::forecast::ForecastSpec;
use navlens_analytics::simulation::SimulationConfig;

/// Parameters for every analysis the service runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Confidence level for risk metrics and forecast bands.
    pub confidence_level: f64,

    /// Forecast horizon, in months of 30 daily steps each.
    pub forecast_horizon_months: u32,

    /// Monte Carlo path simulation parameters.
    pub simulation: SimulationConfig,

    /// Lump sum for buy-and-hold and per-observation contribution for the
    /// systematic plan.
    pub investment: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            confidence_level: 0.95,
            forecast_horizon_months: 6,
            simulation: SimulationConfig::default(),
            investment: 1000.0,
        }
    }
}

impl AnalysisConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the confidence level.
    #[must_use]
    pub fn with_confidence_level(mut self, level: f64) -> Self {
        self.confidence_level = level;
        self
    }

    /// Sets the forecast horizon in months.
    #[must_use]
    pub fn with_forecast_horizon_months(mut self, months: u32) -> Self {
        self.forecast_horizon_months = months;
        self
    }

    /// Sets the simulation parameters.
    #[must_use]
    pub fn with_simulation(mut self, simulation: SimulationConfig) -> Self {
        self.simulation = simulation;
        self
    }

    /// Sets the investment amount.
    #[must_use]
    pub fn with_investment(mut self, investment: f64) -> Self {
        self.investment = investment;
        self
    }

    /// The NAV-tuned forecast spec carrying this config's confidence level.
    #[must_use]
    pub fn forecast_spec(&self) -> ForecastSpec {
        ForecastSpec::default().with_confidence_level(self.confidence_level)
    }
}
