//! The stateless analysis service.

use log::debug;

use navlens_analytics::backtest::{backtest_both, BacktestSummary};
use navlens_analytics::forecast::{forecast_nav, ForecastResult};
use navlens_analytics::risk::{historical_var_cvar, RiskMetrics};
use navlens_analytics::simulation::{simulate_paths, SimulationBundle};
use navlens_data::FundStore;

use crate::config::AnalysisConfig;
use crate::error::ServiceResult;

/// One synchronous entry point per analysis type.
///
/// Each method loads the fund's series fresh from the store, runs one
/// computation to completion, and returns the plain data record. Nothing
/// is cached between calls, so the service can be shared freely across
/// threads or requests.
#[derive(Debug, Clone)]
pub struct AnalysisService {
    store: FundStore,
    config: AnalysisConfig,
}

impl AnalysisService {
    /// Creates a service over the given store and configuration.
    #[must_use]
    pub fn new(store: FundStore, config: AnalysisConfig) -> Self {
        Self { store, config }
    }

    /// The underlying fund store.
    #[must_use]
    pub fn store(&self) -> &FundStore {
        &self.store
    }

    /// The service configuration.
    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// NAV forecast over the fund's history plus the configured horizon.
    pub fn forecast(&self, fund: &str) -> ServiceResult<ForecastResult> {
        debug!("forecast requested for '{fund}'");
        let series = self.store.load(fund)?;
        let result = forecast_nav(
            &series,
            self.config.forecast_horizon_months,
            &self.config.forecast_spec(),
        )?;
        Ok(result)
    }

    /// Historical VaR / CVaR of the fund's returns.
    pub fn risk(&self, fund: &str) -> ServiceResult<RiskMetrics> {
        debug!("risk metrics requested for '{fund}'");
        let series = self.store.load(fund)?;
        let metrics = historical_var_cvar(&series.returns(), self.config.confidence_level)?;
        Ok(metrics)
    }

    /// Buy-and-hold and systematic investment terminal values.
    pub fn backtest(&self, fund: &str) -> ServiceResult<BacktestSummary> {
        debug!("backtest requested for '{fund}'");
        let series = self.store.load(fund)?;
        let summary = backtest_both(&series, self.config.investment)?;
        Ok(summary)
    }

    /// Monte Carlo NAV paths from the fund's return moments.
    pub fn simulate(&self, fund: &str) -> ServiceResult<SimulationBundle> {
        debug!("simulation requested for '{fund}'");
        let series = self.store.load(fund)?;
        let bundle = simulate_paths(&series, &self.config.simulation)?;
        Ok(bundle)
    }
}
