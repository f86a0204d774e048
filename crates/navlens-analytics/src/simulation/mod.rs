//! Monte Carlo NAV path simulation.
//!
//! Generates independent future price paths from the empirical mean and
//! standard deviation of historical returns, using a discrete-time
//! geometric process: `price[t+1] = price[t] * exp(drift + vol * Z)` with
//! `Z ~ N(0, 1)` drawn independently per step and per path.
//!
//! The result is the raw set of paths; percentile bands, fan charts and
//! other aggregations are left to downstream consumers.

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

use navlens_core::{Date, FundSeries};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::stats;

/// Configuration for Monte Carlo path simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of future daily steps per path.
    pub days: usize,
    /// Number of independent paths.
    pub paths: usize,
    /// Seed for reproducibility. `None` draws a base seed from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: 180,
            paths: 1000,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of future steps.
    #[must_use]
    pub fn with_days(mut self, days: usize) -> Self {
        self.days = days;
        self
    }

    /// Sets the number of paths.
    #[must_use]
    pub fn with_paths(mut self, paths: usize) -> Self {
        self.paths = paths;
        self
    }

    /// Fixes the base seed for deterministic output.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A set of independently simulated NAV paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationBundle {
    /// Date of the last observed NAV, the origin of every path.
    pub start_date: Date,
    /// Last observed NAV; element 0 of every path.
    pub start_nav: f64,
    /// Per-step drift actually used, in fractional units.
    pub drift: f64,
    /// Per-step volatility actually used, in fractional units.
    pub volatility: f64,
    /// Simulated paths, each of length `days + 1`.
    pub paths: Vec<Vec<f64>>,
}

impl SimulationBundle {
    /// Number of simulated paths.
    #[must_use]
    pub fn num_paths(&self) -> usize {
        self.paths.len()
    }

    /// Number of future steps per path.
    #[must_use]
    pub fn days(&self) -> usize {
        self.paths.first().map_or(0, |p| p.len() - 1)
    }
}

/// Simulates Monte Carlo NAV paths for a fund.
///
/// Drift and volatility are the mean and population standard deviation of
/// the historical percentage returns, divided by 100 into fractional
/// units. Every path starts at the last observed NAV.
///
/// Per-path generators are derived deterministically from the base seed,
/// so a seeded bundle is reproducible regardless of scheduling; with the
/// `parallel` feature paths are generated on the rayon pool with
/// identical output.
///
/// # Errors
///
/// - `AnalyticsError::InsufficientData` if fewer than 2 finite returns
///   are available to estimate the moments
/// - `AnalyticsError::InvalidInput` if `days` or `paths` is zero
pub fn simulate_paths(
    series: &FundSeries,
    config: &SimulationConfig,
) -> AnalyticsResult<SimulationBundle> {
    if config.days == 0 || config.paths == 0 {
        return Err(AnalyticsError::invalid_input(
            "simulation needs at least 1 day and 1 path",
        ));
    }

    let returns = stats::finite_values(&series.returns());
    if returns.len() < 2 {
        return Err(AnalyticsError::insufficient_data(2, returns.len()));
    }

    // Percentage returns to fractional drift/volatility.
    let drift = stats::mean(&returns)? / 100.0;
    let volatility = stats::population_std_dev(&returns)? / 100.0;

    let base_seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let start = series.last();

    debug!(
        "simulating {} paths x {} days for '{}' (drift {:.6}, vol {:.6})",
        config.paths,
        config.days,
        series.fund(),
        drift,
        volatility
    );

    let seeds: Vec<u64> = (0..config.paths)
        .map(|i| base_seed.wrapping_add(i as u64))
        .collect();

    let generate = |seed: u64| -> Vec<f64> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut path = Vec::with_capacity(config.days + 1);
        let mut price = start.nav;
        path.push(price);
        for _ in 0..config.days {
            let z: f64 = rng.sample(StandardNormal);
            price *= (drift + volatility * z).exp();
            path.push(price);
        }
        path
    };

    #[cfg(feature = "parallel")]
    let paths: Vec<Vec<f64>> = {
        use rayon::prelude::*;
        seeds.into_par_iter().map(generate).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let paths: Vec<Vec<f64>> = seeds.into_iter().map(generate).collect();

    Ok(SimulationBundle {
        start_date: start.date,
        start_nav: start.nav,
        drift,
        volatility,
        paths,
    })
}
