//! Static investment strategy backtests.
//!
//! Two strategies over a fund's NAV history: buy-and-hold of a lump sum,
//! and a systematic investment plan (SIP) contributing a fixed amount at
//! every observation. Both are pure functions of the series and the amount
//! parameter.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use navlens_core::FundSeries;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Backtested strategy identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Single lump-sum investment at the first observation.
    BuyAndHold,
    /// Fixed contribution at every observation.
    SystematicInvestment,
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::BuyAndHold => write!(f, "Buy & Hold"),
            StrategyKind::SystematicInvestment => write!(f, "SIP"),
        }
    }
}

/// Terminal outcome of one backtested strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BacktestReport {
    /// Which strategy produced this report.
    pub strategy: StrategyKind,
    /// Total amount paid in over the series.
    pub invested: Decimal,
    /// Value of the accumulated units at the final NAV.
    pub terminal_value: Decimal,
}

impl BacktestReport {
    /// Terminal value per unit of money invested.
    #[must_use]
    pub fn growth_multiple(&self) -> f64 {
        use rust_decimal::prelude::ToPrimitive;
        let invested = self.invested.to_f64().unwrap_or(f64::NAN);
        let terminal = self.terminal_value.to_f64().unwrap_or(f64::NAN);
        terminal / invested
    }
}

/// Both strategy reports for one fund.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BacktestSummary {
    /// Lump-sum buy-and-hold outcome.
    pub buy_and_hold: BacktestReport,
    /// Systematic investment outcome.
    pub systematic: BacktestReport,
}

fn check_amount(amount: f64, name: &str) -> AnalyticsResult<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(AnalyticsError::invalid_input(format!(
            "{name} must be finite and positive, got {amount}"
        )));
    }
    Ok(())
}

/// Buy-and-hold backtest: invest once at the first NAV, hold to the last.
///
/// Terminal value = `investment * last_nav / first_nav`.
///
/// # Errors
///
/// Returns `AnalyticsError::InvalidInput` for a non-positive investment.
pub fn buy_and_hold(series: &FundSeries, investment: f64) -> AnalyticsResult<BacktestReport> {
    check_amount(investment, "investment")?;

    let terminal = investment * series.last().nav / series.first().nav;

    Ok(BacktestReport {
        strategy: StrategyKind::BuyAndHold,
        invested: Decimal::from_f64_retain(investment).unwrap_or(Decimal::ZERO),
        terminal_value: Decimal::from_f64_retain(terminal).unwrap_or(Decimal::ZERO),
    })
}

/// Systematic investment backtest: a fixed contribution at every observation.
///
/// Units accumulate as `contribution / nav[i]` for each row in sequence;
/// terminal value is total units at the final NAV. Contributions are per
/// observation row, not per calendar month, matching the historical
/// accumulation behavior of the data feeds this library replaces.
///
/// # Errors
///
/// Returns `AnalyticsError::InvalidInput` for a non-positive contribution.
pub fn systematic_investment(
    series: &FundSeries,
    contribution: f64,
) -> AnalyticsResult<BacktestReport> {
    check_amount(contribution, "contribution")?;

    let units: f64 = series
        .observations()
        .iter()
        .map(|obs| contribution / obs.nav)
        .sum();
    let terminal = units * series.last().nav;
    let invested = contribution * series.len() as f64;

    Ok(BacktestReport {
        strategy: StrategyKind::SystematicInvestment,
        invested: Decimal::from_f64_retain(invested).unwrap_or(Decimal::ZERO),
        terminal_value: Decimal::from_f64_retain(terminal).unwrap_or(Decimal::ZERO),
    })
}

/// Runs both strategies with the same amount parameter.
///
/// The amount is the lump sum for buy-and-hold and the per-observation
/// contribution for the systematic plan.
pub fn backtest_both(series: &FundSeries, amount: f64) -> AnalyticsResult<BacktestSummary> {
    Ok(BacktestSummary {
        buy_and_hold: buy_and_hold(series, amount)?,
        systematic: systematic_investment(series, amount)?,
    })
}
