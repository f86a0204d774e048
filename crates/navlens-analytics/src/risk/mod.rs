//! Value at Risk (VaR) and Conditional VaR from historical returns.
//!
//! VaR is the `(1 - confidence)` quantile of the empirical return
//! distribution; CVaR is the mean of the tail at or below VaR. Both are
//! expressed in the same percentage units as the input returns.

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::stats;

/// Historical VaR / CVaR pair for one returns series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Value-at-Risk, in percentage-return units.
    pub var: f64,
    /// Conditional VaR (expected tail loss), in percentage-return units.
    /// Always `<= var`.
    pub cvar: f64,
    /// Confidence level used (e.g., 0.95 for 95%).
    pub confidence_level: f64,
}

impl std::fmt::Display for RiskMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "VaR({:.0}%): {:.2}%, CVaR: {:.2}%",
            self.confidence_level * 100.0,
            self.var,
            self.cvar
        )
    }
}

/// Calculate historical VaR and CVaR from a series of returns.
///
/// Non-finite (undefined) return values are excluded before computation.
/// VaR uses the linear-interpolation quantile estimator on the ascending
/// sort; CVaR averages every return at or below VaR.
///
/// # Arguments
///
/// * `returns` - Historical percentage returns (e.g., -1.0 for -1%)
/// * `confidence_level` - Confidence level (e.g., 0.95 for 95%)
///
/// # Errors
///
/// - `AnalyticsError::InsufficientData` if fewer than 2 valid returns remain
/// - `AnalyticsError::InvalidInput` if the confidence level is outside (0, 1)
pub fn historical_var_cvar(
    returns: &[f64],
    confidence_level: f64,
) -> AnalyticsResult<RiskMetrics> {
    if confidence_level <= 0.0 || confidence_level >= 1.0 {
        return Err(AnalyticsError::invalid_input(
            "confidence level must be between 0 and 1",
        ));
    }

    let mut valid = stats::finite_values(returns);
    if valid.len() < 2 {
        return Err(AnalyticsError::insufficient_data(2, valid.len()));
    }

    valid.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let var = stats::quantile_sorted(&valid, 1.0 - confidence_level)?;

    // The sample minimum is <= any quantile, so the tail is never empty.
    let tail: Vec<f64> = valid.iter().copied().filter(|r| *r <= var).collect();
    let cvar = stats::mean(&tail)?;

    Ok(RiskMetrics {
        var,
        cvar,
        confidence_level,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_historical_var_cvar() {
        let returns: Vec<f64> = vec![
            -2.0, -1.5, -1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 2.0, 2.5,
        ];

        let metrics = historical_var_cvar(&returns, 0.95).unwrap();

        // h = 9 * 0.05 = 0.45 between -2.0 and -1.5
        assert_relative_eq!(metrics.var, -1.775, epsilon = 1e-12);
        // Tail at or below -1.775 is just {-2.0}
        assert_relative_eq!(metrics.cvar, -2.0);
        assert!(metrics.cvar <= metrics.var);
    }

    #[test]
    fn test_undefined_returns_excluded() {
        let returns = vec![f64::NAN, -2.0, -1.0, 0.0, 1.0];
        let metrics = historical_var_cvar(&returns, 0.95).unwrap();
        assert!(metrics.var.is_finite());
        assert!(metrics.cvar.is_finite());
    }

    #[test]
    fn test_too_few_returns() {
        assert_eq!(
            historical_var_cvar(&[0.5], 0.95).unwrap_err(),
            AnalyticsError::insufficient_data(2, 1)
        );
        assert_eq!(
            historical_var_cvar(&[0.5, f64::NAN], 0.95).unwrap_err(),
            AnalyticsError::insufficient_data(2, 1)
        );
    }

    #[test]
    fn test_invalid_confidence_level() {
        for level in [0.0, 1.0, -0.5, 2.0] {
            assert!(matches!(
                historical_var_cvar(&[0.1, 0.2], level).unwrap_err(),
                AnalyticsError::InvalidInput(_)
            ));
        }
    }

    #[test]
    fn test_display() {
        let metrics = RiskMetrics {
            var: -1.25,
            cvar: -2.5,
            confidence_level: 0.95,
        };
        assert_eq!(metrics.to_string(), "VaR(95%): -1.25%, CVaR: -2.50%");
    }

    proptest! {
        #[test]
        fn prop_cvar_never_exceeds_var(
            returns in proptest::collection::vec(-50.0f64..50.0, 2..200),
            confidence in 0.01f64..0.99,
        ) {
            let metrics = historical_var_cvar(&returns, confidence).unwrap();
            prop_assert!(metrics.cvar <= metrics.var + 1e-9);
        }
    }
}
