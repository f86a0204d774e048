//! Fund NAV series and derived returns.

use serde::{Deserialize, Serialize};

use crate::error::{NavlensError, NavlensResult};
use crate::types::Date;

/// A single NAV observation for a fund.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavObservation {
    /// Observation date.
    pub date: Date,
    /// Net asset value on that date. Strictly positive.
    pub nav: f64,
}

impl NavObservation {
    /// Creates a new observation.
    #[must_use]
    pub fn new(date: Date, nav: f64) -> Self {
        Self { date, nav }
    }
}

/// The NAV history of one fund.
///
/// Construction validates the series invariants: at least one observation,
/// dates strictly increasing, every NAV finite and strictly positive.
/// Rows are taken in the order given; the series is never re-sorted.
///
/// # Example
///
/// ```rust
/// use navlens_core::types::{Date, FundSeries, NavObservation};
///
/// let series = FundSeries::new(
///     "Midcap",
///     vec![
///         NavObservation::new(Date::from_ymd(2025, 1, 1).unwrap(), 10.0),
///         NavObservation::new(Date::from_ymd(2025, 1, 2).unwrap(), 12.0),
///     ],
/// ).unwrap();
///
/// assert_eq!(series.len(), 2);
/// assert_eq!(series.returns(), vec![20.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundSeries {
    fund: String,
    observations: Vec<NavObservation>,
}

impl FundSeries {
    /// Creates a validated fund series.
    ///
    /// # Errors
    ///
    /// - `NavlensError::InsufficientData` if `observations` is empty
    /// - `NavlensError::InvalidSeries` if dates are not strictly increasing
    /// - `NavlensError::InvalidNav` if any NAV is non-finite or not positive
    pub fn new(
        fund: impl Into<String>,
        observations: Vec<NavObservation>,
    ) -> NavlensResult<Self> {
        if observations.is_empty() {
            return Err(NavlensError::insufficient_data(1, 0));
        }

        for obs in &observations {
            if !obs.nav.is_finite() || obs.nav <= 0.0 {
                return Err(NavlensError::invalid_nav(
                    obs.nav,
                    format!("NAV on {} must be finite and positive", obs.date),
                ));
            }
        }

        for pair in observations.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(NavlensError::invalid_series(format!(
                    "dates must be strictly increasing: {} then {}",
                    pair[0].date, pair[1].date
                )));
            }
        }

        Ok(Self {
            fund: fund.into(),
            observations,
        })
    }

    /// The fund identifier.
    #[must_use]
    pub fn fund(&self) -> &str {
        &self.fund
    }

    /// All observations in date order.
    #[must_use]
    pub fn observations(&self) -> &[NavObservation] {
        &self.observations
    }

    /// Number of observations. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Always false; kept for API symmetry with slice types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// The earliest observation.
    #[must_use]
    pub fn first(&self) -> &NavObservation {
        &self.observations[0]
    }

    /// The latest observation.
    #[must_use]
    pub fn last(&self) -> &NavObservation {
        &self.observations[self.observations.len() - 1]
    }

    /// The NAV values in date order.
    #[must_use]
    pub fn navs(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.nav).collect()
    }

    /// The observation dates in order.
    #[must_use]
    pub fn dates(&self) -> Vec<Date> {
        self.observations.iter().map(|o| o.date).collect()
    }

    /// Period-over-period percentage returns.
    ///
    /// `returns[i] = (nav[i+1] - nav[i]) / nav[i] * 100`, one element
    /// shorter than the series. The first observation has no return.
    #[must_use]
    pub fn returns(&self) -> Vec<f64> {
        self.observations
            .windows(2)
            .map(|pair| (pair[1].nav - pair[0].nav) / pair[0].nav * 100.0)
            .collect()
    }
}
