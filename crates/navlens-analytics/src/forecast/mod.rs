//! NAV forecasting with confidence bands.
//!
//! The statistical model sits behind the [`ForecastModel`] fit/predict
//! seam; callers configure it through a [`ForecastSpec`] and consume a
//! [`ForecastResult`] of banded points. The bundled implementation is
//! [`SeasonalTrendModel`], a trend + Fourier-seasonality regression.

mod seasonal;

pub use seasonal::SeasonalTrendModel;

use serde::{Deserialize, Serialize};

use navlens_core::{Date, FundSeries};

use crate::error::AnalyticsResult;

/// Days per calendar month used to convert a month horizon to daily steps.
pub const DAYS_PER_MONTH: i64 = 30;

/// Period of the yearly seasonal component, in days.
pub const YEARLY_PERIOD_DAYS: f64 = 365.25;
/// Period of the quarterly seasonal component, in days.
pub const QUARTERLY_PERIOD_DAYS: f64 = 91.25;
/// Period of the weekly seasonal component, in days.
pub const WEEKLY_PERIOD_DAYS: f64 = 7.0;
/// Period of the daily seasonal component, in days.
pub const DAILY_PERIOD_DAYS: f64 = 1.0;

/// Trend growth mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthMode {
    /// Linear trend in time.
    Linear,
    /// No trend; level only.
    Flat,
}

/// How seasonal components combine with the trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeasonalityMode {
    /// Components add to the trend in NAV units.
    Additive,
    /// Components scale the trend; fitted in log space.
    Multiplicative,
}

/// One seasonal component of the forecast model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seasonality {
    /// Component name, for labeling only.
    pub name: String,
    /// Cycle length in days.
    pub period_days: f64,
    /// Number of Fourier harmonics used to represent the cycle.
    pub fourier_order: usize,
}

impl Seasonality {
    /// Creates a named seasonal component.
    #[must_use]
    pub fn new(name: impl Into<String>, period_days: f64, fourier_order: usize) -> Self {
        Self {
            name: name.into(),
            period_days,
            fourier_order,
        }
    }

    /// The quarterly component used for NAV series.
    #[must_use]
    pub fn quarterly() -> Self {
        Self::new("quarterly", QUARTERLY_PERIOD_DAYS, 8)
    }
}

/// Forecast model configuration.
///
/// The default is the NAV-tuned configuration: linear growth,
/// multiplicative seasonality, yearly seasonality on, weekly and daily
/// off, plus a quarterly component of Fourier order 8.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSpec {
    /// Trend growth mode.
    pub growth: GrowthMode,
    /// Seasonal composition mode.
    pub seasonality_mode: SeasonalityMode,
    /// Enable the yearly component (period 365.25 days, order 10).
    pub yearly_seasonality: bool,
    /// Enable the weekly component (period 7 days, order 3).
    pub weekly_seasonality: bool,
    /// Enable the daily component (period 1 day, order 4).
    pub daily_seasonality: bool,
    /// Additional seasonal components.
    pub extra_seasonalities: Vec<Seasonality>,
    /// Confidence level of the prediction band (e.g., 0.95).
    pub confidence_level: f64,
}

impl Default for ForecastSpec {
    fn default() -> Self {
        Self {
            growth: GrowthMode::Linear,
            seasonality_mode: SeasonalityMode::Multiplicative,
            yearly_seasonality: true,
            weekly_seasonality: false,
            daily_seasonality: false,
            extra_seasonalities: vec![Seasonality::quarterly()],
            confidence_level: 0.95,
        }
    }
}

impl ForecastSpec {
    /// Adds a seasonal component.
    #[must_use]
    pub fn with_seasonality(mut self, seasonality: Seasonality) -> Self {
        self.extra_seasonalities.push(seasonality);
        self
    }

    /// Sets the band confidence level.
    #[must_use]
    pub fn with_confidence_level(mut self, level: f64) -> Self {
        self.confidence_level = level;
        self
    }
}

/// One predicted point with its confidence band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Prediction date.
    pub date: Date,
    /// Point prediction.
    pub predicted: f64,
    /// Lower band bound. Always `<= predicted`.
    pub lower: f64,
    /// Upper band bound. Always `>= predicted`.
    pub upper: f64,
}

/// A banded prediction over the historical dates plus a future horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Banded points: all historical dates, then `horizon_days` daily
    /// future steps. Length is history + horizon, with no overlap trim.
    pub points: Vec<ForecastPoint>,
    /// Number of future daily steps at the end of `points`.
    pub horizon_days: usize,
    /// Confidence level of the band.
    pub confidence_level: f64,
}

impl ForecastResult {
    /// Total number of predicted points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the result holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points covering historical dates.
    #[must_use]
    pub fn historical(&self) -> &[ForecastPoint] {
        &self.points[..self.points.len() - self.horizon_days]
    }

    /// The points beyond the last observation.
    #[must_use]
    pub fn future(&self) -> &[ForecastPoint] {
        &self.points[self.points.len() - self.horizon_days..]
    }
}

/// A forecasting capability consumed as fit-then-predict.
///
/// Implementations own their configuration; the adapter drives them with
/// a fund series and a prediction date axis.
pub trait ForecastModel {
    /// Fits the model to a fund's NAV history.
    fn fit(&mut self, series: &FundSeries) -> AnalyticsResult<()>;

    /// Predicts banded values for the given dates.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::ForecastFailed` if called before `fit`.
    fn predict(&self, dates: &[Date]) -> AnalyticsResult<Vec<ForecastPoint>>;
}

/// Forecasts a fund's NAV over its history plus a future horizon.
///
/// Fits the bundled [`SeasonalTrendModel`] under the given spec, then
/// predicts over every historical date followed by `future_months * 30`
/// consecutive daily dates after the last observation.
///
/// # Errors
///
/// - `AnalyticsError::InsufficientData` if the series is shorter than the
///   model's parameter count
/// - `AnalyticsError::InvalidInput` for a malformed spec
/// - `AnalyticsError::ForecastFailed` if the fit degenerates
pub fn forecast_nav(
    series: &FundSeries,
    future_months: u32,
    spec: &ForecastSpec,
) -> AnalyticsResult<ForecastResult> {
    let horizon_days = i64::from(future_months) * DAYS_PER_MONTH;

    let mut model = SeasonalTrendModel::new(spec.clone());
    model.fit(series)?;

    let last = series.last().date;
    let mut dates = series.dates();
    dates.extend((1..=horizon_days).map(|d| last.add_days(d)));

    let points = model.predict(&dates)?;

    Ok(ForecastResult {
        points,
        horizon_days: horizon_days as usize,
        confidence_level: spec.confidence_level,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use navlens_core::NavObservation;

    /// A gently trending, seasonal NAV series spanning `days` days.
    fn seasonal_series(days: i64) -> FundSeries {
        let start = Date::from_ymd(2022, 1, 3).unwrap();
        let observations = (0..days)
            .map(|t| {
                let trend = 100.0 + 0.05 * t as f64;
                let seasonal = 1.0 + 0.02 * (2.0 * std::f64::consts::PI * t as f64 / 91.25).sin();
                NavObservation::new(start.add_days(t), trend * seasonal)
            })
            .collect();
        FundSeries::new("Seasonal Fund", observations).unwrap()
    }

    #[test]
    fn test_default_spec_is_nav_tuned() {
        let spec = ForecastSpec::default();
        assert_eq!(spec.growth, GrowthMode::Linear);
        assert_eq!(spec.seasonality_mode, SeasonalityMode::Multiplicative);
        assert!(spec.yearly_seasonality);
        assert!(!spec.weekly_seasonality);
        assert!(!spec.daily_seasonality);
        assert_eq!(spec.extra_seasonalities.len(), 1);
        let quarterly = &spec.extra_seasonalities[0];
        assert_eq!(quarterly.name, "quarterly");
        assert!((quarterly.period_days - 91.25).abs() < f64::EPSILON);
        assert_eq!(quarterly.fourier_order, 8);
    }

    #[test]
    fn test_forecast_length_is_history_plus_horizon() {
        let series = seasonal_series(900);
        let result = forecast_nav(&series, 6, &ForecastSpec::default()).unwrap();
        assert_eq!(result.len(), 900 + 6 * 30);
        assert_eq!(result.horizon_days, 180);
        assert_eq!(result.historical().len(), 900);
        assert_eq!(result.future().len(), 180);
    }

    #[test]
    fn test_bounds_bracket_prediction_everywhere() {
        let series = seasonal_series(900);
        let result = forecast_nav(&series, 6, &ForecastSpec::default()).unwrap();
        for point in &result.points {
            assert!(point.lower <= point.predicted, "lower bound above point");
            assert!(point.predicted <= point.upper, "upper bound below point");
        }
    }

    #[test]
    fn test_future_dates_are_consecutive_days() {
        let series = seasonal_series(900);
        let result = forecast_nav(&series, 1, &ForecastSpec::default()).unwrap();
        let last_observed = series.last().date;

        let future = result.future();
        assert_eq!(future[0].date, last_observed.add_days(1));
        for pair in future.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, 1);
        }
    }

    #[test]
    fn test_historical_dates_preserved() {
        let series = seasonal_series(900);
        let result = forecast_nav(&series, 1, &ForecastSpec::default()).unwrap();
        let dates = series.dates();
        for (point, date) in result.historical().iter().zip(dates) {
            assert_eq!(point.date, date);
        }
    }

    #[test]
    fn test_zero_horizon() {
        let series = seasonal_series(900);
        let result = forecast_nav(&series, 0, &ForecastSpec::default()).unwrap();
        assert_eq!(result.len(), 900);
        assert!(result.future().is_empty());
    }
}
