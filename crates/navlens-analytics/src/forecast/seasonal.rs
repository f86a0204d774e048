//! Trend + Fourier-seasonality regression model.

use log::debug;
use nalgebra::{DMatrix, DVector};

use navlens_core::{Date, FundSeries};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::forecast::{
    ForecastModel, ForecastPoint, ForecastSpec, GrowthMode, SeasonalityMode, DAILY_PERIOD_DAYS,
    WEEKLY_PERIOD_DAYS, YEARLY_PERIOD_DAYS,
};

/// Fourier order of the built-in yearly component.
const YEARLY_ORDER: usize = 10;
/// Fourier order of the built-in weekly component.
const WEEKLY_ORDER: usize = 3;
/// Fourier order of the built-in daily component.
const DAILY_ORDER: usize = 4;

/// Z-scores for common confidence levels.
const Z_SCORE_90: f64 = 1.282;
const Z_SCORE_95: f64 = 1.645;
const Z_SCORE_99: f64 = 2.326;

/// Least-squares regression of the series on a trend column and sin/cos
/// pairs per enabled seasonal component.
///
/// Multiplicative mode fits log NAV with additive components and
/// exponentiates predictions back, which keeps band ordering intact.
/// Prediction bands widen with distance past the fitted range using the
/// in-sample residual dispersion.
#[derive(Debug, Clone)]
pub struct SeasonalTrendModel {
    spec: ForecastSpec,
    fitted: Option<Fitted>,
}

#[derive(Debug, Clone)]
struct Fitted {
    /// Date of the first fitted observation; the time origin.
    origin: Date,
    /// Time of the last fitted observation, in days since `origin`.
    t_max: f64,
    coefficients: DVector<f64>,
    /// Residual standard deviation in fit space.
    sigma: f64,
}

impl SeasonalTrendModel {
    /// Creates an unfitted model under the given spec.
    #[must_use]
    pub fn new(spec: ForecastSpec) -> Self {
        Self { spec, fitted: None }
    }

    /// The model configuration.
    #[must_use]
    pub fn spec(&self) -> &ForecastSpec {
        &self.spec
    }

    /// Enabled seasonal components as (period, order) pairs.
    fn components(&self) -> AnalyticsResult<Vec<(f64, usize)>> {
        let mut components = Vec::new();
        if self.spec.yearly_seasonality {
            components.push((YEARLY_PERIOD_DAYS, YEARLY_ORDER));
        }
        if self.spec.weekly_seasonality {
            components.push((WEEKLY_PERIOD_DAYS, WEEKLY_ORDER));
        }
        if self.spec.daily_seasonality {
            components.push((DAILY_PERIOD_DAYS, DAILY_ORDER));
        }
        for extra in &self.spec.extra_seasonalities {
            if !extra.period_days.is_finite() || extra.period_days <= 0.0 {
                return Err(AnalyticsError::invalid_input(format!(
                    "seasonality '{}' period must be positive, got {}",
                    extra.name, extra.period_days
                )));
            }
            if extra.fourier_order == 0 {
                return Err(AnalyticsError::invalid_input(format!(
                    "seasonality '{}' needs at least one harmonic",
                    extra.name
                )));
            }
            components.push((extra.period_days, extra.fourier_order));
        }
        Ok(components)
    }

    /// One design-matrix row for time `t` (days since origin).
    fn features(&self, t: f64, components: &[(f64, usize)]) -> Vec<f64> {
        let mut row = Vec::with_capacity(self.column_count(components));
        row.push(1.0);
        if self.spec.growth == GrowthMode::Linear {
            row.push(t);
        }
        for &(period, order) in components {
            for k in 1..=order {
                let angle = 2.0 * std::f64::consts::PI * k as f64 * t / period;
                row.push(angle.sin());
                row.push(angle.cos());
            }
        }
        row
    }

    fn column_count(&self, components: &[(f64, usize)]) -> usize {
        let trend = match self.spec.growth {
            GrowthMode::Linear => 2,
            GrowthMode::Flat => 1,
        };
        trend + 2 * components.iter().map(|(_, order)| order).sum::<usize>()
    }

    fn in_log_space(&self) -> bool {
        self.spec.seasonality_mode == SeasonalityMode::Multiplicative
    }
}

impl ForecastModel for SeasonalTrendModel {
    fn fit(&mut self, series: &FundSeries) -> AnalyticsResult<()> {
        let confidence = self.spec.confidence_level;
        if confidence <= 0.0 || confidence >= 1.0 {
            return Err(AnalyticsError::invalid_input(
                "confidence level must be between 0 and 1",
            ));
        }

        let components = self.components()?;
        let columns = self.column_count(&components);
        let n = series.len();
        if n <= columns {
            return Err(AnalyticsError::insufficient_data(columns + 1, n));
        }

        let origin = series.first().date;
        let log_space = self.in_log_space();

        let mut rows = Vec::with_capacity(n * columns);
        let mut targets = Vec::with_capacity(n);
        for obs in series.observations() {
            let t = (obs.date - origin) as f64;
            rows.extend_from_slice(&self.features(t, &components));
            // NAV positivity is a series invariant, so ln is total here.
            targets.push(if log_space { obs.nav.ln() } else { obs.nav });
        }

        let x = DMatrix::from_row_slice(n, columns, &rows);
        let y = DVector::from_vec(targets);

        // Normal equations; the design is small (tens of columns).
        let xtx = x.transpose() * &x;
        let xty = x.transpose() * &y;
        let coefficients = xtx
            .lu()
            .solve(&xty)
            .ok_or_else(|| AnalyticsError::forecast_failed("singular design matrix"))?;

        let residuals = &y - &x * &coefficients;
        let mean = residuals.iter().sum::<f64>() / n as f64;
        let variance = residuals.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n as f64;
        let sigma = variance.sqrt();

        debug!(
            "fitted seasonal trend model for '{}': {} columns, sigma {:.6}",
            series.fund(),
            columns,
            sigma
        );

        self.fitted = Some(Fitted {
            origin,
            t_max: (series.last().date - origin) as f64,
            coefficients,
            sigma,
        });
        Ok(())
    }

    fn predict(&self, dates: &[Date]) -> AnalyticsResult<Vec<ForecastPoint>> {
        let fitted = self
            .fitted
            .as_ref()
            .ok_or_else(|| AnalyticsError::forecast_failed("model has not been fitted"))?;

        let components = self.components()?;
        let z = z_score_for_confidence(self.spec.confidence_level);
        let log_space = self.in_log_space();

        let points = dates
            .iter()
            .map(|&date| {
                let t = (date - fitted.origin) as f64;
                let row = self.features(t, &components);
                let estimate: f64 = row
                    .iter()
                    .zip(fitted.coefficients.iter())
                    .map(|(a, b)| a * b)
                    .sum();

                // Band widens with distance past the fitted range.
                let steps_ahead = (t - fitted.t_max).max(0.0);
                let std_error = fitted.sigma * (1.0 + steps_ahead).sqrt();
                let (lower, upper) = (estimate - z * std_error, estimate + z * std_error);

                if log_space {
                    ForecastPoint {
                        date,
                        predicted: estimate.exp(),
                        lower: lower.exp(),
                        upper: upper.exp(),
                    }
                } else {
                    ForecastPoint {
                        date,
                        predicted: estimate,
                        lower,
                        upper,
                    }
                }
            })
            .collect();

        Ok(points)
    }
}

/// Get z-score for a given confidence level.
///
/// Uses linear interpolation for non-standard confidence levels.
fn z_score_for_confidence(confidence: f64) -> f64 {
    match confidence {
        c if (c - 0.90).abs() < 0.001 => Z_SCORE_90,
        c if (c - 0.95).abs() < 0.001 => Z_SCORE_95,
        c if (c - 0.99).abs() < 0.001 => Z_SCORE_99,
        _ => {
            if confidence < 0.95 {
                Z_SCORE_90 + (confidence - 0.90) / (0.95 - 0.90) * (Z_SCORE_95 - Z_SCORE_90)
            } else {
                Z_SCORE_95 + (confidence - 0.95) / (0.99 - 0.95) * (Z_SCORE_99 - Z_SCORE_95)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::Seasonality;
    use approx::assert_relative_eq;
    use navlens_core::NavObservation;

    fn trend_spec(mode: SeasonalityMode) -> ForecastSpec {
        ForecastSpec {
            growth: GrowthMode::Linear,
            seasonality_mode: mode,
            yearly_seasonality: false,
            weekly_seasonality: false,
            daily_seasonality: false,
            extra_seasonalities: vec![],
            confidence_level: 0.95,
        }
    }

    fn series_from_fn(days: i64, f: impl Fn(f64) -> f64) -> FundSeries {
        let start = Date::from_ymd(2023, 1, 2).unwrap();
        let observations = (0..days)
            .map(|t| NavObservation::new(start.add_days(t), f(t as f64)))
            .collect();
        FundSeries::new("Synthetic", observations).unwrap()
    }

    #[test]
    fn test_recovers_linear_trend_exactly() {
        let series = series_from_fn(60, |t| 100.0 + 0.5 * t);
        let mut model = SeasonalTrendModel::new(trend_spec(SeasonalityMode::Additive));
        model.fit(&series).unwrap();

        let origin = series.first().date;
        let points = model.predict(&[origin.add_days(100)]).unwrap();
        assert_relative_eq!(points[0].predicted, 150.0, epsilon = 1e-6);
        // Perfect fit: residual sigma ~ 0, band collapses onto the point.
        assert_relative_eq!(points[0].lower, points[0].predicted, epsilon = 1e-5);
        assert_relative_eq!(points[0].upper, points[0].predicted, epsilon = 1e-5);
    }

    #[test]
    fn test_multiplicative_mode_recovers_exponential_growth() {
        let series = series_from_fn(60, |t| 100.0 * (0.002 * t).exp());
        let mut model = SeasonalTrendModel::new(trend_spec(SeasonalityMode::Multiplicative));
        model.fit(&series).unwrap();

        let origin = series.first().date;
        let points = model.predict(&[origin.add_days(90)]).unwrap();
        assert_relative_eq!(points[0].predicted, 100.0 * (0.18f64).exp(), epsilon = 1e-4);
    }

    #[test]
    fn test_recovers_seasonal_cycle() {
        let period = 91.25;
        let series = series_from_fn(365, |t| {
            10.0 + 0.01 * t + (2.0 * std::f64::consts::PI * t / period).sin()
        });
        let spec = trend_spec(SeasonalityMode::Additive)
            .with_seasonality(Seasonality::new("quarterly", period, 1));
        let mut model = SeasonalTrendModel::new(spec);
        model.fit(&series).unwrap();

        // In-sample predictions should track the cycle closely.
        let points = model.predict(&series.dates()).unwrap();
        for (point, obs) in points.iter().zip(series.observations()) {
            assert_relative_eq!(point.predicted, obs.nav, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_bands_widen_into_the_future() {
        let series = series_from_fn(120, |t| {
            100.0 + 0.3 * t + if t as i64 % 2 == 0 { 0.8 } else { -0.8 }
        });
        let mut model = SeasonalTrendModel::new(trend_spec(SeasonalityMode::Additive));
        model.fit(&series).unwrap();

        let last = series.last().date;
        let points = model.predict(&[last.add_days(1), last.add_days(90)]).unwrap();
        let near_width = points[0].upper - points[0].lower;
        let far_width = points[1].upper - points[1].lower;
        assert!(far_width > near_width);
    }

    #[test]
    fn test_predict_before_fit_fails() {
        let model = SeasonalTrendModel::new(ForecastSpec::default());
        let err = model.predict(&[Date::from_ymd(2025, 1, 1).unwrap()]).unwrap_err();
        assert!(matches!(err, AnalyticsError::ForecastFailed(_)));
    }

    #[test]
    fn test_short_series_is_insufficient() {
        let series = series_from_fn(10, |t| 100.0 + t);
        let mut model = SeasonalTrendModel::new(ForecastSpec::default());
        assert!(matches!(
            model.fit(&series).unwrap_err(),
            AnalyticsError::InsufficientData { .. }
        ));
    }

    #[test]
    fn test_rejects_bad_seasonality() {
        let series = series_from_fn(60, |t| 100.0 + t);

        let spec = trend_spec(SeasonalityMode::Additive)
            .with_seasonality(Seasonality::new("broken", 0.0, 2));
        let mut model = SeasonalTrendModel::new(spec);
        assert!(matches!(
            model.fit(&series).unwrap_err(),
            AnalyticsError::InvalidInput(_)
        ));

        let spec = trend_spec(SeasonalityMode::Additive)
            .with_seasonality(Seasonality::new("broken", 30.0, 0));
        let mut model = SeasonalTrendModel::new(spec);
        assert!(matches!(
            model.fit(&series).unwrap_err(),
            AnalyticsError::InvalidInput(_)
        ));
    }

    #[test]
    fn test_rejects_bad_confidence_level() {
        let series = series_from_fn(60, |t| 100.0 + t);
        let spec = trend_spec(SeasonalityMode::Additive).with_confidence_level(1.0);
        let mut model = SeasonalTrendModel::new(spec);
        assert!(matches!(
            model.fit(&series).unwrap_err(),
            AnalyticsError::InvalidInput(_)
        ));
    }

    #[test]
    fn test_z_score_table_and_interpolation() {
        assert_relative_eq!(z_score_for_confidence(0.90), Z_SCORE_90);
        assert_relative_eq!(z_score_for_confidence(0.95), Z_SCORE_95);
        assert_relative_eq!(z_score_for_confidence(0.99), Z_SCORE_99);
        let mid = z_score_for_confidence(0.97);
        assert!(mid > Z_SCORE_95 && mid < Z_SCORE_99);
    }
}
