//! Elementary statistics over return series.

use crate::error::{AnalyticsError, AnalyticsResult};

/// Filters a series down to its finite values.
///
/// Undefined returns (NaN from upstream gaps, infinities) are excluded
/// before any statistic is computed.
#[must_use]
pub fn finite_values(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| v.is_finite()).collect()
}

/// Arithmetic mean.
///
/// # Errors
///
/// Returns `AnalyticsError::InsufficientData` on an empty slice.
pub fn mean(values: &[f64]) -> AnalyticsResult<f64> {
    if values.is_empty() {
        return Err(AnalyticsError::insufficient_data(1, 0));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divisor `n`).
///
/// # Errors
///
/// Returns `AnalyticsError::InsufficientData` on an empty slice.
pub fn population_std_dev(values: &[f64]) -> AnalyticsResult<f64> {
    let m = mean(values)?;
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    Ok(variance.sqrt())
}

/// Quantile of a sorted sample via the linear-interpolation method.
///
/// With `h = (n - 1) * q`, the result interpolates between the two
/// neighboring order statistics.
///
/// # Arguments
///
/// * `sorted` - Sample sorted in ascending order
/// * `q` - Quantile in `[0, 1]`
///
/// # Errors
///
/// Returns `AnalyticsError::InsufficientData` on an empty slice and
/// `AnalyticsError::InvalidInput` if `q` is outside `[0, 1]`.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> AnalyticsResult<f64> {
    if sorted.is_empty() {
        return Err(AnalyticsError::insufficient_data(1, 0));
    }
    if !(0.0..=1.0).contains(&q) {
        return Err(AnalyticsError::invalid_input(format!(
            "quantile must be in [0, 1], got {q}"
        )));
    }

    let h = (sorted.len() - 1) as f64 * q;
    let lower = h.floor() as usize;
    let upper = h.ceil() as usize;
    if lower == upper {
        return Ok(sorted[lower]);
    }

    let weight = h - lower as f64;
    Ok(sorted[lower] * (1.0 - weight) + sorted[upper] * weight)
}
