//! End-to-end tests driving every analysis off a file-backed store.

use std::fmt::Write as _;

use approx::assert_relative_eq;
use tempfile::TempDir;

use navlens_analytics::simulation::SimulationConfig;
use navlens_analytics::AnalyticsError;
use navlens_core::Date;
use navlens_data::{DataConfig, DataError, FundStore};
use navlens_service::{AnalysisConfig, AnalysisService, ServiceError};

/// Writes a synthetic daily NAV sheet: drifting trend plus a mild cycle.
fn write_fund_sheet(dir: &TempDir, fund: &str, rows: usize) {
    let start = Date::from_ymd(2023, 1, 2).unwrap();
    let mut sheet = String::from("Date,NAV\n");
    for t in 0..rows {
        let date = start.add_days(t as i64);
        let nav = 100.0 * (1.0_f64 + 0.0004).powi(t as i32)
            + (2.0 * std::f64::consts::PI * t as f64 / 91.25).sin();
        writeln!(sheet, "{date},{nav:.6}").unwrap();
    }
    std::fs::write(dir.path().join(format!("{fund}.csv")), sheet).unwrap();
}

fn service_with(dir: &TempDir, funds: &[&str]) -> AnalysisService {
    let store = FundStore::new(DataConfig::new(dir.path()).with_funds(funds.iter().copied()));
    let config = AnalysisConfig::new()
        .with_simulation(SimulationConfig::new().with_days(30).with_paths(50).with_seed(11));
    AnalysisService::new(store, config)
}

#[test]
fn forecast_covers_history_plus_horizon_with_ordered_bands() {
    let dir = TempDir::new().unwrap();
    write_fund_sheet(&dir, "Flexi Cap", 400);
    let service = service_with(&dir, &["Flexi Cap"]);

    let forecast = service.forecast("Flexi Cap").unwrap();
    assert_eq!(forecast.len(), 400 + 6 * 30);
    assert_eq!(forecast.horizon_days, 180);
    for point in &forecast.points {
        assert!(point.lower <= point.predicted);
        assert!(point.predicted <= point.upper);
    }
}

#[test]
fn risk_metrics_keep_tail_ordering() {
    let dir = TempDir::new().unwrap();
    write_fund_sheet(&dir, "Midcap", 400);
    let service = service_with(&dir, &["Midcap"]);

    let metrics = service.risk("Midcap").unwrap();
    assert!((metrics.confidence_level - 0.95).abs() < f64::EPSILON);
    assert!(metrics.cvar <= metrics.var);
}

#[test]
fn backtest_reports_both_strategies() {
    let dir = TempDir::new().unwrap();
    write_fund_sheet(&dir, "Contra", 400);
    let service = service_with(&dir, &["Contra"]);

    let summary = service.backtest("Contra").unwrap();
    let series = service.store().load("Contra").unwrap();
    let expected_multiple = series.last().nav / series.first().nav;
    assert_relative_eq!(
        summary.buy_and_hold.growth_multiple(),
        expected_multiple,
        epsilon = 1e-9
    );
    assert!(summary.systematic.terminal_value > rust_decimal::Decimal::ZERO);
}

#[test]
fn simulation_has_configured_shape_and_is_reproducible() {
    let dir = TempDir::new().unwrap();
    write_fund_sheet(&dir, "Multicap", 400);
    let service = service_with(&dir, &["Multicap"]);

    let first = service.simulate("Multicap").unwrap();
    assert_eq!(first.num_paths(), 50);
    assert_eq!(first.days(), 30);

    let second = service.simulate("Multicap").unwrap();
    assert_eq!(first, second);
}

#[test]
fn unknown_fund_surfaces_data_error() {
    let dir = TempDir::new().unwrap();
    let service = service_with(&dir, &["Midcap"]);

    let err = service.risk("Ghost Fund").unwrap_err();
    assert_eq!(
        err,
        ServiceError::Data(DataError::FundNotFound("Ghost Fund".to_string()))
    );
}

#[test]
fn short_series_surfaces_insufficient_data() {
    let dir = TempDir::new().unwrap();
    write_fund_sheet(&dir, "Tiny", 3);
    let service = service_with(&dir, &["Tiny"]);

    // Risk needs only two returns; three rows are enough.
    assert!(service.risk("Tiny").is_ok());

    // The forecast design has more columns than three rows can support.
    let err = service.forecast("Tiny").unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Analytics(AnalyticsError::InsufficientData { .. })
    ));
}
