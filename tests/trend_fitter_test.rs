// ABOUTME: Tests for series preparation and trend fitting
// ABOUTME: Covers degenerate inputs, the weekly weight-loss scenario, and idempotence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use chrono::NaiveDate;
use lifetrack_intelligence::{
    classify_direction, fit_trend, prepare_series, DirectionConfig, EngineError, Sample,
    TrendDirection, TrendModel,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}

/// Weight in kg, losing ~1kg/week: samples on day 0, 7, 14.
fn weekly_loss_series() -> Vec<Sample> {
    vec![
        Sample::new(day(1), 80.0),
        Sample::new(day(8), 79.0),
        Sample::new(day(15), 78.0),
    ]
}

#[test]
fn fits_weekly_weight_loss_scenario() {
    let model = fit_trend(&weekly_loss_series()).unwrap().unwrap();

    assert!((model.slope_per_day - (-1.0 / 7.0)).abs() < 1e-9);
    assert!((model.intercept_value - 80.0).abs() < 1e-9);
    assert!((model.r_squared - 1.0).abs() < 1e-9);
    assert_eq!(model.last_observed_date, day(15));
    assert!((model.last_observed_value - 78.0).abs() < f64::EPSILON);
    assert!((model.rate_per_week() - (-1.0)).abs() < 1e-9);
}

#[test]
fn short_series_yields_no_model() {
    assert!(fit_trend(&[]).unwrap().is_none());
    assert!(fit_trend(&[Sample::new(day(1), 80.0)]).unwrap().is_none());
}

#[test]
fn same_day_series_yields_no_model_after_dedup() {
    let raw = vec![
        Sample::new(day(1), 80.0),
        Sample::new(day(1), 80.4),
        Sample::new(day(1), 80.2),
    ];
    let prepared = prepare_series(&raw).unwrap();

    assert_eq!(prepared.len(), 1);
    assert!(fit_trend(&prepared).unwrap().is_none());
}

#[test]
fn non_finite_sample_is_rejected() {
    let samples = vec![Sample::new(day(1), 80.0), Sample::new(day(8), f64::INFINITY)];
    assert!(matches!(
        fit_trend(&samples),
        Err(EngineError::NonFiniteValue { .. })
    ));
}

#[test]
fn fitting_is_idempotent() {
    let series = weekly_loss_series();
    let first = fit_trend(&series).unwrap().unwrap();
    let second = fit_trend(&series).unwrap().unwrap();

    assert_eq!(
        first.slope_per_day.to_bits(),
        second.slope_per_day.to_bits()
    );
    assert_eq!(
        first.intercept_value.to_bits(),
        second.intercept_value.to_bits()
    );
    assert_eq!(first.r_squared.to_bits(), second.r_squared.to_bits());
    assert_eq!(first.last_observed_date, second.last_observed_date);
}

#[test]
fn irregularly_spaced_samples_fit_the_underlying_line() {
    // value = 90 - 0.1 * elapsed_days, logged at uneven gaps
    let samples = vec![
        Sample::new(day(1), 90.0),
        Sample::new(day(4), 89.7),
        Sample::new(day(5), 89.6),
        Sample::new(day(21), 88.0),
    ];
    let model = fit_trend(&samples).unwrap().unwrap();

    assert!((model.slope_per_day - (-0.1)).abs() < 1e-9);
    assert!((model.r_squared - 1.0).abs() < 1e-9);
}

#[test]
fn direction_follows_metric_orientation() {
    let model = fit_trend(&weekly_loss_series()).unwrap().unwrap();
    let config = DirectionConfig::default();

    // Losing weight improves weight, but losing muscle declines.
    assert_eq!(
        classify_direction(&model, true, &config),
        TrendDirection::Improving
    );
    assert_eq!(
        classify_direction(&model, false, &config),
        TrendDirection::Declining
    );
}

#[test]
fn tiny_slope_reads_as_stable() {
    let model = TrendModel {
        slope_per_day: 0.000_1,
        intercept_value: 80.0,
        r_squared: 0.9,
        last_observed_date: day(15),
        last_observed_value: 80.0,
    };
    // 0.0001/day on an 80kg value sits below the default stability fraction.
    assert_eq!(
        classify_direction(&model, true, &DirectionConfig::default()),
        TrendDirection::Stable
    );
}

#[test]
fn weak_fit_reads_as_stable() {
    let model = TrendModel {
        slope_per_day: -0.2,
        intercept_value: 80.0,
        r_squared: 0.05,
        last_observed_date: day(15),
        last_observed_value: 78.0,
    };
    assert_eq!(
        classify_direction(&model, true, &DirectionConfig::default()),
        TrendDirection::Stable
    );
}
