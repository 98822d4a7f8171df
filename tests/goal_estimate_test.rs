// ABOUTME: Tests for goal-date estimation: convergence, divergence, already-reached
// ABOUTME: No-estimate and insufficient-data states must stay distinguishable

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use chrono::NaiveDate;
use lifetrack_intelligence::{
    estimate_goal_date, fit_trend, EngineError, GoalEstimate, Sample, TrendModel,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}

fn weekly_loss_model() -> TrendModel {
    let samples = vec![
        Sample::new(day(1), 80.0),
        Sample::new(day(8), 79.0),
        Sample::new(day(15), 78.0),
    ];
    fit_trend(&samples).unwrap().unwrap()
}

#[test]
fn estimates_weekly_loss_goal_date() {
    let model = weekly_loss_model();

    // 3kg left at ~0.142857 kg/day ~ 21 days past day 15.
    let estimate = estimate_goal_date(Some(&model), 75.0).unwrap().unwrap();
    match estimate {
        GoalEstimate::Reached { date, days_out } => {
            assert_eq!(days_out, 21);
            assert_eq!(date, day(15) + chrono::Duration::days(21));
        }
        other => panic!("expected a projected date, got {other:?}"),
    }
}

#[test]
fn flat_trend_has_no_estimate() {
    let model = TrendModel {
        slope_per_day: 0.0,
        intercept_value: 80.0,
        r_squared: 0.0,
        last_observed_date: day(15),
        last_observed_value: 80.0,
    };
    assert_eq!(
        estimate_goal_date(Some(&model), 75.0).unwrap(),
        Some(GoalEstimate::NoEstimate)
    );
}

#[test]
fn diverging_trend_has_no_estimate() {
    // Losing weight while the target sits above even the fitted start.
    let model = weekly_loss_model();
    assert_eq!(
        estimate_goal_date(Some(&model), 85.0).unwrap(),
        Some(GoalEstimate::NoEstimate)
    );
}

#[test]
fn target_crossed_during_window_is_already_reached() {
    // Descended from 80.0 to 78.0; a 79.0 target was passed on the way.
    let model = weekly_loss_model();
    assert_eq!(
        estimate_goal_date(Some(&model), 79.0).unwrap(),
        Some(GoalEstimate::AlreadyReached)
    );
}

#[test]
fn exact_target_is_already_reached() {
    let model = weekly_loss_model();
    assert_eq!(
        estimate_goal_date(Some(&model), 78.0).unwrap(),
        Some(GoalEstimate::AlreadyReached)
    );
}

#[test]
fn absent_model_yields_no_result() {
    // Insufficient data maps to None, distinct from NoEstimate.
    assert_eq!(estimate_goal_date(None, 75.0).unwrap(), None);
}

#[test]
fn non_finite_target_is_rejected() {
    let model = weekly_loss_model();
    assert!(matches!(
        estimate_goal_date(Some(&model), f64::NAN),
        Err(EngineError::NonFiniteValue { .. })
    ));
}

#[test]
fn gaining_trend_estimates_upward_goal() {
    let samples = vec![
        Sample::new(day(1), 40.0),
        Sample::new(day(11), 40.5),
        Sample::new(day(21), 41.0),
    ];
    let model = fit_trend(&samples).unwrap().unwrap();

    // +0.05/day toward 42.0: 1.0 remaining ~ 20 days out.
    let estimate = estimate_goal_date(Some(&model), 42.0).unwrap().unwrap();
    match estimate {
        GoalEstimate::Reached { days_out, .. } => assert_eq!(days_out, 20),
        other => panic!("expected a projected date, got {other:?}"),
    }
}
