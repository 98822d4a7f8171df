// ABOUTME: Goal-date estimation from the continuity-anchored trend line
// ABOUTME: Distinguishes targets already reached from trends that never converge

//! Goal-date estimation.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{EngineError, EngineResult};
use crate::trend::TrendModel;

/// A target value for a tracked metric, supplied by user settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Target value in the metric's native unit.
    pub target_value: f64,
}

impl Goal {
    /// Build a goal for the given target value.
    #[must_use]
    pub const fn new(target_value: f64) -> Self {
        Self { target_value }
    }
}

/// Outcome of goal-date estimation when a trend model exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GoalEstimate {
    /// The target was already crossed in the direction of travel; show
    /// "achieved", never a past date.
    AlreadyReached,
    /// Projected day the trend line crosses the target.
    Reached {
        /// Estimated calendar day, rounded to the nearest whole day.
        date: NaiveDate,
        /// Whole days past the last observation.
        days_out: i64,
    },
    /// The trend is flat or moves away from the target; no finite crossing.
    NoEstimate,
}

/// Estimate the calendar day the trend reaches `target_value`.
///
/// The crossing is solved on the continuity-anchored line through the last
/// observation. `Ok(None)` means no model was available (insufficient data);
/// that state is deliberately kept apart from [`GoalEstimate::NoEstimate`],
/// which means a model exists but never converges on the target.
///
/// A crossing that lies behind the last observation is reported as
/// [`GoalEstimate::AlreadyReached`] when the fitted window actually passed
/// through the target (the target sits between the modeled start value and
/// the last observation); a target the whole window moved away from is
/// [`GoalEstimate::NoEstimate`].
///
/// # Errors
///
/// Returns [`EngineError::NonFiniteValue`] for a NaN or infinite target.
pub fn estimate_goal_date(
    model: Option<&TrendModel>,
    target_value: f64,
) -> EngineResult<Option<GoalEstimate>> {
    if !target_value.is_finite() {
        return Err(EngineError::non_finite("goal target", target_value));
    }
    let Some(model) = model else {
        return Ok(None);
    };

    let remaining = target_value - model.last_observed_value;
    if remaining.abs() < f64::EPSILON {
        return Ok(Some(GoalEstimate::AlreadyReached));
    }
    if model.slope_per_day.abs() < f64::EPSILON {
        return Ok(Some(GoalEstimate::NoEstimate));
    }

    let days_out = remaining / model.slope_per_day;
    if days_out <= 0.0 {
        // The line crossed the target in the past. Reached if the crossing
        // fell inside the fitted window, otherwise the trend points away.
        let crossed_in_window = if model.slope_per_day < 0.0 {
            target_value <= model.intercept_value
        } else {
            target_value >= model.intercept_value
        };
        let estimate = if crossed_in_window {
            GoalEstimate::AlreadyReached
        } else {
            GoalEstimate::NoEstimate
        };
        return Ok(Some(estimate));
    }

    let days = days_out.round() as i64;
    let Some(date) = model
        .last_observed_date
        .checked_add_signed(Duration::days(days))
    else {
        // So far out chrono cannot represent the date; treat as no estimate.
        return Ok(Some(GoalEstimate::NoEstimate));
    };

    debug!(target_value, days_out = days, %date, "estimated goal date");
    Ok(Some(GoalEstimate::Reached { date, days_out: days }))
}
