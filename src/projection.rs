// ABOUTME: Forward projection of a fitted trend with a linearly widening confidence band
// ABOUTME: Anchored at the last observation so charts connect actuals to projections without a jump

//! Future-dated projection of a fitted trend.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::analysis_config::ProjectionConfig;
use crate::errors::EngineResult;
use crate::trend::TrendModel;

/// One projected point with its confidence band.
///
/// `optimistic_value` is always the upper band edge and `pessimistic_value`
/// the lower; whether "up" is good for the metric is a presentation concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Projected calendar day.
    pub date: NaiveDate,
    /// Trend-line value at this day.
    pub projected_value: f64,
    /// Upper edge of the confidence band.
    pub optimistic_value: f64,
    /// Lower edge of the confidence band.
    pub pessimistic_value: f64,
}

/// Project the trend line forward in `step_days` increments out to
/// `horizon_days` past the last observation.
///
/// The band at offset `d` is `band_rate_factor * rate * d` where `rate` is
/// the fitted daily rate, floored by a small fraction of the last observed
/// value so near-flat trends still show a non-degenerate band. The band is
/// zero at the last observation and widens monotonically.
///
/// An absent model projects to an empty vec: "not enough data yet" is a
/// normal, displayable state, never an error.
///
/// # Errors
///
/// Returns [`crate::errors::EngineError::InvalidConfiguration`] when a model
/// is present and `config` fails validation.
pub fn project(
    model: Option<&TrendModel>,
    config: &ProjectionConfig,
) -> EngineResult<Vec<ProjectionPoint>> {
    let Some(model) = model else {
        return Ok(Vec::new());
    };
    config.validate()?;

    let band_rate_per_day = config.band_rate_factor
        * model
            .slope_per_day
            .abs()
            .max(config.flat_band_floor_per_day * model.last_observed_value.abs());

    let steps = config.horizon_days / config.step_days;
    let mut points = Vec::with_capacity(steps as usize);

    for k in 1..=steps {
        let offset = k * config.step_days;
        let Some(date) = model
            .last_observed_date
            .checked_add_signed(Duration::days(i64::from(offset)))
        else {
            // Past the calendar range chrono can represent; stop projecting.
            break;
        };

        let days_out = f64::from(offset);
        let projected_value = model.value_at(days_out);
        let band = band_rate_per_day * days_out;

        points.push(ProjectionPoint {
            date,
            projected_value,
            optimistic_value: projected_value + band,
            pessimistic_value: projected_value - band,
        });
    }

    trace!(
        points = points.len(),
        horizon_days = config.horizon_days,
        step_days = config.step_days,
        "projected trend"
    );
    Ok(points)
}
