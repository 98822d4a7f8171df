// ABOUTME: Trend fitting over prepared series and direction classification
// ABOUTME: Produces the continuity-anchored linear model consumed by projection and goal estimation

//! Trend fitting and direction classification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis_config::DirectionConfig;
use crate::constants::time::DAYS_PER_WEEK;
use crate::errors::{EngineError, EngineResult};
use crate::series::Sample;
use crate::statistics;

/// Linear trend fitted to one metric series.
///
/// Ephemeral: computed fresh per request from a prepared series, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendModel {
    /// Average change per calendar day (signed; negative means decreasing).
    pub slope_per_day: f64,
    /// Modeled value on the first observed day.
    pub intercept_value: f64,
    /// Goodness of fit of the regression (0-1).
    pub r_squared: f64,
    /// Date of the last observation in the fitted series.
    pub last_observed_date: NaiveDate,
    /// Value of the last observation in the fitted series.
    pub last_observed_value: f64,
}

impl TrendModel {
    /// Value of the continuity-anchored trend line `days_out` days past the
    /// last observation.
    ///
    /// The line is shifted to pass through the last actual sample rather
    /// than the statistical intercept, so charted projections connect to the
    /// actual series without a jump.
    #[must_use]
    pub fn value_at(&self, days_out: f64) -> f64 {
        self.slope_per_day.mul_add(days_out, self.last_observed_value)
    }

    /// Average change per week under this model.
    #[must_use]
    pub fn rate_per_week(&self) -> f64 {
        self.slope_per_day * DAYS_PER_WEEK
    }
}

/// Direction of a fitted trend relative to a metric's improvement
/// orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Moving toward the healthy direction for the metric.
    Improving,
    /// Moving away from the healthy direction for the metric.
    Declining,
    /// No meaningful movement, or too little fit confidence to call one.
    Stable,
}

/// Fit a least-squares trend to a prepared series.
///
/// The series must already be sorted and deduplicated by day (see
/// [`crate::series::prepare_series`]). Regression runs over elapsed whole
/// days since the first sample, so irregular logging gaps are weighted
/// correctly. Fewer than two samples, or samples all on one day, yield
/// `Ok(None)`: not enough signal for a trend, which is an expected state for
/// freshly tracked metrics.
///
/// # Errors
///
/// Returns [`EngineError::NonFiniteValue`] if a sample value is NaN or
/// infinite.
pub fn fit_trend(samples: &[Sample]) -> EngineResult<Option<TrendModel>> {
    for sample in samples {
        if !sample.value.is_finite() {
            return Err(EngineError::non_finite(
                format!("sample on {}", sample.date),
                sample.value,
            ));
        }
    }

    let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
        return Ok(None);
    };

    let xs: Vec<f64> = samples
        .iter()
        .map(|sample| elapsed_days(first.date, sample.date))
        .collect();
    let ys: Vec<f64> = samples.iter().map(|sample| sample.value).collect();

    let Some(regression) = statistics::linear_regression(&xs, &ys) else {
        return Ok(None);
    };

    debug!(
        slope_per_day = regression.slope,
        r_squared = regression.r_squared,
        points = samples.len(),
        "fitted trend"
    );

    Ok(Some(TrendModel {
        slope_per_day: regression.slope,
        intercept_value: regression.intercept,
        r_squared: regression.r_squared,
        last_observed_date: last.date,
        last_observed_value: last.value,
    }))
}

/// Classify a trend's direction.
///
/// A trend reads as [`TrendDirection::Stable`] when the fit explains too
/// little variance (r-squared under the configured floor) or the daily rate
/// is small relative to the current value; otherwise the slope sign is
/// interpreted through the metric's orientation.
#[must_use]
pub fn classify_direction(
    model: &TrendModel,
    lower_is_better: bool,
    config: &DirectionConfig,
) -> TrendDirection {
    let stability_threshold =
        config.stability_slope_fraction * model.last_observed_value.abs();

    if model.r_squared < config.min_r_squared
        || model.slope_per_day.abs() <= stability_threshold
    {
        return TrendDirection::Stable;
    }

    let is_improving = if lower_is_better {
        model.slope_per_day < 0.0
    } else {
        model.slope_per_day > 0.0
    };

    if is_improving {
        TrendDirection::Improving
    } else {
        TrendDirection::Declining
    }
}

fn elapsed_days(t0: NaiveDate, date: NaiveDate) -> f64 {
    date.signed_duration_since(t0).num_days() as f64
}
