// ABOUTME: Sample type and series canonicalization: sort, per-day dedup, finiteness checks
// ABOUTME: Display smoothing passes write smoothed_value only and never touch the raw value

//! Metric samples and series preparation.
//!
//! The data layer hands over raw log entries in whatever order the user wrote
//! them, possibly with several entries on one day. [`prepare_series`] turns
//! that into the canonical form the fitter consumes: sorted ascending by
//! date, one sample per calendar day (the latest entry for a day wins), every
//! value finite.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::errors::{EngineError, EngineResult};

/// One observation of a tracked metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Calendar day of the observation.
    pub date: NaiveDate,
    /// Observed value in the metric's native unit.
    pub value: f64,
    /// Smoothed display value, populated by the smoothing passes.
    pub smoothed_value: Option<f64>,
}

impl Sample {
    /// Create a raw (unsmoothed) sample.
    #[must_use]
    pub const fn new(date: NaiveDate, value: f64) -> Self {
        Self {
            date,
            value,
            smoothed_value: None,
        }
    }
}

/// Canonicalize raw log entries for fitting.
///
/// Entries are sorted ascending by date and deduplicated per calendar day;
/// within a day the entry logged last wins, which is why the sort is stable.
///
/// # Errors
///
/// Returns [`EngineError::NonFiniteValue`] if any entry holds a NaN or
/// infinite value. Malformed numbers are an upstream bug and must not
/// propagate into fits.
pub fn prepare_series(raw: &[Sample]) -> EngineResult<Vec<Sample>> {
    for sample in raw {
        if !sample.value.is_finite() {
            return Err(EngineError::non_finite(
                format!("sample on {}", sample.date),
                sample.value,
            ));
        }
    }

    let mut sorted: Vec<Sample> = raw.to_vec();
    sorted.sort_by_key(|sample| sample.date);

    let mut prepared: Vec<Sample> = Vec::with_capacity(sorted.len());
    for sample in sorted {
        match prepared.last_mut() {
            Some(last) if last.date == sample.date => *last = sample,
            _ => prepared.push(sample),
        }
    }

    trace!(
        raw = raw.len(),
        prepared = prepared.len(),
        "prepared metric series"
    );
    Ok(prepared)
}

/// Apply centered moving-average smoothing, writing `smoothed_value`.
///
/// A window of 1 or a series shorter than the window leaves the samples
/// untouched. Smoothing is a display concern; fits always use `value`.
pub fn apply_moving_average(samples: &mut [Sample], window_size: usize) {
    if window_size <= 1 || samples.len() < window_size {
        return;
    }

    for i in 0..samples.len() {
        let start = i.saturating_sub(window_size / 2);
        let end = usize::min(start + window_size, samples.len());

        let window_sum: f64 = samples[start..end].iter().map(|s| s.value).sum();
        samples[i].smoothed_value = Some(window_sum / (end - start) as f64);
    }
}

/// Apply exponential smoothing with the given alpha (clamped to `0.0..=1.0`),
/// writing `smoothed_value`.
pub fn apply_exponential_smoothing(samples: &mut [Sample], alpha: f64) {
    if samples.is_empty() {
        return;
    }

    let alpha = alpha.clamp(0.0, 1.0);
    samples[0].smoothed_value = Some(samples[0].value);

    for i in 1..samples.len() {
        let previous = samples[i - 1]
            .smoothed_value
            .unwrap_or(samples[i - 1].value);
        let smoothed = alpha.mul_add(samples[i].value, (1.0 - alpha) * previous);
        samples[i].smoothed_value = Some(smoothed);
    }
}
