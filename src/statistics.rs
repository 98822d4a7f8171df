// ABOUTME: Statistical primitives: least-squares regression, median, outlier flagging
// ABOUTME: Degenerate inputs (short series, zero x-variance) return None, never errors

//! Statistical building blocks for trend analysis.
//!
//! Least-squares is used over point-to-point slope because manual health
//! logging is noisy and irregularly spaced; it is cheap enough to recompute
//! per request instead of caching.

use serde::{Deserialize, Serialize};

use crate::constants::statistics::{MAD_Z_SCALE, MIN_TREND_SAMPLES};

/// Linear regression fit of value against elapsed days.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Rate of change per unit of x.
    pub slope: f64,
    /// Modeled value at x = 0.
    pub intercept: f64,
    /// Coefficient of determination (0-1).
    pub r_squared: f64,
    /// Pearson correlation coefficient (-1 to 1).
    pub correlation: f64,
    /// Standard error of the estimate.
    pub standard_error: f64,
    /// n - 2.
    pub degrees_of_freedom: usize,
}

/// Ordinary least-squares fit of `ys` against `xs`.
///
/// Returns `None` when fewer than two points are given, the slices differ in
/// length, or the x values carry no variance. All three are expected states
/// for sparse logs, not errors; callers decide how to surface them.
#[must_use]
pub fn linear_regression(xs: &[f64], ys: &[f64]) -> Option<RegressionResult> {
    if xs.len() < MIN_TREND_SAMPLES || xs.len() != ys.len() {
        return None;
    }

    let n = xs.len() as f64;
    let sum_x: f64 = xs.iter().sum();
    let sum_y: f64 = ys.iter().sum();
    let sum_xx: f64 = xs.iter().map(|x| x * x).sum();
    let sum_yy: f64 = ys.iter().map(|y| y * y).sum();
    let sum_xy: f64 = xs.iter().zip(ys).map(|(x, y)| x * y).sum();

    let mean_x = sum_x / n;
    let mean_y = sum_y / n;

    let denominator = (n * mean_x).mul_add(-mean_x, sum_xx);
    if denominator.abs() < f64::EPSILON {
        return None;
    }

    let slope = (n * mean_x).mul_add(-mean_y, sum_xy) / denominator;
    let intercept = slope.mul_add(-mean_x, mean_y);

    let corr_denominator = (denominator * (n * mean_y).mul_add(-mean_y, sum_yy)).sqrt();
    let correlation = if corr_denominator.abs() < f64::EPSILON {
        0.0
    } else {
        (n * mean_x).mul_add(-mean_y, sum_xy) / corr_denominator
    };
    let r_squared = correlation * correlation;

    let sse: f64 = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| {
            let diff = y - slope.mul_add(*x, intercept);
            diff * diff
        })
        .sum();

    let degrees_of_freedom = xs.len().saturating_sub(2);
    let standard_error = if degrees_of_freedom > 0 {
        (sse / degrees_of_freedom as f64).sqrt()
    } else {
        0.0
    };

    Some(RegressionResult {
        slope,
        intercept,
        r_squared,
        correlation,
        standard_error,
        degrees_of_freedom,
    })
}

/// Median of a value slice; `0.0` for an empty slice.
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let len = sorted.len();
    if len % 2 == 0 {
        f64::midpoint(sorted[len / 2 - 1], sorted[len / 2])
    } else {
        sorted[len / 2]
    }
}

/// Indices of values whose modified z-score exceeds `threshold`.
///
/// Uses the median absolute deviation, which tolerates the occasional wild
/// entry far better than mean-based z-scores. Fewer than 3 values, or a
/// fully constant series, flag nothing.
#[must_use]
pub fn detect_outliers(values: &[f64], threshold: f64) -> Vec<usize> {
    if values.len() < 3 {
        return Vec::new();
    }

    let center = median(values);
    let deviations: Vec<f64> = values.iter().map(|v| (v - center).abs()).collect();
    let mad = median(&deviations);

    if mad.abs() < f64::EPSILON {
        return Vec::new();
    }

    values
        .iter()
        .enumerate()
        .filter(|(_, &value)| (MAD_Z_SCALE * (value - center) / mad).abs() > threshold)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn regression_fits_exact_line_with_irregular_spacing() {
        // y = 2x + 1 sampled at uneven x
        let xs = [0.0, 3.0, 4.0, 10.0];
        let ys = [1.0, 7.0, 9.0, 21.0];

        let fit = linear_regression(&xs, &ys).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
        assert!((fit.r_squared - 1.0).abs() < 1e-12);
        assert!(fit.standard_error < 1e-9);
    }

    #[test]
    fn regression_degenerates_to_none() {
        assert!(linear_regression(&[1.0], &[2.0]).is_none());
        assert!(linear_regression(&[], &[]).is_none());
        // Zero variance in x
        assert!(linear_regression(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]).is_none());
    }

    #[test]
    fn median_even_and_odd() {
        assert!((median(&[3.0, 1.0, 2.0]) - 2.0).abs() < f64::EPSILON);
        assert!((median(&[4.0, 1.0, 2.0, 3.0]) - 2.5).abs() < f64::EPSILON);
        assert!(median(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn outlier_detection_flags_spike_only() {
        let values = [80.0, 80.2, 79.9, 80.1, 120.0, 80.0];
        let flagged = detect_outliers(&values, 3.5);
        assert_eq!(flagged, vec![4]);
    }

    #[test]
    fn outlier_detection_handles_constant_series() {
        assert!(detect_outliers(&[70.0, 70.0, 70.0], 3.5).is_empty());
        assert!(detect_outliers(&[70.0, 71.0], 3.5).is_empty());
    }
}
