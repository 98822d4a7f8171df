// ABOUTME: Default tunables for fitting, projection, and direction classification
// ABOUTME: Every value here is heuristic and overridable through the config structs

//! Default constants used throughout the trend engine.
//!
//! None of these values are physical laws; they are display-calibrated
//! heuristics. Anything a caller might reasonably want to tune is exposed
//! through [`crate::analysis_config`] and merely defaulted here.

/// Regression and outlier-detection parameters.
pub mod statistics {
    /// Minimum samples for a meaningful linear fit.
    pub const MIN_TREND_SAMPLES: usize = 2;

    /// Scale factor relating the median absolute deviation to the standard
    /// deviation of a normal distribution (modified z-score).
    pub const MAD_Z_SCALE: f64 = 0.6745;

    /// Default modified z-score above which a sample is flagged as an outlier.
    pub const DEFAULT_OUTLIER_Z_THRESHOLD: f64 = 3.5;
}

/// Projection horizon and confidence-band parameters.
pub mod projection {
    /// Default projection horizon past the last observation.
    pub const DEFAULT_HORIZON_DAYS: u32 = 90;

    /// Default spacing between projected points (weekly).
    pub const DEFAULT_STEP_DAYS: u32 = 7;

    /// Default band growth per projected day, as a multiple of the fitted
    /// daily rate. Calibrated so a 90-day weight-loss projection shows a
    /// visible but not alarming spread.
    pub const DEFAULT_BAND_RATE_FACTOR: f64 = 0.35;

    /// Per-day band floor for near-flat trends, as a fraction of the last
    /// observed value. Keeps the band non-degenerate when the slope is ~0.
    pub const DEFAULT_FLAT_BAND_FLOOR_PER_DAY: f64 = 0.000_5;
}

/// Trend-direction classification thresholds.
pub mod direction {
    /// Daily rates below this fraction of the current value read as stable.
    pub const DEFAULT_STABILITY_SLOPE_FRACTION: f64 = 0.000_2;

    /// Minimum r-squared before a non-stable direction call is made.
    pub const DEFAULT_MIN_R_SQUARED: f64 = 0.3;
}

/// Calendar conversions.
pub mod time {
    /// Days per week, for weekly-rate summaries.
    pub const DAYS_PER_WEEK: f64 = 7.0;
}
