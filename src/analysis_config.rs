// ABOUTME: Typed, validated configuration for projection and direction tunables
// ABOUTME: Explicit config structs replace ambient settings; handlers pass them in

//! Engine configuration.
//!
//! All heuristic constants (band width, stability thresholds, horizons) live
//! in these structs so request handlers can inject per-user or per-tenant
//! values instead of reading ambient state. Defaults come from
//! [`crate::constants`].

use serde::{Deserialize, Serialize};

use crate::constants::{direction, projection, statistics};
use crate::errors::{EngineError, EngineResult};

/// Projection horizon, step, and confidence-band tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// How far past the last observation to project, in days.
    pub horizon_days: u32,
    /// Spacing between projected points, in days.
    pub step_days: u32,
    /// Confidence-band growth per day, as a multiple of the fitted daily
    /// rate. The band at offset `d` is `band_rate_factor * rate * d`:
    /// zero at the last observation and widening linearly into the future.
    pub band_rate_factor: f64,
    /// Per-day band floor for near-flat trends, as a fraction of the last
    /// observed value.
    pub flat_band_floor_per_day: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_days: projection::DEFAULT_HORIZON_DAYS,
            step_days: projection::DEFAULT_STEP_DAYS,
            band_rate_factor: projection::DEFAULT_BAND_RATE_FACTOR,
            flat_band_floor_per_day: projection::DEFAULT_FLAT_BAND_FLOOR_PER_DAY,
        }
    }
}

impl ProjectionConfig {
    /// Validate tunable ranges.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] when the step is zero,
    /// the horizon is shorter than one step, or a band factor is negative or
    /// non-finite.
    pub fn validate(&self) -> EngineResult<()> {
        if self.step_days == 0 {
            return Err(EngineError::invalid_configuration(
                "step_days must be at least 1",
            ));
        }
        if self.horizon_days < self.step_days {
            return Err(EngineError::invalid_configuration(format!(
                "horizon_days ({}) must be at least step_days ({})",
                self.horizon_days, self.step_days
            )));
        }
        if !self.band_rate_factor.is_finite() || self.band_rate_factor < 0.0 {
            return Err(EngineError::invalid_configuration(
                "band_rate_factor must be a non-negative finite number",
            ));
        }
        if !self.flat_band_floor_per_day.is_finite() || self.flat_band_floor_per_day < 0.0 {
            return Err(EngineError::invalid_configuration(
                "flat_band_floor_per_day must be a non-negative finite number",
            ));
        }
        Ok(())
    }
}

/// Direction-classification tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionConfig {
    /// Minimum r-squared before a non-stable direction call is made.
    pub min_r_squared: f64,
    /// Daily rates below this fraction of the current value read as stable.
    pub stability_slope_fraction: f64,
}

impl Default for DirectionConfig {
    fn default() -> Self {
        Self {
            min_r_squared: direction::DEFAULT_MIN_R_SQUARED,
            stability_slope_fraction: direction::DEFAULT_STABILITY_SLOPE_FRACTION,
        }
    }
}

impl DirectionConfig {
    /// Validate tunable ranges.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] when `min_r_squared` is
    /// outside `0.0..=1.0` or the stability fraction is negative or
    /// non-finite.
    pub fn validate(&self) -> EngineResult<()> {
        if !self.min_r_squared.is_finite() || !(0.0..=1.0).contains(&self.min_r_squared) {
            return Err(EngineError::invalid_configuration(
                "min_r_squared must be within 0.0..=1.0",
            ));
        }
        if !self.stability_slope_fraction.is_finite() || self.stability_slope_fraction < 0.0 {
            return Err(EngineError::invalid_configuration(
                "stability_slope_fraction must be a non-negative finite number",
            ));
        }
        Ok(())
    }
}

/// Full engine configuration, passed into [`crate::report::TrendEngine`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendEngineConfig {
    /// Projection tunables.
    pub projection: ProjectionConfig,
    /// Direction-classification tunables.
    pub direction: DirectionConfig,
    /// Modified z-score threshold above which a sample is flagged as an
    /// outlier in reports.
    pub outlier_z_threshold: f64,
}

impl Default for TrendEngineConfig {
    fn default() -> Self {
        Self {
            projection: ProjectionConfig::default(),
            direction: DirectionConfig::default(),
            outlier_z_threshold: statistics::DEFAULT_OUTLIER_Z_THRESHOLD,
        }
    }
}

impl TrendEngineConfig {
    /// Validate all nested tunables.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] from the first nested
    /// config that fails, or when the outlier threshold is not positive.
    pub fn validate(&self) -> EngineResult<()> {
        self.projection.validate()?;
        self.direction.validate()?;
        if !self.outlier_z_threshold.is_finite() || self.outlier_z_threshold <= 0.0 {
            return Err(EngineError::invalid_configuration(
                "outlier_z_threshold must be a positive finite number",
            ));
        }
        Ok(())
    }
}
