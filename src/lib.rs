// ABOUTME: Trend projection engine for personal metric tracking
// ABOUTME: Fits linear trends to day-granular series, projects forward with bands, estimates goal dates

//! # Lifetrack Intelligence
//!
//! Trend analysis engine for the Lifetrack personal tracking platform.
//! Given day-granular observations of a body metric (weight, waist,
//! body-fat %, muscle mass), the engine fits a least-squares linear trend,
//! projects it forward with a widening confidence band, classifies the
//! direction of travel, and estimates when a configured goal value will be
//! reached.
//!
//! The engine is pure and synchronous: no I/O, no shared mutable state.
//! Degenerate inputs (too few samples, flat time spans, diverging trends)
//! map to typed empty results; only non-finite input raises an error.
//!
//! ```
//! use chrono::NaiveDate;
//! use lifetrack_intelligence::{fit_trend, prepare_series, Sample};
//!
//! let day = |d: u32| NaiveDate::from_ymd_opt(2026, 3, d).unwrap();
//! let raw = vec![
//!     Sample::new(day(1), 80.0),
//!     Sample::new(day(8), 79.0),
//!     Sample::new(day(15), 78.0),
//! ];
//!
//! let series = prepare_series(&raw)?;
//! let model = fit_trend(&series)?.expect("two weeks of samples fit a trend");
//! assert!(model.slope_per_day < 0.0);
//! # Ok::<(), lifetrack_intelligence::EngineError>(())
//! ```

/// Typed, validated engine configuration.
pub mod analysis_config;
/// Default tunables.
pub mod constants;
/// Engine error types.
pub mod errors;
/// Goal-date estimation.
pub mod goal;
/// Tracked metric taxonomy.
pub mod metric;
/// Forward projection with confidence bands.
pub mod projection;
/// Report assembly and multi-metric fan-out.
pub mod report;
/// Samples and series canonicalization.
pub mod series;
/// Regression and outlier primitives.
pub mod statistics;
/// Trend fitting and direction classification.
pub mod trend;

pub use analysis_config::{DirectionConfig, ProjectionConfig, TrendEngineConfig};
pub use errors::{EngineError, EngineResult};
pub use goal::{estimate_goal_date, Goal, GoalEstimate};
pub use metric::MetricKind;
pub use projection::{project, ProjectionPoint};
pub use report::{MetricSeriesRequest, MetricTrendReport, TrendEngine};
pub use series::{apply_exponential_smoothing, apply_moving_average, prepare_series, Sample};
pub use statistics::{detect_outliers, linear_regression, median, RegressionResult};
pub use trend::{classify_direction, fit_trend, TrendDirection, TrendModel};
