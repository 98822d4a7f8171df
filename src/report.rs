// ABOUTME: Per-metric trend report assembly and multi-metric parallel fan-out
// ABOUTME: Reports are plain data; chart and narration layers consume them unchanged

//! Trend report assembly.
//!
//! [`TrendEngine`] ties the pipeline together for one request: canonicalize
//! the series, fit, classify, project, estimate the goal date, and flag
//! outliers. The resulting [`MetricTrendReport`] is the summary both the
//! chart layer and the downstream narration collaborator consume; it is
//! identical whether or not narration happens.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis_config::TrendEngineConfig;
use crate::errors::EngineResult;
use crate::goal::{estimate_goal_date, Goal, GoalEstimate};
use crate::metric::MetricKind;
use crate::projection::{project, ProjectionPoint};
use crate::series::{prepare_series, Sample};
use crate::statistics::detect_outliers;
use crate::trend::{classify_direction, fit_trend, TrendDirection, TrendModel};

/// Summary of one metric's trend, projections, and goal outlook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricTrendReport {
    /// Which metric this report covers.
    pub metric: MetricKind,
    /// Samples contributing to the fit, after per-day deduplication.
    pub sample_count: usize,
    /// Latest observed value, if any samples exist.
    pub current_value: Option<f64>,
    /// Fitted model; absent when the series carries no usable trend.
    pub model: Option<TrendModel>,
    /// Average change per week under the model.
    pub rate_per_week: Option<f64>,
    /// Direction relative to the metric's improvement orientation.
    pub direction: Option<TrendDirection>,
    /// Future points on the anchored trend line with confidence band.
    pub projection: Vec<ProjectionPoint>,
    /// Goal outlook, when a goal is configured.
    pub goal_estimate: Option<GoalEstimate>,
    /// Indices (into the prepared series) of samples flagged as outliers.
    pub outlier_indices: Vec<usize>,
}

/// One metric's raw series plus optional goal, as handed in by the data
/// layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSeriesRequest {
    /// Metric the samples belong to.
    pub metric: MetricKind,
    /// Raw log entries, in any order, possibly several per day.
    pub samples: Vec<Sample>,
    /// Configured goal for this metric, if any.
    pub goal: Option<Goal>,
}

/// Trend engine holding validated configuration.
///
/// Stateless beyond its tunables: every call recomputes from its inputs, so
/// concurrent use needs no coordination.
#[derive(Debug, Clone)]
pub struct TrendEngine {
    config: TrendEngineConfig,
}

impl Default for TrendEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl TrendEngine {
    /// Create an engine after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::EngineError::InvalidConfiguration`] for
    /// out-of-range tunables.
    pub fn new(config: TrendEngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Engine with default tunables.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            config: TrendEngineConfig::default(),
        }
    }

    /// The engine's configuration.
    #[must_use]
    pub const fn config(&self) -> &TrendEngineConfig {
        &self.config
    }

    /// Analyze one metric series end to end.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::EngineError::NonFiniteValue`] if the raw
    /// series or the goal target carries a NaN or infinite value.
    pub fn analyze(
        &self,
        metric: MetricKind,
        raw_samples: &[Sample],
        goal: Option<Goal>,
    ) -> EngineResult<MetricTrendReport> {
        let samples = prepare_series(raw_samples)?;
        let model = fit_trend(&samples)?;

        let direction = model
            .as_ref()
            .map(|m| classify_direction(m, metric.lower_is_better(), &self.config.direction));
        let projection = project(model.as_ref(), &self.config.projection)?;
        let goal_estimate = if let Some(goal) = goal {
            estimate_goal_date(model.as_ref(), goal.target_value)?
        } else {
            None
        };

        let values: Vec<f64> = samples.iter().map(|s| s.value).collect();
        let outlier_indices = detect_outliers(&values, self.config.outlier_z_threshold);
        let rate_per_week = model.as_ref().map(TrendModel::rate_per_week);

        debug!(
            metric = %metric,
            samples = samples.len(),
            has_model = model.is_some(),
            "analyzed metric trend"
        );

        Ok(MetricTrendReport {
            metric,
            sample_count: samples.len(),
            current_value: samples.last().map(|s| s.value),
            model,
            rate_per_week,
            direction,
            projection,
            goal_estimate,
            outlier_indices,
        })
    }

    /// Analyze all of a user's tracked metrics in parallel.
    ///
    /// Each series is independent, so the fan-out needs no coordination;
    /// output order matches input order.
    ///
    /// # Errors
    ///
    /// Returns the first [`crate::errors::EngineError`] any metric's
    /// analysis produces.
    pub fn analyze_all(
        &self,
        requests: &[MetricSeriesRequest],
    ) -> EngineResult<Vec<MetricTrendReport>> {
        requests
            .par_iter()
            .map(|request| self.analyze(request.metric, &request.samples, request.goal))
            .collect()
    }
}
