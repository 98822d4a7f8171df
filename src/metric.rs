// ABOUTME: Tracked body-metric taxonomy with native units and improvement orientation
// ABOUTME: Orientation drives direction calls: losing weight improves, losing muscle declines

//! Body metrics tracked by the platform.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A tracked body metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Body weight.
    Weight,
    /// Waist circumference.
    Waist,
    /// Body-fat percentage.
    BodyFatPercentage,
    /// Muscle mass.
    MuscleMass,
}

impl MetricKind {
    /// Native display unit for this metric.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Weight | Self::MuscleMass => "kg",
            Self::Waist => "cm",
            Self::BodyFatPercentage => "%",
        }
    }

    /// Whether a decreasing value counts as improvement for this metric.
    #[must_use]
    pub const fn lower_is_better(self) -> bool {
        match self {
            Self::Weight | Self::Waist | Self::BodyFatPercentage => true,
            Self::MuscleMass => false,
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weight => write!(f, "weight"),
            Self::Waist => write!(f, "waist"),
            Self::BodyFatPercentage => write!(f, "body_fat_percentage"),
            Self::MuscleMass => write!(f, "muscle_mass"),
        }
    }
}
