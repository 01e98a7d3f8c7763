#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Exposure profiles, risk classification policy, and route selection
//! types.
//!
//! The risk classification thresholds are deliberately configuration,
//! not constants: the systems this engine replaces carried several
//! mutually inconsistent hard-coded values across revisions. One
//! canonical parameterized policy lives here, with defaults embedded
//! from `config/analysis.toml`.

mod config;
mod selection;

pub use config::{AnalysisConfig, ExposureRadii, InvalidConfigError, SamplingPolicy};
pub use selection::{RouteSelection, SelectedRoute, SelectionOutcome};

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use saferoute_incident_models::{SeverityTier, TimeOfDay};

/// Categorical risk level of a route, derived from its exposure profile.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// Minimal crime zone exposure.
    Low,
    /// Some crime zone exposure.
    Medium,
    /// Significant crime zone exposure.
    High,
}

impl RiskLevel {
    /// Returns all variants, safest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High]
    }
}

/// The canonical risk classification policy.
///
/// A route is High risk if its high-severity exposure exceeds
/// `high_exposure_pct` or its combined exposure exceeds
/// `combined_high_pct`; Medium if high-severity exposure exceeds
/// `medium_exposure_pct` or combined exposure exceeds
/// `combined_medium_pct`; else Low. Comparisons are strict, so profiles
/// exactly at a boundary stay in the lower tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// High-severity exposure percentage above which a route is High
    /// risk.
    pub high_exposure_pct: f64,
    /// High-severity exposure percentage above which a route is at
    /// least Medium risk.
    pub medium_exposure_pct: f64,
    /// Combined high+medium exposure percentage above which a route is
    /// High risk.
    pub combined_high_pct: f64,
    /// Combined high+medium exposure percentage above which a route is
    /// at least Medium risk.
    pub combined_medium_pct: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            high_exposure_pct: 20.0,
            medium_exposure_pct: 10.0,
            combined_high_pct: 40.0,
            combined_medium_pct: 25.0,
        }
    }
}

impl RiskThresholds {
    /// Classifies an exposure profile's percentages into a risk level.
    ///
    /// Pure and deterministic: identical percentages always produce the
    /// identical level.
    #[must_use]
    pub fn classify(&self, high_pct: f64, medium_pct: f64) -> RiskLevel {
        let combined = high_pct + medium_pct;

        if high_pct > self.high_exposure_pct || combined > self.combined_high_pct {
            RiskLevel::High
        } else if high_pct > self.medium_exposure_pct || combined > self.combined_medium_pct {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Checks the ordering invariants the policy depends on.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfigError`] if the High thresholds do not
    /// strictly exceed their Medium counterparts.
    pub fn validate(&self) -> Result<(), InvalidConfigError> {
        if self.high_exposure_pct <= self.medium_exposure_pct {
            return Err(InvalidConfigError {
                message: format!(
                    "high_exposure_pct ({}) must exceed medium_exposure_pct ({})",
                    self.high_exposure_pct, self.medium_exposure_pct
                ),
            });
        }
        if self.combined_high_pct <= self.combined_medium_pct {
            return Err(InvalidConfigError {
                message: format!(
                    "combined_high_pct ({}) must exceed combined_medium_pct ({})",
                    self.combined_high_pct, self.combined_medium_pct
                ),
            });
        }
        Ok(())
    }
}

/// Per-route exposure counts and the derived risk classification.
///
/// Counts partition the route's points: `high_segments +
/// medium_segments + safe_segments == total_segments` always holds by
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExposureProfile {
    /// Points within the high-severity proximity radius.
    pub high_segments: usize,
    /// Points within the medium-severity radius (and outside high).
    pub medium_segments: usize,
    /// Points outside both radii.
    pub safe_segments: usize,
    /// Total points analyzed.
    pub total_segments: usize,
    /// `high_segments` as a percentage of the total.
    pub high_pct: f64,
    /// `medium_segments` as a percentage of the total.
    pub medium_pct: f64,
    /// `safe_segments` as a percentage of the total.
    pub safe_pct: f64,
    /// `3 * high + 1 * medium`; used only to rank candidates within a
    /// tier, never for the categorical level.
    pub weighted_risk_score: u64,
    /// Categorical risk level from the classification policy.
    pub risk_level: RiskLevel,
}

impl ExposureProfile {
    /// Builds a profile from per-tier counts, deriving percentages, the
    /// weighted ranking score, and the risk level.
    ///
    /// Zero total (no analyzable points) yields the trivially safe
    /// profile.
    #[must_use]
    pub fn from_counts(
        high_segments: usize,
        medium_segments: usize,
        safe_segments: usize,
        thresholds: &RiskThresholds,
    ) -> Self {
        let total_segments = high_segments + medium_segments + safe_segments;

        let (high_pct, medium_pct, safe_pct) = if total_segments == 0 {
            (0.0, 0.0, 100.0)
        } else {
            #[allow(clippy::cast_precision_loss)]
            let total = total_segments as f64;
            #[allow(clippy::cast_precision_loss)]
            let pct = |count: usize| count as f64 / total * 100.0;
            (pct(high_segments), pct(medium_segments), pct(safe_segments))
        };

        Self {
            high_segments,
            medium_segments,
            safe_segments,
            total_segments,
            high_pct,
            medium_pct,
            safe_pct,
            weighted_risk_score: u64::from(SeverityTier::High.exposure_weight())
                * high_segments as u64
                + u64::from(SeverityTier::Medium.exposure_weight()) * medium_segments as u64,
            risk_level: thresholds.classify(high_pct, medium_pct),
        }
    }

    /// The trivially safe profile for a route analyzed against an empty
    /// incident set.
    #[must_use]
    pub fn trivially_safe(total_segments: usize, thresholds: &RiskThresholds) -> Self {
        Self::from_counts(0, 0, total_segments, thresholds)
    }
}

/// Caller-specified policy for how aggressively risky routes are
/// excluded.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SafetyPriority {
    /// Only Low/Medium routes; no silent fallback to risky routes.
    MaximumSafety,
    /// Best candidate from every populated tier.
    Balanced,
    /// Fastest options surfaced, risky routes included with a warning.
    SpeedPriority,
}

/// Time-of-day filter applied to the incident snapshot before exposure
/// analysis.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeFilter {
    /// No filtering; all incidents participate.
    Any,
    /// Only incidents bucketed Morning.
    Morning,
    /// Only incidents bucketed Afternoon.
    Afternoon,
    /// Only incidents bucketed Evening.
    Evening,
    /// Only incidents bucketed Night.
    Night,
}

impl TimeFilter {
    /// The bucket to filter on, or `None` for [`TimeFilter::Any`].
    #[must_use]
    pub const fn bucket(self) -> Option<TimeOfDay> {
        match self {
            Self::Any => None,
            Self::Morning => Some(TimeOfDay::Morning),
            Self::Afternoon => Some(TimeOfDay::Afternoon),
            Self::Evening => Some(TimeOfDay::Evening),
            Self::Night => Some(TimeOfDay::Night),
        }
    }
}

impl From<TimeOfDay> for TimeFilter {
    fn from(bucket: TimeOfDay) -> Self {
        match bucket {
            TimeOfDay::Morning => Self::Morning,
            TimeOfDay::Afternoon => Self::Afternoon,
            TimeOfDay::Evening => Self::Evening,
            TimeOfDay::Night => Self::Night,
        }
    }
}

/// Outcome status of a safety advisory.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AdvisoryStatus {
    /// A safe route is available.
    Success,
    /// Travel is possible with caution, or the safety policy could not
    /// be met.
    Warning,
    /// Only risky options exist, or no route could be generated.
    Error,
    /// Neutral informational outcome.
    Info,
}

/// Human-readable narration of a route selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyAdvisory {
    /// Outcome status for presentation styling.
    pub status: AdvisoryStatus,
    /// Composed message for the traveler.
    pub message: String,
}
