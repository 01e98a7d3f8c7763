//! Analysis configuration embedded at compile time.
//!
//! Defaults live in `config/analysis.toml`; deployments override them by
//! deserializing their own TOML through [`AnalysisConfig::from_toml`].

use serde::{Deserialize, Serialize};

use crate::RiskThresholds;

/// Proximity radius per severity tier, in degrees.
///
/// Degree space matches the incident index's distance queries; at LA's
/// latitude 0.01° is roughly one kilometer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExposureRadii {
    /// Radius around high-severity incidents.
    pub high_degrees: f64,
    /// Radius around medium-severity incidents.
    pub medium_degrees: f64,
}

impl Default for ExposureRadii {
    fn default() -> Self {
        Self {
            high_degrees: 0.01,
            medium_degrees: 0.005,
        }
    }
}

/// Deterministic bound on how many incidents per tier are indexed for
/// proximity checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingPolicy {
    /// Maximum incidents indexed per severity tier; larger sets are
    /// sampled down.
    pub max_indexed_per_tier: usize,
    /// Seed for the deterministic sampler.
    pub seed: u64,
}

impl Default for SamplingPolicy {
    fn default() -> Self {
        Self {
            max_indexed_per_tier: 1000,
            seed: 42,
        }
    }
}

/// Full analysis configuration: classification thresholds, proximity
/// radii, and the sampling bound.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Risk classification policy.
    pub thresholds: RiskThresholds,
    /// Proximity radii per severity tier.
    pub radii: ExposureRadii,
    /// Incident sampling bound.
    pub sampling: SamplingPolicy,
}

const EMBEDDED_CONFIG: &str = include_str!("../config/analysis.toml");

impl AnalysisConfig {
    /// Parses a TOML configuration and checks its invariants.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfigError`] if the TOML is malformed or the
    /// threshold ordering invariants are violated.
    pub fn from_toml(toml_str: &str) -> Result<Self, InvalidConfigError> {
        let config: Self = toml::de::from_str(toml_str).map_err(|e| InvalidConfigError {
            message: format!("malformed analysis config: {e}"),
        })?;
        config.thresholds.validate()?;
        config.validate_radii()?;
        Ok(config)
    }

    /// The compiled-in default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed (a compile-time
    /// guarantee, exercised by tests).
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_toml(EMBEDDED_CONFIG)
            .unwrap_or_else(|e| panic!("Failed to parse embedded analysis config: {e}"))
    }

    fn validate_radii(&self) -> Result<(), InvalidConfigError> {
        if self.radii.high_degrees <= 0.0 || self.radii.medium_degrees <= 0.0 {
            return Err(InvalidConfigError {
                message: format!(
                    "proximity radii must be positive (high {}, medium {})",
                    self.radii.high_degrees, self.radii.medium_degrees
                ),
            });
        }
        Ok(())
    }
}

/// Error returned when an analysis configuration is malformed or
/// violates an ordering invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidConfigError {
    /// Description of the violation.
    pub message: String,
}

impl std::fmt::Display for InvalidConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid analysis config: {}", self.message)
    }
}

impl std::error::Error for InvalidConfigError {}
