//! Per-route exposure analysis.

use saferoute_analysis_models::{AnalysisConfig, ExposureProfile};
use saferoute_incident_models::Incident;
use saferoute_routing_models::Route;

use crate::IncidentIndex;

/// Computes exposure profiles for candidate routes against an incident
/// index.
///
/// Classification per route point is mutually exclusive with precedence
/// High > Medium > Safe: a point inside both radii counts once, as
/// High. Points are independent of one another, so the scan order never
/// affects the profile.
pub struct ExposureAnalyzer {
    config: AnalysisConfig,
}

impl ExposureAnalyzer {
    /// Creates an analyzer with the given configuration.
    #[must_use]
    pub const fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Creates an analyzer with the embedded default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(AnalysisConfig::embedded())
    }

    /// The analyzer's configuration.
    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Builds the per-tier incident index this analyzer scores against.
    #[must_use]
    pub fn build_index<'a, I>(&self, incidents: I) -> IncidentIndex
    where
        I: IntoIterator<Item = &'a Incident>,
    {
        IncidentIndex::build(incidents, &self.config.sampling)
    }

    /// Scores one route against the index.
    ///
    /// An empty index yields the trivially safe profile (0% high, 0%
    /// medium, 100% safe), never an error.
    #[must_use]
    pub fn analyze(&self, route: &Route, index: &IncidentIndex) -> ExposureProfile {
        let radii = self.config.radii;

        let mut high = 0_usize;
        let mut medium = 0_usize;
        let mut safe = 0_usize;

        for point in &route.points {
            if index.near_high(point.longitude, point.latitude, radii.high_degrees) {
                high += 1;
            } else if index.near_medium(point.longitude, point.latitude, radii.medium_degrees) {
                medium += 1;
            } else {
                safe += 1;
            }
        }

        ExposureProfile::from_counts(high, medium, safe, &self.config.thresholds)
    }
}
