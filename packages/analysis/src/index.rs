//! In-memory spatial index over classified incidents.
//!
//! Builds one R-tree per severity tier so per-point proximity checks
//! stay fast even against large snapshots. Low-severity incidents are
//! not indexed: they contribute nothing to exposure.
//!
//! When a tier exceeds the sampling bound, a deterministic seeded
//! sample is indexed instead of the full set. Identical snapshot and
//! policy always produce the identical index.

use rstar::RTree;
use saferoute_analysis_models::SamplingPolicy;
use saferoute_incident_models::{Incident, SeverityTier};

/// Per-tier R-tree indexes over incident coordinates.
///
/// Coordinates are stored `[longitude, latitude]` and queried in degree
/// space, matching the proximity radii configuration.
pub struct IncidentIndex {
    high: RTree<[f64; 2]>,
    medium: RTree<[f64; 2]>,
}

impl IncidentIndex {
    /// Builds the index from classified incidents.
    #[must_use]
    pub fn build<'a, I>(incidents: I, sampling: &SamplingPolicy) -> Self
    where
        I: IntoIterator<Item = &'a Incident>,
    {
        let mut high = Vec::new();
        let mut medium = Vec::new();

        for incident in incidents {
            let point = [incident.longitude, incident.latitude];
            match incident.severity {
                SeverityTier::High => high.push(point),
                SeverityTier::Medium => medium.push(point),
                SeverityTier::Low => {}
            }
        }

        sample_bounded(&mut high, sampling);
        sample_bounded(&mut medium, sampling);

        log::debug!(
            "Incident index built: {} high, {} medium points",
            high.len(),
            medium.len()
        );

        Self {
            high: RTree::bulk_load(high),
            medium: RTree::bulk_load(medium),
        }
    }

    /// Whether any high-severity incident lies within `radius` degrees
    /// of the point.
    #[must_use]
    pub fn near_high(&self, longitude: f64, latitude: f64, radius: f64) -> bool {
        self.high
            .locate_within_distance([longitude, latitude], radius * radius)
            .next()
            .is_some()
    }

    /// Whether any medium-severity incident lies within `radius`
    /// degrees of the point.
    #[must_use]
    pub fn near_medium(&self, longitude: f64, latitude: f64, radius: f64) -> bool {
        self.medium
            .locate_within_distance([longitude, latitude], radius * radius)
            .next()
            .is_some()
    }

    /// Number of indexed high-severity points.
    #[must_use]
    pub fn high_len(&self) -> usize {
        self.high.size()
    }

    /// Number of indexed medium-severity points.
    #[must_use]
    pub fn medium_len(&self) -> usize {
        self.medium.size()
    }
}

/// Deterministically samples `points` down to the configured bound.
///
/// Partial Fisher-Yates driven by a SplitMix64 stream: the same input
/// order, bound, and seed always select the same subset.
fn sample_bounded(points: &mut Vec<[f64; 2]>, sampling: &SamplingPolicy) {
    let max = sampling.max_indexed_per_tier;
    if points.len() <= max {
        return;
    }

    let total = points.len();
    log::debug!("Sampling {total} incident points down to {max}");

    let mut state = sampling.seed;
    for i in 0..max {
        #[allow(clippy::cast_possible_truncation)]
        let offset = (splitmix64(&mut state) % (total - i) as u64) as usize;
        points.swap(i, i + offset);
    }
    points.truncate(max);
}

/// SplitMix64 step; a tiny deterministic generator for sampling only.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use saferoute_incident_models::TimeOfDay;

    fn incident(lat: f64, lon: f64, severity: SeverityTier) -> Incident {
        Incident {
            latitude: lat,
            longitude: lon,
            area_name: None,
            category: None,
            severity,
            time_of_day: TimeOfDay::Night,
        }
    }

    #[test]
    fn partitions_by_tier_and_ignores_low() {
        let incidents = vec![
            incident(34.05, -118.30, SeverityTier::High),
            incident(34.06, -118.31, SeverityTier::Medium),
            incident(34.07, -118.32, SeverityTier::Low),
        ];
        let index = IncidentIndex::build(incidents.iter(), &SamplingPolicy::default());

        assert_eq!(index.high_len(), 1);
        assert_eq!(index.medium_len(), 1);
    }

    #[test]
    fn proximity_respects_radius() {
        let incidents = vec![incident(34.05, -118.30, SeverityTier::High)];
        let index = IncidentIndex::build(incidents.iter(), &SamplingPolicy::default());

        assert!(index.near_high(-118.30, 34.055, 0.01));
        assert!(!index.near_high(-118.30, 34.08, 0.01));
        assert!(!index.near_medium(-118.30, 34.05, 0.01));
    }

    #[test]
    fn sampling_bounds_large_tiers() {
        let incidents: Vec<Incident> = (0..500)
            .map(|i| incident(34.0 + f64::from(i) * 1e-4, -118.3, SeverityTier::High))
            .collect();

        let sampling = SamplingPolicy {
            max_indexed_per_tier: 100,
            seed: 42,
        };
        let index = IncidentIndex::build(incidents.iter(), &sampling);
        assert_eq!(index.high_len(), 100);
    }

    #[test]
    fn sampling_is_deterministic() {
        let mut points_a: Vec<[f64; 2]> = (0..300)
            .map(|i| [f64::from(i), f64::from(i) * 2.0])
            .collect();
        let mut points_b = points_a.clone();

        let sampling = SamplingPolicy {
            max_indexed_per_tier: 50,
            seed: 42,
        };
        sample_bounded(&mut points_a, &sampling);
        sample_bounded(&mut points_b, &sampling);
        assert_eq!(points_a, points_b);

        let different_seed = SamplingPolicy {
            max_indexed_per_tier: 50,
            seed: 43,
        };
        let mut points_c: Vec<[f64; 2]> = (0..300)
            .map(|i| [f64::from(i), f64::from(i) * 2.0])
            .collect();
        sample_bounded(&mut points_c, &different_seed);
        assert_ne!(points_a, points_c);
    }
}
