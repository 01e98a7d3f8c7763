//! The sequential planning pipeline.

use std::sync::Arc;

use saferoute_analysis::{ExposureAnalyzer, narrate, select_routes};
use saferoute_analysis_models::{SafetyPriority, SelectedRoute, TimeFilter};
use saferoute_incident::SnapshotStore;
use saferoute_routing::CandidateRouteGenerator;
use saferoute_routing_models::{GeoPoint, TravelMode};

use crate::{PlanError, RoutePlan, RouteQuery};

/// Executes route queries against the current incident snapshot.
///
/// Shared across concurrent queries: the snapshot store hands each
/// query a consistent `Arc` view, the generator and analyzer hold only
/// immutable configuration.
pub struct RoutePlanner {
    snapshots: Arc<SnapshotStore>,
    generator: CandidateRouteGenerator,
    analyzer: ExposureAnalyzer,
}

impl RoutePlanner {
    /// Creates a planner from its three collaborators.
    #[must_use]
    pub const fn new(
        snapshots: Arc<SnapshotStore>,
        generator: CandidateRouteGenerator,
        analyzer: ExposureAnalyzer,
    ) -> Self {
        Self {
            snapshots,
            generator,
            analyzer,
        }
    }

    /// Creates a planner with the registry-configured generator and the
    /// embedded analysis defaults.
    #[must_use]
    pub fn with_defaults(snapshots: Arc<SnapshotStore>) -> Self {
        Self::new(
            snapshots,
            CandidateRouteGenerator::from_registry(),
            ExposureAnalyzer::with_defaults(),
        )
    }

    /// Plans safe routes between two coordinate endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::MissingLocationData`] if either endpoint is
    /// not a usable WGS84 coordinate or the endpoints coincide. All
    /// other degradations (routing outage, unmet safety policy, sparse
    /// incident data) resolve to an explained [`RoutePlan`].
    pub async fn plan_safe_routes(&self, query: &RouteQuery) -> Result<RoutePlan, PlanError> {
        validate_endpoints(query.start, query.end)?;

        let snapshot = self.snapshots.current();

        let candidates = self
            .generator
            .generate(query.start, query.end, query.travel_mode)
            .await;
        let candidate_count = candidates.len();

        let index = self
            .analyzer
            .build_index(snapshot.incidents_for(query.time_filter.bucket()));

        let scored: Vec<SelectedRoute> = candidates
            .into_iter()
            .map(|route| SelectedRoute {
                exposure: self.analyzer.analyze(&route, &index),
                route,
            })
            .collect();

        let selection = select_routes(scored, query.safety_priority);
        let advisory = narrate(
            &selection,
            query.safety_priority,
            query.time_filter,
            candidate_count,
        );

        log::info!(
            "Planned {} route(s) ({:?}) for {} query",
            selection.len(),
            selection.outcome,
            query.safety_priority
        );

        Ok(RoutePlan {
            selection,
            advisory,
            time_filter: query.time_filter,
        })
    }

    /// Plans safe routes between two named reporting areas, resolving
    /// each name to the mean coordinates of its incidents in the
    /// current snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::MissingLocationData`] if either area is
    /// unknown to the snapshot, or the areas resolve to the same
    /// location.
    pub async fn plan_between_areas(
        &self,
        start_area: &str,
        end_area: &str,
        travel_mode: TravelMode,
        safety_priority: SafetyPriority,
        time_filter: TimeFilter,
    ) -> Result<RoutePlan, PlanError> {
        let snapshot = self.snapshots.current();

        let resolve = |area: &str| {
            snapshot.area_center(area).map_or_else(
                || {
                    Err(PlanError::MissingLocationData {
                        reason: format!("no coordinate data for area '{area}'"),
                    })
                },
                |(lat, lon)| Ok(GeoPoint::new(lat, lon)),
            )
        };

        let query = RouteQuery {
            start: resolve(start_area)?,
            end: resolve(end_area)?,
            travel_mode,
            safety_priority,
            time_filter,
        };

        self.plan_safe_routes(&query).await
    }
}

fn validate_endpoints(start: GeoPoint, end: GeoPoint) -> Result<(), PlanError> {
    if !start.is_valid() {
        return Err(PlanError::MissingLocationData {
            reason: format!(
                "start ({}, {}) is not a usable coordinate",
                start.latitude, start.longitude
            ),
        });
    }
    if !end.is_valid() {
        return Err(PlanError::MissingLocationData {
            reason: format!(
                "end ({}, {}) is not a usable coordinate",
                end.latitude, end.longitude
            ),
        });
    }
    if start == end {
        return Err(PlanError::MissingLocationData {
            reason: "start and end resolve to the same location".to_string(),
        });
    }
    Ok(())
}
