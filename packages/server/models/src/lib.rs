#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the saferoute server.
//!
//! These types are serialized to JSON for the REST API. They are
//! separate from the engine's internal types so the API contract can
//! evolve independently; route polylines cross the boundary as GeoJSON
//! `LineString` geometries for the presentation layer's map renderer.

use geojson::{Geometry, Value};
use serde::{Deserialize, Serialize};

use saferoute_analysis_models::{
    ExposureProfile, RiskLevel, SafetyAdvisory, SafetyPriority, SelectedRoute, SelectionOutcome,
    TimeFilter,
};
use saferoute_incident::ClassificationStats;
use saferoute_routing_models::{GeoPoint, TravelMode};

/// `GET /api/health` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the server is up.
    pub healthy: bool,
    /// Crate version.
    pub version: String,
}

/// `POST /api/routes/plan` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRouteRequest {
    /// Trip origin.
    pub start: GeoPoint,
    /// Trip destination.
    pub end: GeoPoint,
    /// Travel mode; driving when omitted.
    #[serde(default = "default_travel_mode")]
    pub travel_mode: TravelMode,
    /// Safety priority; balanced when omitted.
    #[serde(default = "default_safety_priority")]
    pub safety_priority: SafetyPriority,
    /// Incident time-of-day filter; any time when omitted.
    #[serde(default = "default_time_filter")]
    pub time_of_day: TimeFilter,
}

const fn default_travel_mode() -> TravelMode {
    TravelMode::Driving
}

const fn default_safety_priority() -> SafetyPriority {
    SafetyPriority::Balanced
}

const fn default_time_filter() -> TimeFilter {
    TimeFilter::Any
}

/// One selected route as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSelectedRoute {
    /// Categorical risk level.
    pub risk_level: RiskLevel,
    /// Human-readable origin ("direct", "road alternative 1", ...).
    pub origin: String,
    /// Route geometry as a GeoJSON `LineString` (longitude, latitude).
    pub polyline: Geometry,
    /// Total distance in meters, when known.
    pub distance_meters: Option<f64>,
    /// Total duration in seconds, when known.
    pub duration_seconds: Option<f64>,
    /// Full exposure metrics for this route.
    pub exposure: ExposureProfile,
}

impl From<&SelectedRoute> for ApiSelectedRoute {
    fn from(selected: &SelectedRoute) -> Self {
        let coordinates = selected
            .route
            .points
            .iter()
            .map(|point| vec![point.longitude, point.latitude])
            .collect();

        Self {
            risk_level: selected.exposure.risk_level,
            origin: selected.route.origin.label(),
            polyline: Geometry::new(Value::LineString(coordinates)),
            distance_meters: selected.route.distance_meters,
            duration_seconds: selected.route.duration_seconds,
            exposure: selected.exposure.clone(),
        }
    }
}

/// `POST /api/routes/plan` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRoutePlan {
    /// Selected routes, safest first.
    pub routes: Vec<ApiSelectedRoute>,
    /// How the selection concluded.
    pub outcome: SelectionOutcome,
    /// Narrated status and message.
    pub advisory: SafetyAdvisory,
    /// The time filter the analysis ran under.
    pub time_of_day: TimeFilter,
}

/// `POST /api/incidents` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSnapshotRefresh {
    /// Incidents in the new snapshot.
    pub incidents: usize,
    /// Resolvable area names in the new snapshot.
    pub areas: usize,
    /// How the submitted batch classified.
    pub stats: ClassificationStats,
}
