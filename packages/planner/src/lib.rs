#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Crime-aware route planning pipeline.
//!
//! Runs the six scoring stages sequentially for each query: candidate
//! generation, exposure analysis against the classified incident
//! snapshot, risk classification, safety-priority selection, and
//! narration. Queries share no mutable state; each one reads a
//! consistent snapshot and builds its selection fresh.
//!
//! Only an unresolvable start/end location aborts a query. Routing
//! service outages fall back to synthesized candidates, malformed
//! incident records were already recovered at classification time, and
//! an unmet safety policy is a typed outcome that the narrator
//! explains — the caller always receives either routes or a reason.

mod pipeline;

pub use pipeline::RoutePlanner;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use saferoute_analysis_models::{RouteSelection, SafetyAdvisory, SafetyPriority, TimeFilter};
use saferoute_routing_models::{GeoPoint, TravelMode};

/// Errors that abort a route query.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Start or end could not be resolved to usable coordinates. Fatal
    /// to the single query; nothing partial is returned.
    #[error("Missing location data: {reason}")]
    MissingLocationData {
        /// What failed to resolve.
        reason: String,
    },
}

/// One route planning query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteQuery {
    /// Trip origin.
    pub start: GeoPoint,
    /// Trip destination.
    pub end: GeoPoint,
    /// How the traveler is moving.
    pub travel_mode: TravelMode,
    /// How aggressively to exclude risky routes.
    pub safety_priority: SafetyPriority,
    /// Incident time-of-day filter applied before exposure analysis.
    pub time_filter: TimeFilter,
}

/// The result handed to the presentation layer: the surfaced routes and
/// their narration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan {
    /// Selected routes, at most one per risk tier, safest first.
    pub selection: RouteSelection,
    /// Status and message narrating the selection.
    pub advisory: SafetyAdvisory,
    /// The time filter the exposure analysis ran under.
    pub time_filter: TimeFilter,
}
