#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Candidate route generation.
//!
//! Produces several geometrically distinct polylines between two points
//! using a multi-provider strategy configured via TOML files in
//! `services/`:
//!
//! 1. **OSRM** (priority 1) — real road alternatives from an OSRM
//!    server, up to 3 per query, with a bounded request timeout.
//! 2. **Synthesized** (priority 2) — a fixed palette of geometric
//!    patterns derived from straight-line interpolation. Always
//!    available, no I/O.
//!
//! The road service is treated as unreliable: timeouts and outages are
//! expected, logged, and recovered by falling back to the synthesized
//! palette. The generator's contract is that at least one route (the
//! direct interpolation) is returned for any two distinct endpoints.

pub mod generator;
pub mod osrm;
pub mod patterns;
pub mod service_registry;

use async_trait::async_trait;
use saferoute_routing_models::{GeoPoint, Route, TravelMode};
use thiserror::Error;

pub use generator::CandidateRouteGenerator;
pub use osrm::OsrmRoutingService;
pub use patterns::SynthesizedRoutingService;

/// Errors from routing service operations.
///
/// These never escape the generator: any service error downgrades the
/// query to the synthesized fallback.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// HTTP request failed (connection, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response parsing failed.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parsing failure.
        message: String,
    },

    /// The service answered but reported no usable routes.
    #[error("Service returned no routes: {message}")]
    NoRoutes {
        /// Service-reported status or reason.
        message: String,
    },
}

/// Capability trait for road routing providers.
///
/// Implementations return up to `max_alternatives` polylines between the
/// endpoints. Callers must treat every implementation as fallible and
/// slow; the synthesized fallback keeps the pipeline from ever blocking
/// on an unavailable provider.
#[async_trait]
pub trait RoutingService: Send + Sync {
    /// Returns a unique identifier for this service (e.g. `"osrm"`).
    fn id(&self) -> &str;

    /// Fetches up to `max_alternatives` alternative routes.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError`] if the provider is unreachable, times
    /// out, or answers with an unusable response.
    async fn alternatives(
        &self,
        start: GeoPoint,
        end: GeoPoint,
        mode: TravelMode,
        max_alternatives: u8,
    ) -> Result<Vec<Route>, RoutingError>;
}
