//! Candidate route generation strategy.
//!
//! Tries the configured road routing service first (0–3 alternatives are
//! all acceptable), then tops the candidate list up with synthesized
//! patterns until the requested count is reached. Service failures are
//! recovered locally and never surfaced to the caller.

use std::sync::Arc;

use saferoute_routing_models::{GeoPoint, Route, RoutePattern, TravelMode};

use crate::service_registry::{ProviderConfig, enabled_services};
use crate::{OsrmRoutingService, RoutingService, patterns};

/// Default number of candidates per query: the full synthesized palette.
pub const DEFAULT_MAX_CANDIDATES: usize = 8;

/// Produces candidate routes between two points.
///
/// The generator's contract: at least one route (the direct
/// interpolation) is returned for any two distinct endpoints, even when
/// every other strategy fails.
pub struct CandidateRouteGenerator {
    road_service: Option<Arc<dyn RoutingService>>,
    max_candidates: usize,
}

impl CandidateRouteGenerator {
    /// Builds a generator from the embedded service registry.
    ///
    /// The highest-priority enabled road provider becomes the primary
    /// service; if its client cannot be constructed the generator runs
    /// synthesized-only.
    #[must_use]
    pub fn from_registry() -> Self {
        let mut road_service: Option<Arc<dyn RoutingService>> = None;

        for config in enabled_services() {
            match &config.provider {
                ProviderConfig::Osrm {
                    base_url,
                    timeout_ms,
                    max_alternatives,
                } => {
                    match OsrmRoutingService::new(
                        base_url.clone(),
                        std::time::Duration::from_millis(*timeout_ms),
                        *max_alternatives,
                    ) {
                        Ok(service) => {
                            road_service = Some(Arc::new(service));
                            break;
                        }
                        Err(e) => {
                            log::warn!("Failed to construct routing service '{}': {e}", config.id);
                        }
                    }
                }
                // The synthesized palette needs no client; it is the
                // implicit fallback for every generator.
                ProviderConfig::Synthesized => break,
            }
        }

        Self {
            road_service,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }

    /// A generator that only synthesizes patterns (no network).
    #[must_use]
    pub const fn synthesized_only() -> Self {
        Self {
            road_service: None,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }

    /// A generator using the given road service.
    #[must_use]
    pub fn with_service(service: Arc<dyn RoutingService>) -> Self {
        Self {
            road_service: Some(service),
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }

    /// Overrides the candidate count (clamped to at least 1).
    #[must_use]
    pub const fn max_candidates(mut self, count: usize) -> Self {
        self.max_candidates = if count == 0 { 1 } else { count };
        self
    }

    /// Generates candidate routes in priority order: road alternatives
    /// first, then synthesized patterns until the candidate count is
    /// reached.
    ///
    /// Never returns an empty list; the direct interpolation is always
    /// available.
    pub async fn generate(&self, start: GeoPoint, end: GeoPoint, mode: TravelMode) -> Vec<Route> {
        let mut candidates: Vec<Route> = Vec::with_capacity(self.max_candidates);

        if let Some(service) = &self.road_service {
            match service.alternatives(start, end, mode, 3).await {
                Ok(routes) => {
                    log::info!(
                        "Routing service '{}' returned {} alternative(s)",
                        service.id(),
                        routes.len()
                    );
                    candidates.extend(
                        routes
                            .into_iter()
                            .take(self.max_candidates)
                            .map(|r| r.with_estimates(mode)),
                    );
                }
                Err(e) => {
                    log::warn!(
                        "Routing service '{}' unavailable, using synthesized patterns: {e}",
                        service.id()
                    );
                }
            }
        }

        for pattern in RoutePattern::all() {
            if candidates.len() >= self.max_candidates {
                break;
            }
            candidates.push(patterns::synthesize(start, end, mode, *pattern).with_estimates(mode));
        }

        candidates
    }
}

impl Default for CandidateRouteGenerator {
    fn default() -> Self {
        Self::from_registry()
    }
}
