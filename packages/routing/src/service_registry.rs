//! Compile-time registry of routing service configurations.
//!
//! Each routing provider is defined in a TOML file under `services/`.
//! The registry embeds these at compile time and exposes them via
//! [`all_services`] and [`enabled_services`].

use serde::Deserialize;

/// A routing service configuration loaded from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutingServiceConfig {
    /// Unique identifier (e.g., `"osrm"`, `"synthesized"`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Whether this service participates in route generation.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Execution order — lower values are tried first.
    pub priority: u32,
    /// Provider-specific configuration.
    pub provider: ProviderConfig,
}

/// Provider-specific configuration, tagged by `type` in TOML.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProviderConfig {
    /// OSRM routing server.
    Osrm {
        /// API base URL (e.g., `"https://router.project-osrm.org"`).
        base_url: String,
        /// Request timeout in milliseconds. The pipeline never waits
        /// longer than this on the road network.
        timeout_ms: u64,
        /// Maximum alternatives to request per query (OSRM caps at 3).
        max_alternatives: u8,
    },
    /// Local geometric synthesis, no network.
    Synthesized,
}

const fn default_true() -> bool {
    true
}

// ── Compile-time embedded TOML files ────────────────────────────────

const SERVICE_TOMLS: &[(&str, &str)] = &[
    ("osrm", include_str!("../services/osrm.toml")),
    ("synthesized", include_str!("../services/synthesized.toml")),
];

#[cfg(test)]
const EXPECTED_SERVICE_COUNT: usize = 2;

/// Returns all routing service configurations (enabled and disabled).
///
/// # Panics
///
/// Panics if any TOML config is malformed (this is a compile-time
/// guarantee since the configs are embedded).
#[must_use]
pub fn all_services() -> Vec<RoutingServiceConfig> {
    SERVICE_TOMLS
        .iter()
        .map(|(name, toml_str)| {
            toml::de::from_str(toml_str)
                .unwrap_or_else(|e| panic!("Failed to parse routing service '{name}': {e}"))
        })
        .collect()
}

/// Returns only enabled services, sorted by priority (ascending).
#[must_use]
pub fn enabled_services() -> Vec<RoutingServiceConfig> {
    let mut services: Vec<RoutingServiceConfig> =
        all_services().into_iter().filter(|s| s.enabled).collect();
    services.sort_by_key(|s| s.priority);
    services
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn loads_all_services() {
        let services = all_services();
        assert_eq!(services.len(), EXPECTED_SERVICE_COUNT);
    }

    #[test]
    fn service_ids_are_unique() {
        let services = all_services();
        let mut seen = BTreeSet::new();
        for svc in &services {
            assert!(seen.insert(&svc.id), "Duplicate service ID: {}", svc.id);
        }
    }

    #[test]
    fn synthesized_fallback_is_always_enabled() {
        let services = enabled_services();
        assert!(
            services
                .iter()
                .any(|s| matches!(s.provider, ProviderConfig::Synthesized)),
            "The synthesized fallback must stay enabled so route \
             generation can never come up empty"
        );
    }

    #[test]
    fn enabled_services_sorted_by_priority() {
        let services = enabled_services();
        for window in services.windows(2) {
            assert!(
                window[0].priority <= window[1].priority,
                "Services not sorted by priority: {} ({}) > {} ({})",
                window[0].id,
                window[0].priority,
                window[1].id,
                window[1].priority
            );
        }
    }

    #[test]
    fn osrm_config_has_bounded_timeout() {
        for svc in &all_services() {
            if let ProviderConfig::Osrm {
                timeout_ms,
                max_alternatives,
                base_url,
            } = &svc.provider
            {
                assert!(*timeout_ms > 0, "{} timeout must be bounded", svc.id);
                assert!((1..=3).contains(max_alternatives));
                assert!(!base_url.is_empty());
            }
        }
    }
}
