//! OSRM routing service client.
//!
//! Queries the OSRM `route` endpoint for up to 3 alternative road
//! routes. The public server offers no availability guarantees, so the
//! client enforces a bounded request timeout and callers fall back to
//! synthesized routes on any failure.
//!
//! See <https://project-osrm.org/docs/v5.24.0/api/#route-service>

use async_trait::async_trait;
use saferoute_routing_models::{GeoPoint, Route, RouteOrigin, TravelMode};

use crate::{RoutingError, RoutingService};

/// OSRM-backed implementation of [`RoutingService`].
pub struct OsrmRoutingService {
    client: reqwest::Client,
    base_url: String,
    max_alternatives: u8,
}

impl OsrmRoutingService {
    /// Creates a client with the given base URL and a bounded request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(
        base_url: impl Into<String>,
        timeout: std::time::Duration,
        max_alternatives: u8,
    ) -> Result<Self, RoutingError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            max_alternatives: max_alternatives.min(3),
        })
    }
}

#[async_trait]
impl RoutingService for OsrmRoutingService {
    fn id(&self) -> &str {
        "osrm"
    }

    async fn alternatives(
        &self,
        start: GeoPoint,
        end: GeoPoint,
        mode: TravelMode,
        max_alternatives: u8,
    ) -> Result<Vec<Route>, RoutingError> {
        let url = format!(
            "{}/route/v1/{}/{},{};{},{}",
            self.base_url,
            mode.osrm_profile(),
            start.longitude,
            start.latitude,
            end.longitude,
            end.latitude,
        );

        let max = max_alternatives.min(self.max_alternatives);

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("geometries", "geojson"),
                ("steps", "false"),
                ("overview", "full"),
            ])
            .query(&[("alternatives", max.to_string())])
            .send()
            .await?;

        let body: serde_json::Value = resp.json().await?;
        parse_response(&body, max)
    }
}

/// Parses an OSRM route response into candidate routes.
///
/// Alternatives with degenerate geometry (fewer than two points) are
/// skipped rather than failing the whole response.
fn parse_response(body: &serde_json::Value, max: u8) -> Result<Vec<Route>, RoutingError> {
    let code = body["code"].as_str().unwrap_or("");
    if code != "Ok" {
        return Err(RoutingError::NoRoutes {
            message: format!("OSRM status '{code}'"),
        });
    }

    let raw_routes = body["routes"].as_array().ok_or_else(|| RoutingError::Parse {
        message: "OSRM response has no routes array".to_string(),
    })?;

    let mut routes = Vec::new();

    for (idx, raw) in raw_routes.iter().take(usize::from(max)).enumerate() {
        let Some(coordinates) = raw["geometry"]["coordinates"].as_array() else {
            log::warn!("OSRM alternative {idx} missing GeoJSON coordinates, skipping");
            continue;
        };

        let points: Vec<GeoPoint> = coordinates
            .iter()
            .filter_map(|pair| {
                let lon = pair.get(0)?.as_f64()?;
                let lat = pair.get(1)?.as_f64()?;
                Some(GeoPoint::new(lat, lon))
            })
            .collect();

        if points.len() < 2 {
            log::warn!("OSRM alternative {idx} has degenerate geometry, skipping");
            continue;
        }

        #[allow(clippy::cast_possible_truncation)]
        let mut route = Route::new(
            RouteOrigin::Service {
                alternative: idx as u8,
            },
            points,
        );
        route.distance_meters = raw["distance"].as_f64();
        route.duration_seconds = raw["duration"].as_f64();
        routes.push(route);
    }

    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_osrm_alternatives() {
        let body = serde_json::json!({
            "code": "Ok",
            "routes": [
                {
                    "geometry": {
                        "type": "LineString",
                        "coordinates": [[-118.40, 34.05], [-118.30, 34.055], [-118.20, 34.06]]
                    },
                    "distance": 18_500.0,
                    "duration": 1_320.0
                },
                {
                    "geometry": {
                        "type": "LineString",
                        "coordinates": [[-118.40, 34.05], [-118.32, 34.08], [-118.20, 34.06]]
                    },
                    "distance": 21_000.0,
                    "duration": 1_500.0
                }
            ]
        });

        let routes = parse_response(&body, 3).unwrap();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].origin, RouteOrigin::Service { alternative: 0 });
        assert!((routes[0].points[0].latitude - 34.05).abs() < 1e-9);
        assert!((routes[0].points[0].longitude - -118.40).abs() < 1e-9);
        assert!((routes[0].distance_meters.unwrap() - 18_500.0).abs() < f64::EPSILON);
        assert!((routes[1].duration_seconds.unwrap() - 1_500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn respects_max_alternatives() {
        let body = serde_json::json!({
            "code": "Ok",
            "routes": [
                {"geometry": {"coordinates": [[-118.4, 34.0], [-118.2, 34.1]]}},
                {"geometry": {"coordinates": [[-118.4, 34.0], [-118.2, 34.2]]}},
                {"geometry": {"coordinates": [[-118.4, 34.0], [-118.2, 34.3]]}}
            ]
        });

        let routes = parse_response(&body, 2).unwrap();
        assert_eq!(routes.len(), 2);
    }

    #[test]
    fn non_ok_status_is_no_routes() {
        let body = serde_json::json!({"code": "NoRoute", "routes": []});
        assert!(matches!(
            parse_response(&body, 3),
            Err(RoutingError::NoRoutes { .. })
        ));
    }

    #[test]
    fn missing_routes_array_is_parse_error() {
        let body = serde_json::json!({"code": "Ok"});
        assert!(matches!(
            parse_response(&body, 3),
            Err(RoutingError::Parse { .. })
        ));
    }

    #[test]
    fn degenerate_geometry_is_skipped() {
        let body = serde_json::json!({
            "code": "Ok",
            "routes": [
                {"geometry": {"coordinates": [[-118.4, 34.0]]}},
                {"geometry": {"coordinates": [[-118.4, 34.0], [-118.2, 34.1]]}}
            ]
        });

        let routes = parse_response(&body, 3).unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].origin, RouteOrigin::Service { alternative: 1 });
    }
}
