//! Synthesized route patterns.
//!
//! When no road routing service is reachable, candidates are synthesized
//! by perturbing the straight-line interpolation between the endpoints
//! with sinusoidal lateral offsets. Each pattern uses its own amplitude,
//! frequency, window, and waypoint density so the palette probes
//! geometrically distinct corridors.
//!
//! Offsets scale with both the travel mode's curve factor and the
//! endpoint span, so detour patterns clear incident clusters on long
//! routes as well as short ones.

use async_trait::async_trait;
use saferoute_routing_models::{GeoPoint, Route, RouteOrigin, RoutePattern, TravelMode};

use crate::{RoutingError, RoutingService};

/// Fraction of the endpoint span contributed to the lateral amplitude.
const SPAN_AMPLITUDE_FRACTION: f64 = 0.12;

/// Synthesizes one candidate route for the given pattern.
///
/// Endpoints are always emitted exactly; offsets only apply to interior
/// waypoints.
#[must_use]
pub fn synthesize(start: GeoPoint, end: GeoPoint, mode: TravelMode, pattern: RoutePattern) -> Route {
    let d_lat = end.latitude - start.latitude;
    let d_lon = end.longitude - start.longitude;
    let span = d_lat.hypot(d_lon);
    let amplitude = mode.curve_factor() + span * SPAN_AMPLITUDE_FRACTION;

    let segments = match pattern {
        // Sparse polyline approximating a limited-access road.
        RoutePattern::Highway => (mode.waypoints() / 2).max(6),
        // Extra waypoints for the widest detour.
        RoutePattern::Conservative => mode.waypoints() + 5,
        _ => mode.waypoints(),
    };

    let mut points = Vec::with_capacity(segments + 1);

    for i in 0..=segments {
        #[allow(clippy::cast_precision_loss)]
        let t = i as f64 / segments as f64;

        let mut latitude = start.latitude + d_lat * t;
        let mut longitude = start.longitude + d_lon * t;

        if i > 0 && i < segments {
            let (lat_off, lon_off) = lateral_offset(pattern, t, amplitude);
            latitude += lat_off;
            longitude += lon_off;
        }

        points.push(GeoPoint::new(latitude, longitude));
    }

    Route::new(RouteOrigin::Pattern { pattern }, points)
}

/// Lateral offset for one interior waypoint at progress `t` (0..1).
fn lateral_offset(pattern: RoutePattern, t: f64, amplitude: f64) -> (f64, f64) {
    use std::f64::consts::PI;

    match pattern {
        RoutePattern::Direct | RoutePattern::Highway => (0.0, 0.0),

        RoutePattern::NorthernArc => (amplitude * (PI * t).sin(), 0.0),
        RoutePattern::SouthernArc => (-amplitude * (PI * t).sin(), 0.0),
        RoutePattern::EasternDetour => (0.0, amplitude * (PI * t).sin()),
        RoutePattern::WesternDetour => (0.0, -amplitude * (PI * t).sin()),

        RoutePattern::Conservative => {
            if !(0.1..=0.9).contains(&t) {
                return (0.0, 0.0);
            }
            // Multi-lobe detour, strongest near the middle of the route.
            let taper = 1.0 - (t - 0.5).abs();
            (
                2.0 * amplitude * (3.0 * PI * t).sin() * taper,
                2.0 * amplitude * (2.5 * PI * t).cos() * taper,
            )
        }

        RoutePattern::Scenic => {
            if !(0.2..=0.8).contains(&t) {
                return (0.0, 0.0);
            }
            (
                0.5 * amplitude * (2.0 * PI * t).sin(),
                0.5 * amplitude * (1.5 * PI * t).cos(),
            )
        }
    }
}

/// [`RoutingService`] implementation backed by the pattern palette.
///
/// Always available and infallible; used when the road network service
/// is disabled or unreachable.
pub struct SynthesizedRoutingService;

#[async_trait]
impl RoutingService for SynthesizedRoutingService {
    fn id(&self) -> &str {
        "synthesized"
    }

    async fn alternatives(
        &self,
        start: GeoPoint,
        end: GeoPoint,
        mode: TravelMode,
        max_alternatives: u8,
    ) -> Result<Vec<Route>, RoutingError> {
        Ok(RoutePattern::all()
            .iter()
            .take(usize::from(max_alternatives))
            .map(|pattern| synthesize(start, end, mode, *pattern).with_estimates(mode))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: GeoPoint = GeoPoint::new(34.05, -118.40);
    const END: GeoPoint = GeoPoint::new(34.06, -118.20);

    #[test]
    fn endpoints_are_exact_for_every_pattern() {
        for pattern in RoutePattern::all() {
            let route = synthesize(START, END, TravelMode::Driving, *pattern);
            let first = route.points.first().unwrap();
            let last = route.points.last().unwrap();

            assert!((first.latitude - START.latitude).abs() < 1e-12, "{pattern}");
            assert!((first.longitude - START.longitude).abs() < 1e-12);
            assert!((last.latitude - END.latitude).abs() < 1e-12);
            assert!((last.longitude - END.longitude).abs() < 1e-12);
            assert!(route.points.len() >= 2);
        }
    }

    #[test]
    fn patterns_are_geometrically_distinct() {
        let direct = synthesize(START, END, TravelMode::Driving, RoutePattern::Direct);
        for pattern in RoutePattern::all() {
            if matches!(pattern, RoutePattern::Direct | RoutePattern::Highway) {
                continue;
            }
            let route = synthesize(START, END, TravelMode::Driving, *pattern);
            let max_deviation = route
                .points
                .iter()
                .zip(direct.points.iter())
                .map(|(a, b)| (a.latitude - b.latitude).hypot(a.longitude - b.longitude))
                .fold(0.0_f64, f64::max);
            assert!(
                max_deviation > 1e-4,
                "{pattern} should deviate from the direct line"
            );
        }
    }

    #[test]
    fn opposite_arcs_bow_opposite_ways() {
        let north = synthesize(START, END, TravelMode::Driving, RoutePattern::NorthernArc);
        let south = synthesize(START, END, TravelMode::Driving, RoutePattern::SouthernArc);
        let direct = synthesize(START, END, TravelMode::Driving, RoutePattern::Direct);

        let mid = direct.points.len() / 2;
        assert!(north.points[mid].latitude > direct.points[mid].latitude);
        assert!(south.points[mid].latitude < direct.points[mid].latitude);
    }

    #[test]
    fn conservative_detours_widest() {
        let conservative = synthesize(START, END, TravelMode::Driving, RoutePattern::Conservative);
        let arc = synthesize(START, END, TravelMode::Driving, RoutePattern::NorthernArc);

        let lateral = |route: &Route| {
            route
                .points
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    #[allow(clippy::cast_precision_loss)]
                    let t = i as f64 / (route.points.len() - 1) as f64;
                    let base_lat = START.latitude + (END.latitude - START.latitude) * t;
                    (p.latitude - base_lat).abs()
                })
                .fold(0.0_f64, f64::max)
        };

        assert!(lateral(&conservative) > lateral(&arc));
    }

    #[test]
    fn walking_routes_are_denser_than_driving() {
        let walk = synthesize(START, END, TravelMode::Walking, RoutePattern::Direct);
        let drive = synthesize(START, END, TravelMode::Driving, RoutePattern::Direct);
        assert!(walk.points.len() > drive.points.len());
    }

    #[test]
    fn highway_is_sparser_than_direct() {
        let highway = synthesize(START, END, TravelMode::Driving, RoutePattern::Highway);
        let direct = synthesize(START, END, TravelMode::Driving, RoutePattern::Direct);
        assert!(highway.points.len() < direct.points.len());
    }

    #[test]
    fn synthesis_is_deterministic() {
        for pattern in RoutePattern::all() {
            let a = synthesize(START, END, TravelMode::Cycling, *pattern);
            let b = synthesize(START, END, TravelMode::Cycling, *pattern);
            assert_eq!(a, b);
        }
    }

    #[tokio::test]
    async fn service_yields_full_palette() {
        let service = SynthesizedRoutingService;
        let routes = service
            .alternatives(START, END, TravelMode::Driving, 8)
            .await
            .unwrap();

        assert_eq!(routes.len(), 8);
        assert!(routes.iter().all(|r| r.distance_meters.is_some()));
        assert_eq!(
            routes[0].origin,
            RouteOrigin::Pattern {
                pattern: RoutePattern::Direct
            }
        );
    }
}
