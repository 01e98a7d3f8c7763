#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geographic primitives, travel modes, and candidate route types.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Mean earth radius in meters, for haversine distance.
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a point from latitude/longitude degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both coordinates are finite and within WGS84 range.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Midpoint of the straight segment to `other`, in coordinate space.
    #[must_use]
    pub fn midpoint(&self, other: &Self) -> Self {
        Self::new(
            f64::midpoint(self.latitude, other.latitude),
            f64::midpoint(self.longitude, other.longitude),
        )
    }

    /// Haversine distance to another point in meters.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();
        EARTH_RADIUS_METERS * c
    }
}

/// How the traveler is moving.
///
/// Each mode carries the waypoint density and lateral curve factor used
/// for synthesized routes (walking routes use denser, tighter waypoints
/// than driving routes) plus the OSRM profile name and an average urban
/// speed for duration estimates.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelMode {
    /// Car travel.
    Driving,
    /// On foot.
    Walking,
    /// Bicycle.
    Cycling,
}

impl TravelMode {
    /// OSRM routing profile for this mode.
    #[must_use]
    pub const fn osrm_profile(self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "foot",
            Self::Cycling => "bike",
        }
    }

    /// Number of interpolation segments for synthesized routes.
    #[must_use]
    pub const fn waypoints(self) -> usize {
        match self {
            Self::Driving => 15,
            Self::Walking => 25,
            Self::Cycling => 20,
        }
    }

    /// Base lateral offset in degrees for synthesized route curves.
    #[must_use]
    pub const fn curve_factor(self) -> f64 {
        match self {
            Self::Driving => 0.001,
            Self::Walking => 0.0015,
            Self::Cycling => 0.0012,
        }
    }

    /// Average urban speed in km/h, for duration estimates.
    #[must_use]
    pub const fn average_speed_kmh(self) -> f64 {
        match self {
            Self::Driving => 50.0,
            Self::Walking => 5.0,
            Self::Cycling => 15.0,
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Driving, Self::Walking, Self::Cycling]
    }
}

/// Named geometric patterns for synthesized candidate routes.
///
/// Each pattern perturbs the straight-line interpolation differently so
/// that candidates probe geometrically distinct corridors between the
/// endpoints.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RoutePattern {
    /// Straight-line interpolation, no lateral offset.
    Direct,
    /// Single arc bowed north of the direct line.
    NorthernArc,
    /// Single arc bowed south of the direct line.
    SouthernArc,
    /// Single detour bowed east of the direct line.
    EasternDetour,
    /// Single detour bowed west of the direct line.
    WesternDetour,
    /// Wide multi-lobe detour with extra waypoints, the strongest
    /// avoidance pattern.
    Conservative,
    /// Gentle meandering curve between the endpoints.
    Scenic,
    /// Sparse, nearly straight polyline approximating a limited-access
    /// road.
    Highway,
}

impl RoutePattern {
    /// Human-readable pattern name for narration and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::NorthernArc => "northern arc",
            Self::SouthernArc => "southern arc",
            Self::EasternDetour => "eastern detour",
            Self::WesternDetour => "western detour",
            Self::Conservative => "conservative",
            Self::Scenic => "scenic",
            Self::Highway => "highway",
        }
    }

    /// All patterns, in synthesis order. Direct is first so the
    /// always-available fallback route is generated before any detour.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Direct,
            Self::NorthernArc,
            Self::SouthernArc,
            Self::EasternDetour,
            Self::WesternDetour,
            Self::Conservative,
            Self::Scenic,
            Self::Highway,
        ]
    }
}

/// Where a candidate route came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RouteOrigin {
    /// Returned by the external road routing service.
    Service {
        /// Zero-based alternative index in the service response.
        alternative: u8,
    },
    /// Synthesized from a geometric pattern.
    Pattern {
        /// The pattern that produced this route.
        pattern: RoutePattern,
    },
}

impl RouteOrigin {
    /// Human-readable origin for narration and logs.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Service { alternative } => format!("road alternative {}", alternative + 1),
            Self::Pattern { pattern } => pattern.label().to_string(),
        }
    }
}

/// One candidate route between the requested endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// How this candidate was produced.
    pub origin: RouteOrigin,
    /// Ordered polyline, at least two points.
    pub points: Vec<GeoPoint>,
    /// Total distance in meters, when known or estimated.
    pub distance_meters: Option<f64>,
    /// Total duration in seconds, when known or estimated.
    pub duration_seconds: Option<f64>,
}

impl Route {
    /// Creates a route without distance/duration metrics.
    #[must_use]
    pub const fn new(origin: RouteOrigin, points: Vec<GeoPoint>) -> Self {
        Self {
            origin,
            points,
            distance_meters: None,
            duration_seconds: None,
        }
    }

    /// Haversine length of the polyline in meters.
    #[must_use]
    pub fn polyline_length_meters(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum()
    }

    /// Fills in estimated distance (polyline length) and duration (from
    /// the mode's average speed) when the route carries no service
    /// metrics.
    #[must_use]
    pub fn with_estimates(mut self, mode: TravelMode) -> Self {
        let meters = self.polyline_length_meters();
        self.distance_meters.get_or_insert(meters);
        self.duration_seconds
            .get_or_insert(meters / 1000.0 / mode.average_speed_kmh() * 3600.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_coordinate_ranges() {
        assert!(GeoPoint::new(34.05, -118.25).is_valid());
        assert!(!GeoPoint::new(f64::NAN, -118.25).is_valid());
        assert!(!GeoPoint::new(91.0, -118.25).is_valid());
        assert!(!GeoPoint::new(34.05, -181.0).is_valid());
    }

    #[test]
    fn haversine_distance_la_scale() {
        // ~0.2 degrees of longitude at latitude 34 is roughly 18.4 km.
        let a = GeoPoint::new(34.05, -118.40);
        let b = GeoPoint::new(34.05, -118.20);
        let d = a.distance_to(&b);
        assert!((17_000.0..20_000.0).contains(&d), "distance {d}");
    }

    #[test]
    fn midpoint_averages_coordinates() {
        let mid = GeoPoint::new(34.0, -118.4).midpoint(&GeoPoint::new(34.1, -118.2));
        assert!((mid.latitude - 34.05).abs() < 1e-12);
        assert!((mid.longitude - -118.3).abs() < 1e-12);
    }

    #[test]
    fn walking_is_denser_than_driving() {
        assert!(TravelMode::Walking.waypoints() > TravelMode::Driving.waypoints());
        assert!(TravelMode::Walking.curve_factor() > TravelMode::Driving.curve_factor());
    }

    #[test]
    fn pattern_palette_is_eight_with_direct_first() {
        assert_eq!(RoutePattern::all().len(), 8);
        assert_eq!(RoutePattern::all()[0], RoutePattern::Direct);
    }

    #[test]
    fn estimates_fill_missing_metrics_only() {
        let points = vec![GeoPoint::new(34.0, -118.4), GeoPoint::new(34.0, -118.2)];

        let estimated = Route::new(
            RouteOrigin::Pattern {
                pattern: RoutePattern::Direct,
            },
            points.clone(),
        )
        .with_estimates(TravelMode::Driving);
        assert!(estimated.distance_meters.unwrap() > 0.0);
        assert!(estimated.duration_seconds.unwrap() > 0.0);

        let mut service = Route::new(RouteOrigin::Service { alternative: 0 }, points);
        service.distance_meters = Some(12_345.0);
        service.duration_seconds = Some(600.0);
        let kept = service.with_estimates(TravelMode::Driving);
        assert!((kept.distance_meters.unwrap() - 12_345.0).abs() < f64::EPSILON);
        assert!((kept.duration_seconds.unwrap() - 600.0).abs() < f64::EPSILON);
    }
}
