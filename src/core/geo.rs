//! Great-circle geometry for the map overlay.
//!
//! The flight path is the geodesic between the two airports, sampled into
//! evenly spaced points so a progress fraction maps directly onto a prefix
//! of the polyline.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Below this central angle (radians) two points are treated as the same spot.
const DEGENERATE_ANGLE: f64 = 1e-12;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    fn to_unit_vector(self) -> [f64; 3] {
        let lat = self.latitude.to_radians();
        let lon = self.longitude.to_radians();
        [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
    }

    fn from_unit_vector([x, y, z]: [f64; 3]) -> Self {
        let latitude = z.atan2((x * x + y * y).sqrt()).to_degrees();
        let longitude = y.atan2(x).to_degrees();
        Self { latitude, longitude }
    }
}

/// Great-circle distance using the haversine formula.
pub fn haversine_distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Position a `fraction` of the way along the geodesic from `start` to `end`.
pub fn point_along(start: Coordinate, end: Coordinate, fraction: f64) -> Coordinate {
    let p = start.to_unit_vector();
    let q = end.to_unit_vector();
    let dot = (p[0] * q[0] + p[1] * q[1] + p[2] * q[2]).clamp(-1.0, 1.0);
    let angle = dot.acos();
    let sin_angle = angle.sin();

    if angle < DEGENERATE_ANGLE {
        return start;
    }
    if sin_angle.abs() < DEGENERATE_ANGLE {
        // Antipodal: every great circle works, fall back to a straight blend.
        return lerp(start, end, fraction);
    }

    let a = ((1.0 - fraction) * angle).sin() / sin_angle;
    let b = (fraction * angle).sin() / sin_angle;
    Coordinate::from_unit_vector([
        a * p[0] + b * q[0],
        a * p[1] + b * q[1],
        a * p[2] + b * q[2],
    ])
}

/// Sample the geodesic into `segments + 1` points, endpoints included.
pub fn great_circle(start: Coordinate, end: Coordinate, segments: usize) -> Vec<Coordinate> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| match i {
            0 => start,
            i if i == segments => end,
            i => point_along(start, end, i as f64 / segments as f64),
        })
        .collect()
}

/// The flown prefix of `points`: everything up to `fraction` of the path.
///
/// `fraction` is clamped to [0, 1].  The final point is interpolated
/// between the two vertices it falls between.
pub fn partial_path(points: &[Coordinate], fraction: f64) -> Vec<Coordinate> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
    let last = points.len() - 1;
    let position = fraction * last as f64;
    let whole = (position.floor() as usize).min(last);
    let remainder = position - whole as f64;

    let mut out = points[..=whole].to_vec();
    if whole < last && remainder > 0.0 {
        out.push(lerp(points[whole], points[whole + 1], remainder));
    }
    out
}

/// Linear blend in lat/lon, taking the short way across the antimeridian.
fn lerp(a: Coordinate, b: Coordinate, t: f64) -> Coordinate {
    let mut delta_lon = b.longitude - a.longitude;
    if delta_lon > 180.0 {
        delta_lon -= 360.0;
    } else if delta_lon < -180.0 {
        delta_lon += 360.0;
    }
    let mut longitude = a.longitude + delta_lon * t;
    if longitude > 180.0 {
        longitude -= 360.0;
    } else if longitude < -180.0 {
        longitude += 360.0;
    }
    Coordinate {
        latitude: a.latitude + (b.latitude - a.latitude) * t,
        longitude,
    }
}

// ───────────────────────────────────────── viewport ──────────

/// Longitude (x) and latitude (y) bounds for the map canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl MapViewport {
    /// Smallest box holding both points, grown by `padding` degrees on each
    /// side and clipped to the world.
    pub fn enclosing(a: Coordinate, b: Coordinate, padding: f64) -> Self {
        let min_lon = a.longitude.min(b.longitude) - padding;
        let max_lon = a.longitude.max(b.longitude) + padding;
        let min_lat = a.latitude.min(b.latitude) - padding;
        let max_lat = a.latitude.max(b.latitude) + padding;
        Self {
            x_bounds: [min_lon.max(-180.0), max_lon.min(180.0)],
            y_bounds: [min_lat.max(-90.0), max_lat.min(90.0)],
        }
    }
}
