//! Great-circle distance, bearing and cross-track computations on a
//! spherical Earth model.

use crate::geo::{LatLng, MEAN_EARTH_RADIUS, PROJECTION_EPSILON};
use crate::route::Segment;

/// Great-circle distance between two points, in meters, via the haversine
/// formula. Symmetric, and zero for identical points.
pub fn haversine_distance(a: &LatLng, b: &LatLng) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let delta_phi = (b.lat - a.lat).to_radians();
    let delta_lambda = (b.lng - a.lng).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    MEAN_EARTH_RADIUS * c
}

/// Initial compass bearing from `a` to `b`, in degrees within `[0, 360)`.
///
/// Undefined when `a == b`: the value returned for coincident points is
/// whatever the underlying `atan2(0, 0)` yields, normalized.
pub fn initial_bearing(a: &LatLng, b: &LatLng) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let delta_lambda = (b.lng - a.lng).to_radians();

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    y.atan2(x).to_degrees().rem_euclid(360.0)
}

/// Perpendicular great-circle distance from `point` to the infinite
/// great-circle line through `seg_start` -> `seg_end`, in meters.
pub fn cross_track_distance(seg_start: &LatLng, seg_end: &LatLng, point: &LatLng) -> f64 {
    let delta13 = haversine_distance(seg_start, point) / MEAN_EARTH_RADIUS;
    let theta13 = initial_bearing(seg_start, point).to_radians();
    let theta12 = initial_bearing(seg_start, seg_end).to_radians();

    let cross_track = (delta13.sin() * (theta13 - theta12).sin()).asin();
    (MEAN_EARTH_RADIUS * cross_track).abs()
}

/// Whether the closest point on the great-circle line falls within the
/// segment's span.
///
/// Approximated by a triangle-sum check: the detour through `point` must not
/// exceed the direct span by more than [`PROJECTION_EPSILON`]. Not an exact
/// great-circle projection; adequate for regional-scale segments.
pub fn projection_within_segment(seg_start: &LatLng, seg_end: &LatLng, point: &LatLng) -> bool {
    let via_point = haversine_distance(seg_start, point) + haversine_distance(seg_end, point);
    via_point <= haversine_distance(seg_start, seg_end) + PROJECTION_EPSILON
}

/// Distance from `point` to `segment`, in meters: the cross-track distance
/// when the projection falls within the span, otherwise the nearer endpoint.
pub fn point_to_segment_distance(point: &LatLng, segment: &Segment) -> f64 {
    if projection_within_segment(&segment.start, &segment.end, point) {
        return cross_track_distance(&segment.start, &segment.end, point);
    }

    haversine_distance(&segment.start, point).min(haversine_distance(&segment.end, point))
}
