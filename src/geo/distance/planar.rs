//! Flattened planar approximation on unprojected degrees. Cheap, unitless
//! and relative; adequate when every point of interest sits within a
//! ~100 km region.

use crate::geo::LatLng;
use crate::route::Segment;

/// Squared coordinate difference between two points, in squared degrees.
pub fn squared_degree_distance(a: &LatLng, b: &LatLng) -> f64 {
    (a.lat - b.lat).powi(2) + (a.lng - b.lng).powi(2)
}

/// Distance from `point` to the nearer endpoint of `segment`, in squared
/// degrees. Both endpoint terms pair latitude with latitude and longitude
/// with longitude.
pub fn endpoint_distance(point: &LatLng, segment: &Segment) -> f64 {
    squared_degree_distance(point, &segment.start)
        .min(squared_degree_distance(point, &segment.end))
}
