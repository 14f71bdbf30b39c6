//! Point and point-to-segment distances behind a configurable strategy.

#[doc(hidden)]
pub mod haversine;
#[doc(hidden)]
pub mod planar;
#[doc(hidden)]
#[cfg(test)]
mod test;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::geo::LatLng;
use crate::route::Segment;

/// Selects how distances are measured when resolving the nearest segment.
///
/// [`Geodesic`](DistanceStrategy::Geodesic) produces great-circle meters
/// (haversine plus cross-track); [`PlanarApprox`](DistanceStrategy::PlanarApprox)
/// is the flattened squared-difference degree metric, unitless and only
/// meaningful relative to other values from the same metric. Both orderings
/// agree away from ties; at a tie the resolver always prefers the lowest
/// segment index, whichever strategy is active.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DistanceStrategy {
    #[default]
    Geodesic,
    PlanarApprox,
}

impl DistanceStrategy {
    /// Distance between two points under this strategy. Meters for
    /// [`Geodesic`](DistanceStrategy::Geodesic), squared degrees for
    /// [`PlanarApprox`](DistanceStrategy::PlanarApprox).
    pub fn point_distance(&self, a: &LatLng, b: &LatLng) -> f64 {
        match self {
            DistanceStrategy::Geodesic => haversine::haversine_distance(a, b),
            DistanceStrategy::PlanarApprox => planar::squared_degree_distance(a, b),
        }
    }

    /// Distance from `point` to `segment` under this strategy.
    pub fn segment_distance(&self, point: &LatLng, segment: &Segment) -> f64 {
        match self {
            DistanceStrategy::Geodesic => haversine::point_to_segment_distance(point, segment),
            DistanceStrategy::PlanarApprox => planar::endpoint_distance(point, segment),
        }
    }
}
