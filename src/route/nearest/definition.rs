use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::geo::{DistanceStrategy, LatLng};
use crate::route::RouteError;

/// Outcome of resolving one point against a route collection: the winning
/// segment's index and its distance under the strategy that produced it.
/// Ephemeral; recomputed whenever the inputs change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NearestMatch {
    pub segment: usize,
    pub distance: f64,
}

/// Trait containing utility functions to resolve the nearest segment of a
/// route collection for one or many query points.
pub trait Nearest {
    /// Resolves the segment closest to `point` under `strategy`.
    ///
    /// Every segment is visited and the minimum retained; equidistant
    /// segments tie-break to the lowest index, deterministically. Fails with
    /// [`RouteError::EmptyRouteSet`] when the collection holds no segments.
    /// Pure; no side effects.
    fn find_closest(
        &self,
        point: &LatLng,
        strategy: DistanceStrategy,
    ) -> Result<NearestMatch, RouteError>;

    /// Resolves every point and collects the distinct winning segment
    /// indices. Membership only; callers use this to decide which segments
    /// to highlight.
    fn find_closest_for_all<'a, I>(
        &self,
        points: I,
        strategy: DistanceStrategy,
    ) -> Result<FxHashSet<usize>, RouteError>
    where
        I: IntoIterator<Item = &'a LatLng>;
}
