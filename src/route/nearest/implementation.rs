use log::debug;
use rustc_hash::FxHashSet;

use crate::geo::{DistanceStrategy, LatLng};
use crate::route::nearest::definition::{Nearest, NearestMatch};
use crate::route::{RouteError, RouteSet};

impl Nearest for RouteSet {
    fn find_closest(
        &self,
        point: &LatLng,
        strategy: DistanceStrategy,
    ) -> Result<NearestMatch, RouteError> {
        if self.is_empty() {
            return Err(RouteError::EmptyRouteSet);
        }

        let mut best = NearestMatch {
            segment: 0,
            distance: f64::INFINITY,
        };

        // Strict `<` keeps the first (lowest-index) minimum on ties.
        for (position, segment) in self.iter().enumerate() {
            let distance = strategy.segment_distance(point, segment);
            if distance < best.distance {
                best = NearestMatch {
                    segment: position,
                    distance,
                };
            }
        }

        debug!(
            "Nearest to {:?}: segment {} at {}",
            point, best.segment, best.distance
        );
        Ok(best)
    }

    fn find_closest_for_all<'a, I>(
        &self,
        points: I,
        strategy: DistanceStrategy,
    ) -> Result<FxHashSet<usize>, RouteError>
    where
        I: IntoIterator<Item = &'a LatLng>,
    {
        points
            .into_iter()
            .map(|point| self.find_closest(point, strategy).map(|found| found.segment))
            .collect()
    }
}
