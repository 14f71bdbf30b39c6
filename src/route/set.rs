use ::geo::{Destination, Geodesic};
use log::debug;
use rstar::{RTree, RTreeObject, AABB};

use crate::geo::LatLng;
use crate::route::Segment;

/// The static, indexed collection of route segments, built once from
/// configuration and never mutated.
///
/// Storage is opaque: resolution goes through [`Nearest`](crate::route::Nearest),
/// so the linear scan behind it can be swapped for an index lookup without
/// touching callers. An R-tree over segment bounding boxes is kept alongside
/// for bounded pre-filtering via [`RouteSet::scan_segments`].
pub struct RouteSet {
    segments: Vec<Segment>,
    index: RTree<IndexedSegment>,
}

#[derive(Debug, Clone, PartialEq)]
struct IndexedSegment {
    segment: Segment,
    position: usize,
}

impl RTreeObject for IndexedSegment {
    type Envelope = AABB<LatLng>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.segment.start, self.segment.end)
    }
}

impl RouteSet {
    pub fn new(segments: Vec<Segment>) -> Self {
        debug!("Route set over {} segments", segments.len());
        for (position, segment) in segments.iter().enumerate() {
            debug!("Segment {} spans {}m", position, segment.length());
        }

        let indexed = segments
            .iter()
            .copied()
            .enumerate()
            .map(|(position, segment)| IndexedSegment { segment, position })
            .collect();

        RouteSet {
            segments,
            index: RTree::bulk_load(indexed),
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Returns an unsorted iterator of indexed segments whose bounding box
    /// intersects a square of the provided `distance` (meters) around the
    /// input point.
    ///
    /// ### Note
    /// This function implements a square-scan.
    ///
    /// It bounds the search to be within a square-radius of the origin, so it
    /// may omit segments within the supplied distance or include segments
    /// beyond it. This resolution method is significantly cheaper than a
    /// circular scan, so a wider or shorter search radius may be required in
    /// some use-cases.
    pub fn scan_segments(
        &self,
        point: &LatLng,
        distance: f64,
    ) -> impl Iterator<Item = (usize, &Segment)> {
        let origin = ::geo::Point::from(*point);
        let bottom_right = Geodesic.destination(origin, 135.0, distance);
        let top_left = Geodesic.destination(origin, 315.0, distance);

        let bbox = AABB::from_corners(LatLng::from(top_left), LatLng::from(bottom_right));
        self.index
            .locate_in_envelope_intersecting(&bbox)
            .map(|indexed| (indexed.position, &indexed.segment))
    }
}
