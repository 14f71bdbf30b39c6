use serde::{Deserialize, Serialize};

use crate::geo::distance::haversine;
use crate::geo::LatLng;

/// An as-the-crow-flies connection between two coordinates. Not a road
/// geometry; the presentation layer asks a directions service for the
/// drawable polyline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: LatLng,
    pub end: LatLng,
}

impl Segment {
    pub fn new(start: LatLng, end: LatLng) -> Self {
        Segment { start, end }
    }

    /// Great-circle length of the span, in meters.
    pub fn length(&self) -> f64 {
        haversine::haversine_distance(&self.start, &self.end)
    }
}
