//! Spherical geometry over latitude/longitude pairs: coordinate
//! validation, haversine and cross-track distances, and the planar
//! approximation used for cheap regional-scale comparisons.

/// Mean Earth radius, in meters.
pub const MEAN_EARTH_RADIUS: f64 = 6_371_000.0;

/// Tolerance (meters-equivalent) absorbing floating rounding when
/// deciding whether a projection falls within a segment's span.
pub const PROJECTION_EPSILON: f64 = 1e-6;

#[doc(hidden)]
pub mod coord;
#[doc(hidden)]
pub mod distance;
#[doc(hidden)]
pub mod error;

#[doc(inline)]
pub use coord::latlng::LatLng;
#[doc(inline)]
pub use distance::DistanceStrategy;
pub use error::GeoError;
