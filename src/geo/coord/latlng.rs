use std::fmt::{Debug, Formatter};

use serde::{Deserialize, Serialize};

use crate::geo::error::GeoError;

pub type Degree = f64;

/// `LatLng`
/// The latitude, longitude pair structure, geotags an item with a location.
/// Degrees, WGS84-ish. Wire form is `{ "lat": f64, "lng": f64 }`.
///
/// ```rust,ignore
/// use nearline::geo::LatLng;
/// let latlng = LatLng::from_degree(43.65, -79.72)?;
/// println!("Position: {:?}", latlng);
/// ```
#[derive(Clone, Copy, PartialOrd, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: Degree,
    pub lng: Degree,
}

impl LatLng {
    /// Constructs a `LatLng` from degree values, validating that both are
    /// finite and within range.
    pub fn from_degree(lat: Degree, lng: Degree) -> Result<Self, GeoError> {
        if !lat.is_finite() || !(-90f64..=90f64).contains(&lat) {
            return Err(GeoError::InvalidCoordinate(format!(
                "Latitude must be a finite value between -90 and 90. Given: {}",
                lat
            )));
        }

        if !lng.is_finite() || !(-180f64..=180f64).contains(&lng) {
            return Err(GeoError::InvalidCoordinate(format!(
                "Longitude must be a finite value between -180 and 180. Given: {}",
                lng
            )));
        }

        Ok(Self::from_degree_unchecked(lat, lng))
    }

    pub fn from_degree_unchecked(lat: Degree, lng: Degree) -> Self {
        LatLng { lat, lng }
    }

    /// Returns the `(lat, lng)` pair.
    pub fn expand(&self) -> (Degree, Degree) {
        (self.lat, self.lng)
    }

    // Returns a [`lng`, `lat`] pair
    pub fn slice(&self) -> [Degree; 2] {
        [self.lng, self.lat]
    }
}

impl From<LatLng> for ::geo::Point {
    fn from(value: LatLng) -> Self {
        ::geo::Point::new(value.lng, value.lat)
    }
}

impl From<::geo::Point> for LatLng {
    fn from(value: ::geo::Point) -> Self {
        LatLng::from_degree_unchecked(value.y(), value.x())
    }
}

impl Debug for LatLng {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "POINT({} {})", self.lng, self.lat)
    }
}

impl rstar::Point for LatLng {
    type Scalar = Degree;
    const DIMENSIONS: usize = 2;

    fn generate(mut generator: impl FnMut(usize) -> Self::Scalar) -> Self {
        LatLng {
            lng: generator(0),
            lat: generator(1),
        }
    }

    fn nth(&self, index: usize) -> Self::Scalar {
        match index {
            0 => self.lng,
            1 => self.lat,
            _ => unreachable!(),
        }
    }

    fn nth_mut(&mut self, index: usize) -> &mut Self::Scalar {
        match index {
            0 => &mut self.lng,
            1 => &mut self.lat,
            _ => unreachable!(),
        }
    }
}
