use serde::{Deserialize, Serialize};

use crate::geo::{GeoError, LatLng};

/// Wire shape of one fetched event. The backend emits coordinates as either
/// JSON numbers or numeric strings (and sentinel text such as `"N/A"` when
/// geocoding failed), so both forms decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub name: String,
    #[serde(default)]
    pub location_name: Option<String>,
    pub latitude: CoordinateField,
    pub longitude: CoordinateField,
}

/// A coordinate as it arrives on the wire: numeric, or text still to be
/// parsed (and possibly unparsable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoordinateField {
    Number(f64),
    Text(String),
}

impl CoordinateField {
    pub fn as_degree(&self) -> Result<f64, GeoError> {
        match self {
            CoordinateField::Number(value) => Ok(*value),
            CoordinateField::Text(raw) => raw.trim().parse::<f64>().map_err(|_| {
                GeoError::InvalidCoordinate(format!("Coordinate is not numeric: {:?}", raw))
            }),
        }
    }
}

impl EventRecord {
    /// Parses and validates the record's coordinates.
    pub fn location(&self) -> Result<LatLng, GeoError> {
        let lat = self.latitude.as_degree()?;
        let lng = self.longitude.as_degree()?;
        LatLng::from_degree(lat, lng)
    }
}
