#[derive(Debug)]
pub enum GeoError {
    InvalidCoordinate(String),
}
