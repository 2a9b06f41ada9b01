use beeline_entities::geo::{MapPoint, MapPointParseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("住所が見つかりません")]
    NotFound,
    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(#[from] MapPointParseError),
    #[error("{0}")]
    Service(String),
}

pub trait GeoCodingGateway {
    /// Resolve a free-text address into the location of the best match.
    fn resolve_address(&self, address: &str) -> Result<MapPoint, GeocodingError>;
}
