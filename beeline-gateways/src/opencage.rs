use beeline_core::gateways::geocode::{GeoCodingGateway, GeocodingError};
use beeline_entities::geo::MapPoint;
use geocoding::{Forward, Opencage, Point};

/// Forward geocoding with the OpenCage API.
#[derive(Debug, Clone)]
pub struct OpenCage {
    api_key: String,
}

impl OpenCage {
    pub const fn new(api_key: String) -> Self {
        Self { api_key }
    }
}

impl GeoCodingGateway for OpenCage {
    fn resolve_address(&self, address: &str) -> Result<MapPoint, GeocodingError> {
        let oc_req = Opencage::new(self.api_key.clone());
        let res: Vec<Point<f64>> = oc_req
            .forward(address)
            .map_err(|err| GeocodingError::Service(err.to_string()))?;
        let point = res.first().ok_or(GeocodingError::NotFound)?;
        log::debug!("Resolved address location '{address}': {point:?}");
        // x is the longitude
        Ok(MapPoint::try_from_lat_lng_deg(point.y(), point.x())?)
    }
}
