use std::sync::Arc;

use beeline_core::gateways::geocode::GeoCodingGateway;
use beeline_gateways::{nominatim::Nominatim, opencage::OpenCage};

use crate::config::{Geocoding, GeocodingGateway};

pub fn geocoding_gateway(cfg: &Geocoding) -> Arc<dyn GeoCodingGateway + Send + Sync> {
    match &cfg.gateway {
        GeocodingGateway::Nominatim {
            endpoint,
            user_agent,
        } => {
            log::info!("Use Nominatim geocoding gateway ({endpoint})");
            Arc::new(Nominatim::new(endpoint.clone(), user_agent.clone()))
        }
        GeocodingGateway::OpenCage { api_key } => {
            log::info!("Use OpenCage geocoding gateway");
            Arc::new(OpenCage::new(api_key.clone()))
        }
    }
}
