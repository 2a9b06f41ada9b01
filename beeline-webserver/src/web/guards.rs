use std::sync::Arc;

use beeline_core::gateways::geocode::GeoCodingGateway;

/// Managed state holding the geocoding gateway.
///
/// The gateway is reference counted to be moved
/// onto the blocking thread pool.
pub struct GeoCoding(pub Arc<dyn GeoCodingGateway + Send + Sync>);
