use std::sync::Arc;

use beeline_boundary::DistanceResponse;
use beeline_core::{entities::AddressPair, usecases};
use rocket::tokio::task;

use super::*;

#[get("/distance?<address1>&<address2>")]
pub async fn get_distance(
    geocoding: &State<GeoCoding>,
    address1: Option<String>,
    address2: Option<String>,
) -> Result<DistanceResponse> {
    let addresses = AddressPair::new(address1.unwrap_or_default(), address2.unwrap_or_default());
    let gw = Arc::clone(&geocoding.0);
    // Geocoding gateways do blocking I/O
    let (addresses, distance) = task::spawn_blocking(move || {
        let distance = usecases::calculate_distance(&*gw, &addresses);
        (addresses, distance)
    })
    .await?;
    let response = DistanceResponse::from((addresses, distance?));
    info!("Response: {response:?}");
    Ok(Json(response))
}
