use super::prelude::*;

/// Resolve both addresses and measure the great-circle
/// distance between them.
pub fn calculate_distance<G>(gw: &G, addresses: &AddressPair) -> Result<Distance>
where
    G: GeoCodingGateway + ?Sized,
{
    if !addresses.is_complete() {
        return Err(Error::MissingAddress);
    }
    let p1 = resolve(gw, &addresses.address1, AddressPosition::First)?;
    let p2 = resolve(gw, &addresses.address2, AddressPosition::Second)?;
    let distance = MapPoint::distance(p1, p2);
    log::debug!(
        "Distance between '{}' ({p1}) and '{}' ({p2}): {distance}",
        addresses.address1,
        addresses.address2
    );
    Ok(distance)
}

fn resolve<G>(gw: &G, address: &str, position: AddressPosition) -> Result<MapPoint>
where
    G: GeoCodingGateway + ?Sized,
{
    gw.resolve_address(address).map_err(|source| {
        log::warn!("Failed to resolve address location '{address}': {source}");
        Error::Geocoding { position, source }
    })
}
