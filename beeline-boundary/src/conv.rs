use super::*;
use beeline_entities::{address::AddressPair, geo::Distance};

impl From<(AddressPair, Distance)> for DistanceResponse {
    fn from((pair, distance): (AddressPair, Distance)) -> Self {
        let AddressPair { address1, address2 } = pair;
        Self {
            address1,
            address2,
            distance_km: Some(distance.to_kilometers()),
        }
    }
}
