//! # beeline-frontend
//!
//! UI logic of a distance lookup that is independent of
//! the concrete user interface.

use std::future::Future;

use beeline_entities::address::AddressPair;
use beeline_frontend_api::{DistanceApi, Error as LookupError, LookupResponse};

mod messages;
mod requester;
mod view;

pub use self::{messages::*, requester::*, view::*};

/// Asks a remote service for the distance between two addresses.
pub trait DistanceLookup {
    fn lookup(
        &self,
        addresses: &AddressPair,
    ) -> impl Future<Output = Result<LookupResponse, LookupError>>;
}

impl DistanceLookup for DistanceApi {
    async fn lookup(&self, addresses: &AddressPair) -> Result<LookupResponse, LookupError> {
        self.distance(addresses).await
    }
}

/// The result of a single lookup as presented to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Distance in kilometers.
    Distance(f64),
    /// The server answered without a distance.
    NoData,
    /// The server rejected the request, contains the response body.
    Rejected(String),
    /// The request failed before a response could be read.
    Failed(String),
}

impl Outcome {
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Rejected(_) | Self::Failed(_))
    }
}

impl From<Result<LookupResponse, LookupError>> for Outcome {
    fn from(res: Result<LookupResponse, LookupError>) -> Self {
        match res {
            Ok(LookupResponse::Found(data)) => match data.distance_km {
                Some(km) => Self::Distance(km),
                None => Self::NoData,
            },
            Ok(LookupResponse::Rejected(body)) => Self::Rejected(body),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}
