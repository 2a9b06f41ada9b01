use crate::gateways::geocode::GeocodingError;
use std::fmt;
use thiserror::Error;

/// Which of the two addresses of a pair is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressPosition {
    First,
    Second,
}

impl fmt::Display for AddressPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::First => f.write_str("住所1"),
            Self::Second => f.write_str("住所2"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("住所1と住所2を指定してください")]
    MissingAddress,
    #[error("{position}の取得エラー: {source}")]
    Geocoding {
        position: AddressPosition,
        #[source]
        source: GeocodingError,
    },
}
