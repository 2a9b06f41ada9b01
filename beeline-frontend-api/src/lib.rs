use reqwest::Response;
use thiserror::Error;

mod public;

pub use self::public::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// The request could not be sent or the response body could not be read.
    #[error("{0}")]
    Fetch(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

/// What the distance endpoint answered.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupResponse {
    /// 2xx status with a JSON body.
    Found(beeline_boundary::DistanceResponse),
    /// Any other status with the body as plain text.
    Rejected(String),
}

pub async fn into_lookup_response(response: Response) -> Result<LookupResponse> {
    // ensure we've got 2xx status
    if response.status().is_success() {
        let data = response.json().await?;
        log::debug!("{data:?}");
        Ok(LookupResponse::Found(data))
    } else {
        Ok(LookupResponse::Rejected(response.text().await?))
    }
}
