use super::text_error_response;
use anyhow::anyhow;
pub use beeline_core::usecases::Error as DistanceError;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    tokio::task::JoinError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Distance(#[from] DistanceError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JoinError> for Error {
    fn from(err: JoinError) -> Self {
        Self::Other(anyhow!(err))
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        let status = match &self {
            Error::Distance(DistanceError::MissingAddress) => Status::BadRequest,
            Error::Distance(DistanceError::Geocoding { .. }) => Status::InternalServerError,
            Error::Other(err) => {
                error!("Error: {err}");
                Status::InternalServerError
            }
        };
        text_error_response(req, &self, status)
    }
}
