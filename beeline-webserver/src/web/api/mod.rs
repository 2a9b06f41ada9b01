use std::{fmt::Display, result};

use rocket::serde::json::Json;
use rocket::{
    self, get,
    http::Status,
    response::{self, Responder},
    routes, Route, State,
};

use super::guards::*;

mod distance;
mod error;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   distance   --- //
        distance::get_distance,
    ]
}

/// Failures are reported as plain text so that
/// clients can display the body verbatim.
fn text_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    (status, err.to_string()).respond_to(req)
}
