use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

pub mod analyze;
pub mod delete;
pub mod error;
pub mod index;

/// `302 Found` back to the homepage.
pub(crate) fn to_homepage() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}
