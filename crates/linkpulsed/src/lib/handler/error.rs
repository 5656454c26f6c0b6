use axum::{
    Json,
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("missing form field `{0}`")]
    MissingField(&'static str),
}

/// Everything a handler can fail with, mapped onto a JSON error body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Form(#[from] FormRejection),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Request(RequestError::MissingField(_)) => {
                (StatusCode::BAD_REQUEST, "missing_field")
            }
            // 415 for a wrong content type, 400/422 for an undecodable body.
            AppError::Form(rejection) => (rejection.status(), "invalid_form"),
            AppError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "store_write"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            error!(error = %self, code, "request failed");
        } else {
            warn!(error = %self, code, "request rejected");
        }
        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string(),
            }
        }));
        (status, body).into_response()
    }
}

pub(crate) fn required(field: Option<String>, name: &'static str) -> Result<String, RequestError> {
    field.ok_or(RequestError::MissingField(name))
}
