//! API Error Responses

use advisor::ValidationError;
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced to API clients
#[derive(Debug, Error)]
pub enum ApiError {
    /// Form input outside its allowed domain
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Body or query string that could not be parsed
    #[error("{message}")]
    InvalidRequest { status: StatusCode, message: String },
}

/// Error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidRequest { status, .. } => *status,
        };

        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}
