//! Mapping of service failures to HTTP responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    domain::ValueObjectError, infrastructure::dto::http::ErrorResponse, usecase::MemberError,
};

/// Errors returned by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Member(#[from] MemberError),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValueObjectError),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::Member(MemberError::DuplicateEmail(_)) => {
                (StatusCode::CONFLICT, "EMAIL_EXIST", self.to_string())
            }
            ApiError::Member(MemberError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "MEMBER_NOT_FOUND", self.to_string())
            }
            ApiError::Member(MemberError::InvalidCredentials) => (
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                self.to_string(),
            ),
            // detail is logged where the error was wrapped
            ApiError::Member(MemberError::Internal { .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "SERVER_ERROR",
                "Internal server error".to_string(),
            ),
            ApiError::InvalidInput(_) | ApiError::MalformedRequest(_) => {
                (StatusCode::BAD_REQUEST, "INVALID_INPUT", self.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        let body = ErrorResponse {
            code: code.to_string(),
            message,
        };
        (status, Json(body)).into_response()
    }
}
