//! Mapping of domain errors onto HTTP responses.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::common::{ErrorCode, ReviewError};

const INVALID_REQUEST: &str = "INVALID_REQUEST";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

/// `{"error": {"code": ..., "message": ...}}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error returned by every route handler
#[derive(Debug)]
pub enum ApiError {
    Review(ReviewError),
    /// Malformed body, malformed query or a missing required field
    InvalidRequest(String),
}

impl ApiError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Review(err) => status_for(err.code()),
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::TeamExists => StatusCode::BAD_REQUEST,
        ErrorCode::PrExists
        | ErrorCode::PrMerged
        | ErrorCode::NotAssigned
        | ErrorCode::NoCandidate => StatusCode::CONFLICT,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<ReviewError> for ApiError {
    fn from(err: ReviewError) -> Self {
        Self::Review(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            ApiError::Review(ReviewError::Internal(err)) => {
                tracing::error!(error = %err, "Internal error while handling request");
                ErrorBody {
                    code: ErrorCode::Internal.as_str(),
                    message: "internal server error".to_string(),
                }
            }
            ApiError::Review(err) => ErrorBody {
                code: err.code().as_str(),
                message: err.to_string(),
            },
            ApiError::InvalidRequest(message) => ErrorBody {
                code: INVALID_REQUEST,
                message,
            },
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}
