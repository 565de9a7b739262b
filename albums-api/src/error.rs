//! Error types for albums-api
//!
//! Failures are reported to the client as a status code with a plain text
//! body. None of them affect the process.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::search::ForbiddenKeys;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Search named keys outside the allow-list (400)
    #[error(transparent)]
    ForbiddenKeys(#[from] ForbiddenKeys),

    /// Invalid request (400)
    #[error("{0}")]
    BadRequest(String),

    /// Unknown id, reported with an empty body (404)
    #[error("Not found")]
    NotFound,

    /// Unknown id on a mutation (404)
    #[error("Could not find album with id {0}")]
    AlbumNotFound(String),

    /// albums-common error
    #[error(transparent)]
    Common(#[from] albums_common::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use albums_common::Error as CommonError;

        let status = match &self {
            ApiError::ForbiddenKeys(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => return StatusCode::NOT_FOUND.into_response(),
            ApiError::AlbumNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Common(CommonError::NotFound(id)) => {
                return ApiError::AlbumNotFound(id.clone()).into_response()
            }
            ApiError::Common(CommonError::InvalidInput(_) | CommonError::Json(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Common(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
