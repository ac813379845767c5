/*
 * Responsibility
 * - app-wide ApiError definition
 * - IntoResponse impl (HTTP status / JSON error body)
 * - the wire contract is a fixed message per failure mode: every error
 *   body is {"message": "..."} with one of the literals below
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Fixed client-facing messages. These are part of the API contract and
/// must not be reworded.
pub mod messages {
    pub const POSTS_FETCH_FAILED: &str = "The posts information could not be retrieved";
    pub const POST_FETCH_FAILED: &str = "The post information could not be retrieved";
    pub const POST_NOT_FOUND: &str = "The post with the specified ID does not exist";
    pub const POST_FIELDS_REQUIRED: &str = "Please provide title and contents for the post";
    pub const POST_SAVE_FAILED: &str = "There was an error while saving the post to the database";
    pub const POST_MODIFY_FAILED: &str = "The post information could not be modified";
    pub const POST_REMOVE_FAILED: &str = "The post could not be removed";
    pub const COMMENTS_FETCH_FAILED: &str = "The comments information could not be retrieved";
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: &'static str,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("bad request: {0}")]
    Validation(&'static str),
    #[error("not found: {0}")]
    NotFound(&'static str),
    #[error("internal error: {0}")]
    Internal(&'static str),
}

impl ApiError {
    pub fn validation(message: &'static str) -> Self {
        Self::Validation(message)
    }

    pub fn not_found(message: &'static str) -> Self {
        Self::NotFound(message)
    }

    /// Collaborator failure. The underlying error is logged at the call
    /// site and never reaches the client; only the fixed message does.
    pub fn internal(message: &'static str) -> Self {
        Self::Internal(message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}
