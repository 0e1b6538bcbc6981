use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request has no `Authorization: Bearer <token>` header.
    #[error("Request is missing a bearer token")]
    MissingBearerToken,

    /// Bearer token could not be decoded or its signature does not match.
    #[error("Bearer token is invalid: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// Token is well formed but no session holds it, e.g. after logout.
    #[error("No session exists for the given bearer token")]
    SessionNotFound,

    /// The token's user no longer exists in the database.
    #[error("User {0} referenced by bearer token not found in database")]
    UserNotInDatabase(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant results in 401 Unauthorized with a generic message. The specific
/// cause is logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Authentication failed: {}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "You must be signed in to proceed".to_string(),
            }),
        )
            .into_response()
    }
}
