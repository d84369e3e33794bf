//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
#[derive(Debug)]
pub enum AuthError {
    MissingAuthorization,
    InvalidAuthorizationFormat,
    InvalidToken,
    /// Token subject is not a valid user ID
    InvalidUserId,
    /// Valid token for a user that no longer exists
    UserNotFound,
    UserLoadError,
    TokenCreation,
    PasswordHash,
    /// Role gate failures: exact-match, never inferred
    AdminRequired,
    EmployerRequired,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AuthError::MissingAuthorization => (
                StatusCode::UNAUTHORIZED,
                "MISSING_AUTHORIZATION",
                "Authorization header required",
            ),
            AuthError::InvalidAuthorizationFormat => (
                StatusCode::UNAUTHORIZED,
                "INVALID_AUTHORIZATION",
                "Invalid authorization header format",
            ),
            AuthError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "INVALID_TOKEN",
                "Could not validate credentials",
            ),
            AuthError::InvalidUserId => (
                StatusCode::UNAUTHORIZED,
                "INVALID_TOKEN",
                "Could not validate credentials",
            ),
            AuthError::UserNotFound => (
                StatusCode::UNAUTHORIZED,
                "INVALID_TOKEN",
                "Could not validate credentials",
            ),
            AuthError::UserLoadError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "USER_LOAD_ERROR",
                "Failed to load user",
            ),
            AuthError::TokenCreation => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TOKEN_CREATION_ERROR",
                "Failed to issue token",
            ),
            AuthError::PasswordHash => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "PASSWORD_HASH_ERROR",
                "Failed to hash password",
            ),
            AuthError::AdminRequired => (
                StatusCode::FORBIDDEN,
                "FORBIDDEN",
                "Admin privileges required",
            ),
            AuthError::EmployerRequired => (
                StatusCode::FORBIDDEN,
                "FORBIDDEN",
                "Employer privileges required",
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

impl From<AuthError> for greenjobs_common::Error {
    fn from(err: AuthError) -> Self {
        use greenjobs_common::Error;
        match err {
            AuthError::MissingAuthorization
            | AuthError::InvalidAuthorizationFormat
            | AuthError::InvalidToken
            | AuthError::InvalidUserId
            | AuthError::UserNotFound => {
                Error::Authentication("Could not validate credentials".to_string())
            }
            AuthError::AdminRequired => {
                Error::Authorization("Admin privileges required".to_string())
            }
            AuthError::EmployerRequired => {
                Error::Authorization("Employer privileges required".to_string())
            }
            AuthError::UserLoadError => Error::Internal("Failed to load user".to_string()),
            AuthError::TokenCreation => Error::Internal("Failed to issue token".to_string()),
            AuthError::PasswordHash => Error::Internal("Failed to hash password".to_string()),
        }
    }
}
