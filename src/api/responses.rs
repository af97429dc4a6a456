// Response types for API endpoints

use crate::core::errors::AuthError;
use crate::core::models::SessionView;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Successful login: signed token plus the session it materializes
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub session: SessionView,
}

/// Refreshed token
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub providers: Vec<&'static str>,
}

/// API error type that converts domain errors to HTTP responses
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Create from AuthError, keeping only the user-facing message
    pub fn from_auth_error(err: AuthError) -> Self {
        let status = StatusCode::from_u16(err.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self {
            status,
            message: err.user_message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::from_auth_error(err)
    }
}

impl From<crate::core::errors::CryptoError> for ApiError {
    fn from(err: crate::core::errors::CryptoError) -> Self {
        ApiError::from_auth_error(AuthError::Crypto(err))
    }
}
