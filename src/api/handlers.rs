// HTTP handlers for login, session, and refresh endpoints

use crate::api::middleware::extract_bearer_token;
use crate::api::responses::{ApiError, HealthResponse, LoginResponse, TokenResponse};
use crate::api::AppState;
use crate::auth::providers::{SignInRequest, CREDENTIALS_PROVIDER_ID};
use crate::core::models::{LoginAttempt, SessionView};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    Extension, Json,
};
use tracing::{info, warn};

/// POST /api/auth/login
///
/// Verifies the submitted credentials and returns a token enriched with the
/// user id. The token is only minted after the verifier succeeds.
pub async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginAttempt>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(attempt) = payload.map_err(|e| {
        warn!(error = %e, "Rejected malformed login body");
        ApiError::new(StatusCode::BAD_REQUEST, "Invalid input: malformed request body")
    })?;

    let principal = state
        .providers
        .authenticate(CREDENTIALS_PROVIDER_ID, &SignInRequest::Credentials(attempt))
        .await?;

    let token = state.enricher.issue(&principal)?;
    info!(user_id = %principal.user_id(), "Login succeeded");

    Ok(Json(LoginResponse {
        token: token.as_str().to_string(),
        session: token.project(),
    }))
}

/// GET /api/auth/session
///
/// Returns the session view computed by the route guard middleware.
pub async fn session_handler(Extension(session): Extension<SessionView>) -> Json<SessionView> {
    Json(session)
}

/// POST /api/auth/refresh
///
/// Renews the expiry of a valid token. The user id is carried over unchanged.
pub async fn refresh_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<TokenResponse>, ApiError> {
    let raw = extract_bearer_token(&headers)
        .ok_or_else(|| ApiError::new(StatusCode::UNAUTHORIZED, "Missing session token"))?;

    let token = state.enricher.refresh(&raw).map_err(|e| {
        warn!(error = %e, "Token refresh rejected");
        ApiError::new(StatusCode::UNAUTHORIZED, "Invalid session token")
    })?;

    Ok(Json(TokenResponse {
        token: token.as_str().to_string(),
    }))
}

/// GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        providers: state.providers.ids(),
    })
}

/// Fallback for paths this service does not serve
pub async fn not_found_handler() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Not found")
}
