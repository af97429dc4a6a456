// Route guard middleware

use crate::api::AppState;
use crate::core::models::RouteDecision;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

/// Apply the route guard to every request
///
/// Derives the login status from the bearer token, asks the guard for a
/// decision, and either redirects or inserts the `SessionView` into request
/// extensions and continues to the handler.
pub async fn route_guard(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let token = extract_bearer_token(request.headers());
    let session = state.enricher.session_from_bearer(token.as_deref());
    let path = request.uri().path().to_string();

    match state.guard.decide(session.is_authenticated(), &path) {
        RouteDecision::Allow => {
            request.extensions_mut().insert(session);
            next.run(request).await
        }
        RouteDecision::RedirectTo(target) => {
            debug!(path = %path, target = %target, "Redirecting authenticated user away from auth page");
            Redirect::temporary(&target).into_response()
        }
    }
}

/// Extract a bearer token from the `Authorization` header
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
