// Axum web server layer

use axum::{error_handling::HandleErrorLayer, http::StatusCode, routing::{get, post}, BoxError, Router};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod middleware;
pub mod responses;

use crate::auth::ProviderSet;
use crate::config::Config;
use crate::routing::RouteGuard;
use crate::session::TokenEnricher;

/// Application state containing all shared dependencies
///
/// Cloned per request; heavy components sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub providers: ProviderSet,
    pub enricher: Arc<TokenEnricher>,
    pub guard: RouteGuard,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(providers: ProviderSet, enricher: TokenEnricher, config: Config) -> Self {
        Self {
            providers,
            enricher: Arc::new(enricher),
            guard: RouteGuard::from_config(&config.routes),
            config: Arc::new(config),
        }
    }
}

/// Create the Axum router with all routes and middleware
///
/// Middleware stack (outermost to innermost):
/// - Request timeout (tower::timeout), mapped to 408 by `HandleErrorLayer`
/// - Tracing (tower-http::trace)
/// - Route guard, applied to every route including the fallback
pub fn create_router(state: AppState) -> Router {
    let timeout_secs = state.config.request_timeout_secs;

    let router = Router::new()
        .route("/api/auth/login", post(handlers::login_handler))
        .route("/api/auth/session", get(handlers::session_handler))
        .route("/api/auth/refresh", post(handlers::refresh_handler))
        .route("/health", get(handlers::health_handler))
        .fallback(handlers::not_found_handler)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::route_guard,
        ))
        .layer(TraceLayer::new_for_http());

    let middleware_stack = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(|e: BoxError| async move {
            let status = if e.is::<tower::timeout::error::Elapsed>() {
                StatusCode::REQUEST_TIMEOUT
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, e.to_string())
        }))
        .timeout(Duration::from_secs(timeout_secs))
        .into_inner();

    router.layer(middleware_stack).with_state(state)
}
