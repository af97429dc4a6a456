// Per-request route guard

use crate::config::RouteConfig;
use crate::core::models::RouteDecision;

/// Path logged-in users are sent to when they open an auth page
pub const HOME_PATH: &str = "/";

/// Stateless allow/redirect decision for incoming requests
///
/// Only the login and signup pages are guarded, and only against users who
/// are already logged in. Every other path is allowed regardless of status.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    login_path: String,
    signup_path: String,
}

impl RouteGuard {
    pub fn new(login_path: impl Into<String>, signup_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
            signup_path: signup_path.into(),
        }
    }

    pub fn from_config(config: &RouteConfig) -> Self {
        Self::new(config.login_path.clone(), config.signup_path.clone())
    }

    /// Decide what to do with a request for `requested_path`
    ///
    /// `requested_path` is the path component only; no query string.
    pub fn decide(&self, is_logged_in: bool, requested_path: &str) -> RouteDecision {
        let is_auth_page = requested_path == self.login_path || requested_path == self.signup_path;
        if is_auth_page && is_logged_in {
            return RouteDecision::RedirectTo(HOME_PATH.to_string());
        }
        RouteDecision::Allow
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn signup_path(&self) -> &str {
        &self.signup_path
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::from_config(&RouteConfig::default())
    }
}
