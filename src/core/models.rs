// Domain models shared by the verifier, the token enricher, and the route guard

use serde::{Deserialize, Serialize};
use std::fmt;

/// Untrusted login input as submitted by the client
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginAttempt {
    pub email: String,
    pub password: String,
}

impl LoginAttempt {
    /// Build an attempt from raw email and password input
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginAttempt")
            .field("email", &self.email)
            .field("password", &"<REDACTED>")
            .finish()
    }
}

/// Stored credential record owned by the user store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    #[serde(rename = "passwordHash")]
    pub password_hash: String,
    pub salt: String,
}

/// Authenticated identity
///
/// Only the credential verifier can construct one, so holding a `Principal`
/// implies a successful verification of some login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    user_id: String,
}

impl Principal {
    pub(crate) fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

/// User portion of a session view
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Per-request projection of a session token's claims
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionView {
    pub user: SessionUser,
}

impl SessionView {
    /// View for a request that carries no usable token
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A view counts as logged in only when it carries a user id
    pub fn is_authenticated(&self) -> bool {
        self.user.id.is_some()
    }
}

/// Route guard outcome for a single request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    RedirectTo(String),
}
