// Security event logging

use sha2::{Digest, Sha256};
use std::fmt;
use tracing::{info, warn};

/// Internal reason for a rejected login
///
/// Only ever written to the audit log; callers see a collapsed outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    InvalidInput,
    UnknownUser,
    PasswordMismatch,
    CorruptRecord,
    StoreUnavailable,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FailureReason::InvalidInput => "invalid_input",
            FailureReason::UnknownUser => "unknown_user",
            FailureReason::PasswordMismatch => "password_mismatch",
            FailureReason::CorruptRecord => "corrupt_record",
            FailureReason::StoreUnavailable => "store_unavailable",
        };
        f.write_str(s)
    }
}

/// Authentication event type
#[derive(Debug, Clone)]
pub enum AuthEvent {
    LoginSuccess { user_id: String },
    LoginFailure { reason: FailureReason },
}

/// Audit logger for login events
///
/// Emails are never logged in clear; a truncated SHA-256 fingerprint is
/// recorded instead so repeated attempts against one account can be correlated.
#[derive(Debug, Clone, Default)]
pub struct AuditLogger;

impl AuditLogger {
    pub fn new() -> Self {
        Self
    }

    /// Log an authentication event
    pub fn log_auth_event(&self, event: &AuthEvent, email: &str) {
        let fingerprint = email_fingerprint(email);
        match event {
            AuthEvent::LoginSuccess { user_id } => {
                info!(
                    email_fingerprint = %fingerprint,
                    user_id = %user_id,
                    "Authentication successful"
                );
            }
            AuthEvent::LoginFailure { reason: FailureReason::StoreUnavailable } => {
                warn!(
                    email_fingerprint = %fingerprint,
                    reason = %FailureReason::StoreUnavailable,
                    "Authentication aborted: user store unavailable"
                );
            }
            AuthEvent::LoginFailure { reason } => {
                warn!(
                    email_fingerprint = %fingerprint,
                    reason = %reason,
                    "Authentication failed"
                );
            }
        }
    }
}

/// First 16 hex characters of SHA-256 over the email address
pub fn email_fingerprint(email: &str) -> String {
    let digest = Sha256::digest(email.as_bytes());
    hex::encode(&digest[..8])
}
