// Credential verification: validate -> lookup -> compare

use crate::auth::audit_logger::{AuditLogger, AuthEvent, FailureReason};
use crate::auth::password::{Password, PasswordDigest};
use crate::auth::user_store::UserStore;
use crate::auth::validator::validate_login_attempt;
use crate::core::errors::AuthError;
use crate::core::models::{LoginAttempt, Principal};
use std::sync::Arc;
use tracing::{debug, error};

/// Verifies login attempts against salted-hash records from a user store
#[derive(Clone)]
pub struct CredentialVerifier {
    store: Arc<dyn UserStore>,
    audit_logger: AuditLogger,
}

impl CredentialVerifier {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            audit_logger: AuditLogger::new(),
        }
    }

    /// Verify a login attempt
    ///
    /// Returns a `Principal` only when the attempt is well-formed, the email
    /// exists, and `sha256(password || salt)` equals the stored hash. Unknown
    /// emails and wrong passwords both yield `AuthenticationFailed`. A failing
    /// store yields `StoreUnavailable`.
    pub async fn verify(&self, attempt: &LoginAttempt) -> Result<Principal, AuthError> {
        if let Err(e) = validate_login_attempt(attempt) {
            self.reject(attempt, FailureReason::InvalidInput);
            return Err(e);
        }

        let record = match self.store.lookup_user_by_email(&attempt.email).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                self.reject(attempt, FailureReason::UnknownUser);
                return Err(AuthError::AuthenticationFailed);
            }
            Err(e) => {
                error!(error = %e, "User lookup failed");
                self.reject(attempt, FailureReason::StoreUnavailable);
                return Err(AuthError::StoreUnavailable(e));
            }
        };

        let stored = match PasswordDigest::from_hex(&record.password_hash) {
            Ok(digest) => digest,
            Err(e) => {
                error!(user_id = %record.id, error = %e, "Stored password hash is malformed");
                self.reject(attempt, FailureReason::CorruptRecord);
                return Err(AuthError::AuthenticationFailed);
            }
        };

        let supplied = Password::new(&attempt.password).digest(&record.salt);
        if !supplied.matches(&stored) {
            self.reject(attempt, FailureReason::PasswordMismatch);
            return Err(AuthError::AuthenticationFailed);
        }

        debug!(user_id = %record.id, "Credentials verified");
        self.audit_logger.log_auth_event(
            &AuthEvent::LoginSuccess { user_id: record.id.clone() },
            &attempt.email,
        );
        Ok(Principal::new(record.id))
    }

    fn reject(&self, attempt: &LoginAttempt, reason: FailureReason) {
        self.audit_logger
            .log_auth_event(&AuthEvent::LoginFailure { reason }, &attempt.email);
    }
}
