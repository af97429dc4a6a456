// Domain error types - no account or infrastructure details leak to callers

use thiserror::Error;

/// Outcome of a failed authentication-related operation
#[derive(Error, Debug)]
pub enum AuthError {
    /// Malformed email or too-short password (HTTP 400)
    ///
    /// Detected before the user store is consulted.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unknown email or password mismatch (HTTP 401)
    ///
    /// Both sub-cases collapse into this single variant.
    #[error("Invalid credentials")]
    AuthenticationFailed,

    /// The user-lookup capability itself failed (HTTP 503)
    #[error("User store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    /// Cryptographic error (HTTP 500)
    #[error("Cryptographic error: {0}")]
    Crypto(#[from] CryptoError),

    /// Configuration error (HTTP 500)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Failures of the external user store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Backing store could not be reached or read
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Backing store returned data that could not be interpreted
    #[error("malformed store data: {0}")]
    Malformed(String),
}

/// Cryptographic operation errors
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Failed to sign token
    #[error("Failed to sign token: {0}")]
    SigningError(String),

    /// Token signature, encoding, or expiry check failed
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Failed to produce or parse a digest
    #[error("Failed to hash password: {0}")]
    HashingError(String),
}

impl AuthError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::InvalidInput(_) => 400,
            AuthError::AuthenticationFailed => 401,
            AuthError::StoreUnavailable(_) => 503,
            AuthError::Crypto(_) => 500,
            AuthError::Configuration(_) => 500,
        }
    }

    /// Get user-friendly error message (no sensitive information)
    pub fn user_message(&self) -> String {
        match self {
            AuthError::InvalidInput(reason) => format!("Invalid input: {}", reason),
            AuthError::AuthenticationFailed => "Invalid credentials".to_string(),
            AuthError::StoreUnavailable(_) => "Service unavailable".to_string(),
            AuthError::Crypto(_) => "Internal error".to_string(),
            AuthError::Configuration(_) => "Internal error".to_string(),
        }
    }
}
