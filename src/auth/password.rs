// Salted password hashing and comparison

use crate::core::crypto::constant_time_eq;
use crate::core::errors::CryptoError;
use secrecy::{ExposeSecret, Secret};
use sha2::{Digest, Sha256};
use std::fmt;

/// Password digest - SHA-256 of `password || salt` as a 64-character lowercase hex string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Hash a plaintext password with its salt
    ///
    /// The password is concatenated with the salt (password first) and the
    /// UTF-8 bytes of the result are digested.
    pub fn from_password(password: &str, salt: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(password.as_bytes());
        hasher.update(salt.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    /// Create a PasswordDigest from a stored hash string (64 hex characters)
    ///
    /// Uppercase hex is accepted and normalized to lowercase.
    pub fn from_hex(hash_str: &str) -> Result<Self, CryptoError> {
        if hash_str.len() != 64 {
            return Err(CryptoError::HashingError(format!(
                "Invalid hash length: expected 64, got {}",
                hash_str.len()
            )));
        }
        if !hash_str.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CryptoError::HashingError(
                "Invalid hash format: must be 64 hex characters".to_string(),
            ));
        }
        Ok(Self(hash_str.to_ascii_lowercase()))
    }

    /// Compare against another digest in constant time
    pub fn matches(&self, other: &PasswordDigest) -> bool {
        constant_time_eq(self.0.as_bytes(), other.0.as_bytes())
    }

    /// Get the hash as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Plaintext password wrapper with memory protection
///
/// Keeps the supplied password out of `Debug`/`Display` output.
pub struct Password(Secret<String>);

impl Password {
    pub fn new(password: &str) -> Self {
        Self(Secret::new(password.to_string()))
    }

    /// Digest the password with the given salt
    pub fn digest(&self, salt: &str) -> PasswordDigest {
        PasswordDigest::from_password(self.expose_secret(), salt)
    }

    /// Expose the secret password (use with caution)
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password")
            .field("value", &"<REDACTED>")
            .finish()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<REDACTED>")
    }
}
