// Cryptographic utilities: HS256 session token signing and constant-time comparison

use crate::core::errors::CryptoError;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use subtle::ConstantTimeEq;

/// Minimum accepted length (in bytes) of the token signing secret
pub const MIN_SECRET_LENGTH: usize = 32;

/// Signs and verifies session tokens with a secret injected at construction
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenSigner {
    /// Create a signer from the configured secret
    ///
    /// Rejects secrets shorter than `MIN_SECRET_LENGTH` bytes.
    pub fn from_secret(secret: &SecretString) -> Result<Self, CryptoError> {
        let raw = secret.expose_secret().as_bytes();
        if raw.len() < MIN_SECRET_LENGTH {
            return Err(CryptoError::SigningError(format!(
                "Signing secret too short: expected at least {} bytes, got {}",
                MIN_SECRET_LENGTH,
                raw.len()
            )));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(raw),
            decoding_key: DecodingKey::from_secret(raw),
            validation,
        })
    }

    /// Sign a claims set into a compact JWT (`header.payload.signature`)
    pub fn sign<C: Serialize>(&self, claims: &C) -> Result<String, CryptoError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| CryptoError::SigningError(e.to_string()))
    }

    /// Verify signature and expiry, then decode the claims
    pub fn verify<C: DeserializeOwned>(&self, token: &str) -> Result<C, CryptoError> {
        decode::<C>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| CryptoError::InvalidToken(e.to_string()))
    }
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner")
            .field("algorithm", &"HS256")
            .field("secret", &"<REDACTED>")
            .finish()
    }
}

/// Compare two byte strings without short-circuiting on the first mismatch
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
