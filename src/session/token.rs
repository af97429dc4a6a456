// Session tokens: minting, enrichment with the user id, and projection to a session view

use crate::config::SessionConfig;
use crate::core::crypto::TokenSigner;
use crate::core::errors::CryptoError;
use crate::core::models::{Principal, SessionUser, SessionView};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Upper bound on the session max age, ten years
pub const MAX_SESSION_AGE_SECS: u64 = 10 * 365 * 24 * 60 * 60;

/// Claims carried inside a session token
///
/// `userId` is only present once the token has been enriched at login.
/// `iat`, `exp` and `jti` are managed by the token lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

/// Signed session token together with its decoded claims
///
/// Values are never mutated; enrichment and refresh produce a new token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    encoded: String,
    claims: SessionClaims,
}

impl SessionToken {
    /// Compact signed representation handed to the client
    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    pub fn claims(&self) -> &SessionClaims {
        &self.claims
    }

    /// Materialize the per-request session view
    pub fn project(&self) -> SessionView {
        project(self)
    }
}

/// Project a token's claims into a session view
///
/// A missing `userId` claim yields a view without a user id.
pub fn project(token: &SessionToken) -> SessionView {
    SessionView {
        user: SessionUser {
            id: token.claims.user_id.clone(),
        },
    }
}

/// Mints, enriches, and decodes session tokens
#[derive(Debug)]
pub struct TokenEnricher {
    signer: TokenSigner,
    max_age_secs: i64,
}

impl TokenEnricher {
    /// Create an enricher with the signing secret and max age from configuration
    pub fn new(config: &SessionConfig) -> Result<Self, CryptoError> {
        let max_age_secs = i64::try_from(config.max_age_secs)
            .ok()
            .filter(|secs| *secs > 0 && *secs as u64 <= MAX_SESSION_AGE_SECS)
            .ok_or_else(|| {
                CryptoError::SigningError(format!(
                    "Session max age {} out of range",
                    config.max_age_secs
                ))
            })?;
        Ok(Self {
            signer: TokenSigner::from_secret(&config.secret)?,
            max_age_secs,
        })
    }

    /// Mint a fresh token that carries no user id yet
    pub fn new_token(&self) -> Result<SessionToken, CryptoError> {
        let now = chrono::Utc::now().timestamp();
        let claims = SessionClaims {
            user_id: None,
            iat: now,
            exp: self.expiry_from(now)?,
            jti: uuid::Uuid::new_v4().to_string(),
        };
        self.seal(claims)
    }

    /// Enrich a token with the principal established at login
    ///
    /// With a principal, `userId` is set to its id. Without one, the user id
    /// already carried by the token is kept as is. In both cases the expiry is
    /// renewed.
    pub fn enrich(
        &self,
        token: &SessionToken,
        principal: Option<&Principal>,
    ) -> Result<SessionToken, CryptoError> {
        let mut claims = token.claims.clone();
        if let Some(principal) = principal {
            claims.user_id = Some(principal.user_id().to_string());
        }
        claims.exp = self.expiry_from(chrono::Utc::now().timestamp())?;
        self.seal(claims)
    }

    /// Mint a token for a freshly verified principal
    pub fn issue(&self, principal: &Principal) -> Result<SessionToken, CryptoError> {
        let token = self.new_token()?;
        let enriched = self.enrich(&token, Some(principal))?;
        debug!(user_id = %principal.user_id(), jti = %enriched.claims.jti, "Issued session token");
        Ok(enriched)
    }

    /// Verify a token presented by the client and renew its expiry
    pub fn refresh(&self, encoded: &str) -> Result<SessionToken, CryptoError> {
        let token = self.decode(encoded)?;
        self.enrich(&token, None)
    }

    /// Verify signature and expiry of a presented token
    pub fn decode(&self, encoded: &str) -> Result<SessionToken, CryptoError> {
        let claims: SessionClaims = self.signer.verify(encoded)?;
        Ok(SessionToken {
            encoded: encoded.to_string(),
            claims,
        })
    }

    /// Session view for a request, anonymous when the token is missing or invalid
    pub fn session_from_bearer(&self, encoded: Option<&str>) -> SessionView {
        match encoded.map(|raw| self.decode(raw)) {
            Some(Ok(token)) => token.project(),
            Some(Err(e)) => {
                debug!(error = %e, "Ignoring invalid session token");
                SessionView::anonymous()
            }
            None => SessionView::anonymous(),
        }
    }

    fn expiry_from(&self, now: i64) -> Result<i64, CryptoError> {
        now.checked_add(self.max_age_secs)
            .ok_or_else(|| CryptoError::SigningError("Session expiry overflows".to_string()))
    }

    fn seal(&self, claims: SessionClaims) -> Result<SessionToken, CryptoError> {
        let encoded = self.signer.sign(&claims)?;
        Ok(SessionToken { encoded, claims })
    }
}
