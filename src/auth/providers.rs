// Sign-in providers behind a single authenticate capability

use crate::auth::verifier::CredentialVerifier;
use crate::core::errors::AuthError;
use crate::core::models::{LoginAttempt, Principal};
use tracing::warn;

/// Provider id of the email/password provider
pub const CREDENTIALS_PROVIDER_ID: &str = "credentials";

/// Input to a provider's sign-in step
#[derive(Debug, Clone)]
pub enum SignInRequest {
    Credentials(LoginAttempt),
}

/// Email/password provider backed by the credential verifier
#[derive(Clone)]
pub struct CredentialsProvider {
    verifier: CredentialVerifier,
}

impl CredentialsProvider {
    pub fn new(verifier: CredentialVerifier) -> Self {
        Self { verifier }
    }
}

/// Closed set of configured sign-in providers
#[derive(Clone)]
pub enum AuthProvider {
    Credentials(CredentialsProvider),
}

impl AuthProvider {
    pub fn id(&self) -> &'static str {
        match self {
            AuthProvider::Credentials(_) => CREDENTIALS_PROVIDER_ID,
        }
    }

    /// Authenticate a sign-in request with this provider
    pub async fn authenticate(&self, request: &SignInRequest) -> Result<Principal, AuthError> {
        match (self, request) {
            (AuthProvider::Credentials(provider), SignInRequest::Credentials(attempt)) => {
                provider.verifier.verify(attempt).await
            }
        }
    }
}

/// Providers assembled at startup
#[derive(Clone, Default)]
pub struct ProviderSet {
    providers: Vec<AuthProvider>,
}

impl ProviderSet {
    pub fn new(providers: Vec<AuthProvider>) -> Self {
        Self { providers }
    }

    /// Provider set with only the credentials provider
    pub fn credentials(verifier: CredentialVerifier) -> Self {
        Self::new(vec![AuthProvider::Credentials(CredentialsProvider::new(verifier))])
    }

    pub fn get(&self, id: &str) -> Option<&AuthProvider> {
        self.providers.iter().find(|p| p.id() == id)
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.providers.iter().map(AuthProvider::id).collect()
    }

    /// Dispatch a sign-in request to the provider with the given id
    pub async fn authenticate(
        &self,
        provider_id: &str,
        request: &SignInRequest,
    ) -> Result<Principal, AuthError> {
        let provider = self.get(provider_id).ok_or_else(|| {
            warn!(provider = %provider_id, "Sign-in requested for unconfigured provider");
            AuthError::InvalidInput(format!("unknown provider '{}'", provider_id))
        })?;
        provider.authenticate(request).await
    }
}
