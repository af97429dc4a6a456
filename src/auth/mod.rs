// Authentication: login validation, credential verification, providers

pub mod audit_logger;
pub mod password;
pub mod providers;
pub mod user_store;
pub mod validator;
pub mod verifier;

pub use providers::{AuthProvider, ProviderSet, SignInRequest};
pub use user_store::{InMemoryUserStore, UserStore, YamlUserStore};
pub use verifier::CredentialVerifier;
