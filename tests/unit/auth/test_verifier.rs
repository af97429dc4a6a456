// Unit tests for credential verification

use crate::common::{scenario_verifier, CountingUserStore};
use credential_gate::auth::CredentialVerifier;
use credential_gate::core::errors::{AuthError, StoreError};
use credential_gate::core::models::LoginAttempt;
use std::sync::Arc;

#[tokio::test]
async fn test_scenario_correct_password() {
    let (verifier, store) = scenario_verifier();

    let principal = verifier
        .verify(&LoginAttempt::new("a@b.com", "secret123"))
        .await
        .expect("correct password should verify");

    assert_eq!(principal.user_id(), "u1");
    assert_eq!(store.lookups(), 1);
}

#[tokio::test]
async fn test_scenario_wrong_password() {
    let (verifier, store) = scenario_verifier();

    let result = verifier.verify(&LoginAttempt::new("a@b.com", "wrong12")).await;

    assert!(matches!(result, Err(AuthError::AuthenticationFailed)));
    assert_eq!(store.lookups(), 1);
}

#[tokio::test]
async fn test_unknown_email_is_authentication_failed() {
    let (verifier, _store) = scenario_verifier();

    for email in ["nobody@b.com", "A@b.com", "a@b.co"] {
        let result = verifier.verify(&LoginAttempt::new(email, "secret123")).await;
        assert!(
            matches!(result, Err(AuthError::AuthenticationFailed)),
            "{} should not authenticate",
            email
        );
    }
}

#[tokio::test]
async fn test_short_password_never_reaches_store() {
    let (verifier, store) = scenario_verifier();

    for password in ["", "a", "12345", "secre"] {
        let result = verifier.verify(&LoginAttempt::new("a@b.com", password)).await;
        assert!(matches!(result, Err(AuthError::InvalidInput(_))));
    }

    assert_eq!(store.lookups(), 0, "Store must not be consulted for invalid input");
}

#[tokio::test]
async fn test_scenario_invalid_email_never_reaches_store() {
    let (verifier, store) = scenario_verifier();

    let result = verifier.verify(&LoginAttempt::new("not-an-email", "abcdef")).await;

    assert!(matches!(result, Err(AuthError::InvalidInput(_))));
    assert_eq!(store.lookups(), 0);
}

#[tokio::test]
async fn test_store_failure_is_distinct() {
    let store = Arc::new(CountingUserStore::failing());
    let verifier = CredentialVerifier::new(store.clone());

    let result = verifier.verify(&LoginAttempt::new("a@b.com", "secret123")).await;

    match result {
        Err(AuthError::StoreUnavailable(StoreError::Unavailable(_))) => (),
        other => panic!("Expected StoreUnavailable, got {:?}", other),
    }
    assert_eq!(store.lookups(), 1, "No retries on store failure");
}

#[tokio::test]
async fn test_password_is_case_and_whitespace_sensitive() {
    let (verifier, _store) = scenario_verifier();

    for password in ["Secret123", "secret123 ", " secret123"] {
        let result = verifier.verify(&LoginAttempt::new("a@b.com", password)).await;
        assert!(matches!(result, Err(AuthError::AuthenticationFailed)));
    }
}

#[tokio::test]
async fn test_concurrent_verifications() {
    let (verifier, store) = scenario_verifier();

    let mut handles = Vec::new();
    for i in 0..16 {
        let verifier = verifier.clone();
        handles.push(tokio::spawn(async move {
            let password = if i % 2 == 0 { "secret123" } else { "wrong12" };
            verifier.verify(&LoginAttempt::new("a@b.com", password)).await.is_ok()
        }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap() {
            successes += 1;
        }
    }

    assert_eq!(successes, 8);
    assert_eq!(store.lookups(), 16);
}
