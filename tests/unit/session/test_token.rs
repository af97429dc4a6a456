// Unit tests for token enrichment and session projection

use crate::common::{scenario_verifier, test_enricher};
use credential_gate::config::SessionConfig;
use credential_gate::core::models::{LoginAttempt, SessionView};
use credential_gate::session::{project, TokenEnricher};
use secrecy::SecretString;

#[tokio::test]
async fn test_login_then_issue_carries_user_id() {
    let (verifier, _store) = scenario_verifier();
    let principal = verifier.verify(&LoginAttempt::new("a@b.com", "secret123")).await.unwrap();

    let token = test_enricher().issue(&principal).unwrap();

    assert_eq!(token.claims().user_id.as_deref(), Some("u1"));
    assert_eq!(token.project().user.id.as_deref(), Some("u1"));
}

#[tokio::test]
async fn test_enrich_produces_new_value() {
    let (verifier, _store) = scenario_verifier();
    let principal = verifier.verify(&LoginAttempt::new("a@b.com", "secret123")).await.unwrap();
    let enricher = test_enricher();

    let fresh = enricher.new_token().unwrap();
    let enriched = enricher.enrich(&fresh, Some(&principal)).unwrap();

    assert_ne!(fresh.as_str(), enriched.as_str());
    assert!(fresh.claims().user_id.is_none());
    assert_eq!(project(&fresh), SessionView::anonymous());
}

#[test]
fn test_project_twice_is_identical() {
    let enricher = test_enricher();
    let token = enricher.new_token().unwrap();

    assert_eq!(project(&token), project(&token));
    assert_eq!(token.project(), project(&token));
}

#[tokio::test]
async fn test_refresh_keeps_user_id() {
    let (verifier, _store) = scenario_verifier();
    let principal = verifier.verify(&LoginAttempt::new("a@b.com", "secret123")).await.unwrap();
    let enricher = test_enricher();

    let issued = enricher.issue(&principal).unwrap();
    let refreshed = enricher.refresh(issued.as_str()).unwrap();

    assert_eq!(refreshed.claims().user_id.as_deref(), Some("u1"));
    assert_eq!(refreshed.claims().jti, issued.claims().jti);
}

#[test]
fn test_token_from_other_secret_is_anonymous() {
    let other = TokenEnricher::new(&SessionConfig {
        secret: SecretString::new("another-secret-another-secret-xyz".to_string()),
        max_age_secs: 3600,
    })
    .unwrap();
    let foreign = other.new_token().unwrap();

    let enricher = test_enricher();
    assert!(enricher.decode(foreign.as_str()).is_err());
    assert_eq!(enricher.session_from_bearer(Some(foreign.as_str())), SessionView::anonymous());
}

#[test]
fn test_tampered_token_rejected() {
    let enricher = test_enricher();
    let token = enricher.new_token().unwrap();
    let mut tampered = token.as_str().to_string();
    tampered.push('x');

    assert!(enricher.decode(&tampered).is_err());
    assert!(enricher.refresh(&tampered).is_err());
}

#[test]
fn test_short_secret_rejected_at_construction() {
    let result = TokenEnricher::new(&SessionConfig {
        secret: SecretString::new("short".to_string()),
        max_age_secs: 3600,
    });
    assert!(result.is_err());
}
