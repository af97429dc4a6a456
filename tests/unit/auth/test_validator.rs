// Unit tests for login attempt validation

use credential_gate::auth::validator::{is_valid_email, validate_login_attempt, MIN_PASSWORD_LENGTH};
use credential_gate::core::errors::AuthError;
use credential_gate::core::models::LoginAttempt;

#[test]
fn test_min_password_length_is_six() {
    assert_eq!(MIN_PASSWORD_LENGTH, 6);
}

#[test]
fn test_multibyte_password_counts_characters() {
    // Six characters, more than six bytes
    let attempt = LoginAttempt::new("a@b.com", "ééééé€");
    assert!(validate_login_attempt(&attempt).is_ok());

    // Five characters, ten bytes
    let attempt = LoginAttempt::new("a@b.com", "ééééé");
    assert!(matches!(validate_login_attempt(&attempt), Err(AuthError::InvalidInput(_))));
}

#[test]
fn test_email_edge_cases() {
    assert!(is_valid_email("x@sub.domain.example"));
    assert!(is_valid_email("UPPER@CASE.COM"));
    assert!(!is_valid_email("a@b.com."));
    assert!(!is_valid_email("a@@b.com"));
    assert!(!is_valid_email("a@b..com"));
}
