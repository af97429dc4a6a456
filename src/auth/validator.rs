// Structural validation of login attempts

use crate::core::errors::AuthError;
use crate::core::models::LoginAttempt;
use regex::Regex;
use std::sync::LazyLock;

/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 6;

// Local part of permitted characters not ending in '.', then dot-separated
// domain labels and an alphabetic TLD of at least two letters. Leading dots
// and consecutive dots are rejected separately since `regex` has no lookaround.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Check that an email address is syntactically valid
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_PATTERN.is_match(email)
}

/// Validate the shape of a login attempt before any store access
pub fn validate_login_attempt(attempt: &LoginAttempt) -> Result<(), AuthError> {
    if !is_valid_email(&attempt.email) {
        return Err(AuthError::InvalidInput("email must be a valid address".into()));
    }

    if attempt.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::InvalidInput(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    Ok(())
}
