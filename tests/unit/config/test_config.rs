// Unit tests for configuration loading

use credential_gate::config::Config;
use secrecy::ExposeSecret;
use std::env;
use std::sync::Mutex;

// Environment variables are process-wide; serialize the tests that touch them.
static ENV_LOCK: Mutex<()> = Mutex::new(());

const VARS: [&str; 10] = [
    "AUTH_SECRET",
    "PORT",
    "BIND_ADDRESS",
    "SESSION_MAX_AGE_SECS",
    "LOGIN_PATH",
    "SIGNUP_PATH",
    "USERS_YAML_PATH",
    "LOG_LEVEL",
    "LOG_FORMAT",
    "REQUEST_TIMEOUT_SECS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_from_env_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    env::set_var("AUTH_SECRET", "0123456789abcdef0123456789abcdef");

    let config = Config::from_env().unwrap();

    assert_eq!(config.port, 3000);
    assert_eq!(config.bind_address, "0.0.0.0");
    assert_eq!(config.routes.login_path, "/login");
    assert_eq!(config.routes.signup_path, "/signup");
    assert_eq!(config.session.max_age_secs, 30 * 24 * 60 * 60);
    assert_eq!(config.session.secret.expose_secret(), "0123456789abcdef0123456789abcdef");
    assert!(config.users_yaml_path.is_none());
    assert_eq!(config.log_format, "json");

    clear_env();
}

#[test]
fn test_from_env_missing_secret() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    let err = Config::from_env().unwrap_err();
    assert!(err.to_string().contains("AUTH_SECRET"));
}

#[test]
fn test_from_env_rejects_oversized_max_age() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    env::set_var("AUTH_SECRET", "0123456789abcdef0123456789abcdef");
    env::set_var("SESSION_MAX_AGE_SECS", "9223372036854775807");

    let err = Config::from_env().unwrap_err();
    assert!(err.to_string().contains("SESSION_MAX_AGE_SECS"));

    clear_env();
}

#[test]
fn test_from_env_custom_paths() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    env::set_var("AUTH_SECRET", "0123456789abcdef0123456789abcdef");
    env::set_var("LOGIN_PATH", "/auth/login");
    env::set_var("SIGNUP_PATH", "/auth/signup");

    let config = Config::from_env().unwrap();
    assert_eq!(config.routes.login_path, "/auth/login");
    assert_eq!(config.routes.signup_path, "/auth/signup");

    clear_env();
}

#[test]
fn test_from_env_invalid_values() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    for (key, value) in [
        ("PORT", "99999"),
        ("SESSION_MAX_AGE_SECS", "0"),
        ("LOG_LEVEL", "loud"),
        ("LOG_FORMAT", "xml"),
        ("AUTH_SECRET", "short"),
        ("USERS_YAML_PATH", "/nonexistent/users.yaml"),
    ] {
        clear_env();
        env::set_var("AUTH_SECRET", "0123456789abcdef0123456789abcdef");
        env::set_var(key, value);
        assert!(Config::from_env().is_err(), "{}={} should be rejected", key, value);
    }

    clear_env();
}
