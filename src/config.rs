// Configuration management

use crate::core::crypto::MIN_SECRET_LENGTH;
use crate::core::errors::AuthError;
use crate::session::MAX_SESSION_AGE_SECS;
use secrecy::{ExposeSecret, SecretString};
use std::env;
use std::path::PathBuf;

/// Token signing settings injected into the token enricher
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub secret: SecretString,
    pub max_age_secs: u64,
}

/// Special paths recognized by the route guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteConfig {
    pub login_path: String,
    pub signup_path: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            login_path: "/login".to_string(),
            signup_path: "/signup".to_string(),
        }
    }
}

/// Application configuration loaded from environment variables
///
/// Assembled once at startup; components receive the sections they need.
#[derive(Debug, Clone)]
pub struct Config {
    // Server configuration
    pub bind_address: String,
    pub port: u16,
    pub request_timeout_secs: u64,

    // Session token configuration
    pub session: SessionConfig,

    // Route guard configuration
    pub routes: RouteConfig,

    // User store (optional YAML seed file)
    pub users_yaml_path: Option<PathBuf>,

    // Logging configuration
    pub log_level: String,
    pub log_format: String, // "json" or "text"
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Supports `.env` file loading in development (via dotenv crate).
    /// Validates all fields before returning.
    pub fn from_env() -> Result<Self, AuthError> {
        #[cfg(not(test))]
        {
            dotenv::dotenv().ok(); // Ignore errors (file may not exist)
        }

        let config = Self {
            bind_address: Self::get_env_or_default("BIND_ADDRESS", "0.0.0.0"),
            port: Self::parse_port()?,
            request_timeout_secs: Self::parse_u64_or_default("REQUEST_TIMEOUT_SECS", 30)?,
            session: SessionConfig {
                secret: Self::get_required_secret("AUTH_SECRET")?,
                max_age_secs: Self::parse_u64_or_default("SESSION_MAX_AGE_SECS", 30 * 24 * 60 * 60)?,
            },
            routes: RouteConfig {
                login_path: Self::get_env_or_default("LOGIN_PATH", "/login"),
                signup_path: Self::get_env_or_default("SIGNUP_PATH", "/signup"),
            },
            users_yaml_path: Self::get_optional_path("USERS_YAML_PATH"),
            log_level: Self::get_env_or_default("LOG_LEVEL", "info"),
            log_format: Self::get_env_or_default("LOG_FORMAT", "json"),
        };

        config.validate()?;

        Ok(config)
    }

    /// Get environment variable or return default value
    fn get_env_or_default(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    /// Get optional file path from environment variable
    fn get_optional_path(key: &str) -> Option<PathBuf> {
        match env::var(key) {
            Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
            _ => None,
        }
    }

    /// Get a required secret from environment variable
    fn get_required_secret(key: &str) -> Result<SecretString, AuthError> {
        let value = env::var(key)
            .map_err(|_| AuthError::Configuration(format!("{} not set", key)))?;

        if value.is_empty() {
            return Err(AuthError::Configuration(format!("{} is empty", key)));
        }

        Ok(SecretString::new(value))
    }

    /// Parse port from PORT environment variable
    fn parse_port() -> Result<u16, AuthError> {
        let port_str = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port_str.parse::<u16>().map_err(|e| {
            AuthError::Configuration(format!("Invalid PORT value '{}': {}", port_str, e))
        })?;

        if port == 0 {
            return Err(AuthError::Configuration(
                "PORT must be between 1 and 65535".to_string(),
            ));
        }

        Ok(port)
    }

    /// Parse u64 from environment variable or return default
    fn parse_u64_or_default(key: &str, default: u64) -> Result<u64, AuthError> {
        match env::var(key) {
            Ok(value) => {
                let parsed = value.parse::<u64>().map_err(|e| {
                    AuthError::Configuration(format!("Invalid {} value '{}': {}", key, value, e))
                })?;

                if parsed == 0 {
                    return Err(AuthError::Configuration(format!(
                        "{} must be greater than 0",
                        key
                    )));
                }

                Ok(parsed)
            }
            _ => Ok(default),
        }
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), AuthError> {
        Self::validate_secret(&self.session.secret)?;
        Self::validate_max_age(self.session.max_age_secs)?;
        Self::validate_routes(&self.routes)?;

        if let Some(ref path) = self.users_yaml_path {
            Self::validate_file_path(path, "Users YAML file")?;
        }

        Self::validate_log_level(&self.log_level)?;
        Self::validate_log_format(&self.log_format)?;

        Ok(())
    }

    /// Validate that the signing secret is long enough for HS256
    fn validate_secret(secret: &SecretString) -> Result<(), AuthError> {
        let len = secret.expose_secret().len();
        if len < MIN_SECRET_LENGTH {
            return Err(AuthError::Configuration(format!(
                "AUTH_SECRET must be at least {} bytes, got {}",
                MIN_SECRET_LENGTH, len
            )));
        }
        Ok(())
    }

    fn validate_max_age(max_age_secs: u64) -> Result<(), AuthError> {
        if max_age_secs == 0 || max_age_secs > MAX_SESSION_AGE_SECS {
            return Err(AuthError::Configuration(format!(
                "SESSION_MAX_AGE_SECS must be between 1 and {}, got {}",
                MAX_SESSION_AGE_SECS, max_age_secs
            )));
        }
        Ok(())
    }

    /// Validate login/signup paths
    fn validate_routes(routes: &RouteConfig) -> Result<(), AuthError> {
        for (name, path) in [("LOGIN_PATH", &routes.login_path), ("SIGNUP_PATH", &routes.signup_path)] {
            if !path.starts_with('/') {
                return Err(AuthError::Configuration(format!(
                    "Invalid {} '{}': must start with '/'",
                    name, path
                )));
            }
            if path.contains('?') || path.contains('#') {
                return Err(AuthError::Configuration(format!(
                    "Invalid {} '{}': must be a bare path",
                    name, path
                )));
            }
        }

        if routes.login_path == routes.signup_path {
            return Err(AuthError::Configuration(
                "LOGIN_PATH and SIGNUP_PATH must differ".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate that a file path exists and is readable
    fn validate_file_path(path: &PathBuf, description: &str) -> Result<(), AuthError> {
        if !path.exists() {
            return Err(AuthError::Configuration(format!(
                "{} not found at {:?}",
                description, path
            )));
        }

        if !path.is_file() {
            return Err(AuthError::Configuration(format!(
                "{} is not a file: {:?}",
                description, path
            )));
        }

        std::fs::File::open(path).map_err(|e| {
            AuthError::Configuration(format!("Cannot read {} at {:?}: {}", description, path, e))
        })?;

        Ok(())
    }

    /// Validate log level
    fn validate_log_level(level: &str) -> Result<(), AuthError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&level.to_lowercase().as_str()) {
            return Err(AuthError::Configuration(format!(
                "Invalid LOG_LEVEL '{}': must be one of {}",
                level,
                valid_levels.join(", ")
            )));
        }
        Ok(())
    }

    /// Validate log format
    fn validate_log_format(format: &str) -> Result<(), AuthError> {
        if format != "json" && format != "text" {
            return Err(AuthError::Configuration(format!(
                "Invalid LOG_FORMAT '{}': must be 'json' or 'text'",
                format
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Create a test configuration for unit tests
    ///
    /// Bypasses environment variable loading and file validation.
    pub fn test_config() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 3000,
            request_timeout_secs: 30,
            session: SessionConfig {
                secret: SecretString::new("test-secret-test-secret-test-secret!".to_string()),
                max_age_secs: 3600,
            },
            routes: RouteConfig::default(),
            users_yaml_path: None,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}
