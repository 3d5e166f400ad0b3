use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Tunables for the login-attempt tracker and form validation. Library
/// callers usually take [`SecurityConfig::default`]; binaries can override
/// via the environment.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Attempts inside the block window before an identifier is blocked.
    pub max_attempts:        u32,
    /// Length of the block window, in seconds.
    pub block_duration_secs: u64,
    /// Minimum password length enforced by form validation.
    pub min_password_length: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_attempts:        5,
            block_duration_secs: 300,
            min_password_length: 8,
        }
    }
}

impl SecurityConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        fn parse<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
            match env::var(key) {
                Ok(raw) => raw
                    .parse::<T>()
                    .map_err(|_| ConfigError::InvalidValue(key.to_string(), raw)),
                Err(_) => Ok(default),
            }
        }

        let defaults = Self::default();
        Ok(Self {
            max_attempts:        parse("AUTH_MAX_ATTEMPTS", defaults.max_attempts)?,
            block_duration_secs: parse("AUTH_BLOCK_DURATION_SECS", defaults.block_duration_secs)?,
            min_password_length: parse("AUTH_MIN_PASSWORD_LENGTH", defaults.min_password_length)?,
        })
    }
}
