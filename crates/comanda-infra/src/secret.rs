//! Environment credential loading.
//!
//! The one required secret is the remote API key, read from the process
//! environment and wrapped in `SecretString` so it never lands in Debug
//! output or logs. Absence is a fatal, user-visible configuration error,
//! not a panic.

use secrecy::SecretString;

use comanda_types::error::ConfigError;

/// Environment variable holding the remote API credential.
pub const API_KEY_VAR: &str = "DEEPSEEK_API_KEY";

/// Read the API credential from the environment.
pub fn require_api_key() -> Result<SecretString, ConfigError> {
    match std::env::var(API_KEY_VAR) {
        Ok(value) if !value.is_empty() => Ok(SecretString::from(value)),
        _ => Err(ConfigError::MissingCredential {
            var: API_KEY_VAR.to_string(),
        }),
    }
}
