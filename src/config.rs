use std::time::Duration;

use crate::error::ConfigError;

pub const API_BASE_URL: &str = "https://api.submagic.co/v1";

/// Single ceiling for every call; video operations can legitimately take a
/// while before the service answers.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

pub const API_KEY_ENV: &str = "SUBMAGIC_API_KEY";

/// Built once in `main` and handed to the tool surface. Holds only the
/// endpoint and the timeout constant; the credential is deliberately not
/// cached here so key rotation never requires a restart.
#[derive(Debug, Clone)]
pub struct ServerContext {
    pub base_url: String,
    pub timeout: Duration,
}

impl ServerContext {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl Default for ServerContext {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

/// Read fresh on every request. Unset and empty are both configuration
/// errors, never a silent fallback.
pub fn api_key() -> Result<String, ConfigError> {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(ConfigError::MissingApiKey),
    }
}
