use crate::{env_or_default, ConfigError, FromEnv};
use secrecy::{ExposeSecret, SecretString};

/// Shared secret used when `API_KEY` is not set
pub const DEFAULT_API_KEY: &str = "PirateToleration";

/// Shared-secret API key configuration for mutating endpoints
#[derive(Clone, Debug)]
pub struct ApiKeyConfig {
    api_key: SecretString,
}

impl ApiKeyConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
        }
    }

    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Whether the built-in default key is in use
    pub fn is_default(&self) -> bool {
        self.api_key() == DEFAULT_API_KEY
    }
}

impl Default for ApiKeyConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY)
    }
}

impl FromEnv for ApiKeyConfig {
    /// Reads `API_KEY`, falling back to [`DEFAULT_API_KEY`].
    fn from_env() -> Result<Self, ConfigError> {
        let api_key = env_or_default("API_KEY", DEFAULT_API_KEY);
        if api_key.trim().is_empty() {
            return Err(ConfigError::ParseError {
                key: "API_KEY".to_string(),
                details: "must not be blank".to_string(),
            });
        }
        Ok(Self::new(api_key))
    }
}
