use crate::common::DatasourceError;
use crate::common::client::DEFAULT_TIMEOUT;
use std::time::Duration;

/// Environment variable holding the gateway API key.
pub const API_KEY_ENV: &str = "DATASOURCE_API_KEY";

/// Default gateway base URL. Every provider path is appended below this.
pub const DEFAULT_BASE_URL: &str = "https://api.datasource.cybotrade.rs";

/// Loads `.env` from the current or project directory. Call before reading env vars (e.g. in tests).
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Client configuration: API key, gateway base URL and request timeout.
/// The key is a secret and is never embedded in code; use [Config::from_env].
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads the API key from `DATASOURCE_API_KEY` (after loading `.env` if present).
    pub fn from_env() -> Result<Self, DatasourceError> {
        load_dotenv();
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| DatasourceError::MissingApiKey(API_KEY_ENV.to_string()))?;
        Ok(Self::new(api_key))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
