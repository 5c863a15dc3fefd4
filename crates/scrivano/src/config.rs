//! Environment-based configuration.

use chrono_tz::Tz;
use scrivano_error::{ConfigError, ScrivanoResult};

const DEFAULT_TIMEZONE: &str = "Asia/Tokyo";

/// Application configuration read from the process environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    api_key: String,
    timezone: Tz,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// A `.env` file is honored when present. `OPENAI_API_KEY` is required;
    /// `SCRIVANO_TZ` selects the timezone used for title resolution and
    /// defaults to `Asia/Tokyo`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the API key is missing or the timezone
    /// name is not a valid IANA identifier.
    pub fn from_env() -> ScrivanoResult<Self> {
        let _ = dotenvy::dotenv();

        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| ConfigError::new("OPENAI_API_KEY is not set"))?;

        let tz_name =
            std::env::var("SCRIVANO_TZ").unwrap_or_else(|_| DEFAULT_TIMEZONE.to_string());
        let timezone = tz_name
            .parse::<Tz>()
            .map_err(|e| ConfigError::new(format!("Invalid timezone '{}': {}", tz_name, e)))?;

        Ok(Self { api_key, timezone })
    }

    /// Build a configuration directly, bypassing the environment.
    pub fn new(api_key: impl Into<String>, timezone: Tz) -> Self {
        Self {
            api_key: api_key.into(),
            timezone,
        }
    }

    /// The chat API credential.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The timezone used to resolve "today" in the title lookup table.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }
}
