//! Centralized configuration management for ameen-waitlist

use std::time::Duration;

use anyhow::{Context, Result};

use crate::errors::WaitlistError;

/// Table name used when AMEEN_AIRTABLE_TABLE is not set.
pub const DEFAULT_TABLE_NAME: &str = "Waitlist";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Airtable access key (required for submission)
    pub airtable_api_key: Option<String>,
    /// Airtable base identifier (required for submission)
    pub airtable_base_id: Option<String>,
    /// Destination table name
    pub airtable_table: String,
    /// HTTP client configuration
    pub http: HttpConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: "ameen-waitlist/0.1.0".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables and defaults.
    ///
    /// Credentials are optional at load time so the marketing screens work
    /// without them; submission checks them via [`Config::credentials`].
    pub fn from_env() -> Result<Self> {
        let airtable_api_key = std::env::var("AMEEN_AIRTABLE_API_KEY").ok();
        let airtable_base_id = std::env::var("AMEEN_AIRTABLE_BASE_ID").ok();
        let airtable_table = std::env::var("AMEEN_AIRTABLE_TABLE")
            .unwrap_or_else(|_| DEFAULT_TABLE_NAME.to_string());

        let http = HttpConfig {
            timeout_seconds: parse_env_var("AMEEN_HTTP_TIMEOUT_SECONDS")?.unwrap_or(30),
            user_agent: std::env::var("AMEEN_USER_AGENT")
                .unwrap_or_else(|_| "ameen-waitlist/0.1.0".to_string()),
        };

        Ok(Config {
            airtable_api_key,
            airtable_base_id,
            airtable_table,
            http,
        })
    }

    /// Resolve the mandatory collector credentials, failing fast when either
    /// is absent. No network call may be attempted without them.
    pub fn credentials(&self) -> Result<(&str, &str), WaitlistError> {
        let api_key = self
            .airtable_api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(WaitlistError::MissingApiKey)?;
        let base_id = self
            .airtable_base_id
            .as_deref()
            .filter(|b| !b.is_empty())
            .ok_or(WaitlistError::MissingBaseId)?;
        Ok((api_key, base_id))
    }

    /// Get HTTP timeout as Duration
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_seconds)
    }
}

/// Helper function to parse environment variable as a specific type
fn parse_env_var<T>(var_name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display + Send + Sync + std::error::Error + 'static,
{
    match std::env::var(var_name) {
        Ok(val) => val.parse().map(Some).with_context(|| {
            format!("Failed to parse environment variable {} = '{}'", var_name, val)
        }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(api_key: Option<&str>, base_id: Option<&str>) -> Config {
        Config {
            airtable_api_key: api_key.map(String::from),
            airtable_base_id: base_id.map(String::from),
            airtable_table: DEFAULT_TABLE_NAME.to_string(),
            http: HttpConfig::default(),
        }
    }

    #[test]
    fn credentials_require_both_values() {
        let config = config_with(Some("key"), Some("app123"));
        assert_eq!(config.credentials().unwrap(), ("key", "app123"));

        let missing_key = config_with(None, Some("app123"));
        assert!(matches!(
            missing_key.credentials(),
            Err(WaitlistError::MissingApiKey)
        ));

        let missing_base = config_with(Some("key"), None);
        assert!(matches!(
            missing_base.credentials(),
            Err(WaitlistError::MissingBaseId)
        ));
    }

    #[test]
    fn empty_credential_counts_as_missing() {
        let config = config_with(Some(""), Some("app123"));
        assert!(matches!(
            config.credentials(),
            Err(WaitlistError::MissingApiKey)
        ));
    }

    #[test]
    fn http_defaults() {
        let http = HttpConfig::default();
        assert_eq!(http.timeout_seconds, 30);
        assert_eq!(http.user_agent, "ameen-waitlist/0.1.0");
    }
}
