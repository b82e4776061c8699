//! Centralized server configuration.
//!
//! Strongly-typed configuration loaded via the `config` crate from
//! environment variables, composed from the library configs
//! ([`LlmConfig`](samaritan_ai::LlmConfig),
//! [`GeocoderConfig`](samaritan_location::GeocoderConfig)).

use samaritan_ai::LlmConfig;
use samaritan_location::GeocoderConfig;
use serde::Deserialize;

/// Server configuration composed from library configs.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// SQLite database URL for the conversation log.
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Language-model backend configuration. `LLM__API_KEY` is the only
    /// required setting in the whole config.
    pub llm: LlmConfig,

    /// Geocoder configuration.
    #[serde(default)]
    pub geocoder: GeocoderConfig,
}

fn default_listen_addr() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_database_url() -> String {
    "sqlite://triage.db?mode=rwc".to_string()
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_api_key_is_required() {
        let config: ServerConfig =
            serde_json::from_value(serde_json::json!({"llm": {"api_key": "k"}}))
                .expect("deserialize");
        assert_eq!(config.listen_addr, "127.0.0.1:5000");
        assert_eq!(config.database_url, "sqlite://triage.db?mode=rwc");
        assert_eq!(config.geocoder.timeout_seconds, 10);
    }
}
