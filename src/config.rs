//! Environment-driven application configuration
//!
//! Gathered once at startup; the cache TTL in particular is fixed at
//! construction time and never re-read. Lookup is injectable so tests can
//! supply variables without touching the process environment.

use std::time::Duration;
use thiserror::Error;

/// Cache TTL applied when `CACHE_TTL_HOURS` is not set
const DEFAULT_TTL_HOURS: u64 = 12;

/// Model used when `GEMINI_MODEL` is not set
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Errors raised while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is absent or empty
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A variable is present but does not parse
    #[error("Invalid value for {name}: '{value}'")]
    InvalidVar { name: &'static str, value: String },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Instrument dump endpoint URL
    pub api_url: String,
    /// Broker API key
    pub api_key: String,
    /// Broker access token
    pub access_token: String,
    /// How long a fetched catalog stays fresh
    pub cache_ttl: Duration,
    /// Generative-text API key; only needed for the insights command
    pub gemini_api_key: Option<String>,
    /// Generative-text model name
    pub gemini_model: String,
    /// Full generateContent endpoint override, if any
    pub gemini_api_url: Option<String>,
}

impl Config {
    /// Reads configuration from the process environment
    ///
    /// Required: `KITE_API_URL`, `KITE_API_KEY`, `KITE_ACCESS_TOKEN`.
    /// Optional: `CACHE_TTL_HOURS` (default 12), `GEMINI_API_KEY`,
    /// `GEMINI_MODEL` (default `gemini-1.5-flash`), `GEMINI_API_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through the given variable lookup
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let require = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingVar(name))
        };
        let optional = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let cache_ttl = match optional("CACHE_TTL_HOURS") {
            Some(value) => {
                let hours: u64 = value.parse().map_err(|_| ConfigError::InvalidVar {
                    name: "CACHE_TTL_HOURS",
                    value: value.clone(),
                })?;
                Duration::from_secs(hours * 3600)
            }
            None => Duration::from_secs(DEFAULT_TTL_HOURS * 3600),
        };

        Ok(Self {
            api_url: require("KITE_API_URL")?,
            api_key: require("KITE_API_KEY")?,
            access_token: require("KITE_ACCESS_TOKEN")?,
            cache_ttl,
            gemini_api_key: optional("GEMINI_API_KEY"),
            gemini_model: optional("GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_url: optional("GEMINI_API_URL"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    const REQUIRED: &[(&str, &str)] = &[
        ("KITE_API_URL", "https://api.example.com/mf/instruments"),
        ("KITE_API_KEY", "key"),
        ("KITE_ACCESS_TOKEN", "token"),
    ];

    #[test]
    fn test_minimal_config_applies_defaults() {
        let config = Config::from_lookup(lookup_from(REQUIRED)).expect("Config should load");

        assert_eq!(config.cache_ttl, Duration::from_secs(12 * 3600));
        assert_eq!(config.gemini_model, "gemini-1.5-flash");
        assert!(config.gemini_api_key.is_none());
        assert!(config.gemini_api_url.is_none());
    }

    #[test]
    fn test_missing_required_var_is_an_error() {
        let vars = [("KITE_API_URL", "https://api.example.com/mf/instruments")];
        let result = Config::from_lookup(lookup_from(&vars));

        match result {
            Err(ConfigError::MissingVar(name)) => assert_eq!(name, "KITE_API_KEY"),
            other => panic!("Expected MissingVar, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_required_var_counts_as_missing() {
        let vars = [
            ("KITE_API_URL", ""),
            ("KITE_API_KEY", "key"),
            ("KITE_ACCESS_TOKEN", "token"),
        ];
        let result = Config::from_lookup(lookup_from(&vars));
        assert!(matches!(result, Err(ConfigError::MissingVar("KITE_API_URL"))));
    }

    #[test]
    fn test_ttl_override() {
        let vars = [
            ("KITE_API_URL", "https://api.example.com/mf/instruments"),
            ("KITE_API_KEY", "key"),
            ("KITE_ACCESS_TOKEN", "token"),
            ("CACHE_TTL_HOURS", "1"),
        ];
        let config = Config::from_lookup(lookup_from(&vars)).expect("Config should load");
        assert_eq!(config.cache_ttl, Duration::from_secs(3600));
    }

    #[test]
    fn test_invalid_ttl_is_an_error() {
        let vars = [
            ("KITE_API_URL", "https://api.example.com/mf/instruments"),
            ("KITE_API_KEY", "key"),
            ("KITE_ACCESS_TOKEN", "token"),
            ("CACHE_TTL_HOURS", "soon"),
        ];
        let result = Config::from_lookup(lookup_from(&vars));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidVar { name: "CACHE_TTL_HOURS", .. })
        ));
    }
}
