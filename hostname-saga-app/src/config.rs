//! Environment configuration
//!
//! | Variable | Required | Default |
//! |----------|----------|---------|
//! | `CLOUDFLARE_API_TOKEN` | yes | |
//! | `PIRSCH_CLIENT_ID` | yes | |
//! | `PIRSCH_CLIENT_SECRET` | yes | |
//! | `CLOUDFLARE_API_BASE` | no | provider default |
//! | `PIRSCH_API_BASE` | no | provider default |
//! | `HTTP_MAX_RETRIES` | no | 3 |
//! | `HTTP_BACKOFF` | no | `exponential` (`linear`, `fixed`) |
//! | `CUSTOM_DOMAIN_MIN_TLS_VERSION` | no | `1.0` |
//! | `CUSTOM_DOMAIN_SWEEP_PAGE_SIZE` | no | 100 |
//! | `PREVIEW_MAX_SNOOZES` | no | 30 |
//! | `PREVIEW_SNOOZE_SECS` | no | 60 |
//! | `PREVIEW_RECORD_TTL` | no | 1 |
//! | `ANALYTICS_TIMEZONE` | no | `UTC` |
//! | `ANALYTICS_ACTIVE_VISITORS_SECONDS` | no | 300 |
//!
//! Blank values count as unset.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use hostname_saga_core::WorkerConfig;
use hostname_saga_provider::{BackoffStrategy, RetryPolicy};
use thiserror::Error;

/// Credentials of the edge provider
#[derive(Clone)]
pub struct CloudflareConfig {
    pub api_token: String,
    pub base_url: Option<String>,
}

/// Client credentials of the analytics provider
#[derive(Clone)]
pub struct PirschConfig {
    pub client_id: String,
    pub client_secret: String,
    pub base_url: Option<String>,
}

/// Runtime configuration resolved from environment variables.
#[derive(Clone)]
pub struct AppConfig {
    pub cloudflare: CloudflareConfig,
    pub pirsch: PirschConfig,
    /// Retry policy shared by both provider clients
    pub retry: RetryPolicy,
    pub workers: WorkerConfig,
}

// Secrets stay out of logs
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("cloudflare_base_url", &self.cloudflare.base_url)
            .field("pirsch_client_id", &self.pirsch.client_id)
            .field("pirsch_base_url", &self.pirsch.base_url)
            .field("retry", &self.retry)
            .field("workers", &self.workers)
            .finish_non_exhaustive()
    }
}

impl AppConfig {
    /// Load `.env` when present, then read the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => log::debug!("Loaded environment from {}", path.display()),
            Err(dotenvy::Error::Io(_)) => {}
            Err(e) => return Err(e.into()),
        }
        Self::from_env()
    }

    /// Read the process environment only.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve the configuration through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(lookup);

        let mut retry = RetryPolicy::default();
        if let Some(max_retries) = vars.parse("HTTP_MAX_RETRIES")? {
            retry.max_retries = max_retries;
        }
        if let Some(strategy) = vars.parse::<BackoffStrategy>("HTTP_BACKOFF")? {
            retry.strategy = strategy;
        }

        let mut workers = WorkerConfig::default();
        if let Some(version) = vars.parse("CUSTOM_DOMAIN_MIN_TLS_VERSION")? {
            workers.custom_domain.min_tls_version = version;
        }
        if let Some(size) = vars.parse::<u32>("CUSTOM_DOMAIN_SWEEP_PAGE_SIZE")? {
            if size == 0 {
                return Err(ConfigError::Invalid {
                    key: "CUSTOM_DOMAIN_SWEEP_PAGE_SIZE",
                    value: size.to_string(),
                    reason: "must be at least 1".to_string(),
                });
            }
            workers.custom_domain.sweep_page_size = size;
        }
        if let Some(max) = vars.parse("PREVIEW_MAX_SNOOZES")? {
            workers.preview_domain.snooze.max_snoozes = max;
        }
        if let Some(secs) = vars.parse("PREVIEW_SNOOZE_SECS")? {
            workers.preview_domain.snooze.delay = Duration::from_secs(secs);
        }
        if let Some(ttl) = vars.parse("PREVIEW_RECORD_TTL")? {
            workers.preview_domain.record_ttl = ttl;
        }
        if let Some(timezone) = vars.get("ANALYTICS_TIMEZONE") {
            workers.analytics_domain.timezone = timezone;
        }
        if let Some(secs) = vars.parse("ANALYTICS_ACTIVE_VISITORS_SECONDS")? {
            workers.analytics_domain.active_visitors_seconds = secs;
        }

        Ok(Self {
            cloudflare: CloudflareConfig {
                api_token: vars.require("CLOUDFLARE_API_TOKEN")?,
                base_url: vars.get("CLOUDFLARE_API_BASE"),
            },
            pirsch: PirschConfig {
                client_id: vars.require("PIRSCH_CLIENT_ID")?,
                client_secret: vars.require("PIRSCH_CLIENT_SECRET")?,
                base_url: vars.get("PIRSCH_API_BASE"),
            },
            retry,
            workers,
        })
    }
}

struct Vars<F>(F);

impl<F: Fn(&str) -> Option<String>> Vars<F> {
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn require(&self, key: &'static str) -> Result<String, ConfigError> {
        self.get(key).ok_or(ConfigError::Missing(key))
    }

    fn parse<T>(&self, key: &'static str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.get(key)
            .map(|value| {
                value.parse().map_err(|e: T::Err| ConfigError::Invalid {
                    key,
                    reason: e.to_string(),
                    value,
                })
            })
            .transpose()
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid {key} value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use hostname_saga_provider::MinTlsVersion;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    const CREDENTIALS: [(&str, &str); 3] = [
        ("CLOUDFLARE_API_TOKEN", "cf-token"),
        ("PIRSCH_CLIENT_ID", "client"),
        ("PIRSCH_CLIENT_SECRET", "secret"),
    ];

    #[test]
    fn loads_defaults_with_credentials_only() {
        let config = AppConfig::from_lookup(lookup(&CREDENTIALS)).unwrap();

        assert_eq!(config.cloudflare.api_token, "cf-token");
        assert_eq!(config.cloudflare.base_url, None);
        assert_eq!(config.pirsch.client_id, "client");
        assert_eq!(config.retry, RetryPolicy::default());
        assert_eq!(config.workers, WorkerConfig::default());
    }

    #[test]
    fn rejects_missing_credentials() {
        let err = AppConfig::from_lookup(lookup(&[
            ("CLOUDFLARE_API_TOKEN", "cf-token"),
            ("PIRSCH_CLIENT_ID", "client"),
            ("PIRSCH_CLIENT_SECRET", "   "),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing("PIRSCH_CLIENT_SECRET")));
    }

    #[test]
    fn applies_tuning_variables() {
        let mut pairs = CREDENTIALS.to_vec();
        pairs.extend([
            ("HTTP_MAX_RETRIES", "5"),
            ("HTTP_BACKOFF", "linear"),
            ("CUSTOM_DOMAIN_MIN_TLS_VERSION", "1.2"),
            ("CUSTOM_DOMAIN_SWEEP_PAGE_SIZE", "25"),
            ("PREVIEW_MAX_SNOOZES", "10"),
            ("PREVIEW_SNOOZE_SECS", "5"),
            ("ANALYTICS_TIMEZONE", "Europe/Berlin"),
            ("PIRSCH_API_BASE", "http://localhost:8080"),
        ]);
        let config = AppConfig::from_lookup(lookup(&pairs)).unwrap();

        assert_eq!(config.retry.max_retries, 5);
        assert_eq!(config.retry.strategy, BackoffStrategy::Linear);
        assert_eq!(
            config.workers.custom_domain.min_tls_version,
            MinTlsVersion::V1_2
        );
        assert_eq!(config.workers.custom_domain.sweep_page_size, 25);
        assert_eq!(config.workers.preview_domain.snooze.max_snoozes, 10);
        assert_eq!(
            config.workers.preview_domain.snooze.delay,
            Duration::from_secs(5)
        );
        assert_eq!(config.workers.analytics_domain.timezone, "Europe/Berlin");
        assert_eq!(
            config.pirsch.base_url.as_deref(),
            Some("http://localhost:8080")
        );
    }

    #[test]
    fn rejects_unparsable_values() {
        let mut pairs = CREDENTIALS.to_vec();
        pairs.push(("PREVIEW_MAX_SNOOZES", "many"));
        let err = AppConfig::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { key: "PREVIEW_MAX_SNOOZES", ref value, .. } if value == "many"
        ));

        let mut pairs = CREDENTIALS.to_vec();
        pairs.push(("CUSTOM_DOMAIN_SWEEP_PAGE_SIZE", "0"));
        assert!(AppConfig::from_lookup(lookup(&pairs)).is_err());
    }

    #[test]
    fn debug_output_hides_secrets() {
        let config = AppConfig::from_lookup(lookup(&CREDENTIALS)).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("cf-token"));
        assert!(!debug.contains("secret"));
    }
}
