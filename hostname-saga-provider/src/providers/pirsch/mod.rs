//! Pirsch analytics provider
//!
//! Client-credentials authentication: `POST /token` returns a bearer token and
//! its expiry. The token is cached and shared by every request until it
//! expires or the API answers 401.

mod error;
mod http;
mod provider;
mod types;

use std::time::Duration;

use reqwest::Client;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::providers::common::{DEFAULT_CONNECT_TIMEOUT_SECS, create_http_client};
use crate::retry::RetryPolicy;

use types::AccessToken;

pub(crate) const PIRSCH_API_BASE: &str = "https://api.pirsch.io/api/v1";
/// Default request timeout (seconds)
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Pirsch analytics provider
pub struct PirschProvider {
    pub(crate) client: Client,
    pub(crate) client_id: String,
    pub(crate) client_secret: String,
    pub(crate) base_url: String,
    pub(crate) retry: RetryPolicy,
    pub(crate) token: RwLock<Option<AccessToken>>,
}

impl PirschProvider {
    pub fn new(client_id: String, client_secret: String) -> Result<Self> {
        Self::with_timeout(
            client_id,
            client_secret,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    pub fn with_timeout(client_id: String, client_secret: String, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: create_http_client(
                "pirsch",
                Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
                timeout,
            )?,
            client_id,
            client_secret,
            base_url: PIRSCH_API_BASE.to_string(),
            retry: RetryPolicy::default(),
            token: RwLock::new(None),
        })
    }

    /// Override the API root (proxies, test servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}
