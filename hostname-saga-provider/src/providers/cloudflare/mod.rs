//! Cloudflare edge provider (custom hostnames for SaaS + zone DNS)

mod error;
mod http;
mod provider;
mod types;

use std::time::Duration;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, create_http_client,
};
use crate::retry::RetryPolicy;

pub(crate) use types::{
    CloudflareCreateHostnameBody, CloudflareCustomHostname, CloudflareDnsRecord,
    CloudflareDnsRecordBody, CloudflareResponse, CloudflareZone,
};

pub(crate) const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";
/// Maximum page size of the DNS records API
pub(crate) const MAX_PAGE_SIZE_RECORDS: u32 = 100;

/// Cloudflare edge provider
pub struct CloudflareProvider {
    pub(crate) client: Client,
    pub(crate) api_token: String,
    pub(crate) base_url: String,
    pub(crate) retry: RetryPolicy,
}

impl CloudflareProvider {
    pub fn new(api_token: String) -> Result<Self> {
        Ok(Self {
            client: create_http_client(
                "cloudflare",
                Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
                Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            )?,
            api_token,
            base_url: CF_API_BASE.to_string(),
            retry: RetryPolicy::default(),
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
