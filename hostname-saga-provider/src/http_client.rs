//! Request execution shared by the provider adapters
//!
//! Adapters build their own `RequestBuilder` (URL, auth, body) and hand it to
//! an [`Exchange`], which sends it, classifies transport failures and
//! retryable statuses, and retries per the adapter's [`RetryPolicy`].
//! Interpreting any other status is left to the adapter.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::retry::RetryPolicy;
use crate::utils::log_sanitizer::redact_for_log;

const TOO_MANY_REQUESTS: u16 = 429;

/// Status and body of a completed HTTP exchange
#[derive(Debug)]
pub(crate) struct Reply {
    pub status: u16,
    pub body: String,
}

/// One provider's view of the HTTP layer
pub(crate) struct Exchange<'a> {
    provider: &'a str,
    policy: &'a RetryPolicy,
}

impl<'a> Exchange<'a> {
    pub fn new(provider: &'a str, policy: &'a RetryPolicy) -> Self {
        Self { provider, policy }
    }

    fn network_error(&self, detail: impl Into<String>) -> ProviderError {
        ProviderError::NetworkError {
            provider: self.provider.to_string(),
            detail: detail.into(),
        }
    }

    /// Send `request`, retrying transient failures.
    ///
    /// `label` names the call in logs, e.g. `POST /zones/abc/dns_records`.
    /// Requests with streaming bodies cannot be cloned and are sent once.
    pub async fn send(&self, request: RequestBuilder, label: &str) -> Result<Reply> {
        let mut attempt = 0;
        loop {
            let Some(current) = request.try_clone() else {
                log::warn!("[{}] {label}: body not cloneable, sending once", self.provider);
                return self.send_once(request, label).await;
            };

            let err = match self.send_once(current, label).await {
                Ok(reply) => return Ok(reply),
                Err(e) => e,
            };
            if attempt >= self.policy.max_retries || !err.is_retryable() {
                return Err(err);
            }

            let delay = self.policy.delay_for(&err, attempt);
            attempt += 1;
            log::warn!(
                "[{}] {label} failed ({attempt}/{}), retrying in {}ms: {err}",
                self.provider,
                self.policy.max_retries,
                delay.as_millis()
            );
            tokio::time::sleep(delay).await;
        }
    }

    async fn send_once(&self, request: RequestBuilder, label: &str) -> Result<Reply> {
        log::debug!("[{}] {label}", self.provider);

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: self.provider.to_string(),
                    detail: e.to_string(),
                }
            } else {
                self.network_error(e.to_string())
            }
        })?;
        let status = response.status().as_u16();

        if self.policy.is_retryable_status(status) {
            return Err(self.retryable_status(status, response).await);
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.network_error(format!("reading response body: {e}")))?;
        log::debug!(
            "[{}] {label} -> {status}: {}",
            self.provider,
            redact_for_log(&body)
        );
        Ok(Reply { status, body })
    }

    async fn retryable_status(&self, status: u16, response: Response) -> ProviderError {
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());
        let body = response.text().await.unwrap_or_default();

        if status == TOO_MANY_REQUESTS {
            log::warn!("[{}] Rate limited, retry after {retry_after:?}s", self.provider);
            return ProviderError::RateLimited {
                provider: self.provider.to_string(),
                retry_after,
                raw_message: Some(redact_for_log(&body)),
            };
        }
        log::warn!("[{}] Transient HTTP {status}", self.provider);
        self.network_error(format!("HTTP {status}: {}", redact_for_log(&body)))
    }

    /// Decode a JSON body.
    pub fn decode<T: DeserializeOwned>(&self, body: &str) -> Result<T> {
        serde_json::from_str(body).map_err(|e| {
            log::error!(
                "[{}] Undecodable response ({e}): {}",
                self.provider,
                redact_for_log(body)
            );
            ProviderError::ParseError {
                provider: self.provider.to_string(),
                detail: e.to_string(),
            }
        })
    }
}
