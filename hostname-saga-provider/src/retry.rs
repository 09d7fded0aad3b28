//! Retry configuration shared by the HTTP adapters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Upper bound for a server-provided `Retry-After` value.
const MAX_RETRY_AFTER_SECS: u64 = 30;

/// How the delay between attempts grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackoffStrategy {
    /// `initial * 2^attempt`
    #[default]
    Exponential,
    /// `initial * (attempt + 1)`
    Linear,
    /// `initial` every time
    Fixed,
}

impl std::str::FromStr for BackoffStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exponential" => Ok(Self::Exponential),
            "linear" => Ok(Self::Linear),
            "fixed" => Ok(Self::Fixed),
            other => Err(format!("unknown backoff strategy: {other}")),
        }
    }
}

/// Retry behaviour for provider HTTP calls.
///
/// # Default
///
/// 3 retries, 1s initial delay, 30s cap, exponential backoff, retrying
/// HTTP 429, 500, 502, 503 and 504.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Retries after the first attempt (0 disables retrying).
    pub max_retries: u32,
    /// Base delay.
    #[serde(with = "duration_millis")]
    pub initial_delay: Duration,
    /// Cap applied to every computed delay.
    #[serde(with = "duration_millis")]
    pub max_delay: Duration,
    /// Growth strategy.
    pub strategy: BackoffStrategy,
    /// HTTP status codes that trigger a retry.
    pub retryable_status: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            strategy: BackoffStrategy::Exponential,
            retryable_status: vec![429, 500, 502, 503, 504],
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    #[must_use]
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Whether a response status should be retried.
    #[must_use]
    pub fn is_retryable_status(&self, status: u16) -> bool {
        self.retryable_status.contains(&status)
    }

    /// Delay before retry number `attempt + 1` (0-based attempt index).
    #[must_use]
    pub fn backoff(&self, attempt: u32) -> Duration {
        let delay = match self.strategy {
            BackoffStrategy::Exponential => {
                // Prevent 2^attempt from overflowing
                let factor = 1_u32 << attempt.min(20);
                self.initial_delay.saturating_mul(factor)
            }
            BackoffStrategy::Linear => self.initial_delay.saturating_mul(attempt.saturating_add(1)),
            BackoffStrategy::Fixed => self.initial_delay,
        };
        delay.min(self.max_delay)
    }

    /// Delay to wait after `error`, honouring `Retry-After` on rate limits.
    ///
    /// A server-supplied delay is capped at 30s and at `max_delay`.
    #[must_use]
    pub fn delay_for(&self, error: &ProviderError, attempt: u32) -> Duration {
        if let ProviderError::RateLimited {
            retry_after: Some(secs),
            ..
        } = error
        {
            Duration::from_secs((*secs).min(MAX_RETRY_AFTER_SECS)).min(self.max_delay)
        } else {
            self.backoff(attempt)
        }
    }
}

mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
