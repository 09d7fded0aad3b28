use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for edge and analytics provider operations.
///
/// Every variant names the `provider` that produced it. Variants serialize
/// with a `code` tag for structured reporting.
///
/// `NetworkError`, `Timeout` and `RateLimited` are transient; the HTTP layer
/// retries them according to its [`RetryPolicy`](crate::RetryPolicy).
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// Connection failure, or a status listed as retryable
    #[error("[{provider}] Network error: {detail}")]
    NetworkError { provider: String, detail: String },

    #[error("[{provider}] Invalid credentials{}", suffix(.raw_message))]
    InvalidCredentials {
        provider: String,
        raw_message: Option<String>,
    },

    /// The client-credentials token exchange was rejected
    #[error("[{provider}] Authentication failed: status {status}: {raw_message}")]
    AuthFailed {
        provider: String,
        status: u16,
        raw_message: String,
    },

    /// Hostname, record, zone or analytics domain does not exist.
    ///
    /// Delete-class callers treat this as success.
    #[error("[{provider}] '{resource}' not found{}", suffix(.raw_message))]
    NotFound {
        provider: String,
        resource: String,
        raw_message: Option<String>,
    },

    #[error("[{provider}] '{resource}' already exists")]
    AlreadyExists {
        provider: String,
        resource: String,
        raw_message: Option<String>,
    },

    #[error("[{provider}] Invalid parameter '{param}': {detail}")]
    InvalidParameter {
        provider: String,
        param: String,
        detail: String,
    },

    /// HTTP 429; `retry_after` in seconds when the API sent one
    #[error("[{provider}] Rate limited{}", retry_hint(.retry_after))]
    RateLimited {
        provider: String,
        retry_after: Option<u64>,
        raw_message: Option<String>,
    },

    #[error("[{provider}] Request timeout: {detail}")]
    Timeout { provider: String, detail: String },

    #[error("[{provider}] Permission denied{}", suffix(.raw_message))]
    PermissionDenied {
        provider: String,
        raw_message: Option<String>,
    },

    /// Response body did not match the expected shape
    #[error("[{provider}] Parse error: {detail}")]
    ParseError { provider: String, detail: String },

    #[error("[{provider}] Serialization error: {detail}")]
    SerializationError { provider: String, detail: String },

    /// API error with no mapping; `raw_code` is the API code or HTTP status
    #[error("[{provider}] {raw_message}")]
    Unknown {
        provider: String,
        raw_code: Option<String>,
        raw_message: String,
    },
}

fn suffix(raw_message: &Option<String>) -> String {
    raw_message
        .as_deref()
        .map(|msg| format!(": {msg}"))
        .unwrap_or_default()
}

fn retry_hint(retry_after: &Option<u64>) -> String {
    retry_after
        .map(|secs| format!(" (retry after {secs}s)"))
        .unwrap_or_default()
}

impl ProviderError {
    /// Whether the error is expected behaviour (bad input, missing resource).
    ///
    /// Callers log `true` at `warn` and `false` at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::NotFound { .. }
                | Self::AlreadyExists { .. }
                | Self::InvalidParameter { .. }
                | Self::PermissionDenied { .. }
        )
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether another attempt may succeed
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found(raw_message: Option<&str>) -> ProviderError {
        ProviderError::NotFound {
            provider: "cloudflare".into(),
            resource: "cf123".into(),
            raw_message: raw_message.map(str::to_string),
        }
    }

    #[test]
    fn optional_messages_are_appended() {
        assert_eq!(not_found(None).to_string(), "[cloudflare] 'cf123' not found");
        assert_eq!(
            not_found(Some("Custom hostname not found")).to_string(),
            "[cloudflare] 'cf123' not found: Custom hostname not found"
        );
    }

    #[test]
    fn rate_limit_mentions_retry_after() {
        let limited = |retry_after| ProviderError::RateLimited {
            provider: "pirsch".into(),
            retry_after,
            raw_message: None,
        };
        assert_eq!(limited(None).to_string(), "[pirsch] Rate limited");
        assert_eq!(
            limited(Some(30)).to_string(),
            "[pirsch] Rate limited (retry after 30s)"
        );
    }

    #[test]
    fn serializes_with_variant_code() {
        let json = serde_json::to_value(ProviderError::AuthFailed {
            provider: "pirsch".into(),
            status: 400,
            raw_message: "bad client".into(),
        })
        .unwrap();
        assert_eq!(json["code"], "AuthFailed");
        assert_eq!(json["status"], 400);
    }

    #[test]
    fn classification() {
        let missing = not_found(None);
        assert!(missing.is_not_found() && missing.is_expected() && !missing.is_retryable());

        let timeout = ProviderError::Timeout {
            provider: "t".into(),
            detail: "x".into(),
        };
        assert!(timeout.is_retryable() && !timeout.is_expected());

        let auth = ProviderError::AuthFailed {
            provider: "t".into(),
            status: 401,
            raw_message: String::new(),
        };
        assert!(!auth.is_retryable() && !auth.is_expected());
    }
}
