//! Pirsch API wire types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

/// Cached bearer token
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

impl From<TokenResponse> for AccessToken {
    fn from(r: TokenResponse) -> Self {
        Self {
            token: r.access_token,
            expires_at: r.expires_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateHostnameBody<'a> {
    pub id: &'a str,
    pub hostname: &'a str,
}

#[derive(Debug, Serialize)]
pub struct UpdateSubdomainBody<'a> {
    pub id: &'a str,
    pub subdomain: &'a str,
}

/// Error body: `{"validation": {...}, "error": ["..."]}`
#[derive(Debug, Default, Deserialize)]
pub struct PirschErrorBody {
    #[serde(default)]
    pub error: Vec<String>,
    #[serde(default)]
    pub validation: Option<serde_json::Map<String, serde_json::Value>>,
}

impl PirschErrorBody {
    /// Best-effort human readable message; falls back to the raw body.
    pub fn message(raw: &str) -> String {
        let Ok(body) = serde_json::from_str::<Self>(raw) else {
            return raw.to_string();
        };
        let mut parts = body.error;
        if let Some(validation) = body.validation {
            parts.extend(
                validation
                    .into_iter()
                    .map(|(field, msg)| format!("{field}: {}", msg.as_str().unwrap_or_default())),
            );
        }
        if parts.is_empty() {
            raw.to_string()
        } else {
            parts.join(", ")
        }
    }
}
