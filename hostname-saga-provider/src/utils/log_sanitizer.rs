//! Payload redaction for logs
//!
//! Edge and analytics payloads carry secrets: hostname ownership tokens,
//! ACME challenge bodies, OAuth client secrets and access tokens. JSON bodies
//! have those fields masked. Anything else is cut to [`LOG_LIMIT`] bytes.

use serde_json::Value;

/// Longest payload excerpt written to a log line (bytes)
pub const LOG_LIMIT: usize = 256;

const MASK: &str = "***";

/// Keys whose string values never reach a log line
const SECRET_KEYS: [&str; 6] = [
    "access_token",
    "client_secret",
    "http_body",
    "txt_value",
    "value",
    "identification_code",
];

/// Render a request or response body for logging.
pub fn redact_for_log(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(mut json) if json.is_object() || json.is_array() => {
            mask_secrets(&mut json);
            truncate(&json.to_string())
        }
        _ => truncate(body),
    }
}

fn mask_secrets(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, field) in map.iter_mut() {
                if field.is_string() && SECRET_KEYS.contains(&key.as_str()) {
                    *field = Value::String(MASK.to_string());
                } else {
                    mask_secrets(field);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(mask_secrets),
        _ => {}
    }
}

fn truncate(s: &str) -> String {
    if s.len() <= LOG_LIMIT {
        return s.to_string();
    }
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= LOG_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}… ({} bytes)", &s[..cut], s.len())
}
