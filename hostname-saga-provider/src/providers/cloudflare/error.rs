//! Cloudflare error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::CloudflareProvider;

/// Cloudflare error code mapping
/// Reference: <https://api.cloudflare.com/#getting-started-responses>
impl ProviderErrorMapper for CloudflareProvider {
    fn provider_name(&self) -> &'static str {
        "cloudflare"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let resource = || {
            context
                .resource
                .clone()
                .unwrap_or_else(|| "<unknown>".to_string())
        };

        match raw.code.as_deref() {
            // Authentication error
            // 6003: Invalid request headers
            // 6103: Invalid format for X-Auth-Key header
            // 6111: Invalid format for Authorization header
            // 9109: Unauthorized to access requested resource
            // 10000: Authentication error
            Some("6003" | "6103" | "6111" | "9109" | "10000") => {
                ProviderError::InvalidCredentials {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // 10001 / 9103: token lacks the zone or SSL-for-SaaS permission
            Some("9103" | "10001") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // Invalid parameter
            // 1004: DNS Validation Error
            // 1409: Invalid custom hostname
            // 9000: Invalid or missing name
            // 9021: Invalid TTL
            Some(code @ ("1004" | "1409" | "9000" | "9021")) => {
                let param = match code {
                    "1409" => "hostname",
                    "9000" => "name",
                    "9021" => "ttl",
                    _ => "general",
                };
                ProviderError::InvalidParameter {
                    provider: self.provider_name().to_string(),
                    param: param.to_string(),
                    detail: raw.message,
                }
            }

            // Already exists
            // 1406: Duplicate custom hostname found
            // 81053..81058: a record with that host/settings already exists
            Some("1406" | "81053" | "81054" | "81055" | "81056" | "81057" | "81058") => {
                ProviderError::AlreadyExists {
                    provider: self.provider_name().to_string(),
                    resource: context
                        .record_name
                        .clone()
                        .unwrap_or_else(resource),
                    raw_message: Some(raw.message),
                }
            }

            // Not found
            // 1436: Custom hostname not found
            // 1551: Resource not found (custom hostname API)
            // 81044: Record does not exist
            // 7000 / 7003: No route / invalid object identifier (zone)
            Some("1436" | "1551" | "81044" | "7000" | "7003") => ProviderError::NotFound {
                provider: self.provider_name().to_string(),
                resource: resource(),
                raw_message: Some(raw.message),
            },

            // Rate limited without a 429 status
            Some("971" | "10429") => ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                retry_after: None,
                raw_message: Some(raw.message),
            },

            // Other error fallback
            _ => self.unknown_error(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

    fn provider() -> CloudflareProvider {
        CloudflareProvider::new(String::new()).unwrap()
    }

    fn ctx() -> ErrorContext {
        ErrorContext::default()
    }

    #[test]
    fn auth_errors_map_to_invalid_credentials() {
        let p = provider();
        for code in ["6003", "6103", "6111", "9109", "10000"] {
            let err = p.map_error(RawApiError::with_code(code, "auth"), ctx());
            assert!(
                matches!(err, ProviderError::InvalidCredentials { .. }),
                "code {code} mapped to {err:?}"
            );
        }
    }

    #[test]
    fn missing_permission_maps_to_permission_denied() {
        let p = provider();
        let err = p.map_error(RawApiError::with_code("10001", "forbidden"), ctx());
        assert!(matches!(err, ProviderError::PermissionDenied { .. }));
    }

    #[test]
    fn invalid_hostname_param() {
        let p = provider();
        let err = p.map_error(RawApiError::with_code("1409", "invalid hostname"), ctx());
        assert!(matches!(
            err,
            ProviderError::InvalidParameter { param, .. } if param == "hostname"
        ));
    }

    #[test]
    fn invalid_ttl_param() {
        let p = provider();
        let err = p.map_error(RawApiError::with_code("9021", "invalid TTL"), ctx());
        assert!(matches!(
            err,
            ProviderError::InvalidParameter { param, .. } if param == "ttl"
        ));
    }

    #[test]
    fn duplicate_record_uses_record_name() {
        let p = provider();
        let err = p.map_error(
            RawApiError::with_code("81057", "record already exists"),
            ErrorContext::record_name("_cf-custom-hostname.trust.example.com"),
        );
        assert!(matches!(
            err,
            ProviderError::AlreadyExists { resource, .. }
                if resource == "_cf-custom-hostname.trust.example.com"
        ));
    }

    #[test]
    fn duplicate_hostname_already_exists() {
        let p = provider();
        let err = p.map_error(RawApiError::with_code("1406", "duplicate"), ctx());
        assert!(matches!(
            err,
            ProviderError::AlreadyExists { resource, .. } if resource == "<unknown>"
        ));
    }

    #[test]
    fn record_not_found_81044() {
        let p = provider();
        let err = p.map_error(
            RawApiError::with_code("81044", "record does not exist"),
            ErrorContext::resource("rec-123"),
        );
        assert!(matches!(
            err,
            ProviderError::NotFound { resource, .. } if resource == "rec-123"
        ));
    }

    #[test]
    fn custom_hostname_not_found_1436() {
        let p = provider();
        let err = p.map_error(
            RawApiError::with_code("1436", "custom hostname not found"),
            ErrorContext::resource("cf123"),
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn zone_route_errors_are_not_found() {
        let p = provider();
        for code in ["7000", "7003"] {
            let err = p.map_error(RawApiError::with_code(code, "no route"), ctx());
            assert!(err.is_not_found(), "code {code} mapped to {err:?}");
        }
    }

    #[test]
    fn fallback_unknown_code() {
        let p = provider();
        let err = p.map_error(
            RawApiError::with_code("99999", "something unexpected"),
            ctx(),
        );
        assert!(matches!(
            err,
            ProviderError::Unknown { raw_code, raw_message, .. }
                if raw_code.as_deref() == Some("99999") && raw_message == "something unexpected"
        ));
    }

    #[test]
    fn fallback_no_code() {
        let p = provider();
        let err = p.map_error(RawApiError::new("no code at all"), ctx());
        assert!(matches!(
            err,
            ProviderError::Unknown { raw_code: None, raw_message, .. }
                if raw_message == "no code at all"
        ));
    }

    #[test]
    fn error_contains_provider_name() {
        let p = provider();
        let err = p.map_error(RawApiError::with_code("6003", "bad header"), ctx());
        assert!(matches!(
            err,
            ProviderError::InvalidCredentials { provider, .. } if provider == "cloudflare"
        ));
    }
}
