//! Pirsch error mapping
//!
//! Pirsch reports failures through the HTTP status only; the raw code is the
//! status as a string.

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::PirschProvider;

impl ProviderErrorMapper for PirschProvider {
    fn provider_name(&self) -> &'static str {
        "pirsch"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            Some("400") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: context.resource.unwrap_or_else(|| "general".to_string()),
                detail: raw.message,
            },
            Some("401") => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },
            Some("403") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },
            Some("404") => ProviderError::NotFound {
                provider: self.provider_name().to_string(),
                resource: context
                    .resource
                    .unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },
            Some("409") => ProviderError::AlreadyExists {
                provider: self.provider_name().to_string(),
                resource: context
                    .resource
                    .unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },
            _ => self.unknown_error(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> PirschProvider {
        PirschProvider::new(String::new(), String::new()).unwrap()
    }

    #[test]
    fn not_found_carries_domain_id() {
        let err = provider().map_error(
            RawApiError::with_code("404", "not found"),
            ErrorContext::resource("pd-1"),
        );
        assert!(matches!(
            err,
            ProviderError::NotFound { resource, .. } if resource == "pd-1"
        ));
    }

    #[test]
    fn unauthorized_is_invalid_credentials() {
        let err = provider().map_error(RawApiError::with_code("401", "no"), ErrorContext::default());
        assert!(matches!(err, ProviderError::InvalidCredentials { .. }));
    }

    #[test]
    fn conflict_is_already_exists() {
        let err = provider().map_error(
            RawApiError::with_code("409", "exists"),
            ErrorContext::resource("trust.example.com"),
        );
        assert!(matches!(err, ProviderError::AlreadyExists { .. }));
    }

    #[test]
    fn other_status_is_unknown() {
        let err = provider().map_error(
            RawApiError::with_code("418", "teapot"),
            ErrorContext::default(),
        );
        assert!(matches!(
            err,
            ProviderError::Unknown { raw_code, .. } if raw_code.as_deref() == Some("418")
        ));
    }
}
