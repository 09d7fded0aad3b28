use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{
    AnalyticsDomain, CreateDomainRequest, CreateHostnameRequest, CustomHostname, DnsRecord,
    NewDnsRecord, RecordQuery, Zone,
};

/// Raw API error before mapping (internal)
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// Provider-specific error code
    pub code: Option<String>,
    /// Original error message
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Extra information used while mapping an error (internal)
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Identifier of the resource the call addressed (hostname id, record id, zone id)
    pub resource: Option<String>,
    /// Record name, for conflicts
    pub record_name: Option<String>,
}

impl ErrorContext {
    pub fn resource(id: impl Into<String>) -> Self {
        Self {
            resource: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn record_name(name: impl Into<String>) -> Self {
        Self {
            record_name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Maps raw provider errors onto [`ProviderError`] (internal)
pub(crate) trait ProviderErrorMapper {
    /// Provider identifier used in log prefixes and error payloads
    fn provider_name(&self) -> &'static str;

    /// Map a raw API error to the unified error type
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    fn serialization_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::SerializationError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Fallback for unrecognised errors
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Edge provider managing custom hostnames (with certificates) and zone DNS records.
///
/// Every call is scoped to a zone. Delete methods are idempotent at the caller
/// level: a missing resource surfaces as [`ProviderError::NotFound`], which the
/// workers treat as success.
#[async_trait]
pub trait EdgeHostnameProvider: Send + Sync {
    /// Provider identifier
    fn id(&self) -> &'static str;

    /// Register a hostname; the response carries the ownership TXT record.
    async fn create_hostname(
        &self,
        zone_id: &str,
        req: &CreateHostnameRequest,
    ) -> Result<CustomHostname>;

    /// Current hostname state: status, certificate status, validation records and errors.
    async fn get_hostname(&self, zone_id: &str, hostname_id: &str) -> Result<CustomHostname>;

    async fn delete_hostname(&self, zone_id: &str, hostname_id: &str) -> Result<()>;

    async fn get_zone(&self, zone_id: &str) -> Result<Zone>;

    /// List records matching `query` (all pages).
    async fn list_records(&self, zone_id: &str, query: &RecordQuery) -> Result<Vec<DnsRecord>>;

    async fn create_record(&self, zone_id: &str, record: &NewDnsRecord) -> Result<DnsRecord>;

    /// Overwrite a record in place.
    async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        record: &NewDnsRecord,
    ) -> Result<DnsRecord>;

    async fn delete_record(&self, zone_id: &str, record_id: &str) -> Result<()>;
}

/// Web analytics provider tracking one domain per trust center.
#[async_trait]
pub trait AnalyticsProvider: Send + Sync {
    /// Provider identifier
    fn id(&self) -> &'static str;

    /// List domains, optionally filtered by a search term (empty = all).
    async fn list_domains(&self, search: &str) -> Result<Vec<AnalyticsDomain>>;

    async fn get_domain(&self, domain_id: &str) -> Result<AnalyticsDomain>;

    async fn create_domain(&self, req: &CreateDomainRequest) -> Result<AnalyticsDomain>;

    /// Point an existing domain at a new registrable hostname.
    async fn update_hostname(&self, domain_id: &str, hostname: &str) -> Result<()>;

    /// Change the subdomain label of an existing domain.
    async fn update_subdomain(&self, domain_id: &str, subdomain: &str) -> Result<()>;

    async fn delete_domain(&self, domain_id: &str) -> Result<()>;
}
