//! # hostname-saga-provider
//!
//! Provider adapters for provisioning tenant custom hostnames: an edge provider
//! issuing hostnames, certificates and DNS records, and a web analytics provider
//! tracking the resulting domains.
//!
//! ## Supported Providers
//!
//! | Provider | Trait | Feature Flag | Auth Method |
//! |----------|-------|-------------|-------------|
//! | [Cloudflare](https://www.cloudflare.com/) (SSL for SaaS) | [`EdgeHostnameProvider`] | `cloudflare` | Bearer Token |
//! | [Pirsch](https://pirsch.io/) | [`AnalyticsProvider`] | `pirsch` | OAuth2 client credentials |
//!
//! ## Feature Flags
//!
//! - **`all-providers`** *(default)*: enable every provider listed above.
//! - **`cloudflare`** / **`pirsch`**: enable a single provider.
//! - **`native-tls`** *(default)* or **`rustls`**: TLS backend.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hostname_saga_provider::{
//!     CloudflareProvider, CreateHostnameRequest, EdgeHostnameProvider, SslSettings,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let edge = CloudflareProvider::new("your-token".to_string())?;
//!     let hostname = edge
//!         .create_hostname(
//!             "zone-id",
//!             &CreateHostnameRequest {
//!                 hostname: "trust.example.com".to_string(),
//!                 ssl: SslSettings::default(),
//!             },
//!         )
//!         .await?;
//!     println!("{} -> {:?}", hostname.id, hostname.ownership_verification);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError).
//! Transient errors (`NetworkError`, `Timeout`, `RateLimited`) are retried
//! according to each provider's [`RetryPolicy`]; a missing resource is always
//! [`ProviderError::NotFound`] so callers can treat deletes as idempotent.

mod error;
mod http_client;
mod providers;
mod retry;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export retry configuration
pub use retry::{BackoffStrategy, RetryPolicy};

// Re-export public traits only (internal traits are not exported)
pub use traits::{AnalyticsProvider, EdgeHostnameProvider};

// Re-export types
pub use types::{
    AnalyticsDomain, CertificateType, CreateDomainRequest, CreateHostnameRequest, CustomHostname,
    DcvMethod, DnsRecord, DnsRecordType, HostnameSsl, MinTlsVersion, NewDnsRecord,
    OwnershipVerification, RecordQuery, SslSettings, ValidationRecord, Zone,
};

// Re-export log helper for callers logging provider payloads
pub use utils::log_sanitizer::redact_for_log;

// Re-export concrete providers (behind feature flags)
#[cfg(feature = "cloudflare")]
pub use providers::CloudflareProvider;

#[cfg(feature = "pirsch")]
pub use providers::PirschProvider;
