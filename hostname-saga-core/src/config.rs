//! Worker configuration
//!
//! Every section deserializes from a partial document, missing keys taking
//! their defaults.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use hostname_saga_provider::MinTlsVersion;

use crate::jobs::SnoozePolicy;

/// Default page size of the validation sweep
pub const DEFAULT_SWEEP_PAGE_SIZE: u32 = 100;
/// Default TTL of preview DNS records (1 = automatic)
pub const DEFAULT_RECORD_TTL: u32 = 1;
pub const DEFAULT_ANALYTICS_TIMEZONE: &str = "UTC";
pub const DEFAULT_ACTIVE_VISITORS_SECONDS: u32 = 300;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomDomainConfig {
    /// Minimum TLS version pinned on new hostnames
    pub min_tls_version: MinTlsVersion,
    #[serde(deserialize_with = "positive_page_size")]
    pub sweep_page_size: u32,
}

fn positive_page_size<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    match u32::deserialize(d)? {
        0 => Err(D::Error::custom("sweep_page_size must be at least 1")),
        size => Ok(size),
    }
}

impl Default for CustomDomainConfig {
    fn default() -> Self {
        Self {
            min_tls_version: MinTlsVersion::V1_0,
            sweep_page_size: DEFAULT_SWEEP_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewDomainConfig {
    pub snooze: SnoozePolicy,
    pub record_ttl: u32,
}

impl Default for PreviewDomainConfig {
    fn default() -> Self {
        Self {
            snooze: SnoozePolicy::default(),
            record_ttl: DEFAULT_RECORD_TTL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsDomainConfig {
    pub timezone: String,
    pub active_visitors_seconds: u32,
}

impl Default for AnalyticsDomainConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_ANALYTICS_TIMEZONE.to_string(),
            active_visitors_seconds: DEFAULT_ACTIVE_VISITORS_SECONDS,
        }
    }
}

/// All worker settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    pub custom_domain: CustomDomainConfig,
    pub preview_domain: PreviewDomainConfig,
    pub analytics_domain: AnalyticsDomainConfig,
}
