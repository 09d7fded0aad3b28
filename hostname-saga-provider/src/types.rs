use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============ Custom hostname (edge) ============

/// Domain-control validation method requested for a custom hostname.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DcvMethod {
    /// HTTP token served by the edge (`/.well-known/acme-challenge/...`).
    #[default]
    Http,
    /// TXT record at `_acme-challenge`.
    Txt,
    /// Approval e-mail.
    Email,
}

/// Certificate type requested for a custom hostname.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificateType {
    /// Domain-validated certificate.
    #[default]
    Dv,
}

/// Minimum TLS version accepted by the edge for a hostname.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MinTlsVersion {
    #[default]
    #[serde(rename = "1.0")]
    V1_0,
    #[serde(rename = "1.1")]
    V1_1,
    #[serde(rename = "1.2")]
    V1_2,
    #[serde(rename = "1.3")]
    V1_3,
}

impl MinTlsVersion {
    /// Wire representation (`"1.0"`, `"1.2"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1_0 => "1.0",
            Self::V1_1 => "1.1",
            Self::V1_2 => "1.2",
            Self::V1_3 => "1.3",
        }
    }
}

impl std::str::FromStr for MinTlsVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1.0" => Ok(Self::V1_0),
            "1.1" => Ok(Self::V1_1),
            "1.2" => Ok(Self::V1_2),
            "1.3" => Ok(Self::V1_3),
            other => Err(format!("unsupported TLS version: {other}")),
        }
    }
}

/// TLS settings for a new custom hostname.
///
/// # Default
///
/// HTTP DCV, DV certificate, minimum TLS 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SslSettings {
    pub method: DcvMethod,
    pub certificate_type: CertificateType,
    pub min_tls_version: MinTlsVersion,
}

/// Request to register a custom hostname on an edge zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateHostnameRequest {
    /// Fully-qualified hostname, e.g. `trust.example.com`.
    pub hostname: String,
    pub ssl: SslSettings,
}

/// TXT record the tenant must publish to prove hostname ownership.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OwnershipVerification {
    pub name: String,
    pub value: String,
}

/// HTTP (or TXT) artifact the certificate authority checks during DCV.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationRecord {
    /// Full URL the CA fetches, e.g. `http://host/.well-known/acme-challenge/<token>`.
    pub http_url: Option<String>,
    /// Expected body at `http_url`.
    pub http_body: Option<String>,
    pub txt_name: Option<String>,
    pub txt_value: Option<String>,
}

/// Certificate state of a custom hostname.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HostnameSsl {
    /// Raw provider status (`pending_validation`, `active`, ...).
    pub status: String,
    pub validation_records: Vec<ValidationRecord>,
    /// Messages of the CA validation errors, in provider order.
    pub validation_errors: Vec<String>,
}

/// A custom hostname as known by the edge provider.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomHostname {
    pub id: String,
    pub hostname: String,
    /// Raw provider hostname status (`pending`, `active`, ...).
    pub status: String,
    pub ssl: HostnameSsl,
    pub ownership_verification: Option<OwnershipVerification>,
    /// Ownership verification errors, in provider order.
    pub verification_errors: Vec<String>,
}

/// An edge zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    /// Apex name of the zone, e.g. `preview.example.io`.
    pub name: String,
    pub status: String,
}

// ============ DNS records ============

/// DNS record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Txt,
    Ns,
    Srv,
    Caa,
}

/// A DNS record in an edge zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    pub id: String,
    pub zone_id: String,
    pub record_type: DnsRecordType,
    /// Fully-qualified record name.
    pub name: String,
    pub content: String,
    pub ttl: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
}

/// Filter for [`EdgeHostnameProvider::list_records`](crate::EdgeHostnameProvider::list_records).
///
/// Empty fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordQuery {
    /// Exact, fully-qualified record name.
    pub name: Option<String>,
    pub record_type: Option<DnsRecordType>,
}

impl RecordQuery {
    /// Records with exactly `name` and `record_type`.
    #[must_use]
    pub fn exact(name: impl Into<String>, record_type: DnsRecordType) -> Self {
        Self {
            name: Some(name.into()),
            record_type: Some(record_type),
        }
    }
}

/// Body of a record create or overwrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDnsRecord {
    pub record_type: DnsRecordType,
    /// Fully-qualified record name.
    pub name: String,
    pub content: String,
    /// `1` means automatic.
    pub ttl: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
}

// ============ Analytics ============

/// A domain tracked by the analytics provider.
///
/// Only the fields this crate reads are modelled; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsDomain {
    pub id: String,
    #[serde(default)]
    pub def_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub mod_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub organization_id: Option<String>,
    pub hostname: String,
    #[serde(default)]
    pub subdomain: String,
    /// Code embedded in the tracking snippet.
    pub identification_code: String,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub active_visitors_seconds: Option<i64>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Request body for creating an analytics domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDomainRequest {
    /// Registrable domain, e.g. `example.com`.
    pub hostname: String,
    /// Leftmost label, e.g. `trust`.
    pub subdomain: String,
    pub timezone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<String>,
    pub public: bool,
    pub group_by_title: bool,
    pub active_visitors_seconds: u32,
    pub disable_scripts: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    pub traffic_spike_threshold: u32,
    pub traffic_warning_threshold_days: u32,
}

impl CreateDomainRequest {
    /// A private domain with every optional knob left at the provider default.
    #[must_use]
    pub fn new(
        hostname: impl Into<String>,
        subdomain: impl Into<String>,
        timezone: impl Into<String>,
        active_visitors_seconds: u32,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            subdomain: subdomain.into(),
            timezone: timezone.into(),
            organization_id: None,
            theme_id: None,
            public: false,
            group_by_title: false,
            active_visitors_seconds,
            disable_scripts: false,
            display_name: String::new(),
            traffic_spike_threshold: 0,
            traffic_warning_threshold_days: 0,
        }
    }

    /// Sets the name shown in the analytics dashboard.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tls_version_roundtrips_through_str() {
        let v: MinTlsVersion = "1.2".parse().unwrap();
        assert_eq!(v, MinTlsVersion::V1_2);
        assert_eq!(v.as_str(), "1.2");
        assert!("2.0".parse::<MinTlsVersion>().is_err());
    }

    #[test]
    fn default_ssl_settings_are_http_dv_tls10() {
        let ssl = SslSettings::default();
        assert_eq!(ssl.method, DcvMethod::Http);
        assert_eq!(ssl.certificate_type, CertificateType::Dv);
        assert_eq!(ssl.min_tls_version, MinTlsVersion::V1_0);
    }

    #[test]
    fn create_domain_request_omits_empty_display_name() {
        let req = CreateDomainRequest::new("example.com", "trust", "UTC", 300);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["hostname"], "example.com");
        assert_eq!(json["subdomain"], "trust");
        assert_eq!(json["active_visitors_seconds"], 300);
        assert!(json.get("display_name").is_none());
        assert!(json.get("organization_id").is_none());

        let named = req.with_display_name("Acme");
        let json = serde_json::to_value(&named).unwrap();
        assert_eq!(json["display_name"], "Acme");
    }

    #[test]
    fn analytics_domain_ignores_unknown_fields() {
        let domain: AnalyticsDomain = serde_json::from_str(
            r#"{
                "id": "pd-1",
                "hostname": "example.com",
                "subdomain": "trust",
                "identification_code": "abc123",
                "theme": {"color": "red"},
                "pinned": true
            }"#,
        )
        .unwrap();
        assert_eq!(domain.id, "pd-1");
        assert_eq!(domain.identification_code, "abc123");
        assert_eq!(domain.timezone, None);
    }

    #[test]
    fn record_type_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&DnsRecordType::Cname).unwrap(),
            "\"CNAME\""
        );
    }
}
