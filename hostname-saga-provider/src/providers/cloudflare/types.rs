//! Cloudflare API wire types

use serde::{Deserialize, Serialize};

use crate::types::{
    CustomHostname, HostnameSsl, OwnershipVerification, SslSettings, ValidationRecord, Zone,
};

/// Common Cloudflare response envelope
#[derive(Debug, Deserialize)]
pub struct CloudflareResponse<T> {
    pub success: bool,
    pub result: Option<T>,
    pub errors: Option<Vec<CloudflareError>>,
    pub result_info: Option<CloudflareResultInfo>,
}

#[derive(Debug, Deserialize)]
pub struct CloudflareError {
    pub code: i32,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct CloudflareResultInfo {
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
}

#[derive(Debug, Deserialize)]
pub struct CloudflareZone {
    pub id: String,
    pub name: String,
    pub status: String,
}

impl From<CloudflareZone> for Zone {
    fn from(z: CloudflareZone) -> Self {
        Self {
            id: z.id,
            name: z.name,
            status: z.status,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CloudflareDnsRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    pub proxied: Option<bool>,
}

/// Body for record create / overwrite
#[derive(Debug, Serialize)]
pub struct CloudflareDnsRecordBody<'a> {
    #[serde(rename = "type")]
    pub record_type: &'a str,
    pub name: &'a str,
    pub content: &'a str,
    pub ttl: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
}

// ============ Custom hostnames ============

#[derive(Debug, Serialize)]
pub struct CloudflareSslSettingsBody {
    pub min_tls_version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CloudflareSslBody {
    pub method: crate::types::DcvMethod,
    #[serde(rename = "type")]
    pub certificate_type: crate::types::CertificateType,
    pub settings: CloudflareSslSettingsBody,
}

impl From<SslSettings> for CloudflareSslBody {
    fn from(ssl: SslSettings) -> Self {
        Self {
            method: ssl.method,
            certificate_type: ssl.certificate_type,
            settings: CloudflareSslSettingsBody {
                min_tls_version: ssl.min_tls_version.as_str(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CloudflareCreateHostnameBody<'a> {
    pub hostname: &'a str,
    pub ssl: CloudflareSslBody,
}

#[derive(Debug, Deserialize)]
pub struct CloudflareOwnershipVerification {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct CloudflareValidationRecord {
    pub http_url: Option<String>,
    pub http_body: Option<String>,
    pub txt_name: Option<String>,
    pub txt_value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CloudflareValidationError {
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CloudflareSsl {
    pub status: Option<String>,
    pub validation_records: Option<Vec<CloudflareValidationRecord>>,
    pub validation_errors: Option<Vec<CloudflareValidationError>>,
}

#[derive(Debug, Deserialize)]
pub struct CloudflareCustomHostname {
    pub id: String,
    #[serde(default)]
    pub hostname: String,
    pub status: Option<String>,
    pub ssl: Option<CloudflareSsl>,
    pub ownership_verification: Option<CloudflareOwnershipVerification>,
    pub verification_errors: Option<Vec<String>>,
}

impl From<CloudflareCustomHostname> for CustomHostname {
    fn from(h: CloudflareCustomHostname) -> Self {
        let ssl = h.ssl.unwrap_or_default();
        Self {
            id: h.id,
            hostname: h.hostname,
            status: h.status.unwrap_or_default(),
            ssl: HostnameSsl {
                status: ssl.status.unwrap_or_default(),
                validation_records: ssl
                    .validation_records
                    .unwrap_or_default()
                    .into_iter()
                    .map(|r| ValidationRecord {
                        http_url: r.http_url,
                        http_body: r.http_body,
                        txt_name: r.txt_name,
                        txt_value: r.txt_value,
                    })
                    .collect(),
                validation_errors: ssl
                    .validation_errors
                    .unwrap_or_default()
                    .into_iter()
                    .map(|e| e.message)
                    .collect(),
            },
            ownership_verification: h.ownership_verification.map(|o| OwnershipVerification {
                name: o.name,
                value: o.value,
            }),
            verification_errors: h.verification_errors.unwrap_or_default(),
        }
    }
}
