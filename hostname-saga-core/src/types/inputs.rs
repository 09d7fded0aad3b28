//! Mutation inputs for the platform API

use serde::{Deserialize, Serialize};

use super::{DnsVerificationStatus, PreviewStatus, SslVerificationStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCustomDomainInput {
    pub cname_record: String,
    pub mappable_domain_id: String,
    pub owner_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCustomDomainInput {
    pub dns_verification_id: Option<String>,
}

impl UpdateCustomDomainInput {
    pub fn is_empty(&self) -> bool {
        self.dns_verification_id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDnsVerificationInput {
    pub provider_hostname_id: String,
    pub dns_txt_record: String,
    pub dns_txt_value: String,
    pub owner_id: Option<String>,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDnsVerificationInput {
    pub acme_challenge_path: Option<String>,
    pub expected_acme_challenge_value: Option<String>,
    pub acme_challenge_status: Option<SslVerificationStatus>,
    pub acme_challenge_status_reason: Option<String>,
    pub dns_verification_status: Option<DnsVerificationStatus>,
    pub dns_verification_status_reason: Option<String>,
}

impl UpdateDnsVerificationInput {
    /// Whether an update call would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTrustCenterInput {
    pub preview_domain_id: Option<String>,
    pub preview_status: Option<PreviewStatus>,
    pub analytics_domain_id: Option<String>,
    pub analytics_identification_code: Option<String>,
    /// Unset both analytics fields. Wins over the two fields above.
    #[serde(default)]
    pub clear_analytics: bool,
}

impl UpdateTrustCenterInput {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inputs_are_empty() {
        assert!(UpdateCustomDomainInput::default().is_empty());
        assert!(UpdateDnsVerificationInput::default().is_empty());
        assert!(UpdateTrustCenterInput::default().is_empty());
    }

    #[test]
    fn any_field_makes_input_non_empty() {
        let input = UpdateDnsVerificationInput {
            acme_challenge_status_reason: Some(String::new()),
            ..Default::default()
        };
        assert!(!input.is_empty());

        let input = UpdateTrustCenterInput {
            clear_analytics: true,
            ..Default::default()
        };
        assert!(!input.is_empty());
    }
}
