//! Job argument types
//!
//! Required ids are plain `String`s defaulting to empty, so a payload missing
//! a field decodes and is then rejected with `MissingRequiredArg` by the
//! worker instead of failing deserialization.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::traits::InsertOpts;
use crate::types::non_empty;

/// Serializable arguments of one job kind
pub trait JobArgs: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Queue-wide job kind
    const KIND: &'static str;

    /// Options applied when this job is inserted
    fn insert_opts(&self) -> InsertOpts {
        InsertOpts::default()
    }
}

/// Queue-level retry ceiling for delete jobs.
///
/// Deletes tolerate missing resources, so a job still failing after this
/// many deliveries needs an operator rather than more retries.
pub const DELETE_MAX_ATTEMPTS: u32 = 5;

fn delete_opts() -> InsertOpts {
    InsertOpts {
        max_attempts: Some(DELETE_MAX_ATTEMPTS),
        ..InsertOpts::default()
    }
}

/// Borrow a required argument, rejecting empty values.
pub(crate) fn require<'a>(value: &'a str, field: &str, job: &str) -> CoreResult<&'a str> {
    if value.is_empty() {
        return Err(CoreError::missing_arg(field, job));
    }
    Ok(value)
}

// ===== Custom domains =====

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCustomDomainArgs {
    #[serde(default)]
    pub custom_domain_id: String,
}

impl JobArgs for CreateCustomDomainArgs {
    const KIND: &'static str = "create_custom_domain";
}

/// Validate one custom domain, or sweep all of them when no id is given
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateCustomDomainArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_domain_id: Option<String>,
}

impl JobArgs for ValidateCustomDomainArgs {
    const KIND: &'static str = "validate_custom_domain";
}

/// Every field is optional; empty strings count as absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCustomDomainArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_domain_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_verification_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_hostname_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
}

impl DeleteCustomDomainArgs {
    pub fn custom_domain_id(&self) -> Option<&str> {
        non_empty(self.custom_domain_id.as_deref())
    }

    pub fn dns_verification_id(&self) -> Option<&str> {
        non_empty(self.dns_verification_id.as_deref())
    }

    /// Hostname id and zone id, only when both are present.
    pub fn provider_hostname(&self) -> Option<(&str, &str)> {
        Some((
            non_empty(self.provider_hostname_id.as_deref())?,
            non_empty(self.zone_id.as_deref())?,
        ))
    }
}

impl JobArgs for DeleteCustomDomainArgs {
    const KIND: &'static str = "delete_custom_domain";

    fn insert_opts(&self) -> InsertOpts {
        delete_opts()
    }
}

// ===== Preview domains =====

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePreviewDomainArgs {
    #[serde(default)]
    pub trust_center_id: String,
    #[serde(default, alias = "trust_center_preview_zone_id")]
    pub preview_zone_id: String,
    /// Name of the mappable domain the preview hostname points at
    #[serde(default)]
    pub cname_target: String,
}

impl JobArgs for CreatePreviewDomainArgs {
    const KIND: &'static str = "create_preview_domain";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatePreviewDomainArgs {
    #[serde(default)]
    pub trust_center_id: String,
    #[serde(default, alias = "trust_center_preview_zone_id")]
    pub preview_zone_id: String,
}

impl JobArgs for ValidatePreviewDomainArgs {
    const KIND: &'static str = "validate_preview_domain";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletePreviewDomainArgs {
    #[serde(default)]
    pub custom_domain_id: String,
    #[serde(default, alias = "trust_center_preview_zone_id")]
    pub preview_zone_id: String,
}

impl JobArgs for DeletePreviewDomainArgs {
    const KIND: &'static str = "delete_preview_domain";

    fn insert_opts(&self) -> InsertOpts {
        delete_opts()
    }
}

// ===== Analytics domains =====

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAnalyticsDomainArgs {
    #[serde(default)]
    pub trust_center_id: String,
}

impl JobArgs for CreateAnalyticsDomainArgs {
    const KIND: &'static str = "create_analytics_domain";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAnalyticsDomainArgs {
    #[serde(default)]
    pub trust_center_id: String,
}

impl JobArgs for UpdateAnalyticsDomainArgs {
    const KIND: &'static str = "update_analytics_domain";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAnalyticsDomainArgs {
    #[serde(default)]
    pub analytics_domain_id: String,
    /// Trust center whose analytics fields are cleared afterwards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trust_center_id: Option<String>,
}

impl JobArgs for DeleteAnalyticsDomainArgs {
    const KIND: &'static str = "delete_analytics_domain";

    fn insert_opts(&self) -> InsertOpts {
        delete_opts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_field_decodes_empty() {
        let args: CreateCustomDomainArgs = serde_json::from_str("{}").unwrap();
        let err = require(&args.custom_domain_id, "custom_domain_id", CreateCustomDomainArgs::KIND)
            .unwrap_err();
        assert!(matches!(err, CoreError::MissingRequiredArg { .. }));
    }

    #[test]
    fn delete_args_treat_empty_as_absent() {
        let args = DeleteCustomDomainArgs {
            custom_domain_id: Some(String::new()),
            dns_verification_id: Some("dv-1".into()),
            provider_hostname_id: Some("cf123".into()),
            zone_id: Some(String::new()),
        };
        assert_eq!(args.custom_domain_id(), None);
        assert_eq!(args.dns_verification_id(), Some("dv-1"));
        assert_eq!(args.provider_hostname(), None);
    }

    #[test]
    fn preview_zone_accepts_legacy_field_name() {
        let args: ValidatePreviewDomainArgs = serde_json::from_value(serde_json::json!({
            "trust_center_id": "tc-1",
            "trust_center_preview_zone_id": "zone-1",
        }))
        .unwrap();
        assert_eq!(args.preview_zone_id, "zone-1");
    }

    #[test]
    fn absent_optional_ids_are_not_serialized() {
        let json = serde_json::to_value(DeleteCustomDomainArgs {
            provider_hostname_id: Some("cf123".into()),
            zone_id: Some("zone-1".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"provider_hostname_id": "cf123", "zone_id": "zone-1"})
        );
    }

    #[test]
    fn delete_jobs_have_bounded_attempts() {
        let bounded = Some(DELETE_MAX_ATTEMPTS);
        assert_eq!(DeleteCustomDomainArgs::default().insert_opts().max_attempts, bounded);
        assert_eq!(DeletePreviewDomainArgs::default().insert_opts().max_attempts, bounded);
        assert_eq!(DeleteAnalyticsDomainArgs::default().insert_opts().max_attempts, bounded);

        assert_eq!(CreateCustomDomainArgs::default().insert_opts(), InsertOpts::default());
    }
}
