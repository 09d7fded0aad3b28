use serde::{Deserialize, Serialize};

/// A tenant hostname (`trust.example.com`) and its link to a mappable zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomDomain {
    pub id: String,
    /// The hostname itself; the tenant points it at the mappable domain.
    pub cname_record: String,
    pub mappable_domain_id: String,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub dns_verification_id: Option<String>,
    /// Embedded view of the linked verification, when loaded.
    #[serde(default)]
    pub dns_verification: Option<DnsVerification>,
}

impl CustomDomain {
    /// Linked verification id, ignoring empty strings.
    pub fn verification_id(&self) -> Option<&str> {
        non_empty(self.dns_verification_id.as_deref())
    }
}

/// A platform-owned zone hostnames and records may be created under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappableDomain {
    pub id: String,
    pub name: String,
    /// Edge provider zone id.
    pub zone_id: String,
}

/// Verification state of a custom hostname at the edge provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsVerification {
    pub id: String,
    #[serde(default)]
    pub owner_id: Option<String>,
    /// Edge provider's custom hostname id.
    pub provider_hostname_id: String,
    /// Name of the ownership TXT record.
    pub dns_txt_record: String,
    /// Expected content of the ownership TXT record.
    pub dns_txt_value: String,
    #[serde(default)]
    pub dns_verification_status: DnsVerificationStatus,
    #[serde(default)]
    pub dns_verification_status_reason: Option<String>,
    /// ACME token (last path segment of the validation URL). Write-once.
    #[serde(default)]
    pub acme_challenge_path: Option<String>,
    /// Body the validation URL must serve. Write-once.
    #[serde(default)]
    pub expected_acme_challenge_value: Option<String>,
    #[serde(default)]
    pub acme_challenge_status: SslVerificationStatus,
    #[serde(default)]
    pub acme_challenge_status_reason: Option<String>,
}

impl DnsVerification {
    /// Both ownership and certificate validation have completed.
    pub fn is_fully_active(&self) -> bool {
        self.dns_verification_status == DnsVerificationStatus::Active
            && self.acme_challenge_status == SslVerificationStatus::Active
    }
}

/// `Some(s)` only for non-empty strings.
pub(crate) fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// Custom hostname status as reported by the edge provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DnsVerificationStatus {
    Active,
    #[default]
    Pending,
    ActiveRedeploying,
    Moved,
    PendingDeletion,
    Deleted,
    PendingBlocked,
    PendingMigration,
    PendingProvisioned,
    Provisioned,
    Blocked,
    /// Any value this crate does not know about.
    #[serde(other)]
    Unknown,
}

impl DnsVerificationStatus {
    /// Map a raw provider value; unrecognised values become `Unknown`.
    pub fn from_provider(raw: &str) -> Self {
        match raw {
            "active" => Self::Active,
            "pending" => Self::Pending,
            "active_redeploying" => Self::ActiveRedeploying,
            "moved" => Self::Moved,
            "pending_deletion" => Self::PendingDeletion,
            "deleted" => Self::Deleted,
            "pending_blocked" => Self::PendingBlocked,
            "pending_migration" => Self::PendingMigration,
            "pending_provisioned" => Self::PendingProvisioned,
            "provisioned" => Self::Provisioned,
            "blocked" => Self::Blocked,
            _ => Self::Unknown,
        }
    }
}

/// Certificate (ACME challenge) status as reported by the edge provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SslVerificationStatus {
    #[default]
    Initializing,
    PendingValidation,
    PendingIssuance,
    PendingDeployment,
    PendingDeletion,
    PendingExpiration,
    PendingCleanup,
    Active,
    Expired,
    Deleted,
    InitializingTimedOut,
    ValidationTimedOut,
    IssuanceTimedOut,
    DeploymentTimedOut,
    DeletionTimedOut,
    StagingDeployment,
    StagingActive,
    Deactivating,
    Inactive,
    BackupIssued,
    HoldingDeployment,
    /// Any value this crate does not know about.
    #[serde(other)]
    Unknown,
}

impl SslVerificationStatus {
    /// Map a raw provider value; unrecognised values become `Unknown`.
    pub fn from_provider(raw: &str) -> Self {
        serde_json::from_value(serde_json::Value::String(raw.to_string()))
            .unwrap_or(Self::Unknown)
    }
}
