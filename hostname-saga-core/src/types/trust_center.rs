use serde::{Deserialize, Serialize};

/// Provisioning state of a trust center's preview hostname.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PreviewStatus {
    #[default]
    None,
    Provisioning,
    Ready,
    Failed,
}

impl PreviewStatus {
    const fn rank(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Provisioning => 1,
            Self::Ready | Self::Failed => 2,
        }
    }

    /// Status only moves forward: none → provisioning → ready | failed.
    /// Re-applying the current status is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self == next || next.rank() > self.rank()
    }
}

/// Tenant-facing trust portal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrustCenter {
    pub id: String,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub custom_domain_id: Option<String>,
    #[serde(default)]
    pub preview_domain_id: Option<String>,
    #[serde(default)]
    pub preview_status: PreviewStatus,
    #[serde(default)]
    pub analytics_domain_id: Option<String>,
    #[serde(default)]
    pub analytics_identification_code: Option<String>,
}

/// Organization owning a trust center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub display_name: String,
}
