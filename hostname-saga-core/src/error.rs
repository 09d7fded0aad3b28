//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use hostname_saga_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// A required job argument is empty or missing
    #[error("{field} is required for the {job} job")]
    MissingRequiredArg { field: String, job: String },

    /// Platform entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),

    /// Platform API failure
    #[error("Platform API error: {0}")]
    Platform(String),

    /// The entity already carries the linkage this job would create
    #[error("Already provisioned: {0}")]
    AlreadyProvisioned(String),

    /// Hostname does not split into subdomain and registrable domain
    #[error("Invalid hostname format: {0}")]
    InvalidHostnameFormat(String),

    /// Polling gave up
    #[error("{job}: max snoozes reached after {attempts} attempts")]
    MaxSnoozesReached { job: String, attempts: u32 },

    /// A linked entity the job depends on is absent
    #[error("Missing linkage: {0}")]
    MissingLinkage(String),

    /// Job queue failure
    #[error("Queue error: {0}")]
    Queue(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CoreError {
    /// Shorthand for [`CoreError::MissingRequiredArg`].
    pub fn missing_arg(field: &str, job: &str) -> Self {
        Self::MissingRequiredArg {
            field: field.to_string(),
            job: job.to_string(),
        }
    }

    /// Shorthand for [`CoreError::NotFound`].
    pub fn not_found(entity: &str, id: &str) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }

    /// Whether the error reports a missing resource in either system.
    ///
    /// Delete paths treat `true` as success.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Provider(e) => e.is_not_found(),
            _ => false,
        }
    }

    /// Whether retrying the same job can never succeed.
    #[must_use]
    pub fn is_permanent(&self) -> bool {
        match self {
            Self::MissingRequiredArg { .. }
            | Self::AlreadyProvisioned(_)
            | Self::InvalidHostnameFormat(_)
            | Self::MaxSnoozesReached { .. }
            | Self::Serialization(_) => true,
            Self::Provider(e) => matches!(
                e,
                ProviderError::InvalidCredentials { .. }
                    | ProviderError::InvalidParameter { .. }
                    | ProviderError::PermissionDenied { .. }
                    | ProviderError::AlreadyExists { .. }
            ),
            _ => false,
        }
    }

    /// Whether it is expected behavior (bad input, missing resource, ...), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::MissingRequiredArg { .. }
            | Self::NotFound { .. }
            | Self::AlreadyProvisioned(_)
            | Self::InvalidHostnameFormat(_)
            | Self::MaxSnoozesReached { .. }
            | Self::MissingLinkage(_) => true,
            Self::Provider(e) => e.is_expected(),
            _ => false,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
