//! Application error type

use hostname_saga_core::CoreError;
use hostname_saga_provider::ProviderError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A concrete provider client could not be built
    #[error("provider setup failed: {0}")]
    Provider(#[from] ProviderError),

    /// A required collaborator was not supplied to the builder
    #[error("{0} is required")]
    MissingComponent(&'static str),

    #[error("no worker registered for job kind {0}")]
    UnknownJobKind(String),

    #[error(transparent)]
    Job(#[from] CoreError),
}

impl AppError {
    /// Whether the queue should stop retrying this job.
    #[must_use]
    pub fn is_permanent(&self) -> bool {
        match self {
            Self::Job(e) => e.is_permanent(),
            Self::Provider(_) => false,
            Self::Config(_) | Self::MissingComponent(_) | Self::UnknownJobKind(_) => true,
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
