//! Job model: typed args, worker contract, snoozing and compensation

mod args;
mod saga;
mod snooze;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::CoreResult;

pub use args::{
    CreateAnalyticsDomainArgs, CreateCustomDomainArgs, CreatePreviewDomainArgs,
    DELETE_MAX_ATTEMPTS, DeleteAnalyticsDomainArgs, DeleteCustomDomainArgs,
    DeletePreviewDomainArgs, JobArgs, UpdateAnalyticsDomainArgs, ValidateCustomDomainArgs,
    ValidatePreviewDomainArgs,
};
pub(crate) use args::require;
pub use saga::{Compensate, PartialState, QueueCompensator, Saga};
pub use snooze::{Continuation, DEFAULT_MAX_SNOOZES, DEFAULT_SNOOZE_SECS, SnoozePolicy};

/// One delivery of a job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job<A> {
    pub args: A,
    /// Snooze state from the previous run
    pub continuation: Continuation,
}

impl<A: JobArgs> Job<A> {
    /// Job with no snooze history.
    pub fn new(args: A) -> Self {
        Self {
            args,
            continuation: Continuation::default(),
        }
    }

    /// Decode a job as stored by the queue.
    pub fn from_raw(args: serde_json::Value, metadata: &serde_json::Value) -> CoreResult<Self> {
        Ok(Self {
            args: serde_json::from_value(args)?,
            continuation: Continuation::from_metadata(metadata)?,
        })
    }

    #[must_use]
    pub fn with_continuation(mut self, continuation: Continuation) -> Self {
        self.continuation = continuation;
        self
    }
}

/// Result of a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    Completed,
    /// Run again after `delay`, persisting `continuation` as job metadata
    Snooze {
        delay: Duration,
        continuation: Continuation,
    },
}

/// Job handler
#[async_trait]
pub trait Worker: Send + Sync {
    type Args: JobArgs;

    async fn work(&self, job: &Job<Self::Args>) -> CoreResult<JobOutcome>;
}
