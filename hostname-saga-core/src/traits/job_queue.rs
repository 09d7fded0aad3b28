//! Durable job queue abstract Trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::jobs::JobArgs;

/// Per-insert scheduling options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertOpts {
    /// Upper bound on queue-level retries; `None` keeps the queue default
    pub max_attempts: Option<u32>,
    /// Earliest run time; `None` runs as soon as possible
    pub scheduled_at: Option<DateTime<Utc>>,
}

/// A job ready to be inserted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequest {
    pub kind: String,
    pub args: serde_json::Value,
    pub opts: InsertOpts,
}

impl JobRequest {
    /// Serialize typed args together with their kind and default options.
    pub fn new<A: JobArgs>(args: &A) -> CoreResult<Self> {
        Ok(Self {
            kind: A::KIND.to_string(),
            args: serde_json::to_value(args)?,
            opts: args.insert_opts(),
        })
    }
}

/// Durable Job Queue Trait
///
/// At-least-once delivery; the queue owns retries and scheduling.
#[async_trait]
pub trait JobQueue: Send + Sync {
    /// Insert a job, returning the queue's job id
    async fn insert(&self, request: JobRequest) -> CoreResult<String>;
}

/// Insert typed job args.
pub async fn enqueue<A: JobArgs>(queue: &dyn JobQueue, args: &A) -> CoreResult<String> {
    queue.insert(JobRequest::new(args)?).await
}
