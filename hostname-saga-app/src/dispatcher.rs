//! Job kind → worker routing
//!
//! The queue hands over a job as its kind, JSON args, delivery attempt and
//! metadata. [`JobDispatcher`] decodes the args for the registered worker and
//! returns the worker's outcome.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use hostname_saga_core::jobs::{
    CreateAnalyticsDomainArgs, CreateCustomDomainArgs, CreatePreviewDomainArgs,
    DeleteAnalyticsDomainArgs, DeleteCustomDomainArgs, DeletePreviewDomainArgs,
    UpdateAnalyticsDomainArgs, ValidateCustomDomainArgs, ValidatePreviewDomainArgs,
};
use hostname_saga_core::workers::{
    CreateAnalyticsDomainWorker, CreateCustomDomainWorker, CreatePreviewDomainWorker,
    DeleteAnalyticsDomainWorker, DeleteCustomDomainWorker, DeletePreviewDomainWorker,
    UpdateAnalyticsDomainWorker, ValidateCustomDomainWorker, ValidatePreviewDomainWorker,
};
use hostname_saga_core::{CoreResult, Job, JobArgs, JobOutcome, Worker, WorkerConfig, WorkerContext};
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Worker with its args type erased
#[async_trait]
trait ErasedWorker: Send + Sync {
    async fn run(&self, args: Value, metadata: &Value) -> CoreResult<JobOutcome>;
}

struct Typed<W>(W);

#[async_trait]
impl<W: Worker> ErasedWorker for Typed<W> {
    async fn run(&self, args: Value, metadata: &Value) -> CoreResult<JobOutcome> {
        let job = Job::<W::Args>::from_raw(args, metadata)?;
        self.0.work(&job).await
    }
}

/// Routes a job kind to its worker
#[derive(Default)]
pub struct JobDispatcher {
    workers: BTreeMap<&'static str, Box<dyn ErasedWorker>>,
}

impl JobDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every lifecycle worker, sharing `ctx`.
    #[must_use]
    pub fn with_all_workers(ctx: &Arc<WorkerContext>, config: &WorkerConfig) -> Self {
        Self::new()
            .register(CreateCustomDomainWorker::new(
                Arc::clone(ctx),
                config.custom_domain.clone(),
            ))
            .register(ValidateCustomDomainWorker::new(
                Arc::clone(ctx),
                config.custom_domain.clone(),
            ))
            .register(DeleteCustomDomainWorker::new(Arc::clone(ctx)))
            .register(CreatePreviewDomainWorker::new(
                Arc::clone(ctx),
                config.preview_domain.clone(),
            ))
            .register(ValidatePreviewDomainWorker::new(
                Arc::clone(ctx),
                config.preview_domain.clone(),
            ))
            .register(DeletePreviewDomainWorker::new(Arc::clone(ctx)))
            .register(CreateAnalyticsDomainWorker::new(
                Arc::clone(ctx),
                config.analytics_domain.clone(),
            ))
            .register(UpdateAnalyticsDomainWorker::new(Arc::clone(ctx)))
            .register(DeleteAnalyticsDomainWorker::new(Arc::clone(ctx)))
    }

    /// Register `worker` for its args kind, replacing any previous one.
    #[must_use]
    pub fn register<W: Worker + 'static>(mut self, worker: W) -> Self {
        if self
            .workers
            .insert(W::Args::KIND, Box::new(Typed(worker)))
            .is_some()
        {
            log::warn!("[dispatcher] Replaced worker for {}", W::Args::KIND);
        }
        self
    }

    /// Registered job kinds, sorted
    pub fn kinds(&self) -> Vec<&'static str> {
        self.workers.keys().copied().collect()
    }

    /// Run one delivery of a job.
    ///
    /// # Arguments
    /// * `kind` - Job kind
    /// * `args` - JSON args as inserted
    /// * `attempt` - Queue delivery attempt, starting at 1; logged only
    /// * `metadata` - Job metadata; carries the snooze continuation
    pub async fn dispatch(
        &self,
        kind: &str,
        args: Value,
        attempt: u32,
        metadata: &Value,
    ) -> AppResult<JobOutcome> {
        let worker = self
            .workers
            .get(kind)
            .ok_or_else(|| AppError::UnknownJobKind(kind.to_string()))?;

        log::debug!("[dispatcher] Running {kind} (attempt {attempt})");
        match worker.run(args, metadata).await {
            Ok(outcome) => {
                if let JobOutcome::Snooze {
                    delay,
                    continuation,
                } = outcome
                {
                    log::info!(
                        "[dispatcher] {kind} snoozed for {}s (snooze {})",
                        delay.as_secs(),
                        continuation.attempts
                    );
                }
                Ok(outcome)
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("[dispatcher] {kind} failed: {e}");
                } else {
                    log::error!("[dispatcher] {kind} failed: {e}");
                }
                Err(e.into())
            }
        }
    }
}

/// Kinds of every job [`JobDispatcher::with_all_workers`] handles
pub const ALL_JOB_KINDS: [&str; 9] = [
    CreateCustomDomainArgs::KIND,
    ValidateCustomDomainArgs::KIND,
    DeleteCustomDomainArgs::KIND,
    CreatePreviewDomainArgs::KIND,
    ValidatePreviewDomainArgs::KIND,
    DeletePreviewDomainArgs::KIND,
    CreateAnalyticsDomainArgs::KIND,
    UpdateAnalyticsDomainArgs::KIND,
    DeleteAnalyticsDomainArgs::KIND,
];
