//! Domain lifecycle workers
//!
//! Every worker receives its collaborators through [`WorkerContext`]; nothing
//! here constructs a client.

mod analytics_domain;
mod custom_domain;
mod preview_domain;

pub use analytics_domain::{
    CreateAnalyticsDomainWorker, DeleteAnalyticsDomainWorker, UpdateAnalyticsDomainWorker,
    parse_hostname,
};
pub use custom_domain::{
    CreateCustomDomainWorker, DeleteCustomDomainWorker, ValidateCustomDomainWorker,
    acme_challenge_token, verification_update,
};
pub use preview_domain::{
    CreatePreviewDomainWorker, DeletePreviewDomainWorker, ValidatePreviewDomainWorker,
};

use std::sync::Arc;

use hostname_saga_provider::{AnalyticsProvider, EdgeHostnameProvider};

use crate::error::{CoreError, CoreResult};
use crate::jobs::{JobOutcome, QueueCompensator};
use crate::traits::{JobQueue, PlatformApi};

/// Worker context - holds all collaborators
///
/// The process wiring builds it once and shares it between workers.
pub struct WorkerContext {
    /// Platform record store
    pub platform: Arc<dyn PlatformApi>,
    /// Custom hostnames, certificates and DNS records
    pub edge: Arc<dyn EdgeHostnameProvider>,
    /// Web analytics domains
    pub analytics: Arc<dyn AnalyticsProvider>,
    /// Queue compensation jobs are inserted into
    pub queue: Arc<dyn JobQueue>,
}

impl WorkerContext {
    #[must_use]
    pub fn new(
        platform: Arc<dyn PlatformApi>,
        edge: Arc<dyn EdgeHostnameProvider>,
        analytics: Arc<dyn AnalyticsProvider>,
        queue: Arc<dyn JobQueue>,
    ) -> Self {
        Self {
            platform,
            edge,
            analytics,
            queue,
        }
    }

    pub(crate) fn compensator(&self) -> QueueCompensator {
        QueueCompensator::new(self.queue.clone())
    }
}

/// Outcome of independent delete steps.
///
/// Every step runs; "not found" counts as deleted and the first real error is
/// returned at the end.
pub(crate) struct Cleanup {
    job: &'static str,
    first_error: Option<CoreError>,
}

impl Cleanup {
    pub(crate) fn new(job: &'static str) -> Self {
        Self {
            job,
            first_error: None,
        }
    }

    pub(crate) fn record<T>(&mut self, what: &str, id: &str, result: CoreResult<T>) {
        match result {
            Ok(_) => log::info!("[{}] Deleted {what} {id}", self.job),
            Err(e) if e.is_not_found() => {
                log::info!("[{}] {what} {id} already gone", self.job);
            }
            Err(e) => {
                log::error!("[{}] Failed to delete {what} {id}: {e}", self.job);
                self.first_error.get_or_insert(e);
            }
        }
    }

    pub(crate) fn has_failed(&self) -> bool {
        self.first_error.is_some()
    }

    pub(crate) fn finish(self) -> CoreResult<JobOutcome> {
        self.first_error.map_or(Ok(JobOutcome::Completed), Err)
    }
}
