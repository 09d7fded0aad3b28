//! Multi-step provisioning with compensation
//!
//! A [`Saga`] runs the steps of a Create job. The identifiers created so far
//! live in its [`PartialState`]; when a step fails, the state's rollback job is
//! handed to a [`Compensate`] hook before the error is returned.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::traits::{JobQueue, enqueue};

use super::JobArgs;

/// Identifiers created by a partially completed job
pub trait PartialState: Send + Sync {
    /// Job undoing what has been created
    type Rollback: JobArgs;

    /// Rollback args, or `None` while nothing external exists yet.
    fn rollback(&self) -> Option<Self::Rollback>;
}

/// Compensation hook
#[async_trait]
pub trait Compensate<S: PartialState>: Send + Sync {
    /// Undo `state`. Failures are logged, never returned.
    async fn compensate(&self, job: &str, state: &S);
}

/// Compensates by enqueueing the rollback job
pub struct QueueCompensator {
    queue: Arc<dyn JobQueue>,
}

impl QueueCompensator {
    #[must_use]
    pub fn new(queue: Arc<dyn JobQueue>) -> Self {
        Self { queue }
    }
}

#[async_trait]
impl<S: PartialState> Compensate<S> for QueueCompensator {
    async fn compensate(&self, job: &str, state: &S) {
        let Some(args) = state.rollback() else {
            log::debug!("[{job}] Nothing to compensate");
            return;
        };
        match enqueue(self.queue.as_ref(), &args).await {
            Ok(id) => log::info!(
                "[{job}] Enqueued {} job {id} as compensation",
                S::Rollback::KIND
            ),
            Err(e) => log::error!(
                "[{job}] Failed to enqueue {} compensation: {e}",
                S::Rollback::KIND
            ),
        }
    }
}

/// Step runner for one job invocation
pub struct Saga<'a, S: PartialState> {
    job: &'static str,
    state: S,
    compensator: &'a dyn Compensate<S>,
}

impl<'a, S: PartialState> Saga<'a, S> {
    pub fn new(job: &'static str, state: S, compensator: &'a dyn Compensate<S>) -> Self {
        Self {
            job,
            state,
            compensator,
        }
    }

    /// Record a newly created identifier.
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// Await `step`; on failure compensate the current state, then return the error.
    pub async fn step<T, F>(&self, name: &str, step: F) -> CoreResult<T>
    where
        F: Future<Output = CoreResult<T>> + Send,
    {
        match step.await {
            Ok(value) => Ok(value),
            Err(e) => {
                if e.is_expected() {
                    log::warn!("[{}] Step {name} failed: {e}", self.job);
                } else {
                    log::error!("[{}] Step {name} failed: {e}", self.job);
                }
                self.compensator.compensate(self.job, &self.state).await;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::jobs::DeleteAnalyticsDomainArgs;
    use crate::test_utils::MockJobQueue;

    #[derive(Default)]
    struct Created {
        id: Option<String>,
    }

    impl PartialState for Created {
        type Rollback = DeleteAnalyticsDomainArgs;

        fn rollback(&self) -> Option<DeleteAnalyticsDomainArgs> {
            self.id.clone().map(|id| DeleteAnalyticsDomainArgs {
                analytics_domain_id: id,
                trust_center_id: None,
            })
        }
    }

    fn failing() -> CoreResult<()> {
        Err(CoreError::Platform("boom".into()))
    }

    #[tokio::test]
    async fn failed_step_enqueues_rollback() {
        let queue = Arc::new(MockJobQueue::new());
        let compensator = QueueCompensator::new(queue.clone());
        let mut saga = Saga::new("test", Created::default(), &compensator);

        let id = saga.step("create", async { Ok("pd-1".to_string()) }).await.unwrap();
        saga.state_mut().id = Some(id);

        let err = saga.step("write_back", async { failing() }).await.unwrap_err();
        assert!(matches!(err, CoreError::Platform(_)));

        let jobs = queue.jobs().await;
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].kind, "delete_analytics_domain");
        assert_eq!(jobs[0].args["analytics_domain_id"], "pd-1");
        assert_eq!(
            jobs[0].opts.max_attempts,
            Some(crate::jobs::DELETE_MAX_ATTEMPTS)
        );
    }

    #[tokio::test]
    async fn nothing_created_nothing_enqueued() {
        let queue = Arc::new(MockJobQueue::new());
        let compensator = QueueCompensator::new(queue.clone());
        let saga = Saga::new("test", Created::default(), &compensator);

        assert!(saga.step("create", async { failing() }).await.is_err());
        assert!(queue.jobs().await.is_empty());
    }

    #[tokio::test]
    async fn enqueue_failure_is_not_raised() {
        let queue = Arc::new(MockJobQueue::new());
        queue.set_insert_error(Some("queue down".into())).await;
        let compensator = QueueCompensator::new(queue.clone());
        let saga = Saga::new(
            "test",
            Created {
                id: Some("pd-1".into()),
            },
            &compensator,
        );

        // The step's own error comes back, not the queue's
        let err = saga.step("write_back", async { failing() }).await.unwrap_err();
        assert!(matches!(err, CoreError::Platform(_)));
    }
}
