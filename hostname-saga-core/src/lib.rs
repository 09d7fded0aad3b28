//! # hostname-saga-core
//!
//! Lifecycle workers for tenant custom hostnames, preview hostnames and the
//! analytics domains tracking them.
//!
//! Provisioning spans three systems without a shared transaction: the
//! platform's own records ([`PlatformApi`]), the edge provider issuing
//! hostnames and certificates, and the analytics provider. Each step is a
//! durable queue job:
//!
//! - **Create** jobs allocate external state step by step through a
//!   [`Saga`](jobs::Saga); a failed step enqueues the matching Delete job for
//!   whatever was already created.
//! - **Validate** jobs poll the provider, write only what changed, and
//!   [snooze](jobs::SnoozePolicy) while propagation is pending.
//! - **Delete** jobs accept any subset of identifiers and treat "not found" as
//!   success, so they can be retried freely.
//!
//! Workers get their collaborators from a [`WorkerContext`]; the process
//! wiring decides which implementations to inject.

pub mod config;
pub mod error;
pub mod jobs;
pub mod traits;
pub mod types;
pub mod workers;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export common types
pub use config::WorkerConfig;
pub use error::{CoreError, CoreResult};
pub use jobs::{Job, JobArgs, JobOutcome, Worker};
pub use traits::{JobQueue, PlatformApi};
pub use workers::WorkerContext;
