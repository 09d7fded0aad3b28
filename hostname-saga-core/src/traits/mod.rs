//! Seams to the systems this crate does not own

mod job_queue;
mod platform_api;

pub use job_queue::{InsertOpts, JobQueue, JobRequest, enqueue};
pub use platform_api::PlatformApi;
