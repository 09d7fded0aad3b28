//! Polling by re-scheduling
//!
//! A validation job that has to wait for DNS or certificate propagation never
//! sleeps in-process. It returns [`JobOutcome::Snooze`] and the queue runs it
//! again later, carrying a [`Continuation`] with the attempt counter.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

use super::JobOutcome;

/// Default snooze ceiling
pub const DEFAULT_MAX_SNOOZES: u32 = 30;
/// Default delay between polls (seconds)
pub const DEFAULT_SNOOZE_SECS: u64 = 60;

/// Snooze state persisted in job metadata between runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Continuation {
    /// Snoozes taken so far
    #[serde(default, alias = "snoozes")]
    pub attempts: u32,
}

impl Continuation {
    /// Read the continuation from job metadata.
    ///
    /// `null` metadata is a first run. Unrelated metadata keys are ignored and
    /// the legacy `{"snoozes": N}` shape is accepted.
    pub fn from_metadata(metadata: &serde_json::Value) -> CoreResult<Self> {
        if metadata.is_null() {
            return Ok(Self::default());
        }
        Ok(Self::deserialize(metadata)?)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self {
            attempts: self.attempts.saturating_add(1),
        }
    }
}

/// Fixed-delay, bounded snoozing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnoozePolicy {
    pub max_snoozes: u32,
    #[serde(with = "duration_secs")]
    pub delay: Duration,
}

impl Default for SnoozePolicy {
    fn default() -> Self {
        Self {
            max_snoozes: DEFAULT_MAX_SNOOZES,
            delay: Duration::from_secs(DEFAULT_SNOOZE_SECS),
        }
    }
}

impl SnoozePolicy {
    /// Snooze once more, or fail with `MaxSnoozesReached` at the ceiling.
    pub fn snooze(&self, job: &str, current: Continuation) -> CoreResult<JobOutcome> {
        if current.attempts >= self.max_snoozes {
            log::warn!(
                "[{job}] Giving up after {} snoozes",
                current.attempts
            );
            return Err(CoreError::MaxSnoozesReached {
                job: job.to_string(),
                attempts: current.attempts,
            });
        }
        let continuation = current.next();
        log::debug!(
            "[{job}] Snoozing for {:?} (attempt {}/{})",
            self.delay,
            continuation.attempts,
            self.max_snoozes
        );
        Ok(JobOutcome::Snooze {
            delay: self.delay,
            continuation,
        })
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_secs)
    }
}
