//! Bounded poll loop for job status.
//!
//! Repeatedly queries a job until it reaches a terminal state, the attempt
//! budget runs out, or a transport error lands on the final allowed
//! attempt. Transient transport errors before that are logged and retried
//! within the same budget; there is no separate backoff policy on top of
//! the fixed interval.

use std::time::Duration;

use animagen_core::job::Job;
use animagen_core::progress::poll_progress;
use animagen_core::request::Quality;

use crate::api::GenerationBackend;
use crate::progress::ProgressReporter;

/// Fixed delay between status queries.
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Tunable parameters for one poll loop.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Hard ceiling on status queries for one job.
    pub max_attempts: u32,
    /// Delay between consecutive queries.
    pub interval: Duration,
}

impl PollConfig {
    /// Budget for a quality tier: 120 attempts for high, 60 otherwise,
    /// at the fixed two-second interval.
    pub fn for_quality(quality: Quality) -> Self {
        Self {
            max_attempts: quality.max_poll_attempts(),
            interval: POLL_INTERVAL,
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::for_quality(Quality::default())
    }
}

/// Poll `job_id` until a terminal snapshot is available.
///
/// Always returns a terminal [`Job`]:
/// - the remote snapshot, as soon as it reports `completed` or `failed`;
/// - [`Job::transport_failure`] when a query fails on the final attempt;
/// - [`Job::timed_out`] when the budget is exhausted while still pending.
///
/// Exactly one query is made per attempt, so a job that completes on
/// attempt `k` costs `k` queries and an ever-pending job costs
/// `max_attempts`.
pub async fn poll_until_terminal<B: GenerationBackend + ?Sized>(
    backend: &B,
    job_id: &str,
    config: &PollConfig,
    progress: &dyn ProgressReporter,
) -> Job {
    for attempt in 1..=config.max_attempts {
        progress.report(
            poll_progress(attempt - 1, config.max_attempts),
            &format!(
                "Generating animation... ({attempt}/{})",
                config.max_attempts
            ),
        );

        match backend.job_status(job_id).await {
            Ok(job) if job.is_terminal() => {
                tracing::debug!(job_id, attempt, status = ?job.status, "Job reached terminal state");
                return job;
            }
            Ok(_) => {
                tracing::trace!(job_id, attempt, "Job still pending");
            }
            Err(e) if attempt == config.max_attempts => {
                tracing::error!(job_id, attempt, error = %e, "Status query failed on final attempt");
                return Job::transport_failure(e.to_string());
            }
            Err(e) => {
                tracing::warn!(job_id, attempt, error = %e, "Status query failed, retrying");
            }
        }

        if attempt < config.max_attempts {
            tokio::time::sleep(config.interval).await;
        }
    }

    tracing::warn!(
        job_id,
        max_attempts = config.max_attempts,
        "Attempt budget exhausted while job still pending",
    );
    Job::timed_out()
}
