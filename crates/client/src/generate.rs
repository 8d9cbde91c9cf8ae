//! End-to-end generate orchestration.
//!
//! Validates the prompt, submits the request, polls to a terminal
//! snapshot, and translates the result into a [`GenerationOutcome`] the
//! front end can display directly. Every failure path produces an outcome
//! with a human-readable status message; nothing is silently dropped.

use uuid::Uuid;

use animagen_core::job::{qualify_video_url, JobStatus};
use animagen_core::request::{GenerationRequest, Quality};

use crate::api::{ApiError, GenerationBackend};
use crate::config::ClientConfig;
use crate::poll::{poll_until_terminal, PollConfig};
use crate::progress::ProgressReporter;

/// Final result of one generate call, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    /// Fully qualified video URL on success.
    pub video_url: Option<String>,
    /// Generated animation source, empty on failure.
    pub code: String,
    /// Status line: the assembled success message or the failure text.
    pub status_message: String,
    pub succeeded: bool,
}

impl GenerationOutcome {
    fn failure(status_message: impl Into<String>) -> Self {
        Self {
            video_url: None,
            code: String::new(),
            status_message: status_message.into(),
            succeeded: false,
        }
    }
}

/// Run one generate call with the poll budget derived from `quality`.
///
/// The prompt is validated before any network activity; an empty or
/// whitespace-only prompt returns immediately with the fixed validation
/// message and zero outbound calls.
#[allow(clippy::too_many_arguments)]
pub async fn generate<B: GenerationBackend + ?Sized>(
    backend: &B,
    config: &ClientConfig,
    prompt: &str,
    style: &str,
    quality: Quality,
    use_nlu: bool,
    progress: &dyn ProgressReporter,
) -> GenerationOutcome {
    let poll_config = PollConfig::for_quality(quality);
    generate_with(backend, config, &poll_config, prompt, style, quality, use_nlu, progress).await
}

/// [`generate`] with an explicit [`PollConfig`] (tests run with a zero
/// interval; a caller could also substitute its own budget).
#[allow(clippy::too_many_arguments)]
pub async fn generate_with<B: GenerationBackend + ?Sized>(
    backend: &B,
    config: &ClientConfig,
    poll_config: &PollConfig,
    prompt: &str,
    style: &str,
    quality: Quality,
    use_nlu: bool,
    progress: &dyn ProgressReporter,
) -> GenerationOutcome {
    let request = match GenerationRequest::new(prompt, style, quality, use_nlu) {
        Ok(request) => request,
        Err(e) => return GenerationOutcome::failure(e.to_string()),
    };

    let request_id = Uuid::new_v4();
    tracing::info!(
        %request_id,
        style = %request.style,
        quality = %request.quality,
        use_nlu = request.use_nlu,
        "Submitting generation request",
    );
    progress.report(0.0, "Submitting animation request...");

    let job_id = match backend.submit(&request).await {
        Ok(job_id) => job_id,
        Err(ApiError::Rejected { message, status }) => {
            tracing::error!(%request_id, status, "Submission rejected");
            return GenerationOutcome::failure(format!("Error: {message}"));
        }
        Err(e @ ApiError::MissingJobId) => {
            tracing::error!(%request_id, "Accepted response carried no job id");
            return GenerationOutcome::failure(format!("Error: {e}"));
        }
        Err(ApiError::Request(e)) => {
            tracing::error!(%request_id, error = %e, "Submission request failed");
            return GenerationOutcome::failure(format!("Connection error: {e}"));
        }
    };

    tracing::info!(%request_id, job_id = %job_id, "Job accepted");
    progress.report(0.1, &format!("Job started: {job_id}"));

    let job = poll_until_terminal(backend, &job_id, poll_config, progress).await;

    match job.status {
        JobStatus::Completed => {
            progress.report(1.0, "Animation complete!");
            let video_url = job
                .video_url
                .as_deref()
                .filter(|url| !url.is_empty())
                .map(|url| qualify_video_url(config.api_base(), url));
            tracing::info!(%request_id, job_id = %job_id, video_url = ?video_url, "Generation completed");
            GenerationOutcome {
                video_url,
                code: job.code.clone().unwrap_or_default(),
                status_message: job.status_message(),
                succeeded: true,
            }
        }
        JobStatus::Failed => {
            let message = format!("Error: {}", job.failure_message());
            tracing::error!(%request_id, job_id = %job_id, message = %message, "Generation failed");
            GenerationOutcome::failure(message)
        }
        // poll_until_terminal only returns terminal snapshots.
        JobStatus::Pending => {
            GenerationOutcome::failure("Error: Generation ended in a non-terminal state")
        }
    }
}
