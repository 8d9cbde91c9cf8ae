//! Remote job snapshots and result translation.
//!
//! The service tracks each generation as a job queried by polling. This
//! module mirrors the snapshot shape returned by `GET /api/jobs/{id}` and
//! provides the helpers that turn a terminal snapshot into user-facing
//! output: failure text, the success status line, and video-URL
//! qualification.

use serde::{Deserialize, Serialize};

/// Error text for the synthetic snapshot produced when the attempt budget
/// runs out while the job is still pending.
pub const TIMEOUT_MESSAGE: &str = "Generation timed out";

/// Fallback when the remote reports failure without an `error` field.
const GENERIC_FAILURE: &str = "Generation failed";

/// Delimiter between segments of the success status line.
const STATUS_DELIMITER: &str = " | ";

// ---------------------------------------------------------------------------
// JobStatus
// ---------------------------------------------------------------------------

/// Lifecycle state reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Completed,
    Failed,
}

impl JobStatus {
    /// Whether polling stops at this status.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }
}

// ---------------------------------------------------------------------------
// Job
// ---------------------------------------------------------------------------

/// One snapshot of a server-side job, as returned by `GET /api/jobs/{id}`.
///
/// Only `status` is mandatory; every other field may be absent and absence
/// is never an error. The client reads successive snapshots and never
/// mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub status: JobStatus,
    /// Location of the rendered video, possibly relative to the API base.
    #[serde(default)]
    pub video_url: Option<String>,
    /// Generated animation source artifact.
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    /// Skill the NLU pipeline matched, when it ran.
    #[serde(default)]
    pub skill: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub intent: Option<String>,
}

impl Job {
    /// Whether this snapshot ends the poll loop.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Synthetic terminal snapshot for an exhausted attempt budget.
    ///
    /// Kept distinct from [`Job::transport_failure`] so client-side
    /// exhaustion remains distinguishable from a remote-reported failure,
    /// even though both surface as `failed`.
    pub fn timed_out() -> Self {
        Self::failed_with(TIMEOUT_MESSAGE.to_string())
    }

    /// Synthetic terminal snapshot carrying a transport error's message.
    pub fn transport_failure(message: String) -> Self {
        Self::failed_with(message)
    }

    fn failed_with(error: String) -> Self {
        Self {
            status: JobStatus::Failed,
            video_url: None,
            code: None,
            error: Some(error),
            details: None,
            skill: None,
            style: None,
            intent: None,
        }
    }

    /// Remote failure text: the `error` field (generic fallback when
    /// absent), with `details` appended on a second line when present.
    pub fn failure_message(&self) -> String {
        let error = self.error.as_deref().unwrap_or(GENERIC_FAILURE);
        match self.details.as_deref() {
            Some(details) if !details.is_empty() => format!("{error}\n{details}"),
            _ => error.to_string(),
        }
    }

    /// Human-readable success line assembled from whichever metadata
    /// fields the service chose to return. Missing fields are omitted.
    pub fn status_message(&self) -> String {
        let mut parts = vec!["Animation generated successfully!".to_string()];
        if let Some(skill) = self.skill.as_deref() {
            parts.push(format!("Skill: {skill}"));
        }
        if let Some(style) = self.style.as_deref() {
            parts.push(format!("Style: {style}"));
        }
        if let Some(intent) = self.intent.as_deref() {
            parts.push(format!("Intent: {intent}"));
        }
        parts.join(STATUS_DELIMITER)
    }
}

// ---------------------------------------------------------------------------
// URL qualification
// ---------------------------------------------------------------------------

/// Qualify a returned video URL against the configured API base.
///
/// Relative paths are prefixed with `base`; anything already carrying an
/// HTTP scheme passes through unchanged.
pub fn qualify_video_url(base: &str, url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("{base}{url}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_deserializes_lowercase() {
        let job: Job = serde_json::from_str(r#"{"status":"pending"}"#).unwrap();
        assert_eq!(job.status, JobStatus::Pending);
        assert!(!job.is_terminal());
    }

    #[test]
    fn completed_and_failed_are_terminal() {
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
        assert!(!JobStatus::Pending.is_terminal());
    }

    #[test]
    fn missing_optional_fields_tolerated() {
        let job: Job = serde_json::from_str(r#"{"status":"completed"}"#).unwrap();
        assert!(job.video_url.is_none());
        assert!(job.skill.is_none());
    }

    #[test]
    fn unknown_status_is_an_error() {
        assert!(serde_json::from_str::<Job>(r#"{"status":"paused"}"#).is_err());
    }

    #[test]
    fn timed_out_snapshot() {
        let job = Job::timed_out();
        assert_eq!(job.status, JobStatus::Failed);
        assert_eq!(job.error.as_deref(), Some(TIMEOUT_MESSAGE));
    }

    #[test]
    fn failure_message_joins_details() {
        let mut job = Job::transport_failure("render crashed".into());
        job.details = Some("scene 3 exceeded frame budget".into());
        assert_eq!(
            job.failure_message(),
            "render crashed\nscene 3 exceeded frame budget"
        );
    }

    #[test]
    fn failure_message_falls_back_when_error_missing() {
        let job: Job = serde_json::from_str(r#"{"status":"failed"}"#).unwrap();
        assert_eq!(job.failure_message(), "Generation failed");
    }

    #[test]
    fn status_message_includes_present_metadata_only() {
        let job = Job {
            skill: Some("math".into()),
            intent: Some("visual-proof".into()),
            ..serde_json::from_str(r#"{"status":"completed"}"#).unwrap()
        };
        assert_eq!(
            job.status_message(),
            "Animation generated successfully! | Skill: math | Intent: visual-proof"
        );
    }

    #[test]
    fn status_message_bare_when_no_metadata() {
        let job: Job = serde_json::from_str(r#"{"status":"completed"}"#).unwrap();
        assert_eq!(job.status_message(), "Animation generated successfully!");
    }

    #[test]
    fn relative_url_gets_base_prefix() {
        assert_eq!(
            qualify_video_url("http://localhost:3000", "/videos/abc.mp4"),
            "http://localhost:3000/videos/abc.mp4"
        );
    }

    #[test]
    fn absolute_url_passes_through() {
        assert_eq!(
            qualify_video_url("http://localhost:3000", "https://cdn.example.com/abc.mp4"),
            "https://cdn.example.com/abc.mp4"
        );
    }
}
