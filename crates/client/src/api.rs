//! REST wrapper for the generation service HTTP endpoints.
//!
//! [`GeneratorApi`] wraps the two endpoints this client consumes:
//! submission (`POST /api/generate`) and status (`GET /api/jobs/{id}`).
//! The [`GenerationBackend`] trait fronts both calls so the poll loop and
//! orchestration can be exercised against an in-memory backend in tests.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use animagen_core::job::Job;
use animagen_core::request::GenerationRequest;

use crate::config::ClientConfig;

/// Timeout for the single submission request.
pub const SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);
/// Timeout for each status query.
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(10);

/// Fallback when a rejection response carries no `error` field.
const UNKNOWN_ERROR: &str = "Unknown error";

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors from the generation service API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered the submission with something other than 202.
    /// `message` is the response body's `error` field when present.
    #[error("Submission rejected ({status}): {message}")]
    Rejected {
        status: u16,
        message: String,
    },

    /// A 202 response that did not carry a job identifier.
    #[error("No job ID received")]
    MissingJobId,
}

// ---------------------------------------------------------------------------
// Backend seam
// ---------------------------------------------------------------------------

/// The two remote operations the client performs.
///
/// [`GeneratorApi`] is the production implementation; tests substitute a
/// scripted in-memory backend.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Submit a request; returns the opaque job id on acceptance.
    async fn submit(&self, request: &GenerationRequest) -> Result<String, ApiError>;

    /// Fetch the current snapshot of a job.
    async fn job_status(&self, job_id: &str) -> Result<Job, ApiError>;
}

// ---------------------------------------------------------------------------
// GeneratorApi
// ---------------------------------------------------------------------------

/// Body of a 202 submission response.
#[derive(Debug, Deserialize)]
struct SubmitResponse {
    #[serde(rename = "jobId", default)]
    job_id: Option<String>,
}

/// Body of a rejection response; only the `error` field is read.
#[derive(Debug, Default, Deserialize)]
struct RejectionBody {
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for one generation service.
pub struct GeneratorApi {
    client: reqwest::Client,
    api_base: String,
}

impl GeneratorApi {
    /// Create an API client from the connection config.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: config.api_base().to_string(),
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            api_base: config.api_base().to_string(),
        }
    }
}

#[async_trait]
impl GenerationBackend for GeneratorApi {
    /// Send `POST /api/generate`.
    ///
    /// 202 is the only accepted status; any other status is a submission
    /// failure surfacing the body's `error` field, and a 202 without a job
    /// id fails with [`ApiError::MissingJobId`]. No retry happens here --
    /// only the poll step retries, because only the poll step targets a
    /// job whose existence is already confirmed.
    async fn submit(&self, request: &GenerationRequest) -> Result<String, ApiError> {
        let response = self
            .client
            .post(format!("{}/api/generate", self.api_base))
            .timeout(SUBMIT_TIMEOUT)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::ACCEPTED {
            let body: RejectionBody = response.json().await.unwrap_or_default();
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message: body.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            });
        }

        let body: SubmitResponse = response.json().await?;
        match body.job_id {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(ApiError::MissingJobId),
        }
    }

    /// Send `GET /api/jobs/{id}` and parse the snapshot.
    async fn job_status(&self, job_id: &str) -> Result<Job, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/jobs/{}", self.api_base, job_id))
            .timeout(STATUS_TIMEOUT)
            .send()
            .await?;

        Ok(response.json::<Job>().await?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_response_parses_job_id() {
        let body: SubmitResponse = serde_json::from_str(r#"{"jobId":"abc"}"#).unwrap();
        assert_eq!(body.job_id.as_deref(), Some("abc"));
    }

    #[test]
    fn submit_response_tolerates_missing_job_id() {
        let body: SubmitResponse = serde_json::from_str("{}").unwrap();
        assert!(body.job_id.is_none());
    }

    #[test]
    fn rejection_body_reads_error_field() {
        let body: RejectionBody =
            serde_json::from_str(r#"{"error":"style not supported"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("style not supported"));
    }

    #[test]
    fn missing_job_id_display() {
        assert_eq!(ApiError::MissingJobId.to_string(), "No job ID received");
    }

    #[test]
    fn rejected_display_includes_status_and_message() {
        let err = ApiError::Rejected {
            status: 422,
            message: "concept too long".into(),
        };
        assert_eq!(
            err.to_string(),
            "Submission rejected (422): concept too long"
        );
    }

    #[test]
    fn api_base_taken_from_config() {
        // Construction only; no request is sent.
        let config = ClientConfig::new("http://localhost:3000/");
        let api = GeneratorApi::new(&config);
        assert_eq!(api.api_base, "http://localhost:3000");
    }
}
