//! Scripted in-memory backend shared by the integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use animagen_client::api::{ApiError, GenerationBackend};
use animagen_client::progress::ProgressReporter;
use animagen_core::job::{Job, JobStatus};
use animagen_core::request::GenerationRequest;

/// One scripted answer to a status query.
pub enum StatusStep {
    Snapshot(Job),
    TransportError,
}

/// Backend whose responses are scripted up front.
///
/// `submit` hands out `job_id` (or the configured error) and status
/// queries consume `steps` front to back; an exhausted script keeps
/// answering `pending`, which models a job that never finishes.
pub struct FakeBackend {
    job_id: String,
    submit_error: Mutex<Option<ApiError>>,
    steps: Mutex<VecDeque<StatusStep>>,
    pub submit_calls: AtomicU32,
    pub status_calls: AtomicU32,
}

impl FakeBackend {
    pub fn new(job_id: &str, steps: Vec<StatusStep>) -> Self {
        Self {
            job_id: job_id.to_string(),
            submit_error: Mutex::new(None),
            steps: Mutex::new(steps.into()),
            submit_calls: AtomicU32::new(0),
            status_calls: AtomicU32::new(0),
        }
    }

    pub fn failing_submit(error: ApiError) -> Self {
        let backend = Self::new("unused", Vec::new());
        *backend.submit_error.lock().unwrap() = Some(error);
        backend
    }

    pub fn submit_calls(&self) -> u32 {
        self.submit_calls.load(Ordering::SeqCst)
    }

    pub fn status_calls(&self) -> u32 {
        self.status_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationBackend for FakeBackend {
    async fn submit(&self, _request: &GenerationRequest) -> Result<String, ApiError> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.submit_error.lock().unwrap().take() {
            return Err(error);
        }
        Ok(self.job_id.clone())
    }

    async fn job_status(&self, _job_id: &str) -> Result<Job, ApiError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        match self.steps.lock().unwrap().pop_front() {
            Some(StatusStep::Snapshot(job)) => Ok(job),
            Some(StatusStep::TransportError) => Err(transport_error()),
            None => Ok(pending()),
        }
    }
}

/// A real `ApiError::Request`, built from an invalid URL the same way the
/// production code would hit one.
pub fn transport_error() -> ApiError {
    ApiError::Request(reqwest::Client::new().get("://bad").build().unwrap_err())
}

pub fn pending() -> Job {
    serde_json::from_str(r#"{"status":"pending"}"#).unwrap()
}

pub fn completed() -> Job {
    Job {
        status: JobStatus::Completed,
        video_url: None,
        code: None,
        error: None,
        details: None,
        skill: None,
        style: None,
        intent: None,
    }
}

pub fn failed(error: &str, details: Option<&str>) -> Job {
    Job {
        status: JobStatus::Failed,
        video_url: None,
        code: None,
        error: Some(error.to_string()),
        details: details.map(str::to_string),
        skill: None,
        style: None,
        intent: None,
    }
}

/// Reporter that records every `(fraction, message)` update.
#[derive(Default)]
pub struct RecordingProgress {
    pub updates: Mutex<Vec<(f64, String)>>,
}

impl ProgressReporter for RecordingProgress {
    fn report(&self, fraction: f64, message: &str) {
        self.updates
            .lock()
            .unwrap()
            .push((fraction, message.to_string()));
    }
}
