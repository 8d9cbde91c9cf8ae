//! HTTP client for the animation generation service.
//!
//! Submits a [`GenerationRequest`](animagen_core::request::GenerationRequest)
//! to `POST /api/generate`, then polls `GET /api/jobs/{id}` until the job
//! reaches a terminal state, a transport error lands on the final allowed
//! attempt, or the attempt budget runs out. Progress is reported through
//! the [`progress::ProgressReporter`] seam; [`generate::generate`] is the
//! end-to-end entry point used by the front end.

pub mod api;
pub mod config;
pub mod generate;
pub mod poll;
pub mod progress;
