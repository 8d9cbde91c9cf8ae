//! Progress reporting seam.
//!
//! The poll loop publishes a fabricated progress estimate (see
//! [`animagen_core::progress`]) through this trait; the front end decides
//! how to display it. Reported fractions are monotonically non-decreasing
//! within one generate call and reach 1.0 only on completion.

/// Receives progress updates during a generate call.
pub trait ProgressReporter: Send + Sync {
    /// `fraction` is in `[0.0, 1.0]`; `message` is a short status line.
    fn report(&self, fraction: f64, message: &str);
}

/// Reporter that discards all updates.
pub struct NullProgress;

impl ProgressReporter for NullProgress {
    fn report(&self, _fraction: f64, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_progress_accepts_anything() {
        NullProgress.report(1.0, "done");
    }
}
