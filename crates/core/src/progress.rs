//! Cosmetic poll-progress estimation.
//!
//! The service exposes no partial-progress signal, so the client fabricates
//! a plausible ramp for UI feedback: a linear interpolation from the
//! accepted baseline toward a near-complete ceiling as poll attempts are
//! consumed. This is a liveness indicator only; 1.0 is reported by the
//! caller when (and only when) the job reaches a terminal state.

/// Progress reported once the job is accepted.
pub const PROGRESS_BASELINE: f64 = 0.1;
/// Ceiling the ramp approaches while the job is still pending.
pub const PROGRESS_CEILING: f64 = 0.9;

/// Estimated progress before poll attempt `attempt` (zero-based) out of
/// `max_attempts`.
///
/// Monotonically non-decreasing in `attempt` and clamped to
/// `[PROGRESS_BASELINE, PROGRESS_CEILING]` for all inputs, including
/// `attempt > max_attempts` and `max_attempts == 0`.
pub fn poll_progress(attempt: u32, max_attempts: u32) -> f64 {
    if max_attempts == 0 {
        return PROGRESS_BASELINE;
    }
    let fraction = f64::from(attempt) / f64::from(max_attempts);
    let estimate = PROGRESS_BASELINE + (PROGRESS_CEILING - PROGRESS_BASELINE) * fraction;
    estimate.clamp(PROGRESS_BASELINE, PROGRESS_CEILING)
}
