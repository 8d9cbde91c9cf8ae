//! Generation request construction and validation.
//!
//! A [`GenerationRequest`] is built once per submission and is immutable
//! afterwards. The only validated field is the concept prompt; style and
//! quality are passed through to the service verbatim.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Message shown when the prompt is empty or whitespace-only.
pub const EMPTY_PROMPT_MESSAGE: &str =
    "Please enter a prompt describing what you want to animate.";

/// Poll-attempt budget for low and medium quality renders.
pub const MAX_ATTEMPTS_STANDARD: u32 = 60;
/// Poll-attempt budget for high quality renders, which take
/// proportionally longer.
pub const MAX_ATTEMPTS_HIGH: u32 = 120;

// ---------------------------------------------------------------------------
// Quality
// ---------------------------------------------------------------------------

/// Render quality tier requested from the generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    #[default]
    Low,
    Medium,
    High,
}

impl Quality {
    /// Poll-attempt budget for this tier: 120 for high, 60 otherwise.
    pub fn max_poll_attempts(self) -> u32 {
        match self {
            Quality::High => MAX_ATTEMPTS_HIGH,
            Quality::Low | Quality::Medium => MAX_ATTEMPTS_STANDARD,
        }
    }

    /// Wire name of this tier (`low` / `medium` / `high`).
    pub fn as_str(self) -> &'static str {
        match self {
            Quality::Low => "low",
            Quality::Medium => "medium",
            Quality::High => "high",
        }
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Quality {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Quality::Low),
            "medium" => Ok(Quality::Medium),
            "high" => Ok(Quality::High),
            other => Err(CoreError::Validation(format!(
                "Unknown quality '{other}'. Must be one of: low, medium, high"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// GenerationRequest
// ---------------------------------------------------------------------------

/// A single generation request as sent to `POST /api/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    /// Trimmed natural-language description of the animation.
    pub concept: String,
    /// Visual style name (advisory catalog in [`crate::styles`]).
    pub style: String,
    pub quality: Quality,
    /// Whether the service should run its NLU pipeline on the prompt.
    #[serde(rename = "useNLU")]
    pub use_nlu: bool,
}

impl GenerationRequest {
    /// Build a request, trimming the prompt.
    ///
    /// Fails with [`EMPTY_PROMPT_MESSAGE`] if the prompt is empty after
    /// trimming. No other field is validated here.
    pub fn new(
        concept: &str,
        style: &str,
        quality: Quality,
        use_nlu: bool,
    ) -> Result<Self, CoreError> {
        let trimmed = concept.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation(EMPTY_PROMPT_MESSAGE.to_string()));
        }
        Ok(Self {
            concept: trimmed.to_string(),
            style: style.to_string(),
            quality,
            use_nlu,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
