//! Client configuration.
//!
//! One knob: the API base URL, read from the `API_BASE_URL` environment
//! variable with a local default. The binary loads a `.env` file via
//! `dotenvy` before calling [`ClientConfig::from_env`].

/// Environment variable naming the generation service base URL.
pub const API_BASE_URL_VAR: &str = "API_BASE_URL";

/// Base URL used when `API_BASE_URL` is unset.
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// Connection settings for the generation service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_base: String,
}

impl ClientConfig {
    /// Create a config for an explicit base URL.
    ///
    /// Trailing slashes are stripped so path joining is stable regardless
    /// of how the base was written.
    pub fn new(api_base: impl Into<String>) -> Self {
        let mut api_base = api_base.into();
        while api_base.ends_with('/') {
            api_base.pop();
        }
        Self { api_base }
    }

    /// Read the base URL from `API_BASE_URL`, falling back to
    /// [`DEFAULT_API_BASE`].
    pub fn from_env() -> Self {
        let base =
            std::env::var(API_BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Self::new(base)
    }

    /// Base HTTP URL of the generation service, without a trailing slash.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slashes() {
        let config = ClientConfig::new("http://localhost:3000///");
        assert_eq!(config.api_base(), "http://localhost:3000");
    }

    #[test]
    fn default_points_at_local_service() {
        assert_eq!(ClientConfig::default().api_base(), DEFAULT_API_BASE);
    }
}
