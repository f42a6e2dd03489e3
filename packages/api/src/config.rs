//! # API client configuration
//!
//! [`ApiConfig`] names the backend the client talks to. The default base URL
//! can be overridden at build time through the `CAMPUSHUB_API_URL` environment
//! variable, which is how deployed bundles point at a real backend while dev
//! builds fall back to the local one.

use serde::{Deserialize, Serialize};

/// Base URL used when `CAMPUSHUB_API_URL` is not set at build time.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Where the backend lives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every request path is joined onto, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    option_env!("CAMPUSHUB_API_URL")
        .unwrap_or(DEFAULT_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_strips_trailing_slash() {
        let config = ApiConfig::new("https://backend.example.com/api/");
        assert_eq!(config.base_url, "https://backend.example.com/api");
    }

    #[test]
    fn default_has_a_base_url() {
        let config = ApiConfig::default();
        assert!(!config.base_url.is_empty());
        assert!(!config.base_url.ends_with('/'));
    }
}
