//! API Configuration
//!
//! Where the recommendation service lives. Edit the base URL per deployment.

/// Base URL of the recommendation service
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Path of the recommendation endpoint
pub const RECOMMEND_PATH: &str = "/recommend";

/// Endpoint settings shared by the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path: RECOMMEND_PATH.to_string(),
        }
    }

    /// Base URL joined with the endpoint path, without a doubled slash
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.path)
    }
}
