//! Submission endpoint configuration

use std::env;

const FORMSPREE_BASE_URL: &str = "https://formspree.io/f";

/// Where validated leads are sent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormConfig {
    /// `None` when the deployment never configured an endpoint
    pub endpoint: Option<String>,
}

impl FormConfig {
    /// Load from environment variables
    ///
    /// - FORM_ENDPOINT: full URL of the submission handler (wins if set)
    /// - FORMSPREE_FORM_ID: form-service id, posted to formspree.io
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let endpoint = var("FORM_ENDPOINT")
            .or_else(|| var("FORMSPREE_FORM_ID").map(|id| format!("{}/{}", FORMSPREE_BASE_URL, id)));

        Self { endpoint }
    }

    /// Replace the endpoint when one was given explicitly
    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.endpoint = Some(endpoint);
        }
        self
    }
}
