//! Authentication service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::is_http_url;
use super::server::Environment;

/// Auth service that resolves bearer tokens to users
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Base URL; tokens are checked against `{service_url}/v1/users/me`
    #[serde(default)]
    pub service_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl AuthConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate authentication configuration
    ///
    /// In production, requires HTTPS for the service URL.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.service_url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__SERVICE_URL"));
        }
        if !is_http_url(&self.service_url) {
            return Err(ValidationError::InvalidUrl("AUTH__SERVICE_URL"));
        }
        if *environment == Environment::Production && !self.service_url.starts_with("https://") {
            return Err(ValidationError::HttpsRequired("AUTH__SERVICE_URL"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout("auth"));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            service_url: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    10
}
