//! Project creation through the project service's REST API.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::project::ProjectRecord;
use crate::ports::{ProjectStorage, ProjectStorageError};

/// Configuration for the project service client.
#[derive(Debug, Clone)]
pub struct ProjectServiceConfig {
    /// Base URL of the project service (e.g., "http://project-service:5641")
    pub base_url: String,
    pub timeout: Duration,
}

impl ProjectServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(15),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn projects_url(&self) -> String {
        format!("{}/v1/projects", self.base_url.trim_end_matches('/'))
    }
}

/// Posts the flat record JSON with the acting user's bearer credential.
pub struct HttpProjectStorage {
    config: ProjectServiceConfig,
    http_client: reqwest::Client,
}

impl HttpProjectStorage {
    pub fn new(config: ProjectServiceConfig) -> Result<Self, ProjectStorageError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProjectStorageError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }
}

#[async_trait]
impl ProjectStorage for HttpProjectStorage {
    async fn create_project(
        &self,
        record: &ProjectRecord,
        owner: &AuthenticatedUser,
    ) -> Result<(), ProjectStorageError> {
        let response = self
            .http_client
            .post(self.config.projects_url())
            .bearer_auth(owner.credential())
            .json(record)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(user_id = %owner.id, "Failed to reach project service: {}", e);
                ProjectStorageError::network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(user_id = %owner.id, %status, "project service rejected project");
            return Err(ProjectStorageError::rejected(status.as_u16(), body));
        }

        tracing::info!(user_id = %owner.id, project = %record.name, "project created");
        Ok(())
    }
}

impl std::fmt::Debug for HttpProjectStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpProjectStorage")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    #[test]
    fn config_builds_projects_url() {
        let config = ProjectServiceConfig::new("http://project-service:5641/");
        assert_eq!(config.projects_url(), "http://project-service:5641/v1/projects");
    }

    #[test]
    fn config_with_custom_timeout() {
        let config = ProjectServiceConfig::new("http://p").with_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[tokio::test]
    async fn unreachable_service_is_network_error() {
        let storage = HttpProjectStorage::new(
            ProjectServiceConfig::new("http://127.0.0.1:1").with_timeout(Duration::from_secs(2)),
        )
        .unwrap();
        let owner = AuthenticatedUser::new(UserId::new("u-1").unwrap(), None, "tok");

        let result = storage.create_project(&ProjectRecord::new(), &owner).await;

        assert!(matches!(result, Err(ProjectStorageError::Network(_))));
    }
}
