//! Session validation against the auth service over HTTP.
//!
//! The auth service owns tokens; this adapter asks it who a bearer token
//! belongs to (`GET {service_url}/v1/users/me`) and maps the answer to an
//! `AuthenticatedUser`.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Configuration for the HTTP auth adapter.
#[derive(Debug, Clone)]
pub struct HttpAuthConfig {
    /// Base URL of the auth service (e.g., "http://auth-service:8080")
    pub service_url: String,
    pub timeout: Duration,
}

impl HttpAuthConfig {
    pub fn new(service_url: impl Into<String>) -> Self {
        Self {
            service_url: service_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn current_user_url(&self) -> String {
        format!("{}/v1/users/me", self.service_url.trim_end_matches('/'))
    }
}

/// Identity payload returned by the auth service.
#[derive(Debug, Deserialize)]
struct UserInfo {
    #[serde(alias = "user_id")]
    id: String,
    #[serde(default)]
    email: Option<String>,
}

/// `SessionValidator` backed by the auth service.
pub struct HttpSessionValidator {
    config: HttpAuthConfig,
    http_client: reqwest::Client,
}

impl HttpSessionValidator {
    pub fn new(config: HttpAuthConfig) -> Result<Self, AuthError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                AuthError::service_unavailable(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }
}

/// Maps the auth service status to an outcome: `Ok(())` to read the body,
/// otherwise the error to return.
fn check_status(status: StatusCode) -> Result<(), AuthError> {
    if status.is_success() {
        return Ok(());
    }
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => {
            Err(AuthError::InvalidToken)
        }
        other => Err(AuthError::service_unavailable(format!(
            "auth service returned {}",
            other
        ))),
    }
}

fn into_user(info: UserInfo, token: &str) -> Result<AuthenticatedUser, AuthError> {
    let id = UserId::new(info.id).map_err(|_| {
        tracing::warn!("auth service returned an empty user id");
        AuthError::InvalidToken
    })?;
    Ok(AuthenticatedUser::new(id, info.email, token))
}

#[async_trait]
impl SessionValidator for HttpSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if token.trim().is_empty() {
            return Err(AuthError::InvalidToken);
        }

        let response = self
            .http_client
            .get(self.config.current_user_url())
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach auth service: {}", e);
                AuthError::service_unavailable(format!("Failed to reach auth service: {}", e))
            })?;

        check_status(response.status()).map_err(|e| {
            tracing::debug!(status = %response.status(), "token rejected by auth service");
            e
        })?;

        let info: UserInfo = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse auth service response: {}", e);
            AuthError::service_unavailable(format!("Failed to parse user info: {}", e))
        })?;

        into_user(info, token)
    }
}

impl std::fmt::Debug for HttpSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSessionValidator")
            .field("service_url", &self.config.service_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builds_current_user_url() {
        let config = HttpAuthConfig::new("http://auth:8080/");
        assert_eq!(config.current_user_url(), "http://auth:8080/v1/users/me");
    }

    #[test]
    fn rejected_statuses_are_invalid_token() {
        assert!(matches!(
            check_status(StatusCode::UNAUTHORIZED),
            Err(AuthError::InvalidToken)
        ));
        assert!(matches!(
            check_status(StatusCode::FORBIDDEN),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn server_errors_mean_service_unavailable() {
        let err = check_status(StatusCode::BAD_GATEWAY).unwrap_err();
        assert!(matches!(err, AuthError::ServiceUnavailable(_)));
        assert!(check_status(StatusCode::OK).is_ok());
    }

    #[test]
    fn user_info_accepts_either_id_key() {
        let info: UserInfo = serde_json::from_str(r#"{"user_id":"u-7"}"#).unwrap();
        let user = into_user(info, "tok").unwrap();
        assert_eq!(user.id.as_str(), "u-7");
        assert!(user.email.is_none());

        let info: UserInfo =
            serde_json::from_str(r#"{"id":"u-8","email":"a@b.io"}"#).unwrap();
        let user = into_user(info, "tok").unwrap();
        assert_eq!(user.email.as_deref(), Some("a@b.io"));
        assert_eq!(user.credential(), "tok");
    }

    #[test]
    fn empty_user_id_is_invalid_token() {
        let info: UserInfo = serde_json::from_str(r#"{"id":""}"#).unwrap();
        assert!(matches!(into_user(info, "tok"), Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn blank_token_is_rejected_without_network() {
        let validator = HttpSessionValidator::new(HttpAuthConfig::new("http://127.0.0.1:1")).unwrap();
        assert!(matches!(
            validator.validate("  ").await,
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn validator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpSessionValidator>();
    }
}
