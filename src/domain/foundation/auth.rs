//! Authentication types for the domain layer.
//!
//! An `AuthenticatedUser` is what the `SessionValidator` port produces from a
//! bearer token. The token itself is kept (as a secret) because the
//! project-storage service expects the acting user's credential.

use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

use super::UserId;

/// User resolved from a validated bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// Opaque identifier from the auth service.
    pub id: UserId,

    /// Email address, when the auth service reports one.
    pub email: Option<String>,

    /// The bearer credential the user authenticated with.
    credential: Secret<String>,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(id: UserId, email: Option<String>, credential: impl Into<String>) -> Self {
        Self {
            id,
            email,
            credential: Secret::new(credential.into()),
        }
    }

    /// Exposes the bearer credential for forwarding to downstream services.
    pub fn credential(&self) -> &str {
        self.credential.expose_secret()
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or rejected by the auth service.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The auth service could not be reached or answered unexpectedly.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }
}
