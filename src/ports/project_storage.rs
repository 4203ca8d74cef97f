//! Project storage port.
//!
//! Durably creates a finished project on behalf of a user. The wizard never
//! calls this itself; it signals `create_project` and the application layer
//! performs the call.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::project::ProjectRecord;

/// Creates projects in the downstream project service.
#[async_trait]
pub trait ProjectStorage: Send + Sync {
    /// Creates `record` owned by `owner`.
    ///
    /// The record has already passed full validation.
    async fn create_project(
        &self,
        record: &ProjectRecord,
        owner: &AuthenticatedUser,
    ) -> Result<(), ProjectStorageError>;
}

/// Project creation failures. Distinct from validation failures: the record
/// was valid, the service refused or could not be reached.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectStorageError {
    #[error("project service rejected the project with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("project service unreachable: {0}")]
    Network(String),

    #[error("failed to encode project: {0}")]
    Serialization(String),
}

impl ProjectStorageError {
    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            body: body.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }
}
