//! Engine error types.

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::ports::AIError;

/// Failures that abort a turn. User input errors are never reported here;
/// those become assistant replies.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Description generation failed: {0}")]
    Generation(#[from] AIError),

    #[error("Generative backend returned an empty completion")]
    EmptyCompletion,

    #[error("Invalid wizard transition: {0}")]
    InvalidTransition(#[from] ValidationError),
}

impl EngineError {
    /// Returns true if the failure came from a collaborator rather than the
    /// engine itself.
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(self, EngineError::Generation(_) | EngineError::EmptyCompletion)
    }
}
