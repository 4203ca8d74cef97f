//! Foundation module - Shared domain primitives.
//!
//! Identifiers, error types, auth types and the state machine trait used
//! by the wizard.

mod auth;
mod errors;
mod ids;
mod state_machine;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{ErrorCode, ValidationError};
pub use ids::UserId;
pub use state_machine::StateMachine;
