//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Generative-text backend
//! - `SessionValidator` - Bearer token to user resolution
//! - `ProjectStorage` - Downstream project creation

mod ai_provider;
mod project_storage;
mod session_validator;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, TokenUsage,
};
pub use project_storage::{ProjectStorage, ProjectStorageError};
pub use session_validator::SessionValidator;
