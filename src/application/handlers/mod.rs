//! Application handlers.
//!
//! Command handlers that orchestrate domain operations and ports.

pub mod assistant;

pub use assistant::{
    ChatWithAssistantCommand, ChatWithAssistantHandler, ChatWithAssistantResult,
    GenerateDescriptionCommand, GenerateDescriptionError, GenerateDescriptionHandler,
    GenerateDescriptionResult,
};
