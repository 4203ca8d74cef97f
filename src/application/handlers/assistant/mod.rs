//! Project assistant handlers.

mod chat_with_assistant;
mod generate_description;

pub use chat_with_assistant::{
    ChatWithAssistantCommand, ChatWithAssistantHandler, ChatWithAssistantResult,
};
pub use generate_description::{
    GenerateDescriptionCommand, GenerateDescriptionError, GenerateDescriptionHandler,
    GenerateDescriptionResult,
};
