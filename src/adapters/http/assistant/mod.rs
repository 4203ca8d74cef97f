//! HTTP adapter for the project assistant.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ChatRequest, ChatResponse, ErrorResponse, GenerateDescriptionRequest,
    GenerateDescriptionResponse,
};
pub use handlers::{health, AssistantHandlers};
pub use routes::assistant_routes;
