//! HTTP routes for project assistant endpoints.

use axum::{routing::post, Router};

use super::handlers::{chat, generate_description, AssistantHandlers};

/// Creates the assistant router, mounted under `/v1/ai/project`.
pub fn assistant_routes(handlers: AssistantHandlers) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/generate-description", post(generate_description))
        .with_state(handlers)
}
