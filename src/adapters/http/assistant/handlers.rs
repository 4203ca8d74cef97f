//! HTTP handlers for project assistant endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::{
    ChatWithAssistantCommand, ChatWithAssistantHandler, GenerateDescriptionCommand,
    GenerateDescriptionError, GenerateDescriptionHandler,
};
use crate::domain::wizard::EngineError;

use super::dto::{
    ChatRequest, ChatResponse, ErrorResponse, GenerateDescriptionRequest,
    GenerateDescriptionResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AssistantHandlers {
    chat_handler: Arc<ChatWithAssistantHandler>,
    describe_handler: Arc<GenerateDescriptionHandler>,
}

impl AssistantHandlers {
    pub fn new(
        chat_handler: Arc<ChatWithAssistantHandler>,
        describe_handler: Arc<GenerateDescriptionHandler>,
    ) -> Self {
        Self {
            chat_handler,
            describe_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /v1/ai/project/chat
pub async fn chat(
    State(handlers): State<AssistantHandlers>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<ChatRequest>,
) -> Response {
    let step = request.context.as_ref().map(|c| c.current_step);
    tracing::debug!(user_id = %user.id, step = ?step, "assistant turn");

    let cmd = ChatWithAssistantCommand {
        user,
        message: request.message,
        context: request.context,
    };

    match handlers.chat_handler.handle(cmd).await {
        Ok(result) => {
            let status = if result.creation_error.is_some() {
                StatusCode::BAD_GATEWAY
            } else {
                StatusCode::OK
            };
            (status, Json(ChatResponse::from(result))).into_response()
        }
        Err(e) => engine_error_response(e),
    }
}

/// POST /v1/ai/project/generate-description
pub async fn generate_description(
    State(handlers): State<AssistantHandlers>,
    RequireAuth(_user): RequireAuth,
    Json(request): Json<GenerateDescriptionRequest>,
) -> Response {
    let cmd = GenerateDescriptionCommand {
        project_info: request.project_info,
    };

    match handlers.describe_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::OK,
            Json(GenerateDescriptionResponse {
                description: result.description,
            }),
        )
            .into_response(),
        Err(GenerateDescriptionError::EmptyProjectInfo) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("project_info cannot be empty")),
        )
            .into_response(),
        Err(GenerateDescriptionError::Generation(e)) => engine_error_response(e),
    }
}

/// GET /v1/health
pub async fn health() -> &'static str {
    "OK"
}

fn engine_error_response(error: EngineError) -> Response {
    if error.is_collaborator_failure() {
        tracing::warn!(error = %error, "generative backend failed");
        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse::ai_provider(error.to_string())),
        )
            .into_response()
    } else {
        tracing::error!(error = %error, "assistant turn failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal("Internal server error")),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;
    use crate::ports::AIError;

    #[test]
    fn collaborator_failure_maps_to_bad_gateway() {
        let response = engine_error_response(EngineError::Generation(AIError::network("reset")));
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let response = engine_error_response(EngineError::EmptyCompletion);
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn engine_fault_maps_to_internal_error() {
        let response = engine_error_response(EngineError::InvalidTransition(
            ValidationError::invalid_format("step_transition", "complete -> name"),
        ));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        assert_eq!(health().await, "OK");
    }
}
