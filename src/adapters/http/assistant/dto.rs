//! Request and response bodies for the project assistant endpoints.

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::application::ChatWithAssistantResult;
use crate::domain::foundation::ErrorCode;
use crate::domain::wizard::{ConversationContext, SuggestedAction};

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// One wizard turn.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,

    /// Absent, `null`, `{}` or an empty `current_step` all start a new
    /// conversation.
    #[serde(default, deserialize_with = "deserialize_context")]
    pub context: Option<ConversationContext>,
}

fn deserialize_context<'de, D>(deserializer: D) -> Result<Option<ConversationContext>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) if !has_step(&map) => Ok(None),
        Some(other) => serde_json::from_value(other)
            .map(Some)
            .map_err(D::Error::custom),
    }
}

fn has_step(map: &serde_json::Map<String, Value>) -> bool {
    match map.get("current_step") {
        Some(Value::String(step)) => !step.is_empty(),
        Some(Value::Null) | None => false,
        Some(_) => true,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateDescriptionRequest {
    pub project_info: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub project_context: ConversationContext,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<SuggestedAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<ChatWithAssistantResult> for ChatResponse {
    fn from(result: ChatWithAssistantResult) -> Self {
        Self {
            message: result.reply,
            project_context: result.context,
            suggested_action: result.suggested_action,
            error: result.creation_error.map(|e| e.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateDescriptionResponse {
    pub description: String,
}

/// Error body shared by the assistant endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    pub fn ai_provider(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AIProviderError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wizard::WizardStep;
    use crate::ports::ProjectStorageError;
    use serde_json::json;

    mod chat_request {
        use super::*;

        fn parse(body: Value) -> ChatRequest {
            serde_json::from_value(body).unwrap()
        }

        #[test]
        fn missing_context_is_unset() {
            assert!(parse(json!({ "message": "hi" })).context.is_none());
        }

        #[test]
        fn null_and_empty_contexts_are_unset() {
            assert!(parse(json!({ "message": "hi", "context": null })).context.is_none());
            assert!(parse(json!({ "message": "hi", "context": {} })).context.is_none());
            assert!(parse(json!({ "message": "hi", "context": { "current_step": "" } }))
                .context
                .is_none());
        }

        #[test]
        fn populated_context_is_parsed() {
            let request = parse(json!({
                "message": "high",
                "context": {
                    "current_step": "priority",
                    "project_data": { "name": "Apollo" }
                }
            }));

            let context = request.context.unwrap();
            assert_eq!(context.current_step, WizardStep::Priority);
            assert_eq!(context.project_data.name, "Apollo");
        }

        #[test]
        fn unknown_step_is_rejected() {
            let result: Result<ChatRequest, _> = serde_json::from_value(json!({
                "message": "hi",
                "context": { "current_step": "launch" }
            }));
            assert!(result.is_err());
        }
    }

    mod chat_response {
        use super::*;

        #[test]
        fn omits_empty_optionals() {
            let response = ChatResponse::from(ChatWithAssistantResult {
                reply: "Hi".to_string(),
                context: ConversationContext::new(),
                suggested_action: None,
                creation_error: None,
            });

            let body = serde_json::to_value(response).unwrap();
            assert_eq!(body["message"], "Hi");
            assert_eq!(body["project_context"]["current_step"], "name");
            assert!(body.get("suggested_action").is_none());
            assert!(body.get("error").is_none());
        }

        #[test]
        fn carries_action_and_creation_error() {
            let response = ChatResponse::from(ChatWithAssistantResult {
                reply: "failed".to_string(),
                context: ConversationContext::new(),
                suggested_action: Some(SuggestedAction::CreateProject),
                creation_error: Some(ProjectStorageError::network("refused")),
            });

            let body = serde_json::to_value(response).unwrap();
            assert_eq!(body["suggested_action"], "create_project");
            assert!(body["error"].as_str().unwrap().contains("refused"));
        }
    }

    #[test]
    fn error_response_codes() {
        assert_eq!(ErrorResponse::bad_request("x").code, "BAD_REQUEST");
        assert_eq!(ErrorResponse::ai_provider("x").code, "AI_PROVIDER_ERROR");
        assert_eq!(ErrorResponse::internal("x").code, "INTERNAL_ERROR");
    }
}
