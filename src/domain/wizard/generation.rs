//! Project description drafting via the generative backend.

use std::sync::Arc;

use super::errors::EngineError;
use super::prompts;
use crate::ports::{AIProvider, CompletionRequest, MessageRole};

/// Builds the fixed two-message prompts and calls the provider.
///
/// One call per request, no retries.
#[derive(Clone)]
pub struct DescriptionGenerator {
    ai_provider: Arc<dyn AIProvider>,
}

impl DescriptionGenerator {
    pub fn new(ai_provider: Arc<dyn AIProvider>) -> Self {
        Self { ai_provider }
    }

    /// Short draft requested from inside the conversation.
    pub async fn draft(&self, message: &str) -> Result<String, EngineError> {
        self.generate(prompts::DESCRIPTION_WRITER_SYSTEM_PROMPT, message)
            .await
    }

    /// Detailed description for the standalone endpoint.
    pub async fn describe(&self, project_info: &str) -> Result<String, EngineError> {
        self.generate(prompts::DESCRIPTION_SPECIALIST_SYSTEM_PROMPT, project_info)
            .await
    }

    async fn generate(&self, system_prompt: &str, info: &str) -> Result<String, EngineError> {
        let request = CompletionRequest::new()
            .with_message(MessageRole::System, system_prompt)
            .with_message(MessageRole::User, prompts::description_request(info));

        let response = self.ai_provider.complete(request).await.map_err(|e| {
            tracing::warn!(
                provider = %self.ai_provider.provider_info().name,
                error = %e,
                "description generation failed"
            );
            EngineError::Generation(e)
        })?;

        let content = response.content.trim();
        if content.is_empty() {
            tracing::warn!(model = %response.model, "generative backend returned empty content");
            return Err(EngineError::EmptyCompletion);
        }

        tracing::debug!(
            model = %response.model,
            completion_tokens = response.usage.completion_tokens,
            "description generated"
        );
        Ok(content.to_string())
    }
}
