//! ChatWithAssistant - Command handler for one wizard turn.
//!
//! Runs the conversation engine and, when the engine signals
//! `create_project`, creates the project through the storage port.

use std::sync::Arc;

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::wizard::{
    prompts, ConversationContext, ConversationEngine, EngineError, SuggestedAction,
};
use crate::ports::{ProjectStorage, ProjectStorageError};

/// Command to process one user message.
#[derive(Debug, Clone)]
pub struct ChatWithAssistantCommand {
    pub user: AuthenticatedUser,
    pub message: String,
    /// `None` starts a new conversation.
    pub context: Option<ConversationContext>,
}

/// Result of a processed turn.
#[derive(Debug, Clone)]
pub struct ChatWithAssistantResult {
    pub reply: String,
    pub context: ConversationContext,
    pub suggested_action: Option<SuggestedAction>,
    /// Set when the engine asked for creation and the project service failed.
    pub creation_error: Option<ProjectStorageError>,
}

/// Handler for wizard turns.
pub struct ChatWithAssistantHandler {
    engine: ConversationEngine,
    storage: Arc<dyn ProjectStorage>,
}

impl ChatWithAssistantHandler {
    pub fn new(engine: ConversationEngine, storage: Arc<dyn ProjectStorage>) -> Self {
        Self { engine, storage }
    }

    pub async fn handle(
        &self,
        cmd: ChatWithAssistantCommand,
    ) -> Result<ChatWithAssistantResult, EngineError> {
        let outcome = self.engine.advance(&cmd.message, cmd.context).await?;

        if outcome.suggested_action != Some(SuggestedAction::CreateProject) {
            return Ok(ChatWithAssistantResult {
                reply: outcome.reply,
                context: outcome.context,
                suggested_action: outcome.suggested_action,
                creation_error: None,
            });
        }

        let mut context = outcome.context;
        match self
            .storage
            .create_project(&context.project_data, &cmd.user)
            .await
        {
            Ok(()) => {
                context.mark_created()?;
                tracing::info!(
                    user_id = %cmd.user.id,
                    project = %context.project_data.name,
                    "project created"
                );
                Ok(ChatWithAssistantResult {
                    reply: prompts::project_created(&context.project_data.name),
                    context,
                    suggested_action: outcome.suggested_action,
                    creation_error: None,
                })
            }
            Err(e) => {
                tracing::warn!(user_id = %cmd.user.id, error = %e, "project creation failed");
                Ok(ChatWithAssistantResult {
                    reply: prompts::PROJECT_CREATION_FAILED.to_string(),
                    context,
                    suggested_action: outcome.suggested_action,
                    creation_error: Some(e),
                })
            }
        }
    }
}
