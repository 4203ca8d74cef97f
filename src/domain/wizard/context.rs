//! Caller-held conversation state.
//!
//! The service stores nothing between turns: every request carries the full
//! context and every response returns the updated one.

use serde::{Deserialize, Serialize};

use super::WizardStep;
use crate::domain::foundation::{StateMachine, ValidationError};
use crate::domain::project::{ProjectRecord, ValidationState};

/// Full state of one wizard conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConversationContext {
    pub current_step: WizardStep,

    #[serde(default)]
    pub project_data: ProjectRecord,

    /// Result of the last validation pass; may be stale.
    #[serde(default)]
    pub validation_state: ValidationState,

    /// Generated description waiting for the user's yes/no.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_description: Option<String>,
}

impl ConversationContext {
    /// A fresh context at the first step with record defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves a confirmed context to `Complete` once the project exists.
    pub fn mark_created(&mut self) -> Result<(), ValidationError> {
        self.current_step = self.current_step.transition_to(WizardStep::Complete)?;
        Ok(())
    }
}

/// Out-of-band signal for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestedAction {
    /// The record passed full validation and should be created.
    CreateProject,
}

/// Result of one engine turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub reply: String,
    pub context: ConversationContext,
    pub suggested_action: Option<SuggestedAction>,
}

impl TurnOutcome {
    pub fn reply(reply: impl Into<String>, context: ConversationContext) -> Self {
        Self {
            reply: reply.into(),
            context,
            suggested_action: None,
        }
    }

    pub fn with_action(mut self, action: SuggestedAction) -> Self {
        self.suggested_action = Some(action);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_context_starts_at_name_with_defaults() {
        let context = ConversationContext::new();
        assert_eq!(context.current_step, WizardStep::Name);
        assert_eq!(context.project_data, ProjectRecord::new());
        assert!(context.pending_description.is_none());
    }

    #[test]
    fn deserializes_minimal_context() {
        let context: ConversationContext =
            serde_json::from_value(json!({ "current_step": "deadline" })).unwrap();
        assert_eq!(context.current_step, WizardStep::Deadline);
        assert_eq!(context.project_data.priority, "MEDIUM");
    }

    #[test]
    fn rejects_unknown_step() {
        let result: Result<ConversationContext, _> =
            serde_json::from_value(json!({ "current_step": "review" }));
        assert!(result.is_err());
    }

    #[test]
    fn omits_absent_pending_description() {
        let value = serde_json::to_value(ConversationContext::new()).unwrap();
        assert!(value.get("pending_description").is_none());
        assert_eq!(value["current_step"], "name");
    }

    #[test]
    fn mark_created_only_from_confirmation() {
        let mut context = ConversationContext::new();
        assert!(context.mark_created().is_err());
        assert_eq!(context.current_step, WizardStep::Name);

        context.current_step = WizardStep::Confirmation;
        context.mark_created().unwrap();
        assert_eq!(context.current_step, WizardStep::Complete);
    }

    #[test]
    fn suggested_action_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&SuggestedAction::CreateProject).unwrap(),
            "\"create_project\""
        );
    }
}
