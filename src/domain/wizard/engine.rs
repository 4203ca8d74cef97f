//! Wizard conversation engine.
//!
//! Takes one user message plus the caller-held context and produces the
//! assistant reply, the updated context and an optional suggested action.
//! The engine keeps no per-conversation state and is shared across requests.

use chrono::{Local, NaiveDate};
use std::sync::Arc;

use super::context::{ConversationContext, SuggestedAction, TurnOutcome};
use super::errors::EngineError;
use super::generation::DescriptionGenerator;
use super::intent::{extract_date, normalize, IntentAnalyzer};
use super::validator::{self, FieldError};
use super::{prompts, WizardStep};
use crate::domain::foundation::{StateMachine, ValidationError};
use crate::domain::project::{Priority, ValidationState};
use crate::ports::AIProvider;

/// Reply keywords the engine recognizes, compared after trimming and
/// lower-casing.
#[derive(Debug, Clone)]
struct WizardKeywords {
    affirmative: Vec<String>,
    negative: Vec<String>,
    /// Ends the team step.
    team_done: Vec<String>,
    /// Substrings that request a generated description at any step.
    generation_triggers: Vec<String>,
}

impl Default for WizardKeywords {
    fn default() -> Self {
        Self {
            affirmative: vec!["yes".to_string(), "да".to_string()],
            negative: vec!["no".to_string(), "нет".to_string()],
            team_done: vec!["done".to_string(), "готово".to_string()],
            generation_triggers: vec![
                "generate description".to_string(),
                "сгенерируй описание".to_string(),
            ],
        }
    }
}

impl WizardKeywords {
    fn is_affirmative(&self, message: &str) -> bool {
        matches_exactly(message, &self.affirmative)
    }

    fn is_negative(&self, message: &str) -> bool {
        matches_exactly(message, &self.negative)
    }

    fn is_team_done(&self, message: &str) -> bool {
        matches_exactly(message, &self.team_done)
    }

    fn requests_generation(&self, message: &str) -> bool {
        let normalized = normalize(message);
        self.generation_triggers
            .iter()
            .any(|trigger| normalized.contains(trigger.as_str()))
    }
}

fn matches_exactly(message: &str, words: &[String]) -> bool {
    let normalized = normalize(message);
    let answer = normalized.trim_end_matches(['.', '!']);
    words.iter().any(|word| word == answer)
}

/// Step-wise project creation dialogue.
#[derive(Clone)]
pub struct ConversationEngine {
    generator: DescriptionGenerator,
    analyzer: IntentAnalyzer,
    keywords: WizardKeywords,
    today: Option<NaiveDate>,
}

impl ConversationEngine {
    pub fn new(ai_provider: Arc<dyn AIProvider>) -> Self {
        Self {
            generator: DescriptionGenerator::new(ai_provider),
            analyzer: IntentAnalyzer::new(),
            keywords: WizardKeywords::default(),
            today: None,
        }
    }

    /// Pins "today" for deadline checks instead of reading the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Description generator shared with the standalone endpoint.
    pub fn generator(&self) -> &DescriptionGenerator {
        &self.generator
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Processes one turn.
    ///
    /// Without a context a fresh one is created and the welcome prompt is
    /// returned; the message is not consumed. Errors are collaborator or
    /// transition failures; bad user input is reported in the reply.
    pub async fn advance(
        &self,
        message: &str,
        context: Option<ConversationContext>,
    ) -> Result<TurnOutcome, EngineError> {
        let Some(mut context) = context else {
            tracing::debug!("starting new wizard conversation");
            return Ok(TurnOutcome::reply(
                prompts::WELCOME_MESSAGE,
                ConversationContext::new(),
            ));
        };

        if context.current_step == WizardStep::Complete {
            return Ok(TurnOutcome::reply(prompts::ALREADY_CREATED, context));
        }

        if self.keywords.requests_generation(message) {
            return self.generate_description(message, context).await;
        }

        if let Some(candidate) = context.pending_description.take() {
            return self.resolve_pending_description(message, candidate, context);
        }

        tracing::debug!(step = %context.current_step, "dispatching wizard turn");
        match context.current_step {
            WizardStep::Name => {
                context.project_data.name = message.trim().to_string();
                self.gate(context, message)
            }
            WizardStep::Description => {
                context.project_data.description = message.trim().to_string();
                self.gate(context, message)
            }
            WizardStep::Deadline => {
                let deadline = extract_date(message)
                    .map(|(date, _)| date)
                    .unwrap_or_else(|| message.trim().to_string());
                context.project_data.deadline = deadline.clone();
                self.gate(context, &deadline)
            }
            WizardStep::Priority => self.handle_priority(message, context),
            WizardStep::Team => self.handle_team(message, context),
            WizardStep::Confirmation => self.handle_confirmation(message, context),
            WizardStep::Complete => Ok(TurnOutcome::reply(prompts::ALREADY_CREATED, context)),
        }
    }

    /// Validates the field written at the current step and advances on
    /// success. Failure keeps the step and reports the error.
    fn gate(
        &self,
        mut context: ConversationContext,
        entered: &str,
    ) -> Result<TurnOutcome, EngineError> {
        let step = context.current_step;
        let today = self.today();

        if let Err(err) = validator::validate_step(step, &context.project_data, today) {
            tracing::debug!(step = %step, error = %err, "step input rejected");
            let key = validator::step_error_key(step, &context.project_data);
            context.validation_state = ValidationState::rejected(key, err.to_string());
            let reply = prompts::input_error(&err.to_string(), prompts::retry_hint(step));
            return Ok(TurnOutcome::reply(reply, context));
        }

        let warnings = self.analyzer.analyze_context(entered, step, today);
        let too_soon = warnings.get("warning").map(String::as_str) == Some("too_soon");
        context.validation_state = ValidationState::with_warnings(warnings);

        let next = step_forward(&mut context)?;
        let prompt = prompts::prompt_for_context(next, &context.project_data);
        let reply = if too_soon {
            format!("{}\n\n{}", prompts::DEADLINE_TOO_SOON_NOTE, prompt)
        } else {
            prompt
        };
        Ok(TurnOutcome::reply(reply, context))
    }

    fn handle_priority(
        &self,
        message: &str,
        mut context: ConversationContext,
    ) -> Result<TurnOutcome, EngineError> {
        let Some(priority) = Priority::parse(message) else {
            tracing::debug!("priority input rejected");
            context.validation_state =
                ValidationState::rejected("priority", FieldError::InvalidPriority.to_string());
            return Ok(TurnOutcome::reply(prompts::INVALID_PRIORITY, context));
        };

        context.project_data.set_priority(priority);
        context.validation_state = ValidationState::default();
        let next = step_forward(&mut context)?;
        Ok(TurnOutcome::reply(prompts::prompt_for_step(next), context))
    }

    fn handle_team(
        &self,
        message: &str,
        context: ConversationContext,
    ) -> Result<TurnOutcome, EngineError> {
        if self.keywords.is_team_done(message) {
            return self.gate(context, message);
        }
        Ok(TurnOutcome::reply(prompts::NEXT_MEMBER_PROMPT, context))
    }

    fn handle_confirmation(
        &self,
        message: &str,
        mut context: ConversationContext,
    ) -> Result<TurnOutcome, EngineError> {
        if self.keywords.is_affirmative(message) {
            let state = validator::validate_project_record(&context.project_data, self.today());
            let lines = state.error_lines();
            let is_valid = state.is_valid;
            context.validation_state = state;

            if !is_valid {
                tracing::debug!(errors = lines.len(), "confirmation blocked by validation");
                return Ok(TurnOutcome::reply(prompts::validation_failure(&lines), context));
            }

            tracing::info!(project = %context.project_data.name, "project ready for creation");
            return Ok(TurnOutcome::reply(prompts::CREATING_PROJECT, context)
                .with_action(SuggestedAction::CreateProject));
        }

        if self.keywords.is_negative(message) {
            context.current_step = context.current_step.transition_to(WizardStep::Name)?;
            context.validation_state = ValidationState::default();
            return Ok(TurnOutcome::reply(prompts::RESTART_MESSAGE, context));
        }

        Ok(TurnOutcome::reply(prompts::YES_NO_PROMPT, context))
    }

    /// Drafts a description and parks it until the user answers yes or no.
    /// The context is untouched when generation fails.
    async fn generate_description(
        &self,
        message: &str,
        mut context: ConversationContext,
    ) -> Result<TurnOutcome, EngineError> {
        tracing::debug!(step = %context.current_step, "generating project description");
        let candidate = self.generator.draft(message).await?;
        let reply = prompts::generated_description(&candidate);
        context.pending_description = Some(candidate);
        Ok(TurnOutcome::reply(reply, context))
    }

    fn resolve_pending_description(
        &self,
        message: &str,
        candidate: String,
        mut context: ConversationContext,
    ) -> Result<TurnOutcome, EngineError> {
        if self.keywords.is_affirmative(message) {
            if let Err(err) = validator::validate_description(&candidate) {
                tracing::debug!(error = %err, "generated description rejected");
                context.validation_state = ValidationState::rejected("description", err.to_string());
                let prompt = prompts::prompt_for_context(context.current_step, &context.project_data);
                return Ok(TurnOutcome::reply(
                    prompts::input_error(&err.to_string(), &prompt),
                    context,
                ));
            }

            context.project_data.description = candidate;
            context.validation_state = ValidationState::default();
            let step = if context.current_step == WizardStep::Description {
                step_forward(&mut context)?
            } else {
                context.current_step
            };
            let prompt = prompts::prompt_for_context(step, &context.project_data);
            return Ok(TurnOutcome::reply(
                format!("{}\n\n{}", prompts::DESCRIPTION_SAVED, prompt),
                context,
            ));
        }

        if self.keywords.is_negative(message) {
            let prompt = prompts::prompt_for_context(context.current_step, &context.project_data);
            return Ok(TurnOutcome::reply(
                format!("{}\n\n{}", prompts::DESCRIPTION_DISCARDED, prompt),
                context,
            ));
        }

        context.pending_description = Some(candidate);
        Ok(TurnOutcome::reply(prompts::DESCRIPTION_PENDING_QUESTION, context))
    }
}

/// Moves the context one step forward along the fixed sequence.
fn step_forward(context: &mut ConversationContext) -> Result<WizardStep, EngineError> {
    let current = context.current_step;
    let next = current.next().ok_or_else(|| {
        ValidationError::invalid_format(
            "step_transition",
            format!("step '{}' does not advance on input", current),
        )
    })?;
    context.current_step = current.transition_to(next)?;
    Ok(next)
}
