//! Assistant message templates for the project wizard.
//!
//! Static step prompts, the confirmation summary, and the system prompts used
//! for description generation.

use super::WizardStep;
use crate::domain::project::ProjectRecord;

/// Returns the prompt that asks for the field collected at `step`.
pub fn prompt_for_step(step: WizardStep) -> &'static str {
    match step {
        WizardStep::Name => NAME_PROMPT,
        WizardStep::Description => DESCRIPTION_PROMPT,
        WizardStep::Deadline => DEADLINE_PROMPT,
        WizardStep::Priority => PRIORITY_PROMPT,
        WizardStep::Team => TEAM_PROMPT,
        WizardStep::Confirmation => YES_NO_PROMPT,
        WizardStep::Complete => ALREADY_CREATED,
    }
}

/// Returns the hint appended to an input error at `step`.
pub fn retry_hint(step: WizardStep) -> &'static str {
    match step {
        WizardStep::Name => "Please enter a valid project name.",
        WizardStep::Description => "Please describe the project in a bit more detail.",
        WizardStep::Deadline => "Please enter the deadline as DD.MM.YYYY.",
        WizardStep::Priority => "Please choose high, medium or low.",
        WizardStep::Team => "Please check the team member details.",
        WizardStep::Confirmation | WizardStep::Complete => YES_NO_PROMPT,
    }
}

/// Prompt for whatever the context is currently waiting on. At confirmation
/// this re-renders the summary so edits made meanwhile are visible.
pub fn prompt_for_context(step: WizardStep, record: &ProjectRecord) -> String {
    match step {
        WizardStep::Confirmation => confirmation_prompt(record),
        other => prompt_for_step(other).to_string(),
    }
}

// ============================================================================
// Step Prompts
// ============================================================================

pub const WELCOME_MESSAGE: &str = "👋 Hi! I'll help you create a new project.\n\n\
Let's start with the name. What should the project be called?";

const NAME_PROMPT: &str = "What should the project be called?";

const DESCRIPTION_PROMPT: &str = "📝 Great! Now describe the project: its goals, tasks and expected results.\n\n\
Tip: type \"generate description\" and I'll draft one for you.";

const DEADLINE_PROMPT: &str = "📅 When is the deadline? Please use the DD.MM.YYYY format.";

const PRIORITY_PROMPT: &str = "⚡ What is the project priority? (high, medium, low)";

const TEAM_PROMPT: &str = "👥 Who should be on the team? Send a member's email, or \"done\" to finish.";

pub const NEXT_MEMBER_PROMPT: &str = "Send the next member's email, or \"done\" to finish.";

pub const YES_NO_PROMPT: &str = "Please answer \"yes\" or \"no\".";

pub const RESTART_MESSAGE: &str = "🔄 Okay, let's go over it again. Your answers are kept.\n\n\
What should the project be called?";

pub const CREATING_PROJECT: &str = "✅ Great! Creating the project...";

pub const PROJECT_CREATION_FAILED: &str = "❌ I couldn't create the project right now. Your answers are kept; reply \"yes\" to try again.";

/// Reply after the project service accepted the project.
pub fn project_created(name: &str) -> String {
    format!("🎉 Project \"{}\" has been created!", name)
}

pub const ALREADY_CREATED: &str = "This project has already been created. Start a new conversation to create another one.";

pub const INVALID_PRIORITY: &str = "❌ Unknown priority. Please choose high, medium or low.";

pub const DESCRIPTION_SAVED: &str = "✅ Description saved.";

pub const DESCRIPTION_DISCARDED: &str = "Okay, I've discarded the generated description.";

pub const DESCRIPTION_PENDING_QUESTION: &str = "Should I use the generated description? Please answer \"yes\" or \"no\".";

pub const DEADLINE_TOO_SOON_NOTE: &str = "⚠️ Note: the deadline is less than a week away.";

// ============================================================================
// Rendered Messages
// ============================================================================

/// Input error with a hint, keeping the step.
pub fn input_error(message: &str, hint: &str) -> String {
    format!("❌ {}\n\n{}", message, hint)
}

/// Aggregate validation failure at confirmation, one error per line.
pub fn validation_failure(lines: &[String]) -> String {
    let mut reply = String::from("❌ The project can't be created yet:\n");
    for line in lines {
        reply.push_str("- ");
        reply.push_str(line);
        reply.push('\n');
    }
    reply.push_str("\nAnswer \"no\" to go over the answers again.");
    reply
}

/// Multi-line summary of the record.
pub fn project_summary(record: &ProjectRecord) -> String {
    let mut summary = format!(
        "📋 Name: {}\n📝 Description: {}\n📅 Deadline: {}\n⚡ Priority: {}\n📌 Status: {}\n👥 Team: ",
        record.name,
        record.description,
        record.deadline,
        record.priority,
        record.status.label(),
    );

    if record.team.is_empty() {
        summary.push_str("no members yet");
    } else {
        let members: Vec<String> = record
            .team
            .iter()
            .map(|m| format!("{} <{}> ({})", m.full_name(), m.email, m.role))
            .collect();
        summary.push_str(&members.join(", "));
    }
    summary
}

/// Summary followed by the yes/no question.
pub fn confirmation_prompt(record: &ProjectRecord) -> String {
    format!(
        "Let's check everything:\n\n{}\n\nCreate the project? (yes/no)",
        project_summary(record)
    )
}

/// Shows a generated description and asks whether to keep it.
pub fn generated_description(candidate: &str) -> String {
    format!(
        "✨ Here is a draft description:\n\n{}\n\nUse it? (yes/no)",
        candidate
    )
}

// ============================================================================
// Generation Prompts
// ============================================================================

/// System prompt for drafts requested mid-conversation.
pub const DESCRIPTION_WRITER_SYSTEM_PROMPT: &str = "You are a project-description specialist. \
Write a concise, professional project description based on the user's information. \
Reply with the description only.";

/// System prompt for the standalone description endpoint.
pub const DESCRIPTION_SPECIALIST_SYSTEM_PROMPT: &str = r#"You are an expert in writing project descriptions. Based on the information provided, write a detailed and well-structured project description.

The description must cover:
- Goals and tasks of the project
- Expected results
- Main stages of work
- Technologies or methods used, if relevant

Write in a business style. Split the text into paragraphs and use bullet lists where they help readability. Reply with the description only."#;

/// User message wrapping the raw project information.
pub fn description_request(project_info: &str) -> String {
    format!("Write a project description based on this information: {}", project_info.trim())
}
