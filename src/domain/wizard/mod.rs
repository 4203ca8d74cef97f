//! Wizard module - Step-wise project creation dialogue.
//!
//! # Components
//!
//! - `ConversationEngine` - per-turn state machine over `WizardStep`
//! - `IntentAnalyzer` - keyword/regex classification of free text
//! - `validator` - pure field and record checks gating transitions
//! - `prompts` - assistant message templates
//! - `DescriptionGenerator` - description drafts from the generative backend

mod context;
mod engine;
mod errors;
mod generation;
mod intent;
pub mod prompts;
mod step;
pub mod validator;

pub use context::{ConversationContext, SuggestedAction, TurnOutcome};
pub use engine::ConversationEngine;
pub use errors::EngineError;
pub use generation::DescriptionGenerator;
pub use intent::{extract_date, extract_email, Intent, IntentAnalyzer, IntentKind};
pub use step::WizardStep;
pub use validator::FieldError;
