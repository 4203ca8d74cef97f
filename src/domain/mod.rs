//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, auth, state machine)
//! - `project` - The project record the wizard assembles
//! - `wizard` - Conversation engine, intent analysis, validation and prompts

pub mod foundation;
pub mod project;
pub mod wizard;
