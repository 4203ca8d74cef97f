//! Project module - The record the wizard assembles.
//!
//! A `ProjectRecord` is built field by field over the conversation and handed
//! to the project-storage service once it passes full validation.

mod record;
mod validation;
mod values;

pub use record::{ProjectRecord, TeamMember};
pub use validation::ValidationState;
pub use values::{MemberRole, Priority, ProjectStatus};
