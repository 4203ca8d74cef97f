//! Wizard step state machine.
//!
//! Defines the fixed sequence of project-creation steps and the legal moves
//! between them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{StateMachine, ValidationError};

/// Position in the project-creation sequence.
///
/// Steps run in order:
/// - `Name` -> `Description` -> `Deadline` -> `Priority` -> `Team`
/// - `Confirmation`: summary shown, waiting for yes/no
/// - `Complete`: project created, conversation finished
///
/// A negative answer at `Confirmation` goes back to `Name` with the entered
/// data kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Name,
    Description,
    Deadline,
    Priority,
    Team,
    Confirmation,
    Complete,
}

impl WizardStep {
    pub const ALL: [WizardStep; 7] = [
        WizardStep::Name,
        WizardStep::Description,
        WizardStep::Deadline,
        WizardStep::Priority,
        WizardStep::Team,
        WizardStep::Confirmation,
        WizardStep::Complete,
    ];

    /// Wire name of the step.
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Name => "name",
            WizardStep::Description => "description",
            WizardStep::Deadline => "deadline",
            WizardStep::Priority => "priority",
            WizardStep::Team => "team",
            WizardStep::Confirmation => "confirmation",
            WizardStep::Complete => "complete",
        }
    }

    /// The step that follows on successful input, if the step advances on its
    /// own. `Confirmation` branches and `Complete` is final, so both return
    /// `None`.
    pub fn next(&self) -> Option<WizardStep> {
        use WizardStep::*;
        match self {
            Name => Some(Description),
            Description => Some(Deadline),
            Deadline => Some(Priority),
            Priority => Some(Team),
            Team => Some(Confirmation),
            Confirmation | Complete => None,
        }
    }
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WizardStep::*;
        matches!(
            (self, target),
            (Name, Description)
                | (Description, Deadline)
                | (Deadline, Priority)
                | (Priority, Team)
                | (Team, Confirmation)
                // Start over, keeping entered data
                | (Confirmation, Name)
                // Project created downstream
                | (Confirmation, Complete)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WizardStep::*;
        match self {
            Name => vec![Description],
            Description => vec![Deadline],
            Deadline => vec![Priority],
            Priority => vec![Team],
            Team => vec![Confirmation],
            Confirmation => vec![Name, Complete],
            Complete => vec![],
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WizardStep {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|step| step.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("current_step", format!("unknown step '{}'", s))
            })
    }
}
