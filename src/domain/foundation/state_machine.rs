//! State machine trait for step enums.
//!
//! Gives closed-set state enums (such as the wizard's steps) a single way to
//! declare legal transitions and to perform checked ones.

use super::ValidationError;

/// Trait for enums whose values form a finite state machine.
///
/// Implementors list the legal edges; `transition_to` and `is_terminal`
/// come for free.
///
/// ```ignore
/// let next = WizardStep::Name.transition_to(WizardStep::Description)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is legal.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all legal target states from the current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs a checked transition.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "step_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if the current state has no outgoing transitions.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
