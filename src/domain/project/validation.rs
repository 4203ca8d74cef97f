//! Outcome of the most recent validation pass.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Errors and advisory warnings keyed by field name (or `team[<index>]`).
///
/// `is_valid` is derived from `errors` at construction and never set on its
/// own, including when read from a client: the incoming flag is ignored.
/// Maps are ordered so error listings are stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawValidationState")]
pub struct ValidationState {
    pub is_valid: bool,
    pub errors: BTreeMap<String, String>,
    pub warnings: BTreeMap<String, String>,
}

/// Wire shape accepted from clients.
#[derive(Deserialize)]
struct RawValidationState {
    #[serde(default)]
    errors: BTreeMap<String, String>,
    #[serde(default)]
    warnings: BTreeMap<String, String>,
}

impl From<RawValidationState> for ValidationState {
    fn from(raw: RawValidationState) -> Self {
        Self::new(raw.errors, raw.warnings)
    }
}

impl Default for ValidationState {
    fn default() -> Self {
        Self::new(BTreeMap::new(), BTreeMap::new())
    }
}

impl ValidationState {
    pub fn new(errors: BTreeMap<String, String>, warnings: BTreeMap<String, String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// A state with a single field error.
    pub fn rejected(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.into(), message.into());
        Self::new(errors, BTreeMap::new())
    }

    /// A passing state carrying advisory warnings.
    pub fn with_warnings(warnings: BTreeMap<String, String>) -> Self {
        Self::new(BTreeMap::new(), warnings)
    }

    /// Error lines formatted as `key: message`, ordered by key.
    pub fn error_lines(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect()
    }
}
