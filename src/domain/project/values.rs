//! Closed-set values stored on a project record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Project priority level.
///
/// The record stores the canonical English literal (`HIGH`, `MEDIUM`, `LOW`);
/// parsing also accepts the Russian literals users tend to type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// All levels, highest first.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Canonical literal stored on the record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }

    /// Russian literal accepted as an alias.
    pub fn localized(&self) -> &'static str {
        match self {
            Priority::High => "ВЫСОКИЙ",
            Priority::Medium => "СРЕДНИЙ",
            Priority::Low => "НИЗКИЙ",
        }
    }

    /// Case-insensitive match against the canonical and localized literals.
    pub fn parse(input: &str) -> Option<Self> {
        let upper = input.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == upper || p.localized() == upper)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            ValidationError::invalid_format("priority", format!("unknown priority '{}'", s))
        })
    }
}

/// Role a team member holds on the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberRole {
    Manager,
    Editor,
    Reader,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Manager => "MANAGER",
            MemberRole::Editor => "EDITOR",
            MemberRole::Reader => "READER",
        }
    }

    /// Exact match; roles come from the member directory, not from chat text.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "MANAGER" => Some(MemberRole::Manager),
            "EDITOR" => Some(MemberRole::Editor),
            "READER" => Some(MemberRole::Reader),
            _ => None,
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    InProgress,
    OnHold,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    /// Human-readable label used in summaries.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "in progress",
            ProjectStatus::OnHold => "on hold",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Cancelled => "cancelled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod priority {
        use super::*;

        #[test]
        fn parses_canonical_literals_case_insensitively() {
            assert_eq!(Priority::parse("high"), Some(Priority::High));
            assert_eq!(Priority::parse("Medium"), Some(Priority::Medium));
            assert_eq!(Priority::parse(" LOW "), Some(Priority::Low));
        }

        #[test]
        fn parses_localized_literals() {
            assert_eq!(Priority::parse("высокий"), Some(Priority::High));
            assert_eq!(Priority::parse("Средний"), Some(Priority::Medium));
            assert_eq!(Priority::parse("НИЗКИЙ"), Some(Priority::Low));
        }

        #[test]
        fn rejects_anything_else() {
            assert_eq!(Priority::parse("urgent"), None);
            assert_eq!(Priority::parse(""), None);
            assert!("critical".parse::<Priority>().is_err());
        }

        #[test]
        fn defaults_to_medium() {
            assert_eq!(Priority::default(), Priority::Medium);
        }

        #[test]
        fn serializes_as_canonical_literal() {
            assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"HIGH\"");
        }
    }

    mod member_role {
        use super::*;

        #[test]
        fn parses_exact_literals_only() {
            assert_eq!(MemberRole::parse("EDITOR"), Some(MemberRole::Editor));
            assert_eq!(MemberRole::parse("editor"), None);
            assert_eq!(MemberRole::parse("OWNER"), None);
        }
    }

    mod project_status {
        use super::*;

        #[test]
        fn defaults_to_in_progress() {
            assert_eq!(ProjectStatus::default(), ProjectStatus::InProgress);
            assert_eq!(ProjectStatus::default().label(), "in progress");
        }

        #[test]
        fn serializes_snake_case() {
            assert_eq!(
                serde_json::to_string(&ProjectStatus::OnHold).unwrap(),
                "\"on_hold\""
            );
        }
    }
}
