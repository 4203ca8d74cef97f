//! The project record and its team members.

use serde::{Deserialize, Serialize};

use super::{Priority, ProjectStatus};

/// Default value for `budget` and `spent`.
pub const ZERO_AMOUNT: &str = "0";

/// Default confidentiality level.
pub const DEFAULT_CONFIDENTIALITY: &str = "members only";

/// A project being assembled by the wizard.
///
/// Serialized flat; this is the exact body posted to the project-storage
/// service. Missing fields deserialize to their defaults so partially filled
/// contexts from clients round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRecord {
    pub name: String,
    pub description: String,
    /// `DD.MM.YYYY`
    pub deadline: String,
    pub status: ProjectStatus,
    /// Canonical priority literal, see [`Priority::as_str`].
    pub priority: String,
    pub team: Vec<TeamMember>,
    /// Decimal amount as text.
    pub budget: String,
    /// Decimal amount as text.
    pub spent: String,
    pub confidentiality: String,
    /// Percent complete, accepted as any integer and range-checked by validation.
    pub progress: i64,
}

impl Default for ProjectRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            deadline: String::new(),
            status: ProjectStatus::default(),
            priority: Priority::default().as_str().to_string(),
            team: Vec::new(),
            budget: ZERO_AMOUNT.to_string(),
            spent: ZERO_AMOUNT.to_string(),
            confidentiality: DEFAULT_CONFIDENTIALITY.to_string(),
            progress: 0,
        }
    }
}

impl ProjectRecord {
    /// Creates an empty record with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the priority from a parsed level.
    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority.as_str().to_string();
    }
}

/// A member of the project team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub lastname: String,
    pub email: String,
    /// One of `MANAGER`, `EDITOR`, `READER`.
    pub role: String,
    pub photo: String,
}

impl TeamMember {
    pub fn new(
        name: impl Into<String>,
        lastname: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            lastname: lastname.into(),
            email: email.into(),
            role: role.into(),
            ..Self::default()
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.lastname).trim().to_string()
    }
}
