//! Field and record validation.
//!
//! Pure functions: no I/O, and "today" is passed in so deadline checks are
//! deterministic. Each field validator returns the first problem it finds;
//! [`validate_project_record`] collects one error per field or team member.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

use super::WizardStep;
use crate::domain::project::{MemberRole, Priority, ProjectRecord, TeamMember, ValidationState};

pub const MIN_NAME_LENGTH: usize = 3;
pub const MAX_NAME_LENGTH: usize = 100;
pub const MIN_DESCRIPTION_LENGTH: usize = 10;
pub const MAX_DESCRIPTION_LENGTH: usize = 3000;
pub const MAX_PROGRESS: i64 = 100;

/// Date format used for deadlines.
pub const DEADLINE_FORMAT: &str = "%d.%m.%Y";

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[а-яА-ЯёЁa-zA-Z0-9\s\-_]+$").expect("name pattern is valid"));

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// A single field failing validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("name must be at least {min} characters long")]
    NameTooShort { min: usize },

    #[error("name cannot be longer than {max} characters")]
    NameTooLong { max: usize },

    #[error("name may only contain letters, digits, spaces, hyphens and underscores")]
    NameInvalidCharacters,

    #[error("description must be at least {min} characters long")]
    DescriptionTooShort { min: usize },

    #[error("description cannot be longer than {max} characters")]
    DescriptionTooLong { max: usize },

    #[error("deadline is required")]
    DeadlineMissing,

    #[error("invalid date format, use DD.MM.YYYY")]
    DeadlineInvalidFormat,

    #[error("date cannot be in the past")]
    DeadlineInPast,

    #[error("invalid priority, allowed values: HIGH, MEDIUM, LOW")]
    InvalidPriority,

    #[error("invalid email: {0}")]
    InvalidEmail(String),

    #[error("invalid role '{0}', allowed values: MANAGER, EDITOR, READER")]
    InvalidRole(String),

    #[error("team member first name is required")]
    MemberNameMissing,

    #[error("team member last name is required")]
    MemberLastnameMissing,

    #[error("progress must be between 0 and {max}, got {value}")]
    ProgressOutOfRange { value: i64, max: i64 },

    #[error("step '{0}' has no field to validate")]
    NoFieldForStep(WizardStep),
}

pub fn validate_name(name: &str) -> Result<(), FieldError> {
    let name = name.trim();
    let length = name.chars().count();

    if length < MIN_NAME_LENGTH {
        return Err(FieldError::NameTooShort { min: MIN_NAME_LENGTH });
    }
    if length > MAX_NAME_LENGTH {
        return Err(FieldError::NameTooLong { max: MAX_NAME_LENGTH });
    }
    if !NAME_PATTERN.is_match(name) {
        return Err(FieldError::NameInvalidCharacters);
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), FieldError> {
    let length = description.trim().chars().count();

    if length < MIN_DESCRIPTION_LENGTH {
        return Err(FieldError::DescriptionTooShort {
            min: MIN_DESCRIPTION_LENGTH,
        });
    }
    if length > MAX_DESCRIPTION_LENGTH {
        return Err(FieldError::DescriptionTooLong {
            max: MAX_DESCRIPTION_LENGTH,
        });
    }
    Ok(())
}

/// Parses a `DD.MM.YYYY` deadline.
pub fn parse_deadline(deadline: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(deadline.trim(), DEADLINE_FORMAT).ok()
}

/// Deadline must parse and must not be strictly before `today`.
pub fn validate_deadline(deadline: &str, today: NaiveDate) -> Result<(), FieldError> {
    if deadline.trim().is_empty() {
        return Err(FieldError::DeadlineMissing);
    }
    let date = parse_deadline(deadline).ok_or(FieldError::DeadlineInvalidFormat)?;
    if date < today {
        return Err(FieldError::DeadlineInPast);
    }
    Ok(())
}

pub fn validate_priority(priority: &str) -> Result<(), FieldError> {
    Priority::parse(priority)
        .map(|_| ())
        .ok_or(FieldError::InvalidPriority)
}

pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail(email.to_string()))
    }
}

pub fn validate_team_member(member: &TeamMember) -> Result<(), FieldError> {
    validate_email(&member.email)?;
    if MemberRole::parse(&member.role).is_none() {
        return Err(FieldError::InvalidRole(member.role.clone()));
    }
    if member.name.trim().is_empty() {
        return Err(FieldError::MemberNameMissing);
    }
    if member.lastname.trim().is_empty() {
        return Err(FieldError::MemberLastnameMissing);
    }
    Ok(())
}

/// Validates every team member, reporting the first failing one with its index.
fn validate_team(team: &[TeamMember]) -> Result<(), (usize, FieldError)> {
    team.iter()
        .enumerate()
        .try_for_each(|(index, member)| validate_team_member(member).map_err(|e| (index, e)))
}

/// Runs only the validator for the field collected at `step`.
///
/// `Confirmation` and `Complete` collect nothing, so asking to validate them
/// is an error rather than a silent pass.
pub fn validate_step(
    step: WizardStep,
    record: &ProjectRecord,
    today: NaiveDate,
) -> Result<(), FieldError> {
    match step {
        WizardStep::Name => validate_name(&record.name),
        WizardStep::Description => validate_description(&record.description),
        WizardStep::Deadline => validate_deadline(&record.deadline, today),
        WizardStep::Priority => validate_priority(&record.priority),
        WizardStep::Team => validate_team(&record.team).map_err(|(_, e)| e),
        WizardStep::Confirmation | WizardStep::Complete => Err(FieldError::NoFieldForStep(step)),
    }
}

/// Key under which errors for `step` are reported in a [`ValidationState`].
pub fn step_error_key(step: WizardStep, record: &ProjectRecord) -> String {
    match step {
        WizardStep::Team => match validate_team(&record.team) {
            Err((index, _)) => team_key(index),
            Ok(()) => "team".to_string(),
        },
        _ => step.as_str().to_string(),
    }
}

fn team_key(index: usize) -> String {
    format!("team[{}]", index)
}

/// Validates the whole record, collecting every error.
///
/// Errors are keyed by field name, or by `team[<index>]` for members.
pub fn validate_project_record(record: &ProjectRecord, today: NaiveDate) -> ValidationState {
    let mut errors = BTreeMap::new();

    let mut check = |key: String, result: Result<(), FieldError>| {
        if let Err(err) = result {
            errors.insert(key, err.to_string());
        }
    };

    check("name".to_string(), validate_name(&record.name));
    check("description".to_string(), validate_description(&record.description));
    check("deadline".to_string(), validate_deadline(&record.deadline, today));
    check("priority".to_string(), validate_priority(&record.priority));
    for (index, member) in record.team.iter().enumerate() {
        check(team_key(index), validate_team_member(member));
    }
    if !(0..=MAX_PROGRESS).contains(&record.progress) {
        check(
            "progress".to_string(),
            Err(FieldError::ProgressOutOfRange {
                value: record.progress,
                max: MAX_PROGRESS,
            }),
        );
    }

    ValidationState::new(errors, BTreeMap::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 6, 15).unwrap()
    }

    fn valid_record() -> ProjectRecord {
        let mut record = ProjectRecord::new();
        record.name = "Apollo rollout".to_string();
        record.description = "Migrate billing to the new platform".to_string();
        record.deadline = "01.09.2030".to_string();
        record.priority = "HIGH".to_string();
        record
            .team
            .push(TeamMember::new("Ann", "Lee", "ann@corp.io", "MANAGER"));
        record
    }

    mod name {
        use super::*;

        #[test]
        fn accepts_latin_and_cyrillic() {
            assert!(validate_name("Project Alpha").is_ok());
            assert!(validate_name("Проект Ёлка-2_0").is_ok());
        }

        #[test]
        fn rejects_too_short_after_trim() {
            assert_eq!(
                validate_name("  AI  "),
                Err(FieldError::NameTooShort { min: 3 })
            );
        }

        #[test]
        fn counts_characters_not_bytes() {
            // Three Cyrillic letters are six bytes but only three characters.
            assert!(validate_name("Дом").is_ok());
            let long = "я".repeat(100);
            assert!(validate_name(&long).is_ok());
            let too_long = "я".repeat(101);
            assert_eq!(
                validate_name(&too_long),
                Err(FieldError::NameTooLong { max: 100 })
            );
        }

        #[test]
        fn rejects_punctuation() {
            assert_eq!(
                validate_name("Alpha!"),
                Err(FieldError::NameInvalidCharacters)
            );
            assert_eq!(
                validate_name("alpha.beta"),
                Err(FieldError::NameInvalidCharacters)
            );
        }
    }

    mod description {
        use super::*;

        #[test]
        fn enforces_bounds() {
            assert!(validate_description("short").is_err());
            assert!(validate_description("exactly 10").is_ok());
            assert!(validate_description(&"x".repeat(3000)).is_ok());
            assert_eq!(
                validate_description(&"x".repeat(3001)),
                Err(FieldError::DescriptionTooLong { max: 3000 })
            );
        }
    }

    mod deadline {
        use super::*;

        #[test]
        fn requires_a_value() {
            assert_eq!(validate_deadline("  ", today()), Err(FieldError::DeadlineMissing));
        }

        #[test]
        fn requires_dd_mm_yyyy() {
            assert_eq!(
                validate_deadline("2030-09-01", today()),
                Err(FieldError::DeadlineInvalidFormat)
            );
            assert_eq!(
                validate_deadline("31.02.2030", today()),
                Err(FieldError::DeadlineInvalidFormat)
            );
        }

        #[test]
        fn accepts_today_rejects_yesterday() {
            assert!(validate_deadline("15.06.2030", today()).is_ok());
            assert_eq!(
                validate_deadline("14.06.2030", today()),
                Err(FieldError::DeadlineInPast)
            );
        }

        #[test]
        fn past_date_message_is_stable() {
            let err = validate_deadline("01.01.2020", today()).unwrap_err();
            assert_eq!(err.to_string(), "date cannot be in the past");
        }
    }

    mod priority {
        use super::*;

        #[test]
        fn accepts_any_case_and_localized() {
            assert!(validate_priority("high").is_ok());
            assert!(validate_priority("LOW").is_ok());
            assert!(validate_priority("средний").is_ok());
            assert_eq!(validate_priority("ASAP"), Err(FieldError::InvalidPriority));
        }
    }

    mod team_member {
        use super::*;

        #[test]
        fn accepts_complete_member() {
            let member = TeamMember::new("Ann", "Lee", "ann@corp.io", "READER");
            assert!(validate_team_member(&member).is_ok());
        }

        #[test]
        fn rejects_bad_email() {
            let member = TeamMember::new("Ann", "Lee", "ann at corp", "READER");
            assert!(matches!(
                validate_team_member(&member),
                Err(FieldError::InvalidEmail(_))
            ));
        }

        #[test]
        fn rejects_unknown_role() {
            let member = TeamMember::new("Ann", "Lee", "ann@corp.io", "OWNER");
            assert_eq!(
                validate_team_member(&member),
                Err(FieldError::InvalidRole("OWNER".to_string()))
            );
        }

        #[test]
        fn rejects_blank_names() {
            let member = TeamMember::new(" ", "Lee", "ann@corp.io", "EDITOR");
            assert_eq!(validate_team_member(&member), Err(FieldError::MemberNameMissing));
            let member = TeamMember::new("Ann", "", "ann@corp.io", "EDITOR");
            assert_eq!(
                validate_team_member(&member),
                Err(FieldError::MemberLastnameMissing)
            );
        }
    }

    mod step {
        use super::*;

        #[test]
        fn validates_only_the_field_for_the_step() {
            let mut record = valid_record();
            record.description = "tiny".to_string();

            assert!(validate_step(WizardStep::Name, &record, today()).is_ok());
            assert!(validate_step(WizardStep::Description, &record, today()).is_err());
        }

        #[test]
        fn steps_without_a_field_are_errors() {
            let record = valid_record();
            assert_eq!(
                validate_step(WizardStep::Confirmation, &record, today()),
                Err(FieldError::NoFieldForStep(WizardStep::Confirmation))
            );
            assert!(validate_step(WizardStep::Complete, &record, today()).is_err());
        }

        #[test]
        fn empty_team_passes_team_step() {
            let mut record = valid_record();
            record.team.clear();
            assert!(validate_step(WizardStep::Team, &record, today()).is_ok());
        }

        #[test]
        fn error_key_points_at_failing_member() {
            let mut record = valid_record();
            record
                .team
                .push(TeamMember::new("Bo", "Ng", "not-an-email", "EDITOR"));
            assert_eq!(step_error_key(WizardStep::Team, &record), "team[1]");
            assert_eq!(step_error_key(WizardStep::Name, &record), "name");
        }
    }

    mod record {
        use super::*;

        #[test]
        fn valid_record_has_no_errors() {
            let state = validate_project_record(&valid_record(), today());
            assert!(state.is_valid);
            assert!(state.errors.is_empty());
        }

        #[test]
        fn empty_record_reports_every_missing_field() {
            let state = validate_project_record(&ProjectRecord::new(), today());
            assert!(!state.is_valid);
            let keys: Vec<_> = state.errors.keys().cloned().collect();
            assert_eq!(keys, vec!["deadline", "description", "name"]);
        }

        #[test]
        fn team_errors_are_indexed() {
            let mut record = valid_record();
            record.team.push(TeamMember::new("Bo", "Ng", "bo@corp.io", "OWNER"));
            record.team.push(TeamMember::new("Cy", "Po", "nope", "READER"));

            let state = validate_project_record(&record, today());
            assert!(!state.errors.contains_key("team[0]"));
            assert!(state.errors.contains_key("team[1]"));
            assert!(state.errors.contains_key("team[2]"));
        }

        #[test]
        fn progress_above_one_hundred_is_rejected() {
            let mut record = valid_record();
            record.progress = 101;
            let state = validate_project_record(&record, today());
            assert!(state.errors.contains_key("progress"));
        }

        #[test]
        fn progress_outside_percent_range_is_a_field_error() {
            for progress in [-1, 300] {
                let mut record = valid_record();
                record.progress = progress;
                let state = validate_project_record(&record, today());
                assert!(!state.is_valid);
                assert!(state.errors["progress"].contains(&progress.to_string()));
            }
        }

        #[test]
        fn boundary_progress_values_are_accepted() {
            for progress in [0, 100] {
                let mut record = valid_record();
                record.progress = progress;
                let state = validate_project_record(&record, today());
                assert!(!state.errors.contains_key("progress"));
            }
        }

        #[test]
        fn warnings_are_always_empty() {
            let state = validate_project_record(&ProjectRecord::new(), today());
            assert!(state.warnings.is_empty());
        }
    }
}
