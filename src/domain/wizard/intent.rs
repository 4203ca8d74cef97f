//! Keyword and pattern based intent detection.
//!
//! No language model involved: every decision is a substring or regex match,
//! so classification is cheap and deterministic. Stems cover English and
//! Russian since users mix both.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::validator::parse_deadline;
use super::WizardStep;
use crate::domain::project::Priority;

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[^0-9])([0-9]{2})[-./]([0-9]{2})[-./]([0-9]{4})(?:[^0-9]|$)")
        .expect("date pattern is valid")
});

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email pattern is valid")
});

/// Words that mark a request for assistance.
const HELP_KEYWORDS: &[&str] = &[
    "help", "suggest", "generate", "come up with", "advise", "recommend",
    "помоги", "придумай", "сгенерируй", "посоветуй", "предложи",
    "how", "what", "why", "when",
    "как", "что", "зачем", "почему", "когда",
];

const DESCRIPTION_STEMS: &[&str] = &["descript", "описани"];

const NAME_STEMS: &[&str] = &["name", "title", "назван"];

/// Priority stems in match order. Negated forms come before the positive
/// stems they contain.
const PRIORITY_KEYWORDS: &[(&str, Priority)] = &[
    ("not urgent", Priority::Low),
    ("not important", Priority::Low),
    ("несрочн", Priority::Low),
    ("не срочн", Priority::Low),
    ("неважн", Priority::Low),
    ("не важн", Priority::Low),
    ("urgent", Priority::High),
    ("critical", Priority::High),
    ("important", Priority::High),
    ("срочн", Priority::High),
    ("критичн", Priority::High),
    ("важн", Priority::High),
    ("medium", Priority::Medium),
    ("normal", Priority::Medium),
    ("usual", Priority::Medium),
    ("средн", Priority::Medium),
    ("нормальн", Priority::Medium),
    ("обычн", Priority::Medium),
    ("low", Priority::Low),
    ("later", Priority::Low),
    ("низк", Priority::Low),
    ("потом", Priority::Low),
];

const PROJECT_WORDS: &[&str] = &["project", "проект"];

const GOAL_WORDS: &[&str] = &["goal", "цель", "цели"];

const SHORT_NAME_WORDS: usize = 2;
const SHORT_DESCRIPTION_WORDS: usize = 10;
const TOO_SOON_DAYS: i64 = 7;

/// Coarse classification of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    Help,
    GenerateDescription,
    GenerateName,
    Date,
    Priority,
    Email,
    Text,
}

/// Result of classifying one message. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    pub kind: IntentKind,
    /// Extracted value: normalized date, priority literal, email, or the
    /// normalized message.
    pub content: String,
    /// Auxiliary signals, e.g. the keyword that matched.
    pub extra: BTreeMap<String, String>,
}

impl Intent {
    fn new(kind: IntentKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            extra: BTreeMap::new(),
        }
    }

    fn with_extra(mut self, key: &str, value: impl Into<String>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }
}

/// Classifies free-text messages and derives advisory signals.
#[derive(Debug, Clone, Default)]
pub struct IntentAnalyzer;

impl IntentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Classifies a message. The first matching rule wins:
    /// help request, date, priority keyword, email, plain text.
    pub fn classify(&self, message: &str) -> Intent {
        let normalized = normalize(message);

        if contains_any(&normalized, HELP_KEYWORDS) {
            let kind = if contains_any(&normalized, DESCRIPTION_STEMS) {
                IntentKind::GenerateDescription
            } else if contains_any(&normalized, NAME_STEMS) {
                IntentKind::GenerateName
            } else {
                IntentKind::Help
            };
            return Intent::new(kind, normalized);
        }

        if let Some((date, raw)) = extract_date(message) {
            return Intent::new(IntentKind::Date, date).with_extra("raw", raw);
        }

        if let Some((priority, stem)) = detect_priority(&normalized) {
            return Intent::new(IntentKind::Priority, priority.as_str()).with_extra("keyword", stem);
        }

        if let Some(email) = extract_email(message) {
            return Intent::new(IntentKind::Email, email);
        }

        Intent::new(IntentKind::Text, normalized)
    }

    /// Advisory signals for the value entered at `step`. Never blocks.
    pub fn analyze_context(
        &self,
        message: &str,
        step: WizardStep,
        today: NaiveDate,
    ) -> BTreeMap<String, String> {
        let mut signals = BTreeMap::new();
        let normalized = normalize(message);
        let word_count = normalized.split_whitespace().count();

        match step {
            WizardStep::Name => {
                if word_count < SHORT_NAME_WORDS {
                    signals.insert("suggestion".to_string(), "maybe_extend".to_string());
                }
                if contains_any(&normalized, PROJECT_WORDS) {
                    signals.insert("has_project_word".to_string(), "true".to_string());
                }
            }
            WizardStep::Description => {
                if word_count < SHORT_DESCRIPTION_WORDS {
                    signals.insert("suggestion".to_string(), "too_short".to_string());
                }
                if !contains_any(&normalized, GOAL_WORDS) {
                    signals.insert("missing".to_string(), "goals".to_string());
                }
            }
            WizardStep::Deadline => {
                let deadline = extract_date(message).and_then(|(date, _)| parse_deadline(&date));
                if let Some(deadline) = deadline {
                    if (deadline - today).num_days() < TOO_SOON_DAYS {
                        signals.insert("warning".to_string(), "too_soon".to_string());
                    }
                }
            }
            _ => {}
        }

        signals
    }
}

/// Trimmed, lower-cased form used for keyword matching.
pub fn normalize(message: &str) -> String {
    message.trim().to_lowercase()
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Finds the first `dd?mm?yyyy` date not embedded in a longer digit run and
/// returns it as `DD.MM.YYYY` along with the matched text.
pub fn extract_date(message: &str) -> Option<(String, String)> {
    let captures = DATE_PATTERN.captures(message)?;
    let (day, month, year) = (captures.get(1)?, captures.get(2)?, captures.get(3)?);
    let normalized = format!("{}.{}.{}", day.as_str(), month.as_str(), year.as_str());
    Some((normalized, message[day.start()..year.end()].to_string()))
}

fn detect_priority(normalized: &str) -> Option<(Priority, &'static str)> {
    PRIORITY_KEYWORDS
        .iter()
        .find(|(stem, _)| normalized.contains(stem))
        .map(|(stem, priority)| (*priority, *stem))
}

/// First email in the message, in its original casing.
pub fn extract_email(message: &str) -> Option<String> {
    EMAIL_PATTERN.find(message).map(|m| m.as_str().to_string())
}
