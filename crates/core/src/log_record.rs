use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MIN_FIELD_CHARS;
use crate::error::{LogField, ValidationErrors};
use crate::pagination::Keyed;

/// One row of the `logs` table as the server returns it.
///
/// `id` and both timestamps are assigned by the server; clients only ever
/// hold copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub id: i64,
    pub owner: String,
    pub log_text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LogRecord {
    #[must_use]
    pub fn new(
        id: i64,
        owner: String,
        log_text: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self { id, owner, log_text, created_at, updated_at }
    }

    /// Form values for editing this record.
    #[must_use]
    pub fn to_input(&self) -> LogInput {
        LogInput { owner: self.owner.clone(), log_text: self.log_text.clone() }
    }
}

impl Keyed for LogRecord {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Body of create and update requests: `{owner, log_text}`.
///
/// Missing fields deserialize as empty strings so they fail validation
/// with a field message instead of a decode error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogInput {
    pub owner: String,
    pub log_text: String,
}

impl LogInput {
    /// Builds an input with surrounding whitespace stripped from both fields.
    #[must_use]
    pub fn new(owner: impl AsRef<str>, log_text: impl AsRef<str>) -> Self {
        Self { owner: owner.as_ref().trim().to_owned(), log_text: log_text.as_ref().trim().to_owned() }
    }

    /// Minimum-length check for both fields.
    ///
    /// Lengths are counted in characters after trimming, and every failing
    /// field is reported, owner first.
    ///
    /// # Errors
    /// Returns the collected field messages when either field is too short.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if char_len(&self.owner) < MIN_FIELD_CHARS {
            errors.push(
                LogField::Owner,
                format!("Owner must be at least {MIN_FIELD_CHARS} characters."),
            );
        }
        if char_len(&self.log_text) < MIN_FIELD_CHARS {
            errors.push(
                LogField::LogText,
                format!("Log text must be at least {MIN_FIELD_CHARS} characters."),
            );
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn char_len(value: &str) -> usize {
    value.trim().chars().count()
}
