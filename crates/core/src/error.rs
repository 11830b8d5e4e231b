use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Form field a validation message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogField {
    Owner,
    LogText,
}

impl LogField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::LogText => "log_text",
        }
    }
}

impl fmt::Display for LogField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: LogField,
    pub message: String,
}

/// Every failing field of one form submission, in form order.
///
/// Displays as the field messages joined by a single space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("{}", self.joined())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub(crate) fn push(&mut self, field: LogField, message: impl Into<String>) {
        self.errors.push(FieldError { field, message: message.into() });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Message for a single field, if that field failed.
    #[must_use]
    pub fn message_for(&self, field: LogField) -> Option<&str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message.as_str())
    }

    fn joined(&self) -> String {
        self.errors.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_messages() {
        let mut errors = ValidationErrors::default();
        assert_eq!(errors.to_string(), "");
        errors.push(LogField::Owner, "Owner is short.");
        assert_eq!(errors.to_string(), "Owner is short.");
        errors.push(LogField::LogText, "Text is short.");
        assert_eq!(errors.to_string(), "Owner is short. Text is short.");
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&ValidationErrors::default());
    }
}
