//! Field-keyed validation errors and the text checks shared by every entity.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const BLANK_MESSAGE: &str = "This field may not be blank.";

pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Message for a value longer than `max` characters.
pub fn too_long_message(max: usize) -> String {
    format!("Ensure this field has no more than {max} characters.")
}

// ---------------------------------------------------------------------------
// FieldErrors
// ---------------------------------------------------------------------------

/// Validation errors keyed by field name, each with one or more messages.
///
/// Serializes as a plain JSON object, e.g. `{"telefone": ["..."]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an error set holding a single message for `field`.
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Append a message for `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// `Ok(())` when no errors were recorded, otherwise `CoreError::Validation`.
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Shared checks
// ---------------------------------------------------------------------------

/// Record [`REQUIRED_MESSAGE`] for `field` when the value is absent.
pub fn require<T>(errors: &mut FieldErrors, field: &str, value: Option<T>) -> Option<T> {
    if value.is_none() {
        errors.add(field, REQUIRED_MESSAGE);
    }
    value
}

/// Check a required text value: present, not blank and, when `max_len` is
/// given, no longer than that many characters.
pub fn check_required_text(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<&str>,
    max_len: Option<usize>,
) {
    let Some(value) = require(errors, field, value) else {
        return;
    };
    if value.trim().is_empty() {
        errors.add(field, BLANK_MESSAGE);
        return;
    }
    check_max_len(errors, field, value, max_len);
}

/// Check an optional text value against a character limit.
pub fn check_max_len(errors: &mut FieldErrors, field: &str, value: &str, max_len: Option<usize>) {
    if let Some(max) = max_len {
        if value.chars().count() > max {
            errors.add(field, too_long_message(max));
        }
    }
}
