// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Field and record validation against the static rule table.
//!
//! Both entry points are pure: failures come back as data, never as panics,
//! and a record's fields are checked independently of one another.

use crate::logic::rules::{REQUIRED_MESSAGE, rule_for};
use crate::models::{ErrorSet, FieldName, FieldValue, Record};

/// Why a single field failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// A required value is empty or unchecked.
    #[error("{}", REQUIRED_MESSAGE)]
    Required,
    /// A value is present but does not match the field's format.
    #[error("{message}")]
    Format { message: &'static str },
}

impl FieldError {
    /// Message shown to the user for this failure.
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Required => REQUIRED_MESSAGE,
            FieldError::Format { message } => message,
        }
    }
}

/// Validate one field value.
///
/// # Examples
///
/// ```
/// use docform::logic::validate::validate_field;
/// use docform::models::FieldName;
///
/// assert!(validate_field(FieldName::EmployeeId, "ABC-12345".into()).is_ok());
/// let err = validate_field(FieldName::EmployeeId, "AB-1234".into()).unwrap_err();
/// assert_eq!(err.message(), "Employee ID must follow the format ABC-12345");
/// ```
pub fn validate_field(name: FieldName, value: FieldValue<'_>) -> Result<(), FieldError> {
    rule_for(name).check(value)
}

/// Validate a value addressed by its wire key.
///
/// Keys that name no known field have no rule and are always valid.
pub fn validate_named(key: &str, value: FieldValue<'_>) -> Result<(), FieldError> {
    match key.parse::<FieldName>() {
        Ok(name) => validate_field(name, value),
        Err(_) => {
            tracing::debug!(key, "no rule for field; treating as valid");
            Ok(())
        }
    }
}

/// Validate every field of `record`, collecting one entry per failing field.
pub fn validate_record(record: &Record) -> ErrorSet {
    let errors: ErrorSet = record
        .iter()
        .filter_map(|(name, value)| {
            validate_field(name, value)
                .err()
                .map(|err| (name, err.message().to_string()))
        })
        .collect();

    tracing::debug!(invalid = errors.len(), "validated record");
    errors
}
