// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Business logic: rule table, validation passes, and submission handoff.

pub mod rules;
pub mod submission;
pub mod validate;

pub use submission::{JsonFileSubmitter, SubmissionPayload, Submitter, prepare_submission};
pub use validate::{FieldError, validate_field, validate_named, validate_record};
