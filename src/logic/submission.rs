// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Submission payloads and the transport seam they are handed to.
//!
//! Responsibilities:
//! - Gate payload creation on a clean validation pass.
//! - Stamp the validated record with its submission time.
//! - Define [`Submitter`] so callers can plug in any transport.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::logic::validate::validate_record;
use crate::models::{ErrorSet, Record};

/// Validated record plus the moment it was submitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    #[serde(flatten)]
    pub record: Record,
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_at: OffsetDateTime,
}

impl SubmissionPayload {
    pub fn new(record: Record, submitted_at: OffsetDateTime) -> Self {
        Self {
            record,
            submitted_at,
        }
    }

    /// Stamp `record` with the current UTC time.
    pub fn now(record: Record) -> Self {
        Self::new(record, OffsetDateTime::now_utc())
    }
}

/// Validate `record` and build its payload only when every field passes.
pub fn prepare_submission(record: &Record) -> Result<SubmissionPayload, ErrorSet> {
    let errors = validate_record(record);
    if errors.is_empty() {
        Ok(SubmissionPayload::now(record.clone()))
    } else {
        Err(errors)
    }
}

/// Destination for validated submissions.
pub trait Submitter {
    fn submit(&mut self, payload: &SubmissionPayload) -> Result<()>;
}

/// Writes each submission as pretty-printed JSON to a fixed path.
#[derive(Clone, Debug)]
pub struct JsonFileSubmitter {
    path: PathBuf,
}

impl JsonFileSubmitter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Submitter for JsonFileSubmitter {
    fn submit(&mut self, payload: &SubmissionPayload) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(payload)
            .context("Failed to serialize submission payload")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write submission to {:?}", self.path))?;

        tracing::info!(path = %self.path.display(), "submission written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldName;
    use tempfile::TempDir;
    use time::macros::datetime;

    fn valid_record() -> Record {
        Record {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            employee_id: "ABC-12345".into(),
            phone_number: "+1 (555) 555-5555".into(),
            salary: "75000".into(),
            start_date: "2024-09-01".into(),
            supervisor_email: "boss@the4d.ca".into(),
            cost_center: "AB-123-ABC".into(),
            project_code: "PRJ-2024-001".into(),
            privacy_consent: true,
        }
    }

    #[test]
    fn payload_flattens_record_and_adds_timestamp() {
        let payload = SubmissionPayload::new(valid_record(), datetime!(2024-09-01 12:30:00 UTC));
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["firstName"], "Jane");
        assert_eq!(value["privacyConsent"], true);
        assert_eq!(value["submittedAt"], "2024-09-01T12:30:00Z");
        assert!(value.get("record").is_none());
    }

    #[test]
    fn payload_parses_back_from_json() {
        let payload = SubmissionPayload::new(valid_record(), datetime!(2024-09-01 12:30:00 UTC));
        let json = serde_json::to_string(&payload).unwrap();
        let parsed: SubmissionPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, payload);
    }

    #[test]
    fn prepare_submission_blocks_invalid_records() {
        let mut record = valid_record();
        record.employee_id = "AB-1234".into();

        let errors = prepare_submission(&record).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(FieldName::EmployeeId));
    }

    #[test]
    fn prepare_submission_keeps_record_intact() {
        let payload = prepare_submission(&valid_record()).unwrap();
        assert_eq!(payload.record, valid_record());
    }

    #[test]
    fn json_file_submitter_creates_parent_dirs() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("nested").join("payload.json");
        let mut submitter = JsonFileSubmitter::new(&out);

        let payload = SubmissionPayload::new(valid_record(), datetime!(2024-09-01 12:30:00 UTC));
        submitter.submit(&payload).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        let parsed: SubmissionPayload = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, payload);
    }

    #[test]
    fn json_file_submitter_reports_unwritable_path() {
        let tmp = TempDir::new().unwrap();
        // A directory cannot be overwritten as a file.
        let mut submitter = JsonFileSubmitter::new(tmp.path());

        let payload = SubmissionPayload::now(valid_record());
        let err = submitter.submit(&payload).unwrap_err();
        assert!(err.to_string().contains("Failed to write submission"));
    }
}
