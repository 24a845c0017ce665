// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Command-line entry point wiring record files to the form session.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use crate::logic::submission::JsonFileSubmitter;
use crate::logic::validate::validate_record;
use crate::models::{ErrorSet, FieldName, Record};
use crate::mvu::{FormModel, Msg, Route, run_command, update};

/// Validate and submit employee document records.
#[derive(Parser, Debug)]
#[command(name = "docform", version, about, long_about = None)]
pub struct Cli {
    /// Show per-field debug output.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report warnings and errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a record file and list every invalid field.
    Validate {
        /// JSON record to check.
        record: PathBuf,
    },
    /// Validate a record and write its submission payload.
    Submit {
        /// JSON record to submit.
        record: PathBuf,
        /// Where to write the payload.
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print a blank record to fill in.
    Template {
        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Outcome reported back to `main` as the process exit status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Valid,
    Invalid,
}

/// Install the fmt subscriber. `RUST_LOG` takes precedence over the flags.
pub fn init_tracing(cli: &Cli) {
    let default = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the parsed command, writing human-facing output to `out`.
pub fn run(cli: Cli, out: &mut dyn Write) -> Result<Outcome> {
    match cli.command {
        Commands::Validate { record } => {
            let record = load_record(&record)?;
            let errors = validate_record(&record);
            write_errors(out, &errors)?;
            if errors.is_empty() {
                writeln!(out, "Record is valid.")?;
                Ok(Outcome::Valid)
            } else {
                Ok(Outcome::Invalid)
            }
        }
        Commands::Submit { record, output } => submit(&record, &output, out),
        Commands::Template { output } => {
            let json = serde_json::to_string_pretty(&Record::default())
                .context("Failed to serialize blank record")?;
            match output {
                Some(path) => fs::write(&path, json)
                    .with_context(|| format!("Failed to write template to {:?}", path))?,
                None => writeln!(out, "{json}")?,
            }
            Ok(Outcome::Valid)
        }
    }
}

/// Drive a loaded record through a form session up to submission.
fn submit(record_path: &Path, output: &Path, out: &mut dyn Write) -> Result<Outcome> {
    let mut model = FormModel {
        record: load_record(record_path)?,
        ..Default::default()
    };
    let mut submitter = JsonFileSubmitter::new(output);
    let mut cmds = Vec::new();

    update(&mut model, Msg::SubmitRequested, &mut cmds);
    while let Some(cmd) = cmds.pop() {
        let msg = run_command(cmd, &mut submitter);
        update(&mut model, msg, &mut cmds);
    }

    match model.route {
        Route::Results => {
            writeln!(out, "Submitted to {}", submitter.path().display())?;
            Ok(Outcome::Valid)
        }
        _ => {
            if let Some(err) = model.error {
                bail!(err);
            }
            write_errors(out, &model.errors)?;
            Ok(Outcome::Invalid)
        }
    }
}

/// Read a record file, warning about keys that name no field.
fn load_record(path: &Path) -> Result<Record> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read record file {:?}", path))?;
    let raw: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse record JSON in {:?}", path))?;

    if let Value::Object(map) = &raw {
        for key in map.keys().filter(|k| k.parse::<FieldName>().is_err()) {
            tracing::warn!(key = %key, "ignoring unknown field in record");
        }
    }

    serde_json::from_value(raw).with_context(|| format!("Invalid record shape in {:?}", path))
}

fn write_errors(out: &mut dyn Write, errors: &ErrorSet) -> Result<()> {
    for (name, message) in errors.iter() {
        writeln!(out, "{}: {}", name.label(), message)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VALID: &str = r#"{
        "firstName": "Jane",
        "lastName": "Doe",
        "employeeId": "ABC-12345",
        "phoneNumber": "+1 (555) 555-5555",
        "salary": "75000",
        "startDate": "2024-09-01",
        "supervisorEmail": "boss@the4d.ca",
        "costCenter": "AB-123-ABC",
        "projectCode": "PRJ-2024-001",
        "privacyConsent": true
    }"#;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("docform").chain(args.iter().copied()))
    }

    fn run_to_string(cli: Cli) -> (Result<Outcome>, String) {
        let mut buf = Vec::new();
        let res = run(cli, &mut buf);
        (res, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn validate_reports_valid_record() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("record.json");
        fs::write(&path, VALID).unwrap();

        let (res, out) = run_to_string(cli(&["validate", path.to_str().unwrap()]));

        assert_eq!(res.unwrap(), Outcome::Valid);
        assert!(out.contains("Record is valid."));
    }

    #[test]
    fn validate_lists_errors_by_label() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("record.json");
        fs::write(&path, r#"{"firstName":"Jane","salary":"0"}"#).unwrap();

        let (res, out) = run_to_string(cli(&["validate", path.to_str().unwrap()]));

        assert_eq!(res.unwrap(), Outcome::Invalid);
        assert!(out.contains("Annual Salary: Annual salary must be a positive numeric value"));
        assert!(out.contains("Last Name: This field is required"));
        assert!(!out.contains("First Name"));
    }

    #[test]
    fn validate_reports_wrong_typed_values_as_field_errors() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("record.json");
        fs::write(&path, r#"{"salary":75000,"firstName":null,"employeeId":12345}"#).unwrap();

        let (res, out) = run_to_string(cli(&["validate", path.to_str().unwrap()]));

        assert_eq!(res.unwrap(), Outcome::Invalid);
        assert!(!out.contains("Annual Salary"));
        assert!(out.contains("First Name: This field is required"));
        assert!(out.contains("Employee ID: Employee ID must follow the format ABC-12345"));
    }

    #[test]
    fn validate_rejects_malformed_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("record.json");
        fs::write(&path, "{not json").unwrap();

        let (res, _) = run_to_string(cli(&["validate", path.to_str().unwrap()]));

        let err = res.unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse record JSON"));
    }

    #[test]
    fn submit_writes_payload_for_valid_record() {
        let tmp = TempDir::new().unwrap();
        let record = tmp.path().join("record.json");
        let output = tmp.path().join("out").join("payload.json");
        fs::write(&record, VALID).unwrap();

        let (res, out) = run_to_string(cli(&[
            "submit",
            record.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ]));

        assert_eq!(res.unwrap(), Outcome::Valid);
        assert!(out.contains("Submitted to"));
        let payload: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(payload["employeeId"], "ABC-12345");
        assert!(payload["submittedAt"].is_string());
    }

    #[test]
    fn submit_blocks_invalid_record() {
        let tmp = TempDir::new().unwrap();
        let record = tmp.path().join("record.json");
        let output = tmp.path().join("payload.json");
        fs::write(&record, "{}").unwrap();

        let (res, out) = run_to_string(cli(&[
            "submit",
            record.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ]));

        assert_eq!(res.unwrap(), Outcome::Invalid);
        assert_eq!(out.lines().count(), FieldName::ALL.len());
        assert!(!output.exists());
    }

    #[test]
    fn template_writes_blank_record() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("blank.json");

        let (res, _) = run_to_string(cli(&["template", "--output", output.to_str().unwrap()]));

        assert_eq!(res.unwrap(), Outcome::Valid);
        let record: Record = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(record, Record::default());
    }

    #[test]
    fn template_prints_to_stdout_by_default() {
        let (res, out) = run_to_string(cli(&["template"]));
        assert_eq!(res.unwrap(), Outcome::Valid);
        assert!(out.contains("\"privacyConsent\": false"));
    }
}
