// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Form-session Model-View-Update kernel: state, messages, and commands.
//!
//! `update` is pure apart from enqueuing [`Command`]s; side effects run in
//! [`run_command`], which feeds its result back as a [`Msg`].

use crate::logic::submission::{SubmissionPayload, Submitter, prepare_submission};
use crate::logic::validate::validate_field;
use crate::models::{ErrorSet, FieldName, Record};

/// Where the session wants the host to navigate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Form,
    Home,
    Results,
}

/// State of one form session.
#[derive(Clone, Debug, Default)]
pub struct FormModel {
    /// Current field values.
    pub record: Record,
    /// Fields currently failing validation.
    pub errors: ErrorSet,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in modal.
    pub error: Option<String>,
    pub route: Route,
}

/// Messages routed through the update function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    FieldChanged { name: FieldName, value: String },
    ConsentToggled(bool),
    SubmitRequested,
    SubmitCompleted(Result<(), String>),
    CancelRequested,
    DismissError,
}

/// Side effects executed outside `update`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Submit(SubmissionPayload),
}

/// Update the session model and enqueue commands.
pub fn update(model: &mut FormModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::FieldChanged { name, value } => {
            model.record.set_text(name, value);
            revalidate(model, name);
            if let Some(err) = model.errors.get(name) {
                tracing::debug!(field = %name, error = err, "validation error");
            }
        }
        Msg::ConsentToggled(checked) => {
            // The checkbox clears its error without re-checking; submit catches an unchecked box.
            model.record.privacy_consent = checked;
            model.errors.remove(FieldName::PrivacyConsent);
        }
        Msg::SubmitRequested => match prepare_submission(&model.record) {
            Ok(payload) => cmds.push(Command::Submit(payload)),
            Err(errors) => {
                tracing::debug!(invalid = errors.len(), "submission blocked");
                model.errors = errors;
            }
        },
        Msg::SubmitCompleted(Ok(())) => {
            reset_session(model);
            model.route = Route::Results;
            model.status = Some("Form submitted.".to_string());
        }
        Msg::SubmitCompleted(Err(err)) => {
            tracing::warn!(error = %err, "submission failed");
            surface_event(model, format!("Failed to submit form:\n\n{err}"), true);
        }
        Msg::CancelRequested => {
            reset_session(model);
            model.route = Route::Home;
        }
        Msg::DismissError => model.error = None,
    }
}

/// Execute a command synchronously and return the resulting message.
pub fn run_command(cmd: Command, submitter: &mut dyn Submitter) -> Msg {
    match cmd {
        Command::Submit(payload) => {
            Msg::SubmitCompleted(submitter.submit(&payload).map_err(|e| format!("{e:#}")))
        }
    }
}

/// Re-check a single field, recording or clearing its error.
fn revalidate(model: &mut FormModel, name: FieldName) {
    match validate_field(name, model.record.value(name)) {
        Ok(()) => {
            model.errors.remove(name);
        }
        Err(err) => model.errors.insert(name, err.message()),
    }
}

/// Discard the record and its errors.
fn reset_session(model: &mut FormModel) {
    model.record = Record::default();
    model.errors = ErrorSet::new();
    model.error = None;
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut FormModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}
