// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Form record: the current value of every field in one session.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::field::FieldName;

/// Borrowed view of a single field value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Flag(bool),
}

impl FieldValue<'_> {
    /// Empty text and an unchecked flag both count as "no value".
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Flag(b) => !b,
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// All field values of one form session. `Default` is the blank form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Record {
    #[serde(deserialize_with = "loose_text")]
    pub first_name: String,
    #[serde(deserialize_with = "loose_text")]
    pub last_name: String,
    #[serde(deserialize_with = "loose_text")]
    pub employee_id: String,
    #[serde(deserialize_with = "loose_text")]
    pub phone_number: String,
    #[serde(deserialize_with = "loose_text")]
    pub salary: String,
    #[serde(deserialize_with = "loose_text")]
    pub start_date: String,
    #[serde(deserialize_with = "loose_text")]
    pub supervisor_email: String,
    #[serde(deserialize_with = "loose_text")]
    pub cost_center: String,
    #[serde(deserialize_with = "loose_text")]
    pub project_code: String,
    #[serde(deserialize_with = "loose_flag")]
    pub privacy_consent: bool,
}

/// Read any JSON value as field text.
///
/// Falsy values (`null`, `false`, `0`, `""`) become empty so they fail the
/// required check; everything else keeps its JSON text and is left to the
/// field's pattern.
fn loose_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        other if !is_truthy(&other) => String::new(),
        other => other.to_string(),
    })
}

/// Read any JSON value as a checkbox state using JavaScript truthiness.
fn loose_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|value| is_truthy(&value))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl Record {
    pub fn value(&self, name: FieldName) -> FieldValue<'_> {
        match name {
            FieldName::PrivacyConsent => FieldValue::Flag(self.privacy_consent),
            other => FieldValue::Text(self.text_slot(other).map_or("", String::as_str)),
        }
    }

    /// Store raw input text for `name`.
    ///
    /// For the consent flag any non-empty text means checked.
    pub fn set_text(&mut self, name: FieldName, value: impl Into<String>) {
        let value = value.into();
        match self.text_slot_mut(name) {
            Some(slot) => *slot = value,
            None => self.privacy_consent = !value.is_empty(),
        }
    }

    /// Iterate `(field, value)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, FieldValue<'_>)> + '_ {
        FieldName::ALL.into_iter().map(|name| (name, self.value(name)))
    }

    fn text_slot(&self, name: FieldName) -> Option<&String> {
        match name {
            FieldName::FirstName => Some(&self.first_name),
            FieldName::LastName => Some(&self.last_name),
            FieldName::EmployeeId => Some(&self.employee_id),
            FieldName::PhoneNumber => Some(&self.phone_number),
            FieldName::Salary => Some(&self.salary),
            FieldName::StartDate => Some(&self.start_date),
            FieldName::SupervisorEmail => Some(&self.supervisor_email),
            FieldName::CostCenter => Some(&self.cost_center),
            FieldName::ProjectCode => Some(&self.project_code),
            FieldName::PrivacyConsent => None,
        }
    }

    fn text_slot_mut(&mut self, name: FieldName) -> Option<&mut String> {
        match name {
            FieldName::FirstName => Some(&mut self.first_name),
            FieldName::LastName => Some(&mut self.last_name),
            FieldName::EmployeeId => Some(&mut self.employee_id),
            FieldName::PhoneNumber => Some(&mut self.phone_number),
            FieldName::Salary => Some(&mut self.salary),
            FieldName::StartDate => Some(&mut self.start_date),
            FieldName::SupervisorEmail => Some(&mut self.supervisor_email),
            FieldName::CostCenter => Some(&mut self.cost_center),
            FieldName::ProjectCode => Some(&mut self.project_code),
            FieldName::PrivacyConsent => None,
        }
    }
}
