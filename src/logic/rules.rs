// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Static per-field rule table.
//!
//! The table is total over [`FieldName`]: [`rule_for`] is an exhaustive match,
//! so adding a field without a rule fails to compile. Patterns are compiled
//! once on first use and shared for the life of the process.

use std::sync::LazyLock;

use regex::Regex;

use crate::logic::validate::FieldError;
use crate::models::{FieldName, FieldValue};

/// Generic message used whenever a required value is missing.
pub const REQUIRED_MESSAGE: &str = "This field is required";

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,50}$").expect("name regex is valid"));

// Local part excludes '@' and the ECMAScript whitespace set, which differs
// from Unicode White_Space (U+FEFF is in, U+0085 is out).
static SUPERVISOR_EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[^@\t\n\x0B\x0C\r \u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}]+@the4d\.ca$",
    )
    .expect("email regex is valid")
});

static EMPLOYEE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}-[0-9]{5}$").expect("employee id regex is valid"));

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+1 \([0-9]{3}\) [0-9]{3}-[0-9]{4}$").expect("phone regex is valid")
});

static SALARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]*$").expect("salary regex is valid"));

static COST_CENTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{2}-[0-9]{3}-[A-Z]{3}$").expect("cost center regex is valid")
});

static PROJECT_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^PRJ-[0-9]{4}-[0-9]{3}$").expect("project code regex is valid"));

/// Required flag, failure message and optional whole-value pattern for one field.
#[derive(Debug)]
pub struct FieldRule {
    pub required: bool,
    pub message: &'static str,
    pub pattern: Option<&'static LazyLock<Regex>>,
}

impl FieldRule {
    /// Evaluate `value` against this rule.
    ///
    /// Missing values on a required rule report [`REQUIRED_MESSAGE`], taking
    /// precedence over the rule's own message. Flags never match a pattern.
    pub fn check(&self, value: FieldValue<'_>) -> Result<(), FieldError> {
        if self.required && value.is_empty() {
            return Err(FieldError::Required);
        }

        if let Some(pattern) = self.pattern {
            let matched = match value {
                FieldValue::Text(text) => pattern.is_match(text),
                FieldValue::Flag(_) => false,
            };
            if !matched {
                return Err(FieldError::Format {
                    message: self.message,
                });
            }
        }

        Ok(())
    }
}

static FIRST_NAME: FieldRule = FieldRule {
    required: true,
    message: "First name is required",
    pattern: Some(&NAME_RE),
};

static LAST_NAME: FieldRule = FieldRule {
    required: true,
    message: "Last name is required",
    pattern: Some(&NAME_RE),
};

static SUPERVISOR_EMAIL: FieldRule = FieldRule {
    required: true,
    message: "Supervisor email must be in a valid format and contain @the4d.ca domain",
    pattern: Some(&SUPERVISOR_EMAIL_RE),
};

static EMPLOYEE_ID: FieldRule = FieldRule {
    required: true,
    message: "Employee ID must follow the format ABC-12345",
    pattern: Some(&EMPLOYEE_ID_RE),
};

static PHONE_NUMBER: FieldRule = FieldRule {
    required: true,
    message: "Phone number must follow the format +1 (555) 555-5555",
    pattern: Some(&PHONE_RE),
};

static SALARY: FieldRule = FieldRule {
    required: true,
    message: "Annual salary must be a positive numeric value",
    pattern: Some(&SALARY_RE),
};

static START_DATE: FieldRule = FieldRule {
    required: true,
    message: "Start date is required",
    pattern: None,
};

static COST_CENTER: FieldRule = FieldRule {
    required: true,
    message: "Cost center must follow the format AB-123-ABC",
    pattern: Some(&COST_CENTER_RE),
};

static PROJECT_CODE: FieldRule = FieldRule {
    required: true,
    message: "Project code must follow the format PRJ-YEAR-001",
    pattern: Some(&PROJECT_CODE_RE),
};

static PRIVACY_CONSENT: FieldRule = FieldRule {
    required: true,
    message: "You must accept the privacy policy",
    pattern: None,
};

/// Rule governing `name`.
pub fn rule_for(name: FieldName) -> &'static FieldRule {
    match name {
        FieldName::FirstName => &FIRST_NAME,
        FieldName::LastName => &LAST_NAME,
        FieldName::SupervisorEmail => &SUPERVISOR_EMAIL,
        FieldName::EmployeeId => &EMPLOYEE_ID,
        FieldName::PhoneNumber => &PHONE_NUMBER,
        FieldName::Salary => &SALARY,
        FieldName::StartDate => &START_DATE,
        FieldName::CostCenter => &COST_CENTER,
        FieldName::ProjectCode => &PROJECT_CODE,
        FieldName::PrivacyConsent => &PRIVACY_CONSENT,
    }
}
