// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Closed set of form field names and their display metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Every field the document submission form collects.
///
/// Declaration order matches the order fields appear on the form, which is
/// also the iteration order of [`FieldName::ALL`] and of error sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    EmployeeId,
    PhoneNumber,
    Salary,
    StartDate,
    SupervisorEmail,
    CostCenter,
    ProjectCode,
    PrivacyConsent,
}

impl FieldName {
    /// All fields in form order.
    pub const ALL: [FieldName; 10] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::EmployeeId,
        FieldName::PhoneNumber,
        FieldName::Salary,
        FieldName::StartDate,
        FieldName::SupervisorEmail,
        FieldName::CostCenter,
        FieldName::ProjectCode,
        FieldName::PrivacyConsent,
    ];

    /// Wire key used in records and submission payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::EmployeeId => "employeeId",
            Self::PhoneNumber => "phoneNumber",
            Self::Salary => "salary",
            Self::StartDate => "startDate",
            Self::SupervisorEmail => "supervisorEmail",
            Self::CostCenter => "costCenter",
            Self::ProjectCode => "projectCode",
            Self::PrivacyConsent => "privacyConsent",
        }
    }

    /// Human-facing label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::EmployeeId => "Employee ID",
            Self::PhoneNumber => "Phone Number",
            Self::Salary => "Annual Salary",
            Self::StartDate => "Start Date",
            Self::SupervisorEmail => "Supervisor Email",
            Self::CostCenter => "Cost Center",
            Self::ProjectCode => "Project Code",
            Self::PrivacyConsent => "Privacy Consent",
        }
    }

    /// Whether the field holds a checkbox flag rather than text.
    pub fn is_flag(&self) -> bool {
        matches!(self, Self::PrivacyConsent)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a wire key names no known field.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|name| name.as_str() == raw)
            .ok_or_else(|| UnknownField(raw.to_string()))
    }
}
