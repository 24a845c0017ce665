// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: pure data types shared between validation, session and CLI.

pub mod errors;
pub mod field;
pub mod record;

pub use errors::ErrorSet;
pub use field::FieldName;
pub use record::{FieldValue, Record};
