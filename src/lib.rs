// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Validation engine and submission pipeline for the employee document
//! submission form.
//!
//! - [`models`]: field names, records, error sets.
//! - [`logic`]: the static rule table, validation passes, submission payloads.
//! - [`mvu`]: the form-session update loop.
//! - [`app`]: the command-line front end.

pub mod app;
pub mod logic;
pub mod models;
pub mod mvu;
