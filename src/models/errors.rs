// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Per-field error set. A field is invalid exactly while it has an entry.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::field::FieldName;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorSet {
    entries: BTreeMap<FieldName, String>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: FieldName, message: impl Into<String>) {
        self.entries.insert(name, message.into());
    }

    pub fn remove(&mut self, name: FieldName) -> Option<String> {
        self.entries.remove(&name)
    }

    pub fn get(&self, name: FieldName) -> Option<&str> {
        self.entries.get(&name).map(String::as_str)
    }

    pub fn contains(&self, name: FieldName) -> bool {
        self.entries.contains_key(&name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl FromIterator<(FieldName, String)> for ErrorSet {
    fn from_iter<T: IntoIterator<Item = (FieldName, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
