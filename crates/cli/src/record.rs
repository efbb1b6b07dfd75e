// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structured CLI output records.
//!
//! A record is one parsed output item (file, directory, container, share)
//! held as a JSON object. Reading a required field that is missing is a
//! structural failure, not a value mismatch.

use crate::failure::CheckFailure;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding an item's name
pub const NAME_FIELD: &str = "name";
/// Field holding an item's parent path, if any
pub const DIRECTORY_FIELD: &str = "directory";

/// One structured output item
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

/// Kind of item a record describes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    File,
    Directory,
    Container,
    Share,
}

/// How a record's comparable identity is derived
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyRule {
    /// The `name` field
    Name,
    /// `directory/name`, with backslashes normalized
    Path,
}

impl RecordKind {
    /// Identity rule used when reconciling records of this kind
    pub fn key_rule(self) -> KeyRule {
        match self {
            RecordKind::File | RecordKind::Directory => KeyRule::Path,
            RecordKind::Container | RecordKind::Share => KeyRule::Name,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::File => "file",
            RecordKind::Directory => "directory",
            RecordKind::Container => "container",
            RecordKind::Share => "share",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl KeyRule {
    /// Derive the identity of `record` under this rule
    pub fn key(self, record: &Record) -> Result<String, CheckFailure> {
        match self {
            KeyRule::Name => record.field(NAME_FIELD).map(str::to_string),
            KeyRule::Path => record.path_key(),
        }
    }
}

/// Canonical path identity: `directory/name` with `\` rewritten to `/`,
/// or just `name` when there is no directory
pub fn canonical_path(directory: Option<&str>, name: &str) -> String {
    match directory {
        Some(dir) if !dir.is_empty() => format!("{}/{}", dir.replace('\\', "/"), name),
        _ => name.to_string(),
    }
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value, which must be an object
    pub fn from_value(value: Value) -> Result<Self, CheckFailure> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(CheckFailure::structural(format!(
                "expected a JSON object, got {}",
                json_type(&other)
            ))),
        }
    }

    /// Builder-style field setter, mostly for expected records
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Required string field
    pub fn field(&self, name: &str) -> Result<&str, CheckFailure> {
        match self.fields.get(name) {
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(CheckFailure::structural(format!(
                "field '{}' should be a string, got {} in {}",
                name,
                json_type(other),
                self
            ))),
            None => Err(CheckFailure::structural(format!(
                "missing required field '{}' in {}",
                name, self
            ))),
        }
    }

    /// Optional string field; null and empty strings read as absent
    pub fn optional_field(&self, name: &str) -> Option<&str> {
        match self.fields.get(name) {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// Raw field value
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Identity under [`KeyRule::Path`]
    pub fn path_key(&self) -> Result<String, CheckFailure> {
        let name = self.field(NAME_FIELD)?;
        Ok(canonical_path(self.optional_field(DIRECTORY_FIELD), name))
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(&self.fields) {
            Ok(json) => f.write_str(&json),
            Err(_) => f.write_str("<unprintable record>"),
        }
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl TryFrom<Value> for Record {
    type Error = CheckFailure;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

/// Parse line-delimited JSON output into records.
///
/// Blank lines are skipped. A line that is not a JSON object is a
/// structural failure naming its 1-based line number.
pub fn parse_jsonl(text: &str) -> Result<Vec<Record>, CheckFailure> {
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(line).map_err(|e| {
            CheckFailure::structural(format!("line {}: invalid JSON: {}", idx + 1, e))
        })?;
        let record = Record::from_value(value).map_err(|e| match e {
            CheckFailure::StructuralMismatch { detail } => {
                CheckFailure::structural(format!("line {}: {}", idx + 1, detail))
            }
            other => other,
        })?;
        records.push(record);
    }
    tracing::trace!(count = records.len(), "parsed records");
    Ok(records)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
