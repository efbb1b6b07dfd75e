// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check failure taxonomy.
//!
//! Every check either passes or yields exactly one [`CheckFailure`]. The
//! `Display` text is the diagnostic the harness reports, so each variant
//! carries both the expected and the observed side.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A failed verification check
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CheckFailure {
    /// Observed error text matched no pattern of any identifier in the query
    #[error("Error message did not match '{query}'. Actual message: {message}")]
    ClassificationMismatch { query: String, message: String },

    /// Query names an identifier that is not in the error table
    #[error("Unknown error identifier '{identifier}' in query '{query}'")]
    UnknownIdentifier { identifier: String, query: String },

    /// Observed output is not shaped like a record, or lacks a required field
    #[error("Malformed record: {detail}")]
    StructuralMismatch { detail: String },

    /// A record field holds a different value than expected
    #[error("Field '{field}' mismatch. Expected: {expected}, Actual: {actual}")]
    ValueMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    /// Observed collection size differs from the expected size
    #[error("Record count mismatch. Expected: {expected}, Actual: {actual}")]
    CardinalityMismatch { expected: usize, actual: usize },

    /// An observed item has no counterpart in the expected set
    #[error("Unexpected item '{key}' not found in expected set")]
    UnexpectedItem { key: String },

    /// Expected items that no observed item consumed
    #[error("{} expected item(s) never observed: {}", leftover.len(), leftover.join(", "))]
    ReconciliationLeftover { leftover: Vec<String> },
}

/// Failure category, stable across diagnostic wording changes
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    ClassificationMismatch,
    UnknownIdentifier,
    StructuralMismatch,
    ValueMismatch,
    CardinalityMismatch,
    UnexpectedItem,
    ReconciliationLeftover,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::ClassificationMismatch => "classification_mismatch",
            FailureKind::UnknownIdentifier => "unknown_identifier",
            FailureKind::StructuralMismatch => "structural_mismatch",
            FailureKind::ValueMismatch => "value_mismatch",
            FailureKind::CardinalityMismatch => "cardinality_mismatch",
            FailureKind::UnexpectedItem => "unexpected_item",
            FailureKind::ReconciliationLeftover => "reconciliation_leftover",
        }
    }

    /// Parse the snake_case name produced by [`FailureKind::as_str`]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "classification_mismatch" => Some(FailureKind::ClassificationMismatch),
            "unknown_identifier" => Some(FailureKind::UnknownIdentifier),
            "structural_mismatch" => Some(FailureKind::StructuralMismatch),
            "value_mismatch" => Some(FailureKind::ValueMismatch),
            "cardinality_mismatch" => Some(FailureKind::CardinalityMismatch),
            "unexpected_item" => Some(FailureKind::UnexpectedItem),
            "reconciliation_leftover" => Some(FailureKind::ReconciliationLeftover),
            _ => None,
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CheckFailure {
    pub fn kind(&self) -> FailureKind {
        match self {
            CheckFailure::ClassificationMismatch { .. } => FailureKind::ClassificationMismatch,
            CheckFailure::UnknownIdentifier { .. } => FailureKind::UnknownIdentifier,
            CheckFailure::StructuralMismatch { .. } => FailureKind::StructuralMismatch,
            CheckFailure::ValueMismatch { .. } => FailureKind::ValueMismatch,
            CheckFailure::CardinalityMismatch { .. } => FailureKind::CardinalityMismatch,
            CheckFailure::UnexpectedItem { .. } => FailureKind::UnexpectedItem,
            CheckFailure::ReconciliationLeftover { .. } => FailureKind::ReconciliationLeftover,
        }
    }

    pub(crate) fn structural(detail: impl Into<String>) -> Self {
        CheckFailure::StructuralMismatch {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
#[path = "failure_tests.rs"]
mod tests;
