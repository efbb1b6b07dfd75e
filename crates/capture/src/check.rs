// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recorded check data types.

use super::duration_serde;
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

/// One executed check
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckEntry {
    /// Sequence number
    pub seq: u64,

    /// Wall-clock timestamp
    pub timestamp: SystemTime,

    /// Elapsed time since the log was created
    #[serde(with = "duration_serde")]
    pub elapsed: Duration,

    /// Check name as given by the harness
    pub check: String,

    /// Pass or fail, with the diagnostic on failure
    pub outcome: CheckOutcome,
}

/// Outcome of a single check
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CheckOutcome {
    Passed,
    Failed {
        /// Failure category, e.g. `cardinality_mismatch`
        kind: String,
        /// Human-readable diagnostic with expected and actual values
        diagnostic: String,
    },
}

impl CheckOutcome {
    /// Build a failed outcome
    pub fn failed(kind: impl Into<String>, diagnostic: impl Into<String>) -> Self {
        Self::Failed {
            kind: kind.into(),
            diagnostic: diagnostic.into(),
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Failure category, if the check failed
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::Passed => None,
            Self::Failed { kind, .. } => Some(kind),
        }
    }

    /// Failure diagnostic, if the check failed
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::Passed => None,
            Self::Failed { diagnostic, .. } => Some(diagnostic),
        }
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
