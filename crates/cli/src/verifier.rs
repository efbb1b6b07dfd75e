// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness facade.
//!
//! A [`Verifier`] runs classification and reconciliation checks, records
//! each outcome in a [`CheckLog`], and applies the harness's failure
//! policy: stop at the first failing check, or keep going and report all
//! failures at the end.

use crate::classifier::ErrorClassifier;
use crate::expected::ExpectedSet;
use crate::failure::CheckFailure;
use crate::query::ErrorQuery;
use crate::reconcile::{self, AbsentPolicy};
use crate::record::{Record, RecordKind};
use crate::report::VerificationReport;
use crate::table::TableError;
use cliverify_capture::{CheckEntry, CheckLog, CheckOutcome};
use std::fmt::Display;
use thiserror::Error;

/// Errors surfaced by the harness layer
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write check log: {0}")]
    CheckLog(#[source] std::io::Error),

    #[error(transparent)]
    Check(#[from] CheckFailure),

    #[error("{failed} of {total} checks failed")]
    Failed { failed: usize, total: usize },
}

/// What happens after a check fails
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Return the failure from the check itself
    #[default]
    FailFast,
    /// Record the failure and continue; [`Verifier::finish`] reports it
    Collect,
}

/// Runs checks and records their outcomes
#[derive(Clone, Debug)]
pub struct Verifier {
    classifier: ErrorClassifier,
    log: CheckLog,
    policy: FailurePolicy,
}

impl Verifier {
    pub fn new(classifier: ErrorClassifier) -> Self {
        Self {
            classifier,
            log: CheckLog::new(),
            policy: FailurePolicy::default(),
        }
    }

    /// Record into an existing (possibly file-backed) log
    pub fn with_log(mut self, log: CheckLog) -> Self {
        self.log = log;
        self
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn classifier(&self) -> &ErrorClassifier {
        &self.classifier
    }

    pub fn log(&self) -> &CheckLog {
        &self.log
    }

    /// Record the outcome of a check and apply the failure policy
    pub fn check(
        &self,
        name: impl Into<String>,
        result: Result<(), CheckFailure>,
    ) -> Result<(), CheckFailure> {
        let name = name.into();
        match result {
            Ok(()) => {
                tracing::debug!(check = %name, "check passed");
                self.log.record(name, CheckOutcome::Passed);
                Ok(())
            }
            Err(failure) => {
                tracing::debug!(check = %name, kind = %failure.kind(), "check failed");
                self.log.record(
                    name,
                    CheckOutcome::failed(failure.kind().as_str(), failure.to_string()),
                );
                match self.policy {
                    FailurePolicy::FailFast => Err(failure),
                    FailurePolicy::Collect => Ok(()),
                }
            }
        }
    }

    pub fn error_matches(&self, message: &str, query: &str) -> Result<(), CheckFailure> {
        let query = ErrorQuery::parse(query);
        let result = self.classifier.assert_matches(message, &query);
        self.check(format!("error matches {}", query), result)
    }

    pub fn no_records(&self, observed: &[Record]) -> Result<(), CheckFailure> {
        self.check("no records", reconcile::assert_no_records(observed))
    }

    pub fn count<F>(
        &self,
        observed: &[Record],
        expected_count: i64,
        per_record: F,
    ) -> Result<(), CheckFailure>
    where
        F: FnMut(&Record) -> Result<(), CheckFailure>,
    {
        self.check(
            "record count",
            reconcile::assert_count(observed, expected_count, per_record),
        )
    }

    pub fn set_membership<T, Q>(
        &self,
        observed_key: &Q,
        expected: &mut ExpectedSet<T>,
        fail_if_absent: bool,
    ) -> Result<(), CheckFailure>
    where
        T: PartialEq<Q>,
        Q: Display + ?Sized,
    {
        self.check(
            format!("set membership {}", observed_key),
            reconcile::assert_set_membership(observed_key, expected, fail_if_absent),
        )
    }

    pub fn file_listing(
        &self,
        observed_files: &[Record],
        observed_dirs: &[Record],
        expected_files: &mut ExpectedSet<String>,
        expected_dirs: &mut ExpectedSet<String>,
    ) -> Result<(), CheckFailure> {
        self.check(
            "file listing",
            reconcile::assert_file_listing(
                observed_files,
                observed_dirs,
                expected_files,
                expected_dirs,
            ),
        )
    }

    pub fn records(
        &self,
        observed: &[Record],
        expected: &mut ExpectedSet<String>,
        kind: RecordKind,
        policy: AbsentPolicy,
    ) -> Result<(), CheckFailure> {
        self.check(
            format!("{} records", kind),
            reconcile::reconcile_records(observed, expected, kind, policy),
        )
    }

    pub fn record_set(
        &self,
        observed: &[Record],
        expected: &mut ExpectedSet<Record>,
        kind: RecordKind,
        policy: AbsentPolicy,
    ) -> Result<(), CheckFailure> {
        self.check(
            format!("{} record set", kind),
            reconcile::reconcile_record_set(observed, expected, kind, policy),
        )
    }

    pub fn attributes(&self, observed: &Record, expected: &Record) -> Result<(), CheckFailure> {
        self.check(
            "attributes",
            reconcile::assert_attributes(observed, expected),
        )
    }

    /// Failed checks recorded so far
    pub fn failures(&self) -> Vec<CheckEntry> {
        self.log.find_failures()
    }

    /// Fail if the check log could not mirror an entry to its file
    pub fn ensure_log_written(&self) -> Result<(), VerifyError> {
        match self.log.mirror_error() {
            Some(e) => {
                tracing::warn!(error = %e, "check log mirror write failed");
                Err(VerifyError::CheckLog(e))
            }
            None => Ok(()),
        }
    }

    /// Fail if the check log lost entries or any recorded check failed
    pub fn finish(&self) -> Result<(), VerifyError> {
        self.ensure_log_written()?;
        let failed = self.log.find_failures().len();
        if failed == 0 {
            return Ok(());
        }
        Err(VerifyError::Failed {
            failed,
            total: self.log.len(),
        })
    }

    pub fn report(&self) -> VerificationReport {
        VerificationReport::new(self.log.entries())
    }
}

#[cfg(test)]
#[path = "verifier_tests.rs"]
mod tests;
