// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output reconciliation.
//!
//! Observed records are matched against an [`ExpectedSet`] with
//! consume-on-match semantics: order is irrelevant, duplicates count, and
//! both unexpected extras and never-observed expectations fail.

use crate::expected::ExpectedSet;
use crate::failure::CheckFailure;
use crate::record::{Record, RecordKind};
use serde_json::Value;
use std::fmt::Display;

/// What to do with an observed item that has no expected counterpart
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AbsentPolicy {
    /// Fail immediately with [`CheckFailure::UnexpectedItem`]
    #[default]
    Fail,
    /// Skip it (best-effort checks across paginated results)
    Ignore,
}

impl AbsentPolicy {
    pub fn from_fail_if_absent(fail_if_absent: bool) -> Self {
        if fail_if_absent {
            AbsentPolicy::Fail
        } else {
            AbsentPolicy::Ignore
        }
    }
}

/// Pass iff nothing was observed
pub fn assert_no_records(observed: &[Record]) -> Result<(), CheckFailure> {
    if observed.is_empty() {
        Ok(())
    } else {
        Err(CheckFailure::CardinalityMismatch {
            expected: 0,
            actual: observed.len(),
        })
    }
}

/// Check the record count, then run `per_record` on every record.
///
/// A non-positive `expected_count` disables the count check.
pub fn assert_count<F>(
    observed: &[Record],
    expected_count: i64,
    mut per_record: F,
) -> Result<(), CheckFailure>
where
    F: FnMut(&Record) -> Result<(), CheckFailure>,
{
    if let Ok(expected) = usize::try_from(expected_count) {
        if expected > 0 && observed.len() != expected {
            return Err(CheckFailure::CardinalityMismatch {
                expected,
                actual: observed.len(),
            });
        }
    }
    observed.iter().try_for_each(|record| per_record(record))
}

/// Consume `observed_key` from `expected`.
///
/// When the key is absent this fails only if `fail_if_absent` is set.
pub fn assert_set_membership<T, Q>(
    observed_key: &Q,
    expected: &mut ExpectedSet<T>,
    fail_if_absent: bool,
) -> Result<(), CheckFailure>
where
    T: PartialEq<Q>,
    Q: Display + ?Sized,
{
    if expected.consume(observed_key) || !fail_if_absent {
        return Ok(());
    }
    Err(CheckFailure::UnexpectedItem {
        key: observed_key.to_string(),
    })
}

/// Consume one expected item per observed item, without the leftover check
pub fn consume_observed<T, K, F>(
    observed: &[T],
    expected: &mut ExpectedSet<K>,
    mut key: F,
    policy: AbsentPolicy,
) -> Result<(), CheckFailure>
where
    K: PartialEq + Display,
    F: FnMut(&T) -> Result<K, CheckFailure>,
{
    for item in observed {
        let k = key(item)?;
        if expected.consume(&k) {
            tracing::trace!(key = %k, "consumed expected item");
            continue;
        }
        match policy {
            AbsentPolicy::Fail => return Err(CheckFailure::UnexpectedItem { key: k.to_string() }),
            AbsentPolicy::Ignore => tracing::debug!(key = %k, "ignoring unexpected item"),
        }
    }
    Ok(())
}

/// Reconcile observed items against `expected` using a caller-supplied
/// identity, then require every expected item to have been consumed
pub fn reconcile<T, K, F>(
    observed: &[T],
    expected: &mut ExpectedSet<K>,
    key: F,
    policy: AbsentPolicy,
) -> Result<(), CheckFailure>
where
    K: PartialEq + Display,
    F: FnMut(&T) -> Result<K, CheckFailure>,
{
    tracing::debug!(
        observed = observed.len(),
        expected = expected.len(),
        "reconciling"
    );
    consume_observed(observed, expected, key, policy)?;
    expected.ensure_consumed()
}

/// Reconcile records by the default identity of their kind
pub fn reconcile_records(
    observed: &[Record],
    expected: &mut ExpectedSet<String>,
    kind: RecordKind,
    policy: AbsentPolicy,
) -> Result<(), CheckFailure> {
    let rule = kind.key_rule();
    reconcile(observed, expected, |r| rule.key(r), policy)
}

/// Reconcile a file listing (files and directories separately).
///
/// Identity is the canonical `directory/name` path. Unexpected items fail
/// immediately; leftovers are checked for files first.
pub fn assert_file_listing(
    observed_files: &[Record],
    observed_dirs: &[Record],
    expected_files: &mut ExpectedSet<String>,
    expected_dirs: &mut ExpectedSet<String>,
) -> Result<(), CheckFailure> {
    consume_observed(observed_files, expected_files, Record::path_key, AbsentPolicy::Fail)?;
    consume_observed(observed_dirs, expected_dirs, Record::path_key, AbsentPolicy::Fail)?;
    expected_files.ensure_consumed()?;
    expected_dirs.ensure_consumed()
}

/// Every field of `expected` must be present in `observed` with an equal value
pub fn assert_attributes(observed: &Record, expected: &Record) -> Result<(), CheckFailure> {
    for (field, want) in expected.fields() {
        let Some(got) = observed.value(field) else {
            return Err(CheckFailure::StructuralMismatch {
                detail: format!("missing required field '{}' in {}", field, observed),
            });
        };
        if got != want {
            return Err(CheckFailure::ValueMismatch {
                field: field.clone(),
                expected: render(want),
                actual: render(got),
            });
        }
    }
    Ok(())
}

/// Reconcile observed records against expected records.
///
/// Records pair up by the kind's identity rule; each pair must then agree
/// on every field the expected record names.
pub fn reconcile_record_set(
    observed: &[Record],
    expected: &mut ExpectedSet<Record>,
    kind: RecordKind,
    policy: AbsentPolicy,
) -> Result<(), CheckFailure> {
    let rule = kind.key_rule();
    for record in observed {
        let key = rule.key(record)?;
        let matched = expected.take_first(|e| rule.key(e).is_ok_and(|k| k == key));
        match (matched, policy) {
            (Some(want), _) => assert_attributes(record, &want)?,
            (None, AbsentPolicy::Fail) => return Err(CheckFailure::UnexpectedItem { key }),
            (None, AbsentPolicy::Ignore) => tracing::debug!(%key, "ignoring unexpected record"),
        }
    }

    if expected.is_empty() {
        return Ok(());
    }
    let leftover = expected
        .remaining()
        .iter()
        .map(|e| rule.key(e).unwrap_or_else(|_| e.to_string()))
        .collect();
    Err(CheckFailure::ReconciliationLeftover { leftover })
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
