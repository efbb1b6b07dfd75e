// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::failure::FailureKind;
use proptest::prelude::*;
use rstest::rstest;
use serde_json::json;

fn named(name: &str) -> Record {
    Record::new().with("name", name)
}

fn file(directory: &str, name: &str) -> Record {
    Record::new().with("name", name).with("directory", directory)
}

fn set(items: &[&str]) -> ExpectedSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// Cardinality
// =============================================================================

#[test]
fn no_records_passes_on_empty() {
    assert!(assert_no_records(&[]).is_ok());
}

#[test]
fn no_records_reports_actual_count() {
    let err = assert_no_records(&[named("a"), named("b")]).unwrap_err();
    assert_eq!(
        err,
        CheckFailure::CardinalityMismatch {
            expected: 0,
            actual: 2
        }
    );
}

#[test]
fn count_mismatch_reports_expected_and_actual() {
    let err = assert_count(&[named("a"), named("b")], 1, |_| Ok(())).unwrap_err();
    assert!(err.to_string().contains("Expected: 1, Actual: 2"));
}

#[rstest]
#[case(0)]
#[case(-1)]
fn non_positive_count_disables_count_check(#[case] expected: i64) {
    let mut seen = 0;
    assert_count(&[named("a"), named("b")], expected, |_| {
        seen += 1;
        Ok(())
    })
    .unwrap();
    assert_eq!(seen, 2);
}

#[test]
fn count_runs_per_record_check_on_every_record() {
    let records = [named("a"), Record::new().with("directory", "x")];
    let err = assert_count(&records, 2, |r| r.field("name").map(|_| ())).unwrap_err();
    assert_eq!(err.kind(), FailureKind::StructuralMismatch);
}

#[test]
fn count_checked_before_records() {
    let records = [Record::new()];
    let err = assert_count(&records, 3, |r| r.field("name").map(|_| ())).unwrap_err();
    assert_eq!(err.kind(), FailureKind::CardinalityMismatch);
}

// =============================================================================
// Set membership
// =============================================================================

#[test]
fn membership_consumes_key() {
    let mut expected = set(&["a", "b"]);
    assert_set_membership("a", &mut expected, true).unwrap();
    assert_eq!(expected.remaining(), &["b".to_string()]);
}

#[test]
fn membership_strict_fails_on_absent() {
    let mut expected = set(&["a"]);
    let err = assert_set_membership("z", &mut expected, true).unwrap_err();
    assert_eq!(err, CheckFailure::UnexpectedItem { key: "z".to_string() });
    assert_eq!(expected.len(), 1);
}

#[test]
fn membership_lenient_passes_on_absent() {
    let mut expected = set(&["a"]);
    assert_set_membership("z", &mut expected, false).unwrap();
    assert_eq!(expected.len(), 1);
}

// =============================================================================
// File listing
// =============================================================================

#[test]
fn file_listing_multiset_equality() {
    let files = [file("d", "a.txt"), named("b.txt"), named("b.txt")];
    let dirs = [file("d\\e", "sub")];
    let mut expected_files = set(&["b.txt", "d/a.txt", "b.txt"]);
    let mut expected_dirs = set(&["d/e/sub"]);

    assert_file_listing(&files, &dirs, &mut expected_files, &mut expected_dirs).unwrap();
    assert!(expected_files.is_empty());
    assert!(expected_dirs.is_empty());
}

#[test]
fn file_listing_leftover_reported() {
    let mut expected_files = set(&["a", "b"]);
    let mut expected_dirs = set(&[]);
    let err = assert_file_listing(&[named("a")], &[], &mut expected_files, &mut expected_dirs)
        .unwrap_err();
    assert_eq!(
        err,
        CheckFailure::ReconciliationLeftover {
            leftover: vec!["b".to_string()]
        }
    );
    assert_eq!(expected_files.remaining(), &["b".to_string()]);
}

#[test]
fn file_listing_unexpected_item_fails_immediately() {
    let mut expected_files = set(&["a"]);
    let mut expected_dirs = set(&["d"]);
    let err = assert_file_listing(
        &[named("a"), named("extra")],
        &[named("d")],
        &mut expected_files,
        &mut expected_dirs,
    )
    .unwrap_err();
    assert_eq!(err.kind(), FailureKind::UnexpectedItem);
    // Directories were never processed
    assert_eq!(expected_dirs.len(), 1);
}

#[test]
fn file_listing_duplicate_observed_needs_duplicate_expected() {
    let mut expected_files = set(&["a"]);
    let mut expected_dirs = set(&[]);
    let err = assert_file_listing(
        &[named("a"), named("a")],
        &[],
        &mut expected_files,
        &mut expected_dirs,
    )
    .unwrap_err();
    assert_eq!(err, CheckFailure::UnexpectedItem { key: "a".to_string() });
}

#[test]
fn file_listing_files_and_dirs_are_separate() {
    let mut expected_files = set(&[]);
    let mut expected_dirs = set(&["a"]);
    let err = assert_file_listing(&[named("a")], &[], &mut expected_files, &mut expected_dirs)
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::UnexpectedItem);
}

#[test]
fn file_listing_missing_name_is_structural() {
    let mut expected_files = set(&["a"]);
    let mut expected_dirs = set(&[]);
    let err = assert_file_listing(
        &[Record::new().with("directory", "d")],
        &[],
        &mut expected_files,
        &mut expected_dirs,
    )
    .unwrap_err();
    assert_eq!(err.kind(), FailureKind::StructuralMismatch);
}

// =============================================================================
// Generic reconciliation
// =============================================================================

#[test]
fn reconcile_with_custom_key() {
    let observed = [named("Share1"), named("share2")];
    let mut expected = set(&["share1", "share2"]);
    reconcile(
        &observed,
        &mut expected,
        |r| r.field("name").map(str::to_lowercase),
        AbsentPolicy::Fail,
    )
    .unwrap();
}

#[test]
fn reconcile_ignore_policy_still_checks_leftovers() {
    let observed = [named("a"), named("extra")];
    let mut expected = set(&["a", "b"]);
    let err = reconcile_records(&observed, &mut expected, RecordKind::Share, AbsentPolicy::Ignore)
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::ReconciliationLeftover);
}

#[test]
fn reconcile_records_containers_by_name() {
    let observed = [file("ignored", "c1"), named("c2")];
    let mut expected = set(&["c2", "c1"]);
    reconcile_records(&observed, &mut expected, RecordKind::Container, AbsentPolicy::Fail)
        .unwrap();
}

#[test]
fn reconcile_works_on_plain_values() {
    let observed = [3, 1, 2];
    let mut expected: ExpectedSet<i32> = vec![1, 2, 3].into();
    reconcile(&observed, &mut expected, |n| Ok(*n), AbsentPolicy::Fail).unwrap();
}

// =============================================================================
// Attributes
// =============================================================================

#[test]
fn attributes_match() {
    let observed = Record::new()
        .with("name", "c1")
        .with("publicAccess", "blob")
        .with("quota", 5);
    let expected = Record::new().with("publicAccess", "blob").with("quota", 5);
    assert_attributes(&observed, &expected).unwrap();
}

#[test]
fn attribute_value_mismatch() {
    let observed = Record::new().with("quota", 10);
    let expected = Record::new().with("quota", 5);
    assert_eq!(
        assert_attributes(&observed, &expected).unwrap_err(),
        CheckFailure::ValueMismatch {
            field: "quota".to_string(),
            expected: "5".to_string(),
            actual: "10".to_string(),
        }
    );
}

#[test]
fn attribute_missing_is_structural() {
    let observed = Record::new().with("name", "s1");
    let expected = Record::new().with("quota", 5);
    let err = assert_attributes(&observed, &expected).unwrap_err();
    assert_eq!(err.kind(), FailureKind::StructuralMismatch);
}

#[test]
fn attribute_types_are_strict() {
    let observed = Record::new().with("quota", "5");
    let expected = Record::new().with("quota", json!(5));
    assert_eq!(
        assert_attributes(&observed, &expected).unwrap_err().kind(),
        FailureKind::ValueMismatch
    );
}

#[test]
fn record_set_pairs_by_identity_then_compares() {
    let observed = [
        Record::new().with("name", "s1").with("quota", 5),
        Record::new().with("name", "s2").with("quota", 7),
    ];
    let mut expected: ExpectedSet<Record> = vec![
        Record::new().with("name", "s2").with("quota", 7),
        Record::new().with("name", "s1").with("quota", 5),
    ]
    .into();
    reconcile_record_set(&observed, &mut expected, RecordKind::Share, AbsentPolicy::Fail).unwrap();
    assert!(expected.is_empty());
}

#[test]
fn record_set_reports_leftover_by_key() {
    let observed = [Record::new().with("name", "s1")];
    let mut expected: ExpectedSet<Record> =
        vec![Record::new().with("name", "s1"), Record::new().with("name", "s9")].into();
    assert_eq!(
        reconcile_record_set(&observed, &mut expected, RecordKind::Share, AbsentPolicy::Fail)
            .unwrap_err(),
        CheckFailure::ReconciliationLeftover {
            leftover: vec!["s9".to_string()]
        }
    );
}

#[test]
fn record_set_value_mismatch() {
    let observed = [Record::new().with("name", "s1").with("quota", 1)];
    let mut expected: ExpectedSet<Record> =
        vec![Record::new().with("name", "s1").with("quota", 2)].into();
    assert_eq!(
        reconcile_record_set(&observed, &mut expected, RecordKind::Share, AbsentPolicy::Fail)
            .unwrap_err()
            .kind(),
        FailureKind::ValueMismatch
    );
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn permuted_listing_always_reconciles(
        names in proptest::collection::vec("[a-c]{1,2}", 0..12),
        seed in any::<u64>(),
    ) {
        let observed: Vec<Record> = names.iter().map(|n| named(n)).collect();
        let mut shuffled = names.clone();
        // deterministic rotation stands in for a shuffle
        if !shuffled.is_empty() {
            let k = (seed as usize) % shuffled.len();
            shuffled.rotate_left(k);
        }
        let mut expected: ExpectedSet<String> = shuffled.into_iter().collect();
        let mut no_dirs = ExpectedSet::new();

        prop_assert!(assert_file_listing(&observed, &[], &mut expected, &mut no_dirs).is_ok());
        prop_assert!(expected.is_empty());
    }

    #[test]
    fn dropping_an_observed_item_leaves_exactly_one(
        names in proptest::collection::vec("[a-c]{1,2}", 1..12),
        drop_at in any::<prop::sample::Index>(),
    ) {
        let idx = drop_at.index(names.len());
        let observed: Vec<Record> = names
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, n)| named(n))
            .collect();
        let mut expected: ExpectedSet<String> = names.iter().cloned().collect();
        let mut no_dirs = ExpectedSet::new();

        let err = assert_file_listing(&observed, &[], &mut expected, &mut no_dirs).unwrap_err();
        prop_assert_eq!(
            err,
            CheckFailure::ReconciliationLeftover { leftover: vec![names[idx].clone()] }
        );
    }
}
