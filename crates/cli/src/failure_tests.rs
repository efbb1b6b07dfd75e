// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use yare::parameterized;

#[test]
fn cardinality_diagnostic_reports_both_counts() {
    let failure = CheckFailure::CardinalityMismatch {
        expected: 1,
        actual: 2,
    };
    assert!(failure.to_string().contains("Expected: 1, Actual: 2"));
}

#[test]
fn classification_diagnostic_reports_query_and_message() {
    let failure = CheckFailure::ClassificationMismatch {
        query: "ShareNotFound".to_string(),
        message: "Access denied".to_string(),
    };
    let text = failure.to_string();
    assert!(text.contains("'ShareNotFound'"));
    assert!(text.contains("Access denied"));
}

#[test]
fn leftover_diagnostic_lists_every_item() {
    let failure = CheckFailure::ReconciliationLeftover {
        leftover: vec!["b".to_string(), "dir/c".to_string()],
    };
    let text = failure.to_string();
    assert!(text.starts_with("2 expected item(s)"));
    assert!(text.ends_with("b, dir/c"));
}

#[test]
fn value_mismatch_diagnostic() {
    let failure = CheckFailure::ValueMismatch {
        field: "quota".to_string(),
        expected: "5".to_string(),
        actual: "10".to_string(),
    };
    assert_eq!(
        failure.to_string(),
        "Field 'quota' mismatch. Expected: 5, Actual: 10"
    );
}

#[parameterized(
    classification = { CheckFailure::ClassificationMismatch { query: String::new(), message: String::new() }, FailureKind::ClassificationMismatch },
    unknown = { CheckFailure::UnknownIdentifier { identifier: String::new(), query: String::new() }, FailureKind::UnknownIdentifier },
    structural = { CheckFailure::structural("x"), FailureKind::StructuralMismatch },
    cardinality = { CheckFailure::CardinalityMismatch { expected: 0, actual: 1 }, FailureKind::CardinalityMismatch },
    unexpected = { CheckFailure::UnexpectedItem { key: "a".to_string() }, FailureKind::UnexpectedItem },
    leftover = { CheckFailure::ReconciliationLeftover { leftover: vec![] }, FailureKind::ReconciliationLeftover },
)]
fn kind_matches_variant(failure: CheckFailure, kind: FailureKind) {
    assert_eq!(failure.kind(), kind);
}

#[test]
fn kind_names_parse_back() {
    let kinds = [
        FailureKind::ClassificationMismatch,
        FailureKind::UnknownIdentifier,
        FailureKind::StructuralMismatch,
        FailureKind::ValueMismatch,
        FailureKind::CardinalityMismatch,
        FailureKind::UnexpectedItem,
        FailureKind::ReconciliationLeftover,
    ];
    for kind in kinds {
        assert_eq!(FailureKind::parse(kind.as_str()), Some(kind));
        assert_eq!(
            serde_json::to_string(&kind).unwrap(),
            format!("\"{}\"", kind)
        );
    }
    assert_eq!(FailureKind::parse("Cardinality"), None);
}
