// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use std::io::Write;

#[test]
fn test_toml_config() {
    let config = ErrorTableConfig::from_toml(
        r#"
        [identifiers]
        QueueNotFound = ["The specified queue does not exist.", "@Queue \\w+ doesn't exist"]
        "#,
    )
    .unwrap();

    assert!(config.extends_builtin);
    assert_eq!(
        config.identifiers["QueueNotFound"],
        vec![
            "The specified queue does not exist.".to_string(),
            r"@Queue \w+ doesn't exist".to_string()
        ]
    );
}

#[test]
fn test_json_config() {
    let config = ErrorTableConfig::from_json(
        r#"{ "extends_builtin": false, "identifiers": { "Timeout": ["Operation timed out"] } }"#,
    )
    .unwrap();

    assert!(!config.extends_builtin);
    assert_eq!(config.identifiers.len(), 1);
}

#[test]
fn test_unknown_field_rejected() {
    let err = ErrorTableConfig::from_toml("extend_builtin = false").unwrap_err();
    assert!(matches!(err, TableError::Toml(_)));
    assert!(err.to_string().contains("extend_builtin"));
}

#[test]
fn test_empty_config_defaults() {
    let config = ErrorTableConfig::from_toml("").unwrap();
    assert_eq!(config, ErrorTableConfig::default());
}

#[test]
fn test_load_picks_format_from_extension() {
    let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    json.write_all(br#"{ "identifiers": { "A": ["a"] } }"#)
        .unwrap();
    json.flush().unwrap();
    assert!(ErrorTableConfig::load(json.path()).unwrap().identifiers.contains_key("A"));

    let mut toml = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    toml.write_all(b"[identifiers]\nB = [\"b\"]\n").unwrap();
    toml.flush().unwrap();
    assert!(ErrorTableConfig::load(toml.path()).unwrap().identifiers.contains_key("B"));
}

#[test]
fn test_load_missing_file() {
    let err = ErrorTableConfig::load(Path::new("/nonexistent/table.toml")).unwrap_err();
    assert!(matches!(err, TableError::Io(_)));
}

#[test]
fn parse_for_picks_format_from_extension() {
    let json = ErrorTableConfig::parse_for(
        Path::new("errors.json"),
        r#"{"extends_builtin": false, "identifiers": {"Gone": ["Gone"]}}"#,
    )
    .unwrap();
    assert!(!json.extends_builtin);

    let toml = ErrorTableConfig::parse_for(
        Path::new("errors.toml"),
        "extends_builtin = false\n[identifiers]\nGone = [\"Gone\"]\n",
    )
    .unwrap();
    assert_eq!(json, toml);
}
