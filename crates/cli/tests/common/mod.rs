// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]
#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

//! Shared helpers for cliverify integration tests.

use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

/// The cliverify binary with harness environment variables cleared
pub fn cliverify() -> Command {
    let mut cmd = Command::cargo_bin("cliverify").unwrap();
    cmd.env_remove("CLIVERIFY_ERROR_TABLE")
        .env_remove("CLIVERIFY_STRICT_IDENTIFIERS")
        .env_remove("CLIVERIFY_CHECK_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write content to a temp file with the given extension
pub fn write_temp(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Write JSON values as a JSONL listing
pub fn write_jsonl(records: &[serde_json::Value]) -> NamedTempFile {
    let content: Vec<String> = records.iter().map(|r| r.to_string()).collect();
    write_temp(&content.join("\n"), ".jsonl")
}

/// A file or directory record
pub fn item(name: &str, directory: Option<&str>) -> serde_json::Value {
    match directory {
        Some(dir) => serde_json::json!({ "name": name, "directory": dir }),
        None => serde_json::json!({ "name": name }),
    }
}
