// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables read by cliverify are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

use std::path::PathBuf;

/// `CLIVERIFY_ERROR_TABLE`: error table override file.
pub fn error_table() -> Option<PathBuf> {
    var_path(names::CLIVERIFY_ERROR_TABLE)
}

/// `CLIVERIFY_STRICT_IDENTIFIERS`: reject identifiers missing from the table.
///
/// Accepts `1`, `true`, `yes` and `on` (case-insensitive). Anything else,
/// or an unset variable, means literal fallback.
pub fn strict_identifiers() -> bool {
    std::env::var(names::CLIVERIFY_STRICT_IDENTIFIERS)
        .map(|v| parse_flag(&v))
        .unwrap_or(false)
}

/// `CLIVERIFY_CHECK_LOG`: JSONL file that mirrors every recorded check.
pub fn check_log() -> Option<PathBuf> {
    var_path(names::CLIVERIFY_CHECK_LOG)
}

fn var_path(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

pub(crate) fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
