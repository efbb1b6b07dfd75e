// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Identifier → pattern table.
//!
//! The table is built once (from the built-in entries, optionally
//! overlaid with a loaded [`ErrorTableConfig`]) and then only read.
//! Share it between classifiers with an `Arc`.

use crate::config::ErrorTableConfig;
use crate::pattern::ErrorPattern;
use crate::query::{COMBINATION_SEPARATOR, IDENTIFIER_SEPARATOR};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while building an error table
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Failed to read error table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid regex for identifier '{identifier}' ('{pattern}'): {source}")]
    InvalidRegex {
        identifier: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Built-in wordings emitted by the storage CLIs under test.
///
/// Regex entries start with `@`.
const BUILTIN: &[(&str, &[&str])] = &[
    (
        "AuthenticationFailed",
        &[
            "Server failed to authenticate the request.",
            r"@\b403\b.*(Forbidden|authenticate)",
        ],
    ),
    (
        "AuthorizationFailure",
        &["This request is not authorized to perform this operation."],
    ),
    (
        "BlobNotFound",
        &[
            "The specified blob does not exist.",
            r"@Blob [\w./-]+ (doesn't|does not) exist",
        ],
    ),
    (
        "ContainerAlreadyExists",
        &[
            "The specified container already exists.",
            r"@Container '?[\w-]+'? already exists",
        ],
    ),
    (
        "ContainerBeingDeleted",
        &["The specified container is being deleted."],
    ),
    (
        "ContainerNotFound",
        &[
            "The specified container does not exist.",
            r"@Container \w{1,} doesn't exist",
            r"@Container [\w-]+ doesn't exist",
        ],
    ),
    (
        "DirectoryNotEmpty",
        &["The specified directory is not empty."],
    ),
    (
        "DirectoryNotFound",
        &[
            "The specified parent path does not exist.",
            r"@Directory [\w./\\-]+ (doesn't|does not) exist",
        ],
    ),
    (
        "FileNotFound",
        &[
            "The specified resource does not exist.",
            r"@File [\w./\\-]+ (doesn't|does not) exist",
            "Can not find the specified file",
        ],
    ),
    (
        "InvalidArgument",
        &[
            "BadRequest",
            r"@[Ii]nvalid (argument|value)",
            "Cannot bind parameter",
        ],
    ),
    (
        "InvalidResourceName",
        &[
            "The specifed resource name contains invalid characters.",
            "The specified resource name length is not within the permissible limits.",
            r"@[Ii]nvalid (share|container|blob|file|directory|queue|table) name",
        ],
    ),
    (
        "LeaseIdMissing",
        &["There is currently a lease on the blob and no lease ID was specified in the request."],
    ),
    (
        "MissingRequiredParameter",
        &[
            "Cannot process command because of one or more missing mandatory parameters",
            r"@[Mm]issing required (argument|option)",
        ],
    ),
    (
        "OutOfRangeInput",
        &[
            "One of the request inputs is out of range.",
            r"@(is|was) out of range",
        ],
    ),
    (
        "ResourceTypeMismatch",
        &["The specified resource type does not match the type of the existing resource."],
    ),
    (
        "ShareAlreadyExists",
        &[
            "The specified share already exists.",
            r"@Share '?[\w-]+'? already exists",
        ],
    ),
    ("ShareBeingDeleted", &["The specified share is being deleted."]),
    (
        "ShareNotFound",
        &[
            "The specified share does not exist.",
            r"@Share \w{1,} doesn't exist",
            r"@Share [\w-]+ doesn't exist",
        ],
    ),
    (
        "ShareQuotaExceeded",
        &[
            "The specified share is full.",
            r"@[Qq]uota (of|for) share",
        ],
    ),
];

/// Immutable mapping from error identifier to its accepted wordings
#[derive(Clone, Debug, Default)]
pub struct ErrorTable {
    entries: BTreeMap<String, Vec<ErrorPattern>>,
}

impl ErrorTable {
    /// Table with no identifiers; every lookup misses
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in storage CLI table
    pub fn builtin() -> Result<Self, TableError> {
        Self::from_entries(BUILTIN.iter().map(|(name, patterns)| (*name, patterns.iter())))
    }

    /// Build a table from `(identifier, patterns)` pairs.
    ///
    /// Empty patterns are dropped. A repeated identifier replaces the
    /// earlier entry.
    pub fn from_entries<I, N, P, S>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::empty();
        for (name, patterns) in entries {
            table.insert(name.into(), patterns)?;
        }
        Ok(table)
    }

    /// Load a table file, layered over the built-in table unless the file
    /// sets `extends_builtin = false`
    pub fn load(path: &Path) -> Result<Self, TableError> {
        Self::from_config(&ErrorTableConfig::load(path)?)
    }

    /// Build the effective table described by `config`
    pub fn from_config(config: &ErrorTableConfig) -> Result<Self, TableError> {
        let base = if config.extends_builtin {
            Self::builtin()?
        } else {
            Self::empty()
        };
        base.with_overrides(config)
    }

    /// Overlay the identifiers of `config` on this table
    pub fn with_overrides(mut self, config: &ErrorTableConfig) -> Result<Self, TableError> {
        for (name, patterns) in &config.identifiers {
            self.insert(name.clone(), patterns)?;
        }
        Ok(self)
    }

    fn insert<P, S>(&mut self, name: String, patterns: P) -> Result<(), TableError>
    where
        P: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(TableError::Validation(
                "error identifier name cannot be empty".to_string(),
            ));
        }
        if name.contains([COMBINATION_SEPARATOR, IDENTIFIER_SEPARATOR]) {
            return Err(TableError::Validation(format!(
                "error identifier '{}' cannot contain '{}' or '{}'",
                name, COMBINATION_SEPARATOR, IDENTIFIER_SEPARATOR
            )));
        }

        let mut compiled = Vec::new();
        for raw in patterns {
            let raw = raw.as_ref();
            let parsed = ErrorPattern::parse(raw).map_err(|source| TableError::InvalidRegex {
                identifier: name.clone(),
                pattern: raw.to_string(),
                source,
            })?;
            compiled.extend(parsed);
        }
        if compiled.is_empty() {
            tracing::warn!(identifier = %name, "error identifier has no usable patterns");
        }
        self.entries.insert(name, compiled);
        Ok(())
    }

    /// Patterns registered for `identifier`, if it is known
    pub fn lookup(&self, identifier: &str) -> Option<&[ErrorPattern]> {
        self.entries.get(identifier).map(Vec::as_slice)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    /// Known identifiers in sorted order
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate `(identifier, patterns)` in sorted order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ErrorPattern])> {
        self.entries
            .iter()
            .map(|(name, patterns)| (name.as_str(), patterns.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
