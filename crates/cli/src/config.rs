// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error table configuration files (TOML or JSON).
//!
//! ```toml
//! extends_builtin = true
//!
//! [identifiers]
//! QueueNotFound = ["The specified queue does not exist.", "@Queue \\w+ doesn't exist"]
//! ```

use crate::table::TableError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

fn default_extends_builtin() -> bool {
    true
}

/// Error table file contents
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ErrorTableConfig {
    /// Layer these identifiers over the built-in table (default: true)
    #[serde(default = "default_extends_builtin")]
    pub extends_builtin: bool,

    /// Identifier → pattern strings; regex patterns start with `@`
    #[serde(default)]
    pub identifiers: BTreeMap<String, Vec<String>>,
}

impl Default for ErrorTableConfig {
    fn default() -> Self {
        Self {
            extends_builtin: default_extends_builtin(),
            identifiers: BTreeMap::new(),
        }
    }
}

impl ErrorTableConfig {
    /// Load from a TOML file, or JSON when the extension is `.json`
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_for(path, &content)
    }

    /// Parse `content` in the format implied by `path`
    pub fn parse_for(path: &Path, content: &str) -> Result<Self, TableError> {
        if path.extension().is_some_and(|e| e == "json") {
            Self::from_json(content)
        } else {
            Self::from_toml(content)
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, TableError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
