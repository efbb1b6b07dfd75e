// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error message patterns.
//!
//! A pattern is written either as literal text, which must prefix the
//! observed message, or as a regular expression introduced by
//! [`REGEX_MARKER`], which must find a non-empty match anywhere in it.

use regex::Regex;
use serde::{Serialize, Serializer};

/// Leading character that marks a pattern as a regular expression
pub const REGEX_MARKER: char = '@';

/// One way an error condition may be worded
#[derive(Clone, Debug)]
pub enum ErrorPattern {
    /// Observed message must start with this text (ordinal comparison)
    Prefix(String),
    /// Observed message must contain a non-empty match
    Regex(Regex),
}

impl ErrorPattern {
    /// Parse a pattern from its source form.
    ///
    /// Returns `Ok(None)` for an empty pattern, including a bare marker.
    pub fn parse(raw: &str) -> Result<Option<Self>, regex::Error> {
        match raw.strip_prefix(REGEX_MARKER) {
            Some("") => Ok(None),
            Some(body) => Ok(Some(ErrorPattern::Regex(Regex::new(body)?))),
            None if raw.is_empty() => Ok(None),
            None => Ok(Some(ErrorPattern::Prefix(raw.to_string()))),
        }
    }

    /// Literal prefix pattern, bypassing marker detection
    pub fn literal(text: impl Into<String>) -> Self {
        ErrorPattern::Prefix(text.into())
    }

    /// Evaluate the pattern against an observed message
    pub fn is_match(&self, message: &str) -> bool {
        match self {
            ErrorPattern::Prefix(prefix) => !prefix.is_empty() && message.starts_with(prefix),
            ErrorPattern::Regex(re) => re.find_iter(message).any(|m| !m.is_empty()),
        }
    }

    pub fn is_regex(&self) -> bool {
        matches!(self, ErrorPattern::Regex(_))
    }
}

impl PartialEq for ErrorPattern {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ErrorPattern::Prefix(a), ErrorPattern::Prefix(b)) => a == b,
            (ErrorPattern::Regex(a), ErrorPattern::Regex(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl Eq for ErrorPattern {}

impl std::fmt::Display for ErrorPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorPattern::Prefix(prefix) => f.write_str(prefix),
            ErrorPattern::Regex(re) => write!(f, "{}{}", REGEX_MARKER, re.as_str()),
        }
    }
}

impl Serialize for ErrorPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
