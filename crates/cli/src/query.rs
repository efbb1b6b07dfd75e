// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Composite error queries.
//!
//! `"ShareNotFound+FileNotFound;InvalidArgument"` is two combinations, the
//! first naming two identifiers. A message satisfies the query when any
//! pattern of any identifier in any combination matches it.

use std::convert::Infallible;
use std::str::FromStr;

/// Separates identifier combinations
pub const COMBINATION_SEPARATOR: char = ';';
/// Separates identifiers within a combination
pub const IDENTIFIER_SEPARATOR: char = '+';

/// Parsed error query
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorQuery {
    raw: String,
    combinations: Vec<Vec<String>>,
}

impl ErrorQuery {
    pub fn parse(raw: &str) -> Self {
        let combinations = raw
            .split(COMBINATION_SEPARATOR)
            .map(|combination| {
                combination
                    .split(IDENTIFIER_SEPARATOR)
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|combination| !combination.is_empty())
            .collect();

        Self {
            raw: raw.to_string(),
            combinations,
        }
    }

    /// The query text as written
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn combinations(&self) -> &[Vec<String>] {
        &self.combinations
    }

    /// Every identifier of every combination, in order
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.combinations.iter().flatten().map(String::as_str)
    }

    /// True when the query names no identifier at all
    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }
}

impl FromStr for ErrorQuery {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for ErrorQuery {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl std::fmt::Display for ErrorQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
