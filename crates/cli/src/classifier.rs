// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error classification.
//!
//! Decides whether an observed CLI error message is one of the error
//! conditions a query names. Classification is pure: [`ErrorClassifier::matches`]
//! never fails, only [`ErrorClassifier::assert_matches`] produces a
//! reportable [`CheckFailure`].

use crate::failure::CheckFailure;
use crate::pattern::ErrorPattern;
use crate::query::ErrorQuery;
use crate::table::ErrorTable;
use std::sync::Arc;

/// How identifiers missing from the table are treated
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownIdentifierPolicy {
    /// The identifier text itself is a literal prefix pattern
    #[default]
    LiteralFallback,
    /// Unknown identifiers never match and fail `assert_matches`
    Reject,
}

/// Which identifier and pattern accepted a message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchEvidence {
    pub identifier: String,
    pub pattern: String,
    /// True when the identifier was unknown and matched as a literal prefix
    pub fallback: bool,
}

/// Matches observed error messages against error queries
#[derive(Clone, Debug)]
pub struct ErrorClassifier {
    table: Arc<ErrorTable>,
    policy: UnknownIdentifierPolicy,
}

impl ErrorClassifier {
    pub fn new(table: Arc<ErrorTable>) -> Self {
        Self {
            table,
            policy: UnknownIdentifierPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: UnknownIdentifierPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn table(&self) -> &ErrorTable {
        &self.table
    }

    pub fn policy(&self) -> UnknownIdentifierPolicy {
        self.policy
    }

    /// True if any pattern of any identifier in the query matches
    pub fn matches(&self, message: &str, query: &ErrorQuery) -> bool {
        self.explain(message, query).is_some()
    }

    /// Find the first identifier/pattern pair that accepts `message`
    pub fn explain(&self, message: &str, query: &ErrorQuery) -> Option<MatchEvidence> {
        for identifier in query.identifiers() {
            if let Some(evidence) = self.match_identifier(message, identifier) {
                tracing::debug!(
                    query = %query,
                    identifier = %evidence.identifier,
                    pattern = %evidence.pattern,
                    fallback = evidence.fallback,
                    "error message matched"
                );
                return Some(evidence);
            }
        }
        None
    }

    fn match_identifier(&self, message: &str, identifier: &str) -> Option<MatchEvidence> {
        match self.table.lookup(identifier) {
            Some(patterns) => patterns
                .iter()
                .find(|p| p.is_match(message))
                .map(|p| MatchEvidence {
                    identifier: identifier.to_string(),
                    pattern: p.to_string(),
                    fallback: false,
                }),
            None => match self.policy {
                UnknownIdentifierPolicy::LiteralFallback => {
                    tracing::trace!(identifier, "unknown identifier, matching as literal prefix");
                    let literal = ErrorPattern::literal(identifier);
                    literal.is_match(message).then(|| MatchEvidence {
                        identifier: identifier.to_string(),
                        pattern: identifier.to_string(),
                        fallback: true,
                    })
                }
                UnknownIdentifierPolicy::Reject => None,
            },
        }
    }

    /// Identifiers in the query that the table does not know
    pub fn unknown_identifiers<'q>(&self, query: &'q ErrorQuery) -> Vec<&'q str> {
        query
            .identifiers()
            .filter(|id| !self.table.contains(id))
            .collect()
    }

    /// Fail unless `message` matches `query`.
    ///
    /// Under [`UnknownIdentifierPolicy::Reject`] an unknown identifier fails
    /// before any matching is attempted.
    pub fn assert_matches(&self, message: &str, query: &ErrorQuery) -> Result<(), CheckFailure> {
        if self.policy == UnknownIdentifierPolicy::Reject {
            if let Some(identifier) = self.unknown_identifiers(query).first() {
                return Err(CheckFailure::UnknownIdentifier {
                    identifier: identifier.to_string(),
                    query: query.to_string(),
                });
            }
        }

        if self.matches(message, query) {
            Ok(())
        } else {
            Err(CheckFailure::ClassificationMismatch {
                query: query.to_string(),
                message: message.to_string(),
            })
        }
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
