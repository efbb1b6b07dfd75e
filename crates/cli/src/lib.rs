// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI verification harness
//!
//! Checks that a command-line tool under test failed for the expected
//! reason and that its structured output lists exactly the expected items.
//!
//! - [`classifier::ErrorClassifier`] decides whether an error message is one
//!   of the conditions named by an [`query::ErrorQuery`] such as
//!   `ShareNotFound;ResourceNotFound`.
//! - [`reconcile`] consumes observed records against an
//!   [`expected::ExpectedSet`] and reports what is missing or unexpected.
//! - [`verifier::Verifier`] runs both kinds of check and records every
//!   outcome in a [`capture::CheckLog`].
//!
//! ```
//! use std::sync::Arc;
//! use cliverify::classifier::ErrorClassifier;
//! use cliverify::query::ErrorQuery;
//! use cliverify::table::ErrorTable;
//!
//! let table = Arc::new(ErrorTable::builtin().unwrap());
//! let classifier = ErrorClassifier::new(table);
//! let query = ErrorQuery::parse("ShareNotFound");
//! assert!(classifier.matches("The specified share does not exist.", &query));
//! ```

/// Re-exported check log types from cliverify-capture crate.
pub mod capture {
    pub use cliverify_capture::{CheckEntry, CheckLog, CheckOutcome};
}
pub mod classifier;
#[doc(hidden)]
pub mod cli;
pub mod config;
#[doc(hidden)]
pub mod env;
pub mod expected;
pub mod failure;
#[doc(hidden)]
pub mod output;
pub mod pattern;
pub mod query;
pub mod reconcile;
pub mod record;
pub mod report;
pub mod table;
pub mod verifier;

pub use classifier::{ErrorClassifier, UnknownIdentifierPolicy};
pub use expected::ExpectedSet;
pub use failure::{CheckFailure, FailureKind};
pub use query::ErrorQuery;
pub use record::{Record, RecordKind};
pub use table::ErrorTable;
pub use verifier::{FailurePolicy, Verifier, VerifyError};
