// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};

use crate::classifier::UnknownIdentifierPolicy;
use crate::env;
use crate::record::RecordKind;
use crate::verifier::FailurePolicy;

/// Verify CLI error messages and structured output
#[derive(Parser, Debug)]
#[command(name = "cliverify", version, about = "Verify CLI error messages and structured output")]
pub struct Cli {
    /// Debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Mirror every check outcome to this JSONL file
    #[arg(long, global = true, value_name = "PATH")]
    pub check_log: Option<PathBuf>,

    /// Print a markdown summary of all checks
    #[arg(long, global = true)]
    pub summary: bool,

    /// Run every check and report all failures instead of stopping at the first
    #[arg(long, global = true)]
    pub keep_going: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check an error message against an error query
    Classify(ClassifyArgs),
    /// Reconcile a JSONL record listing against expected keys
    Records(RecordsArgs),
    /// Reconcile a file listing (files and directories)
    Listing(ListingArgs),
    /// Print the effective error table
    Table(TableArgs),
}

/// Where the error table comes from and how unknown identifiers behave
#[derive(Args, Debug, Clone, Default)]
pub struct ClassifierArgs {
    /// Error table file (TOML, or JSON with a .json extension)
    #[arg(long, value_name = "PATH")]
    pub table: Option<PathBuf>,

    /// Fail on identifiers the table does not know
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["message", "message_file"])))]
pub struct ClassifyArgs {
    /// Error query, e.g. `ShareNotFound;ResourceNotFound`
    #[arg(long, short = 'q')]
    pub query: String,

    /// Observed error message
    #[arg(long, short = 'm')]
    pub message: Option<String>,

    /// Read the observed error message from a file
    #[arg(long, value_name = "PATH")]
    pub message_file: Option<PathBuf>,

    /// Print which identifier and pattern matched
    #[arg(long)]
    pub explain: bool,

    #[command(flatten)]
    pub classifier: ClassifierArgs,
}

#[derive(Args, Debug)]
pub struct RecordsArgs {
    /// JSONL file with one observed record per line
    #[arg(long, value_name = "PATH")]
    pub records: PathBuf,

    /// Expected record key (repeatable)
    #[arg(long = "expect", value_name = "KEY")]
    pub expect: Vec<String>,

    /// File with one expected key per line
    #[arg(long, value_name = "PATH")]
    pub expect_file: Option<PathBuf>,

    /// Record kind, which selects the identity rule
    #[arg(long, value_enum, default_value = "file")]
    pub kind: CliRecordKind,

    /// Expected number of records (0 or less skips the count check)
    #[arg(long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Ignore observed records that were not expected
    #[arg(long)]
    pub allow_absent: bool,

    /// The listing must be empty
    #[arg(long, conflicts_with_all = ["expect", "expect_file", "count"])]
    pub empty: bool,
}

#[derive(Args, Debug)]
pub struct ListingArgs {
    /// JSONL file listing observed files
    #[arg(long, value_name = "PATH")]
    pub files: PathBuf,

    /// JSONL file listing observed directories
    #[arg(long, value_name = "PATH")]
    pub dirs: PathBuf,

    /// Expected file path, `dir/name` (repeatable)
    #[arg(long = "expect-file", value_name = "PATH")]
    pub expect_files: Vec<String>,

    /// Expected directory path (repeatable)
    #[arg(long = "expect-dir", value_name = "PATH")]
    pub expect_dirs: Vec<String>,
}

#[derive(Args, Debug)]
pub struct TableArgs {
    #[command(flatten)]
    pub classifier: ClassifierArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: TableFormat,
}

/// CLI-friendly record kind enum
#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum CliRecordKind {
    File,
    Directory,
    Container,
    Share,
}

impl From<CliRecordKind> for RecordKind {
    fn from(kind: CliRecordKind) -> Self {
        match kind {
            CliRecordKind::File => RecordKind::File,
            CliRecordKind::Directory => RecordKind::Directory,
            CliRecordKind::Container => RecordKind::Container,
            CliRecordKind::Share => RecordKind::Share,
        }
    }
}

/// Output format for `table`
#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum TableFormat {
    #[default]
    Text,
    Json,
}

impl Cli {
    pub fn failure_policy(&self) -> FailurePolicy {
        if self.keep_going {
            FailurePolicy::Collect
        } else {
            FailurePolicy::FailFast
        }
    }

    /// Check log path from the flag, falling back to `CLIVERIFY_CHECK_LOG`
    pub fn check_log_path(&self) -> Option<PathBuf> {
        self.check_log.clone().or_else(env::check_log)
    }

    /// Classifier settings of the selected subcommand (defaults when it has none)
    pub fn classifier_args(&self) -> ClassifierArgs {
        match &self.command {
            Command::Classify(args) => args.classifier.clone(),
            Command::Table(args) => args.classifier.clone(),
            Command::Records(_) | Command::Listing(_) => ClassifierArgs::default(),
        }
    }
}

impl ClassifierArgs {
    /// Table path from the flag, falling back to `CLIVERIFY_ERROR_TABLE`
    pub fn table_path(&self) -> Option<PathBuf> {
        self.table.clone().or_else(env::error_table)
    }

    pub fn policy(&self) -> UnknownIdentifierPolicy {
        if self.strict || env::strict_identifiers() {
            UnknownIdentifierPolicy::Reject
        } else {
            UnknownIdentifierPolicy::LiteralFallback
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
