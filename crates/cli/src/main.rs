// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! cliverify binary entry point.

use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cliverify::capture::CheckLog;
use cliverify::classifier::ErrorClassifier;
use cliverify::cli::{
    ClassifierArgs, ClassifyArgs, Cli, Command, ListingArgs, RecordsArgs, TableArgs, TableFormat,
};
use cliverify::config::ErrorTableConfig;
use cliverify::expected::ExpectedSet;
use cliverify::output::{print_error, print_verdict};
use cliverify::query::ErrorQuery;
use cliverify::reconcile::AbsentPolicy;
use cliverify::record::{parse_jsonl, Record, RecordKind};
use cliverify::table::ErrorTable;
use cliverify::verifier::{Verifier, VerifyError};

const EXIT_FAILED: i32 = 1;
const EXIT_ERROR: i32 = 2;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let verifier = match build_verifier(&cli).await {
        Ok(verifier) => verifier,
        Err(e) => {
            print_error(e);
            std::process::exit(EXIT_ERROR);
        }
    };

    let outcome = run(&cli.command, &verifier).await;

    for entry in verifier.log().entries() {
        print_verdict(&entry);
    }
    if cli.summary && !verifier.log().is_empty() {
        println!("{}", verifier.report().to_markdown());
    }

    // A lost check log is reported even when a check already failed
    let result = verifier
        .ensure_log_written()
        .and(outcome)
        .and_then(|()| verifier.finish());
    let code = match result {
        Ok(()) => 0,
        // Verdict lines already carry the diagnostic
        Err(VerifyError::Check(_)) => EXIT_FAILED,
        Err(e @ VerifyError::Failed { .. }) => {
            print_error(e);
            EXIT_FAILED
        }
        Err(e) => {
            print_error(e);
            EXIT_ERROR
        }
    };
    std::process::exit(code);
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn build_verifier(cli: &Cli) -> Result<Verifier, VerifyError> {
    let args = cli.classifier_args();
    let table = load_table(&args).await?;
    let classifier = ErrorClassifier::new(Arc::new(table)).with_policy(args.policy());

    let log = match cli.check_log_path() {
        Some(path) => CheckLog::with_file(&path).map_err(|source| io_error(&path, source))?,
        None => CheckLog::new(),
    };

    Ok(Verifier::new(classifier)
        .with_log(log)
        .with_policy(cli.failure_policy()))
}

async fn load_table(args: &ClassifierArgs) -> Result<ErrorTable, VerifyError> {
    let Some(path) = args.table_path() else {
        return Ok(ErrorTable::builtin()?);
    };
    let content = read(&path).await?;
    let config = ErrorTableConfig::parse_for(&path, &content)?;
    tracing::debug!(path = %path.display(), "loaded error table");
    Ok(ErrorTable::from_config(&config)?)
}

async fn run(command: &Command, verifier: &Verifier) -> Result<(), VerifyError> {
    match command {
        Command::Classify(args) => classify(args, verifier).await,
        Command::Records(args) => records(args, verifier).await,
        Command::Listing(args) => listing(args, verifier).await,
        Command::Table(args) => table(args, verifier),
    }
}

async fn classify(args: &ClassifyArgs, verifier: &Verifier) -> Result<(), VerifyError> {
    let message = match (&args.message, &args.message_file) {
        (Some(message), _) => message.clone(),
        (None, Some(path)) => read(path).await?.trim_end_matches(['\r', '\n']).to_string(),
        (None, None) => String::new(),
    };

    if args.explain {
        let query = ErrorQuery::parse(&args.query);
        match verifier.classifier().explain(&message, &query) {
            Some(evidence) if evidence.fallback => println!(
                "matched {} by literal prefix '{}'",
                evidence.identifier, evidence.pattern
            ),
            Some(evidence) => println!("matched {} via '{}'", evidence.identifier, evidence.pattern),
            None => println!("no identifier in '{}' matched", query),
        }
    }

    verifier.error_matches(&message, &args.query)?;
    Ok(())
}

async fn records(args: &RecordsArgs, verifier: &Verifier) -> Result<(), VerifyError> {
    let Some(observed) = load_records(&args.records, verifier).await? else {
        return Ok(());
    };
    let kind = RecordKind::from(args.kind);

    if args.empty {
        verifier.no_records(&observed)?;
        return Ok(());
    }

    if let Some(count) = args.count {
        let rule = kind.key_rule();
        verifier.count(&observed, count, |record| rule.key(record).map(|_| ()))?;
    }

    let mut expected: ExpectedSet<String> = args.expect.iter().cloned().collect();
    if let Some(path) = &args.expect_file {
        expected.extend(read_keys(&read(path).await?));
    }
    if args.count.is_none() || !expected.is_empty() {
        let policy = AbsentPolicy::from_fail_if_absent(!args.allow_absent);
        verifier.records(&observed, &mut expected, kind, policy)?;
    }
    Ok(())
}

async fn listing(args: &ListingArgs, verifier: &Verifier) -> Result<(), VerifyError> {
    let Some(files) = load_records(&args.files, verifier).await? else {
        return Ok(());
    };
    let Some(dirs) = load_records(&args.dirs, verifier).await? else {
        return Ok(());
    };

    let mut expected_files: ExpectedSet<String> = args.expect_files.iter().cloned().collect();
    let mut expected_dirs: ExpectedSet<String> = args.expect_dirs.iter().cloned().collect();
    verifier.file_listing(&files, &dirs, &mut expected_files, &mut expected_dirs)?;
    Ok(())
}

fn table(args: &TableArgs, verifier: &Verifier) -> Result<(), VerifyError> {
    let table = verifier.classifier().table();
    match args.format {
        TableFormat::Text => {
            for (identifier, patterns) in table.iter() {
                println!("{}", identifier);
                for pattern in patterns {
                    println!("  {}", pattern);
                }
            }
        }
        TableFormat::Json => {
            let entries: std::collections::BTreeMap<_, _> = table.iter().collect();
            let json = serde_json::to_string_pretty(&entries)
                .map_err(|e| VerifyError::Table(e.into()))?;
            println!("{}", json);
        }
    }
    Ok(())
}

/// Parse a JSONL listing, recording malformed input as a failed check.
///
/// `None` means parsing failed and the failure policy let execution go on.
async fn load_records(
    path: &Path,
    verifier: &Verifier,
) -> Result<Option<Vec<Record>>, VerifyError> {
    let text = read(path).await?;
    match parse_jsonl(&text) {
        Ok(records) => Ok(Some(records)),
        Err(failure) => {
            verifier.check(format!("parse {}", path.display()), Err(failure))?;
            Ok(None)
        }
    }
}

/// One key per line; blank lines are skipped
fn read_keys(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
}

async fn read(path: &Path) -> Result<String, VerifyError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| io_error(path, source))
}

fn io_error(path: &Path, source: std::io::Error) -> VerifyError {
    VerifyError::Io {
        path: path.display().to_string(),
        source,
    }
}
