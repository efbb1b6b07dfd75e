// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Summary reporting for a verification run.

use cliverify_capture::{CheckEntry, CheckOutcome};
use std::collections::BTreeMap;

/// Summary of recorded checks
pub struct VerificationReport {
    entries: Vec<CheckEntry>,
    title: Option<String>,
}

impl VerificationReport {
    /// Create a report from recorded checks
    pub fn new(entries: Vec<CheckEntry>) -> Self {
        Self {
            entries,
            title: None,
        }
    }

    /// Set the report title (defaults to "Verification Report")
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn passed(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// Count entries by outcome
    pub fn count_by_outcome(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        counts.insert("passed", self.passed());
        counts.insert("failed", self.failed());
        counts
    }

    /// Failed entries grouped by failure kind
    pub fn failures_by_kind(&self) -> BTreeMap<&str, Vec<&CheckEntry>> {
        let mut map: BTreeMap<&str, Vec<&CheckEntry>> = BTreeMap::new();
        for entry in &self.entries {
            if let CheckOutcome::Failed { kind, .. } = &entry.outcome {
                map.entry(kind.as_str()).or_default().push(entry);
            }
        }
        map
    }

    /// Generate markdown report
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        md.push_str(&format!(
            "# {}\n\n",
            self.title.as_deref().unwrap_or("Verification Report")
        ));

        md.push_str("## Summary\n\n");
        md.push_str(&format!("- Checks: {}\n", self.total()));
        md.push_str(&format!("- Passed: {}\n", self.passed()));
        md.push_str(&format!("- Failed: {}\n", self.failed()));
        md.push('\n');

        for (kind, entries) in self.failures_by_kind() {
            md.push_str(&format!("## {}\n\n", kind));
            md.push_str("| # | Check | Diagnostic |\n");
            md.push_str("|---|-------|------------|\n");
            for entry in entries {
                let diagnostic = entry.outcome.diagnostic().unwrap_or("");
                md.push_str(&format!(
                    "| {} | `{}` | {} |\n",
                    entry.seq,
                    entry.check,
                    escape_cell(diagnostic)
                ));
            }
            md.push('\n');
        }

        md
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
