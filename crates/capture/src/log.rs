// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check log implementation.

use crate::check::{CheckEntry, CheckOutcome};
use parking_lot::Mutex;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::{Instant, SystemTime};

/// Log of executed checks, shared between clones
pub struct CheckLog {
    start: Instant,
    entries: Arc<Mutex<Vec<CheckEntry>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
    /// First failed mirror write, kept until inspected
    mirror_error: Arc<Mutex<Option<(io::ErrorKind, String)>>>,
}

impl CheckLog {
    /// Create a new in-memory check log
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            entries: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
            mirror_error: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a check log that also writes every entry to a file (JSONL format)
    pub fn with_file(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
            ..Self::new()
        })
    }

    /// Record the outcome of a check.
    ///
    /// The entry is always kept in memory. If mirroring it to the file
    /// fails, the first such error is kept for [`CheckLog::mirror_error`].
    pub fn record(&self, check: impl Into<String>, outcome: CheckOutcome) {
        let mut entries = self.entries.lock();
        let seq = entries.len() as u64;
        let entry = CheckEntry {
            seq,
            timestamp: SystemTime::now(),
            elapsed: self.start.elapsed(),
            check: check.into(),
            outcome,
        };

        entries.push(entry.clone());

        if let Some(ref writer) = self.file_writer {
            let mut w = writer.lock();
            let written = serde_json::to_string(&entry)
                .map_err(io::Error::from)
                .and_then(|json| writeln!(w, "{}", json))
                .and_then(|()| w.flush());
            if let Err(e) = written {
                let mut slot = self.mirror_error.lock();
                if slot.is_none() {
                    *slot = Some((e.kind(), e.to_string()));
                }
            }
        }
    }

    /// The first error hit while mirroring entries to the file, if any
    pub fn mirror_error(&self) -> Option<io::Error> {
        self.mirror_error
            .lock()
            .as_ref()
            .map(|(kind, msg)| io::Error::new(*kind, msg.clone()))
    }

    /// Get all recorded entries
    pub fn entries(&self) -> Vec<CheckEntry> {
        self.entries.lock().clone()
    }

    /// Find failed checks
    pub fn find_failures(&self) -> Vec<CheckEntry> {
        self.entries
            .lock()
            .iter()
            .filter(|e| matches!(e.outcome, CheckOutcome::Failed { .. }))
            .cloned()
            .collect()
    }

    /// Get the total number of entries
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Default for CheckLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CheckLog {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            entries: Arc::clone(&self.entries),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
            mirror_error: Arc::clone(&self.mirror_error),
        }
    }
}

impl std::fmt::Debug for CheckLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckLog")
            .field("len", &self.len())
            .field("mirrored", &self.file_writer.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
