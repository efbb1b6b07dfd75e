// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check outcome recording for verification harnesses.
//!
//! Every assertion a harness runs against a CLI's output can be recorded
//! here, so a test run can surface all failing checks at once or replay
//! them later from a JSONL file.

mod check;
mod duration_serde;
mod log;

pub use check::{CheckEntry, CheckOutcome};
pub use log::CheckLog;
