// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.

use std::io::Write;

use crate::config::TestRunConfiguration;

/// Compact JSON, as handed to a child process.
pub fn to_string(config: &TestRunConfiguration) -> serde_json::Result<String> {
    serde_json::to_string(config)
}

/// Write pretty-printed JSON followed by a newline.
pub fn write(mut out: impl Write, config: &TestRunConfiguration) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut out, config)?;
    writeln!(out)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
