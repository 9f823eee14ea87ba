// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! ```text
//! testDirectory: ./tests
//! headless: true
//! baseURL: "https://example.com"
//! ```
//!
//! Set values are quoted and escaped; an unset value prints a bare
//! `(unset)`, which no quoted value can collide with.

use std::io::Write;

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::keys;
use crate::color::scheme;
use crate::config::TestRunConfiguration;

/// Marker for a field with no value.
pub const UNSET: &str = "(unset)";

/// Text output formatter with color support.
pub struct TextFormatter<W = StandardStream> {
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn new(color_choice: ColorChoice) -> Self {
        Self::with_writer(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write one line per field.
    pub fn write_config(&mut self, config: &TestRunConfiguration) -> std::io::Result<()> {
        let test_dir = format!("{:?}", config.test_dir());
        self.write_field(keys::TEST_DIR, &scheme::value(), &test_dir)?;
        let headless = if config.headless() { "true" } else { "false" };
        self.write_field(keys::HEADLESS, &scheme::flag(), headless)?;

        match config.base_url() {
            Some(url) => {
                let url = format!("{url:?}");
                self.write_field(keys::BASE_URL, &scheme::value(), &url)
            }
            None => self.write_field(keys::BASE_URL, &scheme::unset(), UNSET),
        }
    }

    fn write_field(&mut self, key: &str, spec: &ColorSpec, value: &str) -> std::io::Result<()> {
        self.out.set_color(&scheme::key())?;
        write!(self.out, "{}", key)?;
        self.out.reset()?;
        write!(self.out, ": ")?;
        self.out.set_color(spec)?;
        write!(self.out, "{}", value)?;
        self.out.reset()?;
        writeln!(self.out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
