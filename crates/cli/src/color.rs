// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. `--no-color` / `--color` flags
//! 2. NO_COLOR env var → no color
//! 3. COLOR env var → use color
//! 4. default:
//!    - If not stdout.is_tty() → no color
//!    - If CI env var set → no color
//!    - Else → auto

use std::io::IsTerminal;

use termcolor::ColorChoice;

use crate::env::{Env, names};

/// Color override from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Decide from the environment and terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `--no-color` wins over `--color`.
    pub fn from_flags(color: bool, no_color: bool) -> Self {
        match (color, no_color) {
            (_, true) => Self::Never,
            (true, false) => Self::Always,
            (false, false) => Self::Auto,
        }
    }
}

/// Resolve color choice from flags, then environment variables.
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` when set to any value
/// (including empty string) disables color. `COLOR` follows the same
/// convention for forcing color output.
pub fn resolve_color(mode: ColorMode, env: &impl Env) -> ColorChoice {
    match mode {
        ColorMode::Always => return ColorChoice::Always,
        ColorMode::Never => return ColorChoice::Never,
        ColorMode::Auto => {}
    }
    if env.var_os(names::NO_COLOR).is_some() {
        return ColorChoice::Never;
    }
    if env.var_os(names::COLOR).is_some() {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() || env.var_os(names::CI).is_some() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Color scheme for configuration output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Bold field name (e.g., "baseURL").
    pub fn key() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Cyan string value.
    pub fn value() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Green boolean value.
    pub fn flag() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green));
        spec
    }

    /// Yellow "(unset)" marker.
    pub fn unset() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
