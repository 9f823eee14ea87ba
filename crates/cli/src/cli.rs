// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;
use crate::env::names;

/// Builds the configuration for an end-to-end browser test run
#[derive(Parser)]
#[command(name = "e2econf")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file loaded before the configuration is built
    #[arg(long, global = true, value_name = "PATH", env = names::E2ECONF_ENV_FILE)]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the test run configuration
    Show(ShowArgs),
    /// Run a test engine with the configuration in its environment
    Exec(ExecArgs),
}

#[derive(clap::Args)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

impl ShowArgs {
    pub fn color_mode(&self) -> ColorMode {
        ColorMode::from_flags(self.color, self.no_color)
    }
}

#[derive(clap::Args)]
pub struct ExecArgs {
    /// Engine program
    #[arg(value_name = "COMMAND")]
    pub program: OsString,

    /// Arguments passed to the engine unchanged
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<OsString>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
