// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration for end-to-end browser test runs.

pub mod cli;
pub mod color;
pub mod config;
pub mod env;
pub mod env_file;
pub mod error;
pub mod output;

pub use cli::{Cli, Command, ExecArgs, OutputFormat, ShowArgs};
pub use color::ColorMode;
pub use config::{ConfigurationBuilder, TestRunConfiguration};
pub use env::{Env, Environment, ProcessEnv};
pub use env_file::EnvFileOutcome;
pub use error::{Error, ExitCode, Result};
