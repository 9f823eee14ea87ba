// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `e2econf exec` command implementation.
//!
//! Hands the configuration to an external engine process. The child inherits
//! stdio and the process environment, plus settings-file values the process
//! does not already define, plus `E2ECONF_CONFIG` holding the JSON record.

use std::process::Command;

use anyhow::Result;

use e2econf::cli::{Cli, ExecArgs};
use e2econf::config::ConfigurationBuilder;
use e2econf::env::names;
use e2econf::env_file::load_environment;
use e2econf::error::{Error, ExitCode};
use e2econf::output::json;

pub fn run(cli: &Cli, args: &ExecArgs) -> Result<i32> {
    let env = load_environment(cli.env_file.as_deref());
    let config = ConfigurationBuilder::new(&env).build();
    let config_json = json::to_string(&config).map_err(|e| Error::Internal(e.to_string()))?;

    let program_name = args.program.to_string_lossy().into_owned();
    tracing::debug!(program = %program_name, "starting engine");

    let status = Command::new(&args.program)
        .args(&args.args)
        .envs(env.file_vars_for_child())
        .env(names::E2ECONF_CONFIG, config_json)
        .status()
        .map_err(|source| Error::Spawn {
            program: program_name.clone(),
            source,
        })?;

    tracing::debug!(program = %program_name, %status, "engine exited");
    Ok(status.code().unwrap_or(ExitCode::Failure as i32))
}
