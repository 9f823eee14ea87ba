// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! e2econf CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use e2econf::cli::{Cli, Command};
use e2econf::env::names;
use e2econf::error::ExitCode;

mod cmd_exec;
mod cmd_show;

fn init_logging() {
    let filter = EnvFilter::try_from_env(names::E2ECONF_LOG)
        .unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("e2econf: {}", e);
            let code = match e.downcast_ref::<e2econf::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            };
            code as i32
        }
    };

    std::process::exit(exit_code);
}

fn run() -> anyhow::Result<i32> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success as i32)
        }
        Some(Command::Show(args)) => {
            cmd_show::run(&cli, args)?;
            Ok(ExitCode::Success as i32)
        }
        Some(Command::Exec(args)) => cmd_exec::run(&cli, args),
    }
}
