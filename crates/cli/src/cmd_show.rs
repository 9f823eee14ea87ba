// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `e2econf show` command implementation.

use std::path::PathBuf;

use anyhow::Result;

use e2econf::cli::{Cli, OutputFormat, ShowArgs};
use e2econf::color::resolve_color;
use e2econf::config::ConfigurationBuilder;
use e2econf::env_file::load_environment;
use e2econf::error::Error;
use e2econf::output::{json, text::TextFormatter};

pub fn run(cli: &Cli, args: &ShowArgs) -> Result<()> {
    let env = load_environment(cli.env_file.as_deref());
    let config = ConfigurationBuilder::new(&env).build();

    let written = match args.output {
        OutputFormat::Text => {
            TextFormatter::new(resolve_color(args.color_mode(), &env)).write_config(&config)
        }
        OutputFormat::Json => json::write(std::io::stdout().lock(), &config),
    };
    written.map_err(|source| Error::Io {
        path: PathBuf::from("<stdout>"),
        source,
    })?;
    Ok(())
}
