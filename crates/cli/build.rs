// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build script that generates env var name constants for `env.rs`.

// Build scripts should panic on failure: there is no meaningful recovery.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::env;
use std::fs;
use std::path::Path;

/// (name, doc) for every environment variable the tool reads or sets.
const NAMES: &[(&str, &str)] = &[
    ("URL", "base URL for the test run"),
    ("E2ECONF_LOG", "configures tracing log filter"),
    ("E2ECONF_ENV_FILE", "path to the settings file (default: .env)"),
    (
        "E2ECONF_CONFIG",
        "JSON configuration handed to the `exec` child",
    ),
    ("NO_COLOR", "disables color output (any value)"),
    ("COLOR", "forces color output (any value)"),
    ("CI", "indicates CI environment"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest = Path::new(&out_dir).join("env_names.rs");

    let mut contents = String::new();
    for (name, doc) in NAMES {
        contents.push_str(&format!(
            "/// Environment variable: {doc}.\npub const {name}: &str = \"{name}\";\n"
        ));
    }

    fs::write(dest, contents).expect("failed to write env_names.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
