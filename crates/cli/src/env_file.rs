// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Settings file (`.env`) loading.
//!
//! Parsing is delegated to `dotenvy`. Loading never touches the process
//! environment: values are returned as a map and layered underneath it by
//! [`Environment`]. A missing or broken file never stops the run.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::env::Environment;
use crate::error::Error;

/// Settings file name used when no path is given.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Result of attempting to load a settings file.
#[derive(Debug)]
pub enum EnvFileOutcome {
    /// File parsed; holds every key it defines (last occurrence wins).
    Loaded {
        path: PathBuf,
        vars: BTreeMap<String, String>,
    },
    /// No file at the path.
    Missing { path: PathBuf },
    /// File exists but could not be read or parsed. Contributes nothing.
    Invalid { path: PathBuf, error: Error },
}

impl EnvFileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Loaded { path, .. } | Self::Missing { path } | Self::Invalid { path, .. } => {
                path
            }
        }
    }

    /// Variables contributed by the file (empty unless loaded).
    pub fn into_vars(self) -> BTreeMap<String, String> {
        match self {
            Self::Loaded { vars, .. } => vars,
            Self::Missing { .. } | Self::Invalid { .. } => BTreeMap::new(),
        }
    }
}

/// Pick the settings file path.
///
/// `explicit` already folds in `E2ECONF_ENV_FILE` (clap binds it to
/// `--env-file`). Without it, `.env` in the current directory; parent
/// directories are not searched.
pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) if !path.as_os_str().is_empty() => path.to_path_buf(),
        _ => PathBuf::from(DEFAULT_ENV_FILE),
    }
}

/// Parse the settings file at `path`.
pub fn load(path: &Path) -> EnvFileOutcome {
    let path = path.to_path_buf();
    let iter = match dotenvy::from_path_iter(&path) {
        Ok(iter) => iter,
        Err(err) if err.not_found() => return EnvFileOutcome::Missing { path },
        Err(err) => return invalid(path, &err),
    };

    let mut vars = BTreeMap::new();
    for item in iter {
        match item {
            Ok((key, value)) => {
                vars.insert(key, value);
            }
            Err(err) => return invalid(path, &err),
        }
    }
    EnvFileOutcome::Loaded { path, vars }
}

fn invalid(path: PathBuf, err: &dotenvy::Error) -> EnvFileOutcome {
    let error = Error::EnvFile {
        path: path.clone(),
        message: err.to_string(),
    };
    EnvFileOutcome::Invalid { path, error }
}

/// Resolve, load and layer the settings file under the process environment.
///
/// Failures are logged and absorbed.
pub fn load_environment(explicit: Option<&Path>) -> Environment {
    let path = resolve_path(explicit);
    let outcome = load(&path);
    match &outcome {
        EnvFileOutcome::Loaded { path, vars } => {
            tracing::debug!(path = %path.display(), count = vars.len(), "loaded env file");
        }
        EnvFileOutcome::Missing { path } => {
            tracing::debug!(path = %path.display(), "no env file");
        }
        EnvFileOutcome::Invalid { error, .. } => {
            tracing::warn!("ignoring {}", error);
        }
    }
    Environment::with_file_vars(outcome.into_vars())
}

#[cfg(test)]
#[path = "env_file_tests.rs"]
mod tests;
