// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variable access.
//!
//! Configuration never reads `std::env` directly. It goes through [`Env`],
//! which lets the settings file sit underneath the process environment
//! without mutating it, and lets tests supply a plain map.

use std::collections::BTreeMap;
use std::ffi::OsString;

/// Environment variable names, generated by `build.rs`.
pub mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

/// Read-only lookup of named environment values.
pub trait Env {
    /// Value of `name`, or `None` when unset.
    fn var_os(&self, name: &str) -> Option<OsString>;
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Env for ProcessEnv {
    fn var_os(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }
}

impl Env for BTreeMap<String, String> {
    fn var_os(&self, name: &str) -> Option<OsString> {
        self.get(name).map(OsString::from)
    }
}

impl<E: Env + ?Sized> Env for &E {
    fn var_os(&self, name: &str) -> Option<OsString> {
        (**self).var_os(name)
    }
}

/// Process values layered over settings-file values.
///
/// A name set in the process (even to an empty string) always wins; the file
/// only fills in names the process leaves unset.
#[derive(Debug, Clone, Default)]
pub struct Environment<P = ProcessEnv> {
    process: P,
    file: BTreeMap<String, String>,
}

impl Environment<ProcessEnv> {
    /// Layer `file` values under the live process environment.
    pub fn with_file_vars(file: BTreeMap<String, String>) -> Self {
        Self::layered(ProcessEnv, file)
    }
}

impl<P: Env> Environment<P> {
    pub fn layered(process: P, file: BTreeMap<String, String>) -> Self {
        Self { process, file }
    }

    /// File entries not shadowed by the process, in key order.
    ///
    /// These are the values a child process needs on top of what it inherits.
    pub fn file_vars_for_child(&self) -> Vec<(&str, &str)> {
        self.file
            .iter()
            .filter(|(key, _)| self.process.var_os(key).is_none())
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect()
    }
}

impl<P: Env> Env for Environment<P> {
    fn var_os(&self, name: &str) -> Option<OsString> {
        self.process
            .var_os(name)
            .or_else(|| self.file.get(name).map(OsString::from))
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
