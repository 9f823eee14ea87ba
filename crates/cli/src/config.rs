// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test run configuration.
//!
//! Built once at startup from the environment and handed, unchanged, to the
//! external test-execution engine. Construction cannot fail.

use serde::Serialize;

use crate::env::{Env, names};

/// Directory holding test specification files.
pub const TEST_DIR: &str = "./tests";

/// Browser automation runs without a visible UI.
pub const HEADLESS: bool = true;

/// Configuration record consumed by the test-execution engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestRunConfiguration {
    #[serde(rename = "testDirectory")]
    test_dir: String,

    headless: bool,

    /// Absent from JSON when unset.
    #[serde(rename = "baseURL", skip_serializing_if = "Option::is_none")]
    base_url: Option<String>,
}

impl TestRunConfiguration {
    pub fn test_dir(&self) -> &str {
        &self.test_dir
    }

    pub fn headless(&self) -> bool {
        self.headless
    }

    /// Root URL for relative navigation targets, exactly as found in `URL`.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }
}

/// Builds a [`TestRunConfiguration`] from an environment.
pub struct ConfigurationBuilder<E> {
    env: E,
}

impl<E: Env> ConfigurationBuilder<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Produce the configuration.
    ///
    /// Only `URL` is consulted. An unset `URL` leaves `base_url` as `None`;
    /// an empty one yields `Some("")`.
    pub fn build(&self) -> TestRunConfiguration {
        TestRunConfiguration {
            test_dir: TEST_DIR.to_string(),
            headless: HEADLESS,
            base_url: self.base_url(),
        }
    }

    fn base_url(&self) -> Option<String> {
        let Some(raw) = self.env.var_os(names::URL) else {
            tracing::debug!("{} is unset", names::URL);
            return None;
        };
        match raw.into_string() {
            Ok(url) => {
                tracing::debug!(base_url = %url, "{} is set", names::URL);
                Some(url)
            }
            Err(raw) => {
                let url = raw.to_string_lossy().into_owned();
                tracing::warn!(base_url = %url, "{} is not valid unicode", names::URL);
                Some(url)
            }
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
