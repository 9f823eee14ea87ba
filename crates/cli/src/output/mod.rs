// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for the test run configuration.

pub mod json;
pub mod text;

/// Field names as the engine knows them.
pub mod keys {
    pub const TEST_DIR: &str = "testDirectory";
    pub const HEADLESS: &str = "headless";
    pub const BASE_URL: &str = "baseURL";
}
