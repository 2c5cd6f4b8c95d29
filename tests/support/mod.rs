//! Test support utilities for git-credential-1password integration tests.
//!
//! Provides an isolated environment with a fake `op` executable that
//! records its arguments and answers from fixture files.

#![allow(dead_code)]

pub mod assertions;

#[allow(unused_imports)]
pub use assertions::*;

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// The fake `op` logs to and reads fixtures from this directory only, so
/// tests can safely run in parallel.
pub struct Test {
    /// Holds the op call log and the item fixture
    pub dir: TempDir,
}

impl Test {
    /// Create an environment where every `op item get` reports a missing item.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create an environment where `op item get` prints `json`.
    pub fn with_item(json: &str) -> Self {
        let t = Self::new();
        fs::write(t.item_path(), json).expect("failed to write item fixture");
        t
    }

    /// Create an environment holding a login with the given fields.
    pub fn with_login(username: &str, password: &str) -> Self {
        Self::with_item(&format!(
            r#"[{{"id":"username","type":"STRING","purpose":"USERNAME","label":"username","value":"{}"}},{{"id":"password","type":"CONCEALED","purpose":"PASSWORD","label":"password","value":"{}"}}]"#,
            username, password
        ))
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.path().join("op.log")
    }

    pub fn item_path(&self) -> PathBuf {
        self.dir.path().join("item.json")
    }

    /// Argument lists of every `op` invocation, oldest first.
    pub fn op_calls(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
