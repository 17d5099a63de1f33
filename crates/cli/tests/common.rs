// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The `tds` binary with colors off and no user credentials.
pub fn tds(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("tds");
    cmd.current_dir(temp.path())
        .env("NO_COLOR", "1")
        .env("TODOSAURUS_CREDENTIALS", temp.path().join("credentials.toml"))
        .env_remove("TODOSAURUS_TOKEN_WORK")
        .env_remove("TDS_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Helper to create an initialized temp directory
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    tds(&temp).arg("init").assert().success();
    temp
}

/// Writes `content` to `path` under the project, creating parent directories.
pub fn write_file(temp: &TempDir, path: &str, content: &str) {
    let full = temp.path().join(path);
    if let Some(parent) = full.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(full, content).unwrap();
}

pub fn read_file(temp: &TempDir, path: &str) -> String {
    std::fs::read_to_string(temp.path().join(path)).unwrap()
}

/// Writes the saved tracker choice directly.
pub fn save_choice(temp: &TempDir, toml: &str) {
    write_file(temp, ".todosaurus/choice.toml", toml);
}

pub fn exists(temp: &TempDir, path: &str) -> bool {
    Path::new(&temp.path().join(path)).exists()
}
