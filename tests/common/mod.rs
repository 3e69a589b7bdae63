//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Snapshot fixture creation
//! - Binary invocation
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::fixtures;
//!
//! fn test_report() {
//!     let (_dir, base, head) = fixtures::create_snapshot_pair().unwrap();
//!     common::get_bin().arg("report").arg(&base).arg(&head).assert().success();
//! }
//! ```

pub mod fixtures;

use assert_cmd::Command;

/// Get the pkg-size-report binary command
#[allow(dead_code)]
pub fn get_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pkg-size-report"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Strip the padding from a rendered Markdown document so assertions do not
/// depend on column widths
#[allow(dead_code)]
pub fn squeeze(markdown: &str) -> String {
    markdown
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}
