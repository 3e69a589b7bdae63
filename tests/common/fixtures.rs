//! Test fixture helpers for writing snapshot files
//!
//! Snapshots are written as JSON into a temporary directory so tests can run
//! the binary against them.

#![allow(dead_code)]

use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Repository URL used by every fixture snapshot
pub const REPO_URL: &str = "https://github.com/acme/widget";

/// Write a snapshot JSON file into `dir`
pub fn write_snapshot(
    dir: &Path,
    file_name: &str,
    ref_name: &str,
    tarball_size: u64,
    files: &[(&str, u64)],
) -> anyhow::Result<PathBuf> {
    let path = dir.join(file_name);
    let snapshot = json!({
        "ref": { "repoUrl": REPO_URL, "refName": ref_name },
        "tarballSize": tarball_size,
        "files": files
            .iter()
            .map(|(path, size)| json!({ "path": path, "size": size }))
            .collect::<Vec<_>>(),
    });

    fs::write(&path, serde_json::to_string_pretty(&snapshot)?)?;
    Ok(path)
}

/// Base and head snapshots of a small package
///
/// - `/dist/index.js` grows from 1000 to 1500 bytes
/// - `/dist/index.js.map` stays at 4000 bytes
/// - `/dist/legacy.js` is removed
/// - `/dist/extra.js` is added
/// - `/README.md` stays at 700 bytes
///
/// # Returns
///
/// A tuple of (TempDir, base path, head path) - the TempDir must be kept alive
pub fn create_snapshot_pair() -> anyhow::Result<(TempDir, PathBuf, PathBuf)> {
    let temp_dir = TempDir::new()?;

    let base = write_snapshot(
        temp_dir.path(),
        "base.json",
        "main",
        2000,
        &[
            ("/dist/index.js", 1000),
            ("/dist/index.js.map", 4000),
            ("/dist/legacy.js", 300),
            ("/README.md", 700),
        ],
    )?;
    let head = write_snapshot(
        temp_dir.path(),
        "head.json",
        "feature",
        2200,
        &[
            ("/dist/index.js", 1500),
            ("/dist/index.js.map", 4000),
            ("/dist/extra.js", 200),
            ("/README.md", 700),
        ],
    )?;

    Ok((temp_dir, base, head))
}

/// Base and head snapshots with identical contents
pub fn create_identical_pair() -> anyhow::Result<(TempDir, PathBuf, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let files = [("/index.js", 512), ("/package.json", 300)];

    let base = write_snapshot(temp_dir.path(), "base.json", "main", 400, &files)?;
    let head = write_snapshot(temp_dir.path(), "head.json", "feature", 400, &files)?;

    Ok((temp_dir, base, head))
}
