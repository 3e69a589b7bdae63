#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! pkg-size-report library
//!
//! This library compares the file sizes of two package snapshots and renders
//! the result as a Markdown report suitable for a pull-request comment.
//! It can be used programmatically in addition to the CLI interface.
//!
//! # Basic Example
//!
//! ```
//! use pkg_size_report::config::ReportConfig;
//! use pkg_size_report::report::build_report;
//! use pkg_size_report::snapshot::SizeSnapshot;
//!
//! let base: SizeSnapshot = serde_json::from_str(r#"{
//!     "ref": { "repoUrl": "https://github.com/o/r", "refName": "main" },
//!     "tarballSize": 1000,
//!     "files": [{ "path": "/index.js", "size": 1000 }]
//! }"#)?;
//! let head: SizeSnapshot = serde_json::from_str(r#"{
//!     "ref": { "repoUrl": "https://github.com/o/r", "refName": "feature" },
//!     "tarballSize": 1200,
//!     "files": [{ "path": "/index.js", "size": 1500 }]
//! }"#)?;
//!
//! let report = build_report(&ReportConfig::default(), &base, &head);
//! assert!(report.starts_with("### 📊 Package size report"));
//! assert!(report.contains("<kbd>50%↑</kbd>"));
//! # Ok::<(), serde_json::Error>(())
//! ```
//!
//! # Hiding Generated Files
//!
//! ```
//! use pkg_size_report::config::{ConfigFile, ConfigOverrides, ConfigResolver};
//!
//! let overrides = ConfigOverrides {
//!     hide_files: Some("*.{map,d.ts}".to_string()),
//!     ..Default::default()
//! };
//! let config = ConfigResolver::resolve(&ConfigFile::default(), &overrides)?;
//!
//! let glob = config.hide_files.as_ref().unwrap();
//! assert!(glob.is_match("/dist/index.js.map"));
//! assert!(!glob.is_match("/dist/index.js"));
//! # Ok::<(), pkg_size_report::error::ReportError>(())
//! ```

/// Command-line interface definition
pub mod cli;
/// Command handlers for the CLI
pub mod cmd;
/// Configuration file loading and option resolution
pub mod config;
/// Error types with suggestions and exit codes
pub mod error;
/// Byte size and percentage formatting
pub mod fmt;
/// Glob patterns for hiding files
pub mod glob;
/// Filesystem abstraction
pub mod infra;
/// Markdown building blocks
pub mod markdown;
/// Snapshot comparison and report rendering
pub mod report;
/// Package size snapshots
pub mod snapshot;
