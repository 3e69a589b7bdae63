//! Command handlers for pkg-size-report CLI
//!
//! Each submodule handles a specific CLI command.

pub mod completions;
pub mod init;
pub mod report;

// Re-export command functions for convenient access
pub use completions::cmd_completions;
pub use init::cmd_init;
pub use report::{cmd_report, ReportOptions};
