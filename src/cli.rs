//! Command-line interface definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Package size report generator
///
/// pkg-size-report compares the file sizes of two package snapshots and
/// renders a Markdown report ready to post as a review comment.
#[derive(Parser, Debug)]
#[command(name = "pkg-size-report", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Leave the emoji out of the report title
    #[arg(long, global = true)]
    pub no_emoji: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a size report comparing two snapshots
    Report {
        /// Base snapshot (JSON)
        #[arg(value_name = "BASE")]
        base: PathBuf,

        /// Head snapshot (JSON)
        #[arg(value_name = "HEAD")]
        head: PathBuf,

        /// Config file (default: .pkg-size-report.toml in the current directory)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// How to show files with unchanged size: show, hide, collapse
        #[arg(long, value_name = "MODE")]
        unchanged_files: Option<String>,

        /// Glob of files to move into the "Hidden files" table
        #[arg(long, value_name = "GLOB")]
        hide_files: Option<String>,

        /// Sort field: base-size, head-size, delta, path
        #[arg(long, value_name = "FIELD")]
        sort_by: Option<String>,

        /// Sort order: asc, desc
        #[arg(long, value_name = "ORDER")]
        sort_order: Option<String>,

        /// Text appended at the end of the report
        #[arg(long, value_name = "TEXT")]
        signature: Option<String>,

        /// Write the report to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output a JSON summary instead of Markdown (for CI/CD integration)
        #[arg(long)]
        json: bool,
    },

    /// Create a .pkg-size-report.toml with default settings
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
