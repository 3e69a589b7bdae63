//! Init command implementation
//!
//! Handles the `pkg-size-report init` command which writes a
//! `.pkg-size-report.toml` with every option at its default value

use anyhow::Result;
use console::{style, Emoji};
use std::env;
use std::path::Path;

use crate::config::{self, ConfigFile, ConfigLoader};
use crate::error::ReportError;

static ROCKET: Emoji = Emoji("🚀", ">");
static CHECKMARK: Emoji = Emoji("✅", "[OK]");
static INFO: Emoji = Emoji("ℹ️", "i");

/// Initialize pkg-size-report configuration in the current directory
///
/// # Examples
///
/// ```no_run
/// use pkg_size_report::cmd::init::cmd_init;
///
/// // Refuses to replace an existing .pkg-size-report.toml
/// cmd_init(false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_init(force: bool) -> Result<()> {
    let project_root = env::current_dir()?;
    cmd_init_in(&project_root, force)
}

/// Initialize configuration in the given directory
pub fn cmd_init_in(project_root: &Path, force: bool) -> Result<()> {
    println!(
        "{} {} Initializing pkg-size-report",
        ROCKET,
        style("pkg-size-report init").bold()
    );
    println!();

    if ConfigLoader::exists(project_root) {
        if !force {
            return Err(ReportError::ConfigExists {
                path: project_root.join(config::CONFIG_FILE_NAME),
            }
            .into());
        }
        log::info!("Overwriting existing {}", config::CONFIG_FILE_NAME);
    }

    let defaults = ConfigFile::with_defaults();
    ConfigLoader::save(&defaults, project_root)?;

    println!(
        "{} Created {}",
        CHECKMARK,
        style(config::CONFIG_FILE_NAME).cyan().bold()
    );
    println!();
    println!("{}  Report options:", INFO);
    for (key, value) in [
        ("unchanged-files", &defaults.unchanged_files),
        ("sort-by", &defaults.sort_by),
        ("sort-order", &defaults.sort_order),
    ] {
        println!(
            "   {} {} = {}",
            style("•").dim(),
            key,
            style(value.as_deref().unwrap_or_default()).green()
        );
    }
    println!();
    println!(
        "   Add {} to move generated files into a separate table.",
        style("hide-files = \"*.map\"").cyan()
    );

    Ok(())
}
