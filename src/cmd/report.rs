//! Report command implementation
//!
//! Handles the `pkg-size-report report` command which loads two snapshots,
//! resolves the display configuration and renders the size report

use anyhow::{Context, Result};
use console::{style, Emoji};
use std::env;
use std::path::PathBuf;

use crate::config::{ConfigFile, ConfigLoader, ConfigOverrides, ConfigResolver, ReportConfig};
use crate::error::ReportError;
use crate::infra::{FileSystem, RealFileSystem};
use crate::report::{ReportBuilder, ReportSummary};
use crate::snapshot::SnapshotLoader;

static CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Inputs of the `report` command
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Base snapshot path
    pub base: PathBuf,
    /// Head snapshot path
    pub head: PathBuf,
    /// Explicit config file; `.pkg-size-report.toml` in the working directory otherwise
    pub config: Option<PathBuf>,
    /// Command-line overrides of config file values
    pub overrides: ConfigOverrides,
    /// Output file; stdout when absent
    pub output: Option<PathBuf>,
    /// Emit a JSON summary instead of Markdown
    pub json: bool,
    /// Prefix the report title with an emoji
    pub emoji: bool,
}

/// Render a size report comparing two snapshots
///
/// # Examples
///
/// ```no_run
/// use pkg_size_report::cmd::report::{cmd_report, ReportOptions};
/// use pkg_size_report::config::ConfigOverrides;
///
/// cmd_report(&ReportOptions {
///     base: "base-size.json".into(),
///     head: "head-size.json".into(),
///     config: None,
///     overrides: ConfigOverrides {
///         hide_files: Some("*.map".to_string()),
///         ..Default::default()
///     },
///     output: Some("size-report.md".into()),
///     json: false,
///     emoji: true,
/// })?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - Either snapshot is missing or malformed
/// - The config file cannot be read or parsed
/// - An option value is invalid or the hide glob does not compile
/// - The output file cannot be written
pub fn cmd_report(options: &ReportOptions) -> Result<()> {
    let rendered = render_report(options)?;

    match &options.output {
        Some(path) => {
            RealFileSystem
                .write(path, format!("{}\n", rendered))
                .map_err(|e| ReportError::Io {
                    context: format!("writing {}", path.display()),
                    source: e,
                })?;
            log::info!("Wrote report to {}", path.display());
            println!(
                "{} Wrote size report to {}",
                CHECKMARK,
                style(path.display()).cyan().bold()
            );
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Load inputs and render the report (Markdown or JSON) without writing it
pub fn render_report(options: &ReportOptions) -> Result<String> {
    // Verify base first so a missing baseline is reported before anything else
    let base = SnapshotLoader::load(&options.base).context("Failed to load base snapshot")?;
    let head = SnapshotLoader::load(&options.head).context("Failed to load head snapshot")?;

    let config = resolve_config(options)?;
    let builder = ReportBuilder::new(&config);
    let comparison = builder.compare(&base, &head);

    if options.json {
        ReportSummary::from_comparison(&comparison, config.unchanged_files).to_json()
    } else {
        Ok(builder.render(&comparison))
    }
}

fn resolve_config(options: &ReportOptions) -> Result<ReportConfig> {
    let file: ConfigFile = match &options.config {
        Some(path) => ConfigLoader::load_file(path)?,
        None => ConfigLoader::load(&env::current_dir()?)?,
    };

    let mut config = ConfigResolver::resolve(&file, &options.overrides)
        .context("Invalid report configuration")?;
    config.emoji = options.emoji;

    Ok(config)
}
