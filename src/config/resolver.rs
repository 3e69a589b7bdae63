//! Resolution of file settings and command-line overrides into a report config

use super::file::ConfigFile;
use super::options::{SortField, SortOrder, UnchangedFilesMode};
use crate::error::ReportError;
use crate::glob::GlobPattern;

/// Fully validated options for building a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// How unchanged files are shown
    pub unchanged_files: UnchangedFilesMode,
    /// Files moved into the "Hidden files" table
    pub hide_files: Option<GlobPattern>,
    /// Ordering column
    pub sort_by: SortField,
    /// Ordering direction
    pub sort_order: SortOrder,
    /// Appended verbatim at the end of the report
    pub comment_signature: String,
    /// Prefix the report title with a chart emoji
    pub emoji: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            unchanged_files: UnchangedFilesMode::default(),
            hide_files: None,
            sort_by: SortField::default(),
            sort_order: SortOrder::default(),
            comment_signature: String::new(),
            emoji: true,
        }
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// `--unchanged-files`
    pub unchanged_files: Option<String>,
    /// `--hide-files`
    pub hide_files: Option<String>,
    /// `--sort-by`
    pub sort_by: Option<String>,
    /// `--sort-order`
    pub sort_order: Option<String>,
    /// `--signature`
    pub comment_signature: Option<String>,
}

/// Merges config file values with overrides and validates the result
///
/// # Examples
///
/// ```
/// use pkg_size_report::config::{ConfigFile, ConfigOverrides, ConfigResolver, SortOrder};
///
/// let file = ConfigFile {
///     sort_order: Some("desc".to_string()),
///     ..Default::default()
/// };
/// let overrides = ConfigOverrides {
///     sort_order: Some("asc".to_string()),
///     ..Default::default()
/// };
///
/// let config = ConfigResolver::resolve(&file, &overrides)?;
/// assert_eq!(config.sort_order, SortOrder::Asc);
/// # Ok::<(), pkg_size_report::error::ReportError>(())
/// ```
pub struct ConfigResolver;

impl ConfigResolver {
    /// Resolve the effective configuration; command-line values win
    pub fn resolve(file: &ConfigFile, overrides: &ConfigOverrides) -> Result<ReportConfig, ReportError> {
        let pick = |cli: &Option<String>, file: &Option<String>| cli.clone().or_else(|| file.clone());

        let mut config = ReportConfig::default();

        if let Some(mode) = pick(&overrides.unchanged_files, &file.unchanged_files) {
            config.unchanged_files = mode.parse()?;
        }

        // An empty pattern disables hiding, as when the key is absent
        if let Some(glob) = pick(&overrides.hide_files, &file.hide_files) {
            if !glob.is_empty() {
                config.hide_files = Some(GlobPattern::new(&glob)?);
            }
        }

        if let Some(field) = pick(&overrides.sort_by, &file.sort_by) {
            config.sort_by = field.parse()?;
        }

        if let Some(order) = pick(&overrides.sort_order, &file.sort_order) {
            config.sort_order = order.parse()?;
        }

        if let Some(signature) = pick(&overrides.comment_signature, &file.comment_signature) {
            config.comment_signature = signature;
        }

        log::debug!(
            "Resolved report config: unchanged-files={} sort-by={} sort-order={} hide-files={:?}",
            config.unchanged_files,
            config.sort_by,
            config.sort_order,
            config.hide_files.as_ref().map(GlobPattern::as_str)
        );

        Ok(config)
    }
}
