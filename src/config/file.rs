//! Configuration file data structures

use serde::{Deserialize, Serialize};

use super::options::{SortField, SortOrder, UnchangedFilesMode};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".pkg-size-report.toml";

/// pkg-size-report configuration file structure
///
/// Every key is optional. Values stay strings here and are validated by
/// [`ConfigResolver`](super::ConfigResolver), so a bad value is reported with
/// the list of accepted ones instead of a generic TOML error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    /// `show`, `hide` or `collapse`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unchanged_files: Option<String>,

    /// Glob of files to move into the "Hidden files" table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_files: Option<String>,

    /// `base-size`, `head-size`, `delta` or `path`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,

    /// `asc` or `desc`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,

    /// Text appended verbatim at the end of the report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_signature: Option<String>,
}

impl ConfigFile {
    /// Config with every key spelled out at its default value
    pub fn with_defaults() -> Self {
        Self {
            unchanged_files: Some(UnchangedFilesMode::default().to_string()),
            hide_files: None,
            sort_by: Some(SortField::default().to_string()),
            sort_order: Some(SortOrder::default().to_string()),
            comment_signature: Some(String::new()),
        }
    }
}
