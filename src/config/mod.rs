//! Configuration for pkg-size-report
//!
//! This module provides:
//! - Typed report options (unchanged-file handling, sort field and order)
//! - .pkg-size-report.toml config file support
//! - Resolution of file values and command-line overrides into a [`ReportConfig`]

pub mod file;
pub mod loader;
pub mod options;
pub mod resolver;

pub use file::{ConfigFile, CONFIG_FILE_NAME};
pub use loader::ConfigLoader;
pub use options::{SortField, SortOrder, UnchangedFilesMode};
pub use resolver::{ConfigOverrides, ConfigResolver, ReportConfig};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_module_exports_are_accessible() {
        let _: Option<ConfigFile> = None;
        let _: Option<ReportConfig> = None;
        let _: Option<ConfigOverrides> = None;
    }

    #[test]
    fn test_config_file_name_constant_is_correct() {
        assert_eq!(CONFIG_FILE_NAME, ".pkg-size-report.toml");
    }
}
