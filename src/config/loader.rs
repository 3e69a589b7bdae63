//! Configuration file loading and saving

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use std::path::Path;

/// Handles loading and saving configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .pkg-size-report.toml in the given directory
    ///
    /// A missing file yields the default (empty) configuration.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pkg_size_report::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Sorting by: {:?}", config.sort_by);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(project_root: &Path) -> Result<ConfigFile> {
        Self::load_with_fs(project_root, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(project_root: &Path, fs: &FS) -> Result<ConfigFile> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        // Read file atomically - no TOCTOU race window
        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                return Ok(ConfigFile::default());
            }
            Err(e) => {
                return Err(e).context("Failed to read .pkg-size-report.toml");
            }
        };

        toml_edit::de::from_str(&contents).context("Failed to parse .pkg-size-report.toml")
    }

    /// Load config from an explicit path; unlike [`ConfigLoader::load`] the file must exist
    pub fn load_file(path: &Path) -> Result<ConfigFile> {
        Self::load_file_with_fs(path, &RealFileSystem)
    }

    /// Load config from an explicit path with a custom filesystem implementation
    pub fn load_file_with_fs<FS: FileSystem>(path: &Path, fs: &FS) -> Result<ConfigFile> {
        let contents = fs
            .read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        toml_edit::de::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Save config to .pkg-size-report.toml in the given directory
    pub fn save(config: &ConfigFile, project_root: &Path) -> Result<()> {
        Self::save_with_fs(config, project_root, &RealFileSystem)
    }

    /// Save config with a custom filesystem implementation
    pub fn save_with_fs<FS: FileSystem>(
        config: &ConfigFile,
        project_root: &Path,
        fs: &FS,
    ) -> Result<()> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        let contents =
            toml_edit::ser::to_string_pretty(config).context("Failed to serialize config")?;

        fs.write(&config_path, contents)
            .context("Failed to write .pkg-size-report.toml")?;

        Ok(())
    }

    /// Check if config file exists in project
    pub fn exists(project_root: &Path) -> bool {
        RealFileSystem.exists(&project_root.join(CONFIG_FILE_NAME))
    }
}
