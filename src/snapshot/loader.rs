//! Snapshot file loading

use super::SizeSnapshot;
use crate::error::ReportError;
use crate::infra::{FileSystem, RealFileSystem};
use std::path::Path;

/// Reads size snapshots from JSON files
pub struct SnapshotLoader;

impl SnapshotLoader {
    /// Load a snapshot from a JSON file
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pkg_size_report::snapshot::SnapshotLoader;
    /// use std::path::Path;
    ///
    /// let base = SnapshotLoader::load(Path::new("base-size.json"))?;
    /// println!("{} files at {}", base.files.len(), base.reference.ref_name);
    /// # Ok::<(), pkg_size_report::error::ReportError>(())
    /// ```
    pub fn load(path: &Path) -> Result<SizeSnapshot, ReportError> {
        Self::load_with_fs(path, &RealFileSystem)
    }

    /// Load a snapshot with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(path: &Path, fs: &FS) -> Result<SizeSnapshot, ReportError> {
        let contents = fs.read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ReportError::FileNotFound {
                    path: path.to_path_buf(),
                    operation: "report".to_string(),
                }
            } else {
                ReportError::Io {
                    context: format!("reading {}", path.display()),
                    source: e,
                }
            }
        })?;

        let snapshot: SizeSnapshot =
            serde_json::from_str(&contents).map_err(|e| ReportError::InvalidSnapshot {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        snapshot
            .validate()
            .map_err(|reason| ReportError::InvalidSnapshot {
                path: path.to_path_buf(),
                reason,
            })?;

        log::info!(
            "Loaded snapshot {} ({} files, ref {})",
            path.display(),
            snapshot.files.len(),
            snapshot.reference.ref_name
        );

        Ok(snapshot)
    }
}
