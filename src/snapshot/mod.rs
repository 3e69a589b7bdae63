//! Size snapshots: one side (base or head) of a size comparison
//!
//! Snapshots are read from JSON files shaped like:
//!
//! ```json
//! {
//!   "ref": { "repoUrl": "https://github.com/owner/repo", "refName": "main" },
//!   "tarballSize": 4210,
//!   "files": [{ "path": "/dist/index.js", "size": 12034 }]
//! }
//! ```

pub mod loader;

pub use loader::SnapshotLoader;

use serde::{Deserialize, Serialize};

/// Size of one file in a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSizeEntry {
    /// Path inside the package, usually with a leading `/`
    pub path: String,
    /// Size in bytes
    pub size: u64,
}

impl FileSizeEntry {
    /// Create a new entry
    pub fn new(path: impl Into<String>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }
}

/// Repository revision a snapshot was taken from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRef {
    /// Web URL of the repository
    pub repo_url: String,
    /// Branch, tag or commit name
    pub ref_name: String,
}

impl SnapshotRef {
    /// Web URL of a file at this revision
    ///
    /// ```
    /// use pkg_size_report::snapshot::SnapshotRef;
    ///
    /// let reference = SnapshotRef {
    ///     repo_url: "https://github.com/owner/repo".to_string(),
    ///     ref_name: "main".to_string(),
    /// };
    /// assert_eq!(
    ///     reference.blob_url("/index.js"),
    ///     "https://github.com/owner/repo/blob/main/index.js"
    /// );
    /// ```
    pub fn blob_url(&self, path: &str) -> String {
        format!("{}/blob/{}{}", self.repo_url, self.ref_name, path)
    }
}

/// One side of a size comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeSnapshot {
    /// Revision the sizes were measured at
    #[serde(rename = "ref")]
    pub reference: SnapshotRef,
    /// Packed tarball size in bytes, measured independently of `files`
    pub tarball_size: u64,
    /// Per-file sizes
    #[serde(default)]
    pub files: Vec<FileSizeEntry>,
}

impl SizeSnapshot {
    /// Sum of all file sizes; a path listed twice counts twice
    pub fn total_size(&self) -> u64 {
        self.files
            .iter()
            .fold(0u64, |total, file| total.saturating_add(file.size))
    }

    /// Check invariants serde cannot express
    ///
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(index) = self.files.iter().position(|f| f.path.is_empty()) {
            return Err(format!("file entry {} has an empty path", index));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(files: Vec<FileSizeEntry>) -> SizeSnapshot {
        SizeSnapshot {
            reference: SnapshotRef {
                repo_url: "https://github.com/o/r".to_string(),
                ref_name: "main".to_string(),
            },
            tarball_size: 10,
            files,
        }
    }

    #[test]
    fn test_deserializes_camel_case_wire_format() {
        let json = r#"{
            "ref": { "repoUrl": "https://github.com/o/r", "refName": "feature" },
            "tarballSize": 321,
            "files": [{ "path": "/a.js", "size": 100 }]
        }"#;

        let parsed: SizeSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.reference.ref_name, "feature");
        assert_eq!(parsed.tarball_size, 321);
        assert_eq!(parsed.files, vec![FileSizeEntry::new("/a.js", 100)]);
    }

    #[test]
    fn test_missing_files_key_means_no_files() {
        let json = r#"{ "ref": { "repoUrl": "u", "refName": "r" }, "tarballSize": 0 }"#;
        let parsed: SizeSnapshot = serde_json::from_str(json).unwrap();
        assert!(parsed.files.is_empty());
    }

    #[test]
    fn test_negative_size_is_rejected() {
        let json = r#"{
            "ref": { "repoUrl": "u", "refName": "r" },
            "tarballSize": 0,
            "files": [{ "path": "/a.js", "size": -1 }]
        }"#;
        assert!(serde_json::from_str::<SizeSnapshot>(json).is_err());
    }

    #[test]
    fn test_total_size_counts_duplicates() {
        let snap = snapshot(vec![
            FileSizeEntry::new("/a.js", 100),
            FileSizeEntry::new("/a.js", 100),
            FileSizeEntry::new("/b.js", 5),
        ]);
        assert_eq!(snap.total_size(), 205);
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let snap = snapshot(vec![
            FileSizeEntry::new("/a.js", 1),
            FileSizeEntry::new("", 2),
        ]);
        let err = snap.validate().unwrap_err();
        assert!(err.contains("entry 1"));
        assert!(snapshot(vec![]).validate().is_ok());
    }
}
