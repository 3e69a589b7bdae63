//! Merging of base and head file lists into per-path records

use std::collections::HashMap;

use crate::config::SortField;
use crate::markdown::{code, link};
use crate::snapshot::SizeSnapshot;

/// Base and head sizes of one path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedFileRecord {
    /// Path as listed in the snapshots
    pub path: String,
    /// Markdown link to the file at the base revision
    pub link: String,
    /// Size in the base snapshot, `None` when the file was added
    pub base_size: Option<u64>,
    /// Size in the head snapshot, `None` when the file was removed
    pub head_size: Option<u64>,
}

impl MergedFileRecord {
    /// Head size minus base size, missing sides counting as zero
    pub fn size_delta(&self) -> i128 {
        i128::from(self.head_size.unwrap_or(0)) - i128::from(self.base_size.unwrap_or(0))
    }

    /// Same size on both sides
    pub fn is_unchanged(&self) -> bool {
        self.base_size == self.head_size
    }

    /// File exists only in the head snapshot
    pub fn is_added(&self) -> bool {
        self.base_size.is_none()
    }

    /// File exists only in the base snapshot
    pub fn is_removed(&self) -> bool {
        self.head_size.is_none()
    }

    /// Ordering key for `field`; every path compares equal under [`SortField::Path`]
    pub(crate) fn sort_key(&self, field: SortField) -> i128 {
        match field {
            SortField::BaseSize => i128::from(self.base_size.unwrap_or(0)),
            SortField::HeadSize => i128::from(self.head_size.unwrap_or(0)),
            SortField::Delta => self.size_delta(),
            SortField::Path => 0,
        }
    }
}

/// Result of merging two snapshots
#[derive(Debug, Clone)]
pub struct MergedFiles {
    /// One record per distinct path, in no particular order
    pub records: Vec<MergedFileRecord>,
    /// Sum of every base file size
    pub base_total: u64,
    /// Sum of every head file size
    pub head_total: u64,
}

#[derive(Clone, Copy)]
enum Side {
    Base,
    Head,
}

/// Merge base and head file lists by path
///
/// Links always point at the base revision, even for files that only exist
/// in head. Totals are plain sums over each list, independent of the merge.
pub fn merge_snapshots(base: &SizeSnapshot, head: &SizeSnapshot) -> MergedFiles {
    let entries = base
        .files
        .iter()
        .map(|file| (file, Side::Base))
        .chain(head.files.iter().map(|file| (file, Side::Head)));

    let by_path = entries.fold(
        HashMap::<&str, MergedFileRecord>::new(),
        |mut by_path, (file, side)| {
            let record = by_path
                .entry(file.path.as_str())
                .or_insert_with(|| MergedFileRecord {
                    path: file.path.clone(),
                    link: link(&code(&file.path), &base.reference.blob_url(&file.path)),
                    base_size: None,
                    head_size: None,
                });
            match side {
                Side::Base => record.base_size = Some(file.size),
                Side::Head => record.head_size = Some(file.size),
            }
            by_path
        },
    );

    let merged = MergedFiles {
        records: by_path.into_values().collect(),
        base_total: base.total_size(),
        head_total: head.total_size(),
    };

    log::debug!(
        "Merged {} base and {} head entries into {} records",
        base.files.len(),
        head.files.len(),
        merged.records.len()
    );

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{FileSizeEntry, SnapshotRef};

    fn snapshot(ref_name: &str, files: &[(&str, u64)]) -> SizeSnapshot {
        SizeSnapshot {
            reference: SnapshotRef {
                repo_url: "https://github.com/o/r".to_string(),
                ref_name: ref_name.to_string(),
            },
            tarball_size: 0,
            files: files
                .iter()
                .map(|(path, size)| FileSizeEntry::new(*path, *size))
                .collect(),
        }
    }

    fn find<'a>(merged: &'a MergedFiles, path: &str) -> &'a MergedFileRecord {
        merged
            .records
            .iter()
            .find(|r| r.path == path)
            .unwrap_or_else(|| panic!("no record for {}", path))
    }

    #[test]
    fn test_merge_creates_one_record_per_path() {
        let base = snapshot("main", &[("/a.js", 10), ("/b.js", 20)]);
        let head = snapshot("pr", &[("/b.js", 25), ("/c.js", 5)]);

        let merged = merge_snapshots(&base, &head);
        assert_eq!(merged.records.len(), 3);

        let a = find(&merged, "/a.js");
        assert_eq!((a.base_size, a.head_size), (Some(10), None));
        assert!(a.is_removed());

        let b = find(&merged, "/b.js");
        assert_eq!((b.base_size, b.head_size), (Some(20), Some(25)));
        assert_eq!(b.size_delta(), 5);

        let c = find(&merged, "/c.js");
        assert_eq!((c.base_size, c.head_size), (None, Some(5)));
        assert!(c.is_added());
        assert_eq!(c.size_delta(), 5);
    }

    #[test]
    fn test_links_always_use_base_ref() {
        let base = snapshot("main", &[]);
        let head = snapshot("feature", &[("/new.js", 1)]);

        let merged = merge_snapshots(&base, &head);
        assert_eq!(
            find(&merged, "/new.js").link,
            "[`/new.js`](https://github.com/o/r/blob/main/new.js)"
        );
    }

    #[test]
    fn test_totals_are_independent_of_merge() {
        let base = snapshot("main", &[("/a.js", 10), ("/a.js", 10)]);
        let head = snapshot("pr", &[("/a.js", 7)]);

        let merged = merge_snapshots(&base, &head);
        assert_eq!(merged.records.len(), 1);
        assert_eq!(merged.base_total, 20);
        assert_eq!(merged.head_total, 7);
    }

    #[test]
    fn test_unchanged_requires_equal_sizes() {
        let base = snapshot("main", &[("/same.js", 3), ("/gone.js", 0)]);
        let head = snapshot("pr", &[("/same.js", 3)]);

        let merged = merge_snapshots(&base, &head);
        assert!(find(&merged, "/same.js").is_unchanged());
        assert!(!find(&merged, "/gone.js").is_unchanged());
    }

    #[test]
    fn test_sort_keys() {
        let record = MergedFileRecord {
            path: "/x".to_string(),
            link: String::new(),
            base_size: Some(100),
            head_size: None,
        };

        assert_eq!(record.sort_key(SortField::BaseSize), 100);
        assert_eq!(record.sort_key(SortField::HeadSize), 0);
        assert_eq!(record.sort_key(SortField::Delta), -100);
        assert_eq!(record.sort_key(SortField::Path), 0);
    }

    #[test]
    fn test_delta_sort_key_is_size_delta() {
        let record = MergedFileRecord {
            path: "/huge.bin".to_string(),
            link: String::new(),
            base_size: Some(u64::MAX),
            head_size: Some(0),
        };

        assert_eq!(record.size_delta(), -i128::from(u64::MAX));
        assert_eq!(record.sort_key(SortField::Delta), record.size_delta());
    }
}
