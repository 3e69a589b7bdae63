//! JSON summary of a size comparison for CI/CD tools

use serde::{Deserialize, Serialize};

use super::{SizeComparison, NO_CHANGES};
use crate::config::UnchangedFilesMode;
use crate::fmt::format_bytes;

/// Machine-readable counterpart of the Markdown report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Whether the summed file size changed
    pub changed: bool,
    /// Header badge text, e.g. "12%↑" or "No changes"
    pub headline: String,
    /// Summed file sizes, hidden and unchanged files included
    pub total: SizeChange,
    /// Tarball sizes
    pub tarball: SizeChange,
    /// File counts per report section
    pub files: FileCounts,
    /// How unchanged files were rendered
    pub unchanged_files: UnchangedFilesMode,
}

/// Size transition between base and head
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeChange {
    /// Base size in bytes
    pub base_bytes: u64,
    /// Head size in bytes
    pub head_bytes: u64,
    /// Head minus base in bytes (negative = reduction)
    pub diff_bytes: i64,
    /// Formatted base size (e.g., "1.5 kB")
    pub base_formatted: String,
    /// Formatted head size
    pub head_formatted: String,
    /// Percentage change with arrow, empty when unchanged
    pub delta: String,
}

impl SizeChange {
    fn new(base_bytes: u64, head_bytes: u64, delta: String) -> Self {
        Self {
            base_bytes,
            head_bytes,
            diff_bytes: (i128::from(head_bytes) - i128::from(base_bytes))
                .clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64,
            base_formatted: format_bytes(base_bytes),
            head_formatted: format_bytes(head_bytes),
            delta,
        }
    }
}

/// Number of files per report section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileCounts {
    /// Visible files whose size changed
    pub changed: usize,
    /// Visible files with the same size on both sides
    pub unchanged: usize,
    /// Files matching the hide glob
    pub hidden: usize,
    /// Changed files that exist only in head
    pub added: usize,
    /// Changed files that exist only in base
    pub removed: usize,
}

impl ReportSummary {
    /// Summarise a comparison
    pub fn from_comparison(comparison: &SizeComparison, mode: UnchangedFilesMode) -> Self {
        let total_delta = comparison.total_delta();
        let headline = if total_delta.is_empty() {
            NO_CHANGES.to_string()
        } else {
            total_delta.clone()
        };

        Self {
            changed: !total_delta.is_empty(),
            headline,
            total: SizeChange::new(comparison.base_total, comparison.head_total, total_delta),
            tarball: SizeChange::new(
                comparison.base_tarball,
                comparison.head_tarball,
                comparison.tarball_delta(),
            ),
            files: FileCounts {
                changed: comparison.changed.len(),
                unchanged: comparison.unchanged.len(),
                hidden: comparison.hidden.len(),
                added: comparison.changed.iter().filter(|r| r.is_added()).count(),
                removed: comparison.changed.iter().filter(|r| r.is_removed()).count(),
            },
            unchanged_files: mode,
        }
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON summary: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportConfig;
    use crate::glob::GlobPattern;
    use crate::report::ReportBuilder;
    use crate::snapshot::{FileSizeEntry, SizeSnapshot, SnapshotRef};

    fn snapshot(tarball_size: u64, files: &[(&str, u64)]) -> SizeSnapshot {
        SizeSnapshot {
            reference: SnapshotRef {
                repo_url: "https://github.com/o/r".to_string(),
                ref_name: "main".to_string(),
            },
            tarball_size,
            files: files
                .iter()
                .map(|(path, size)| FileSizeEntry::new(*path, *size))
                .collect(),
        }
    }

    #[test]
    fn test_summary_counts_sections() {
        let base = snapshot(100, &[("/a.js", 10), ("/b.js", 5), ("/old.js", 3), ("/x.map", 1)]);
        let head = snapshot(90, &[("/a.js", 12), ("/b.js", 5), ("/new.js", 4), ("/x.map", 2)]);
        let config = ReportConfig {
            hide_files: Some(GlobPattern::new("*.map").unwrap()),
            ..Default::default()
        };

        let comparison = ReportBuilder::new(&config).compare(&base, &head);
        let summary = ReportSummary::from_comparison(&comparison, config.unchanged_files);

        assert_eq!(summary.files.changed, 3);
        assert_eq!(summary.files.unchanged, 1);
        assert_eq!(summary.files.hidden, 1);
        assert_eq!(summary.files.added, 1);
        assert_eq!(summary.files.removed, 1);
        assert_eq!(summary.total.base_bytes, 19);
        assert_eq!(summary.total.head_bytes, 23);
        assert_eq!(summary.total.diff_bytes, 4);
        assert_eq!(summary.tarball.diff_bytes, -10);
        assert_eq!(summary.tarball.delta, "10%↓");
        assert!(summary.changed);
    }

    #[test]
    fn test_summary_without_changes() {
        let base = snapshot(100, &[("/a.js", 10)]);
        let comparison = ReportBuilder::new(&ReportConfig::default()).compare(&base, &base);
        let summary = ReportSummary::from_comparison(&comparison, UnchangedFilesMode::Collapse);

        assert!(!summary.changed);
        assert_eq!(summary.headline, "No changes");
        assert_eq!(summary.total.delta, "");
    }

    #[test]
    fn test_summary_serialization_produces_valid_json() {
        let base = snapshot(1000, &[("/a.js", 1000)]);
        let head = snapshot(1000, &[("/a.js", 1500)]);
        let comparison = ReportBuilder::new(&ReportConfig::default()).compare(&base, &head);
        let json = ReportSummary::from_comparison(&comparison, UnchangedFilesMode::Show)
            .to_json()
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["headline"], "50%↑");
        assert_eq!(value["total"]["head_formatted"], "1.5 kB");
        assert_eq!(value["unchanged_files"], "show");
    }
}
