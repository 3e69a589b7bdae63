//! Markdown size report comparing a base and a head snapshot
//!
//! Building a report is a pure transformation:
//!
//! 1. Merge both file lists by path, summing each side's sizes on the way
//! 2. Sort by the configured field (descending, ascending path tie-break);
//!    ascending order is the exact reverse of that sequence
//! 3. Move files matching the hide glob into a "Hidden files" table
//! 4. Split the rest into changed and unchanged files
//! 5. Render header, tarball line, main table, collapsible tables and signature
//!
//! # Examples
//!
//! ```
//! use pkg_size_report::config::ReportConfig;
//! use pkg_size_report::report::build_report;
//! use pkg_size_report::snapshot::{FileSizeEntry, SizeSnapshot, SnapshotRef};
//!
//! let reference = SnapshotRef {
//!     repo_url: "https://github.com/owner/repo".to_string(),
//!     ref_name: "main".to_string(),
//! };
//! let base = SizeSnapshot {
//!     reference: reference.clone(),
//!     tarball_size: 800,
//!     files: vec![FileSizeEntry::new("/a.js", 1000)],
//! };
//! let head = SizeSnapshot {
//!     reference,
//!     tarball_size: 900,
//!     files: vec![FileSizeEntry::new("/a.js", 1500)],
//! };
//!
//! let report = build_report(&ReportConfig::default(), &base, &head);
//! assert!(report.contains("<kbd>50%↑</kbd>"));
//! assert!(report.contains("<sup>50%↑</sup>`1.5 kB`"));
//! ```

pub mod merge;
pub mod summary;

pub use merge::{merge_snapshots, MergedFileRecord, MergedFiles};
pub use summary::ReportSummary;

use crate::config::{ReportConfig, SortField, SortOrder, UnchangedFilesMode};
use crate::fmt::{delta, format_bytes};
use crate::markdown::{code, details, kbd, sub, sup, Align, MarkdownTable};
use crate::snapshot::SizeSnapshot;

/// Placeholder for a size that does not exist on one side
pub const MISSING_SIZE: &str = "—";

/// Header badge text when the total size did not change
pub const NO_CHANGES: &str = "No changes";

/// Merged, sorted and partitioned view of two snapshots
#[derive(Debug, Clone)]
pub struct SizeComparison {
    /// Sum of base file sizes, hidden and unchanged files included
    pub base_total: u64,
    /// Sum of head file sizes, hidden and unchanged files included
    pub head_total: u64,
    /// Base tarball size
    pub base_tarball: u64,
    /// Head tarball size
    pub head_tarball: u64,
    /// Visible files whose size changed, in report order
    pub changed: Vec<MergedFileRecord>,
    /// Visible files with the same size on both sides, in report order
    pub unchanged: Vec<MergedFileRecord>,
    /// Files matching the hide glob, in report order
    pub hidden: Vec<MergedFileRecord>,
}

impl SizeComparison {
    /// Percentage change of the summed file sizes, empty when unchanged
    pub fn total_delta(&self) -> String {
        delta(self.base_total, self.head_total)
    }

    /// Percentage change of the tarball size, empty when unchanged
    pub fn tarball_delta(&self) -> String {
        delta(self.base_tarball, self.head_tarball)
    }
}

/// Builds size reports for one configuration
pub struct ReportBuilder<'a> {
    config: &'a ReportConfig,
}

impl<'a> ReportBuilder<'a> {
    /// Create a builder for `config`
    pub fn new(config: &'a ReportConfig) -> Self {
        Self { config }
    }

    /// Merge, sort and partition the two snapshots
    pub fn compare(&self, base: &SizeSnapshot, head: &SizeSnapshot) -> SizeComparison {
        let MergedFiles {
            mut records,
            base_total,
            head_total,
        } = merge_snapshots(base, head);

        sort_records(&mut records, self.config.sort_by, self.config.sort_order);

        let (hidden, visible): (Vec<_>, Vec<_>) = match &self.config.hide_files {
            Some(pattern) => records
                .into_iter()
                .partition(|record| pattern.is_match(&record.path)),
            None => (Vec::new(), records),
        };

        let (unchanged, changed): (Vec<_>, Vec<_>) = visible
            .into_iter()
            .partition(MergedFileRecord::is_unchanged);

        log::debug!(
            "Partitioned files: {} changed, {} unchanged, {} hidden",
            changed.len(),
            unchanged.len(),
            hidden.len()
        );

        SizeComparison {
            base_total,
            head_total,
            base_tarball: base.tarball_size,
            head_tarball: head.tarball_size,
            changed,
            unchanged,
            hidden,
        }
    }

    /// Render a comparison as a Markdown document
    pub fn render(&self, comparison: &SizeComparison) -> String {
        let total_delta = comparison.total_delta();
        let badge = if total_delta.is_empty() {
            NO_CHANGES
        } else {
            total_delta.as_str()
        };
        let emoji = if self.config.emoji { "📊 " } else { "" };

        let sections = [
            format!(
                "### {}Package size report&nbsp;&nbsp;&nbsp;{}",
                emoji,
                kbd(badge)
            ),
            format!(
                "**Tarball size** {} → {}{}",
                code(&format_bytes(comparison.base_tarball)),
                sup(&comparison.tarball_delta()),
                code(&format_bytes(comparison.head_tarball))
            ),
            self.main_table(comparison),
            self.unchanged_table(comparison),
            collapsible_size_table("Hidden files", &comparison.hidden),
            self.config.comment_signature.clone(),
        ];

        sections
            .into_iter()
            .filter(|section| !section.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Compare and render in one step
    pub fn build(&self, base: &SizeSnapshot, head: &SizeSnapshot) -> String {
        self.render(&self.compare(base, head))
    }

    fn main_table(&self, comparison: &SizeComparison) -> String {
        let show_unchanged = self.config.unchanged_files == UnchangedFilesMode::Show;

        let mut table = MarkdownTable::new(["File", "Before", "After"]).with_align(&[
            Align::None,
            Align::Right,
            Align::Right,
        ]);

        let inline_unchanged: &[MergedFileRecord] = if show_unchanged {
            comparison.unchanged.as_slice()
        } else {
            &[]
        };
        for record in comparison.changed.iter().chain(inline_unchanged) {
            table.push_row(vec![
                record.link.clone(),
                size_cell(record.base_size),
                after_cell(record.base_size, record.head_size),
            ]);
        }

        let label = if show_unchanged {
            "**Total**".to_string()
        } else {
            format!("**Total** {}", sub("_(Includes all files)_"))
        };
        table.push_row(vec![
            label,
            code(&format_bytes(comparison.base_total)),
            format!(
                "{}{}",
                sup(&comparison.total_delta()),
                code(&format_bytes(comparison.head_total))
            ),
        ]);

        table.render()
    }

    fn unchanged_table(&self, comparison: &SizeComparison) -> String {
        if self.config.unchanged_files == UnchangedFilesMode::Collapse {
            collapsible_size_table("Unchanged files", &comparison.unchanged)
        } else {
            String::new()
        }
    }
}

/// Build a report in one call
pub fn build_report(config: &ReportConfig, base: &SizeSnapshot, head: &SizeSnapshot) -> String {
    ReportBuilder::new(config).build(base, head)
}

/// Sort descending by `field` with ascending path tie-break, then reverse for `Asc`
pub fn sort_records(records: &mut [MergedFileRecord], field: SortField, order: SortOrder) {
    records.sort_by(|a, b| {
        b.sort_key(field)
            .cmp(&a.sort_key(field))
            .then_with(|| a.path.cmp(&b.path))
    });

    if order == SortOrder::Asc {
        records.reverse();
    }
}

fn size_cell(size: Option<u64>) -> String {
    match size {
        Some(size) => code(&format_bytes(size)),
        None => MISSING_SIZE.to_string(),
    }
}

fn after_cell(base: Option<u64>, head: Option<u64>) -> String {
    let Some(head) = head else {
        return MISSING_SIZE.to_string();
    };

    // A zero-byte base has no meaningful percentage
    let annotation = match base {
        Some(base) if base > 0 => sup(&delta(base, head)),
        _ => String::new(),
    };

    format!("{}{}", annotation, code(&format_bytes(head)))
}

/// Two-column File/Size table of base sizes inside a `<details>` block
fn collapsible_size_table(title: &str, records: &[MergedFileRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut table = MarkdownTable::new(["File", "Size"]).with_align(&[Align::None, Align::Right]);
    for record in records {
        table.push_row(vec![record.link.clone(), size_cell(record.base_size)]);
    }

    details(title, &table.render())
}
