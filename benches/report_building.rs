//! Report Building Benchmarks
//!
//! **Purpose:** Measure merging, sorting and rendering of large snapshots
//!
//! **Regression Threshold:** >20% slower than baseline
//!
//! **How to Run:**
//! ```bash
//! cargo bench --bench report_building
//! ```
//!
//! **What's Being Measured:**
//! 1. `merge snapshots` - Path-keyed merge of two file lists
//! 2. `sort records` - Delta sort with path tie-break
//! 3. `build report` - Full pipeline including Markdown rendering
//! 4. `hide glob matching` - Compiled glob against every path
//!
//! **Performance Notes:**
//! - Snapshots hold 5,000 files, one third changed between sides
//! - Table rendering measures display width of every cell twice

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use pkg_size_report::config::{ReportConfig, SortField, SortOrder, UnchangedFilesMode};
use pkg_size_report::glob::GlobPattern;
use pkg_size_report::report::{build_report, merge_snapshots, sort_records};
use pkg_size_report::snapshot::{FileSizeEntry, SizeSnapshot, SnapshotRef};
use std::hint::black_box;

const FILE_COUNT: u64 = 5_000;

fn snapshot(ref_name: &str, grow: bool) -> SizeSnapshot {
    SizeSnapshot {
        reference: SnapshotRef {
            repo_url: "https://github.com/acme/widget".to_string(),
            ref_name: ref_name.to_string(),
        },
        tarball_size: FILE_COUNT * 100,
        files: (0..FILE_COUNT)
            .map(|i| {
                let size = 1_000 + i * 7;
                let size = if grow && i % 3 == 0 { size + i } else { size };
                let ext = if i % 4 == 0 { "js.map" } else { "js" };
                FileSizeEntry::new(format!("/dist/chunk-{:05}.{}", i, ext), size)
            })
            .collect(),
    }
}

fn bench_merge(c: &mut Criterion) {
    let base = snapshot("main", false);
    let head = snapshot("feature", true);

    c.bench_function("merge snapshots", |b| {
        b.iter(|| black_box(merge_snapshots(black_box(&base), black_box(&head))));
    });
}

fn bench_sort(c: &mut Criterion) {
    let records = merge_snapshots(&snapshot("main", false), &snapshot("feature", true)).records;

    c.bench_function("sort records", |b| {
        b.iter_batched(
            || records.clone(),
            |mut records| {
                sort_records(&mut records, SortField::Delta, SortOrder::Desc);
                black_box(records);
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_build_report(c: &mut Criterion) {
    let base = snapshot("main", false);
    let head = snapshot("feature", true);
    let config = ReportConfig {
        unchanged_files: UnchangedFilesMode::Collapse,
        hide_files: GlobPattern::new("*.map").ok(),
        ..Default::default()
    };

    c.bench_function("build report", |b| {
        b.iter(|| black_box(build_report(&config, &base, &head)));
    });
}

fn bench_glob_matching(c: &mut Criterion) {
    let pattern = GlobPattern::new("/dist/**/*.{map,d.ts}").unwrap();
    let paths: Vec<String> = snapshot("main", false)
        .files
        .into_iter()
        .map(|entry| entry.path)
        .collect();

    c.bench_function("hide glob matching", |b| {
        b.iter(|| {
            black_box(paths.iter().filter(|path| pattern.is_match(path)).count());
        });
    });
}

criterion_group!(
    benches,
    bench_merge,
    bench_sort,
    bench_build_report,
    bench_glob_matching
);
criterion_main!(benches);
