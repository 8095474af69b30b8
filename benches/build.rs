//! Benchmarks for workbook construction performance.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use xlbook::Workbook;

/// Fill a rows x 20 grid with inline numeric literals.
fn bench_grid_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_fill");
    for rows in [100u32, 1_000, 5_000] {
        group.throughput(Throughput::Elements(u64::from(rows) * 20));
        group.bench_function(BenchmarkId::from_parameter(rows), |b| {
            b.iter(|| {
                let mut book = Workbook::new();
                let mut sheet = book.create_sheet("bench").expect("fresh workbook");
                for row in 0..rows {
                    for col in 0..20u32 {
                        sheet.add_text(black_box(f64::from(row * 20 + col)), row, col, None);
                    }
                }
                book
            });
        });
    }
    group.finish();
}

/// Insert the same label 10k times; every insert interns a fresh string.
fn bench_string_interning(c: &mut Criterion) {
    c.bench_function("intern_10k_strings", |b| {
        b.iter(|| {
            let mut book = Workbook::new();
            let mut sheet = book.create_sheet("bench").expect("fresh workbook");
            for row in 0..10_000u32 {
                sheet.add_text(black_box("repeated label"), row, 0, None);
            }
            book
        });
    });
}

/// Reuse one pre-interned string across 10k cells.
fn bench_shared_string_reuse(c: &mut Criterion) {
    c.bench_function("reuse_shared_string_10k", |b| {
        b.iter(|| {
            let mut book = Workbook::new();
            let label = book.create_share_string("repeated label");
            let mut sheet = book.create_sheet("bench").expect("fresh workbook");
            for row in 0..10_000u32 {
                sheet.add_text(black_box(label.clone()), row, 0, None);
            }
            book
        });
    });
}

criterion_group!(
    benches,
    bench_grid_fill,
    bench_string_interning,
    bench_shared_string_reuse
);
criterion_main!(benches);
