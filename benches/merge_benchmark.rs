//! Benchmarks for reading and merging record tables.

use compliance_report::{merge_tables, parse_match_report_str, ComponentRecord, RecordTable, TableSource};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// A table where roughly one record in `repeat_every` repeats an earlier one.
fn synthetic_table(source: TableSource, size: usize, repeat_every: usize) -> RecordTable {
    let records = (0..size)
        .map(|i| {
            let id = if i % repeat_every == 0 { 0 } else { i };
            ComponentRecord::new(
                format!("component-{id}"),
                format!("1.{}", id % 10),
                "MIT",
                "https://opensource.org/licenses/MIT",
            )
        })
        .collect();
    RecordTable::from_records(source, records)
}

fn synthetic_match_report(files: usize, matches_per_file: usize) -> String {
    let entries: Vec<String> = (0..files)
        .map(|f| {
            let matches: Vec<String> = (0..matches_per_file)
                .map(|m| {
                    format!(
                        r#"{{"id":"snippet","matched":"50%","component":"lib{m}","version":"1.{f}","licenses":[{{"name":"MIT","url":"https://spdx.org/licenses/MIT.html"}}]}}"#
                    )
                })
                .collect();
            format!(r#""src/file_{f}.c":[{}]"#, matches.join(","))
        })
        .collect();
    format!("{{{}}}", entries.join(","))
}

fn benchmark_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_tables");
    for size in [100, 1_000, 10_000] {
        let manifest = synthetic_table(TableSource::Manifest, size, 7);
        let matches = synthetic_table(TableSource::Matches, size, 3);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| merge_tables(black_box(&manifest), black_box(&matches)));
        });
    }
    group.finish();
}

fn benchmark_match_reader(c: &mut Criterion) {
    let report = synthetic_match_report(500, 4);
    c.bench_function("parse_match_report_2000", |b| {
        b.iter(|| parse_match_report_str(black_box(&report)));
    });
}

criterion_group!(benches, benchmark_merge, benchmark_match_reader);
criterion_main!(benches);
