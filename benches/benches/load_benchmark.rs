//! Dataset loading benchmarks on synthetic files.
//!
//! Run with: `cargo bench --package fcompdata-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fcompdata_bench::{Layout, SyntheticConfig, format_bytes, generate_json, write_dataset};
use fcompdata_lib::{
    Config, DataHome, Datasets, SeriesType, load_json_file, load_m3, parse_json_str,
};
use std::hint::black_box;
use tempfile::TempDir;

/// Dataset sizes roughly matching the published competitions.
fn benchmark_configs() -> Vec<(&'static str, SyntheticConfig)> {
    vec![
        (
            "m1-sized",
            SyntheticConfig {
                series: 1001,
                train_len: 60,
                layout: Layout::Object,
            },
        ),
        (
            "m3-sized",
            SyntheticConfig {
                series: 3003,
                train_len: 80,
                layout: Layout::Object,
            },
        ),
        (
            "m3-sized-array",
            SyntheticConfig {
                series: 3003,
                train_len: 80,
                layout: Layout::Array,
            },
        ),
    ]
}

fn parse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (name, config) in benchmark_configs() {
        let json = generate_json(&config);
        eprintln!("{name}: {}", format_bytes(json.len() as u64));

        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse_json_str", name), &json, |b, json| {
            b.iter(|| parse_json_str(black_box(json), "SYN").unwrap());
        });
    }

    group.finish();
}

fn file_benchmark(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let mut group = c.benchmark_group("load_file");

    for (name, config) in benchmark_configs() {
        let path = write_dataset(temp_dir.path(), &format!("{name}.json"), &config).unwrap();
        group.throughput(Throughput::Elements(config.series as u64));
        group.bench_with_input(BenchmarkId::new("load_json_file", name), &path, |b, path| {
            b.iter(|| load_json_file(black_box(path), "SYN").unwrap());
        });
    }

    group.finish();
}

fn access_benchmark(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    write_dataset(temp_dir.path(), "m3_data.json", &SyntheticConfig {
        series: 3003,
        train_len: 80,
        layout: Layout::Object,
    })
    .unwrap();
    let config = Config::new(temp_dir.path(), DataHome::new(temp_dir.path().join("home")));

    c.bench_function("load_m3", |b| b.iter(|| load_m3(&config).unwrap()));

    let datasets = Datasets::new(config);
    let m3 = datasets.m3();
    m3.get().unwrap();

    c.bench_function("series_lookup", |b| {
        b.iter(|| m3.series(black_box(2568)).unwrap().h());
    });

    let mut group = c.benchmark_group("subset");
    for series_type in [SeriesType::Yearly, SeriesType::Monthly] {
        group.bench_with_input(
            BenchmarkId::from_parameter(series_type),
            &series_type,
            |b, series_type| b.iter(|| m3.subset(*series_type).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(benches, parse_benchmark, file_benchmark, access_benchmark);
criterion_main!(benches);
