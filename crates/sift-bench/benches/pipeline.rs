//! Pipeline benchmarks: synthetic generation, per-detector fit/predict,
//! ingest, and the end-to-end run.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sift_bench::fixtures::{fixture_csv, fixture_frame, FixtureSize};
use sift_core::config::DetectorConfig;
use sift_core::traits::Detector;
use sift_detect::{build_detector, read_csv, sample_frame, Input, ModelChoice, Pipeline};

fn bench_synthetic(c: &mut Criterion) {
    c.bench_function("synthetic_sample_200", |b| b.iter(sample_frame));
}

fn bench_ingest(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingest");
    for size in [FixtureSize::Micro, FixtureSize::Small, FixtureSize::Medium] {
        let bytes = fixture_csv(size);
        group.bench_with_input(
            BenchmarkId::from_parameter(size.row_count()),
            &bytes,
            |b, bytes| b.iter(|| read_csv(bytes.as_slice()).unwrap()),
        );
    }
    group.finish();
}

fn bench_detectors(c: &mut Criterion) {
    let config = DetectorConfig::default();

    let mut group = c.benchmark_group("isolation_forest");
    for size in [FixtureSize::Micro, FixtureSize::Small, FixtureSize::Medium] {
        let matrix = fixture_frame(size).numeric_matrix();
        let detector = build_detector(ModelChoice::IsolationForest, &config);
        group.bench_with_input(
            BenchmarkId::from_parameter(size.row_count()),
            &matrix,
            |b, matrix| b.iter(|| detector.fit_predict(matrix).unwrap()),
        );
    }
    group.finish();

    // LOF is O(n²) over pairwise distances; keep it to the small presets.
    let mut group = c.benchmark_group("local_outlier_factor");
    for size in [FixtureSize::Micro, FixtureSize::Small] {
        let matrix = fixture_frame(size).numeric_matrix();
        let detector = build_detector(ModelChoice::LocalOutlierFactor, &config);
        group.bench_with_input(
            BenchmarkId::from_parameter(size.row_count()),
            &matrix,
            |b, matrix| b.iter(|| detector.fit_predict(matrix).unwrap()),
        );
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let pipeline = Pipeline::with_defaults();
    c.bench_function("pipeline_synthetic_isolation_forest", |b| {
        b.iter(|| {
            pipeline
                .run(Input::Synthetic, ModelChoice::IsolationForest)
                .unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_synthetic,
    bench_ingest,
    bench_detectors,
    bench_pipeline
);
criterion_main!(benches);
