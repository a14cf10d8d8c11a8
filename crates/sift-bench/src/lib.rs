//! # sift-bench
//!
//! Benchmarks for the Sift anomaly pipeline, with shared deterministic
//! fixtures: same preset → same frame across runs, so timings are
//! comparable between machines and commits.

pub mod fixtures;
