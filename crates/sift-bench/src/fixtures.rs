//! Shared benchmark fixtures.
//! Deterministic: same preset → same frame across runs.

use sift_core::config::SyntheticConfig;
use sift_core::frame::Frame;
use sift_detect::synthetic::{sample_frame_with, SAMPLE_SEED};

/// Fixture size presets.
#[derive(Debug, Clone, Copy)]
pub enum FixtureSize {
    /// 50 rows — unit-test scale
    Micro,
    /// 500 rows — a small upload
    Small,
    /// 5K rows — a large upload
    Medium,
}

impl FixtureSize {
    pub fn row_count(&self) -> usize {
        match self {
            Self::Micro => 50,
            Self::Small => 500,
            Self::Medium => 5_000,
        }
    }
}

/// A seeded three-column frame of the given size.
pub fn fixture_frame(size: FixtureSize) -> Frame {
    sample_frame_with(&SyntheticConfig {
        rows: Some(size.row_count()),
        seed: Some(SAMPLE_SEED),
    })
}

/// The same fixture serialized to CSV bytes, for ingest benchmarks.
pub fn fixture_csv(size: FixtureSize) -> Vec<u8> {
    sift_detect::to_csv_bytes(&fixture_frame(size)).expect("fixture frame serializes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_are_deterministic() {
        assert_eq!(
            fixture_frame(FixtureSize::Micro),
            fixture_frame(FixtureSize::Micro)
        );
        assert_eq!(fixture_frame(FixtureSize::Small).row_count(), 500);
    }

    #[test]
    fn test_fixture_csv_parses_back() {
        let frame = sift_detect::read_csv(fixture_csv(FixtureSize::Micro).as_slice()).unwrap();
        assert_eq!(frame.row_count(), 50);
    }
}
