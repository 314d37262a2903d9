//! Tooling around the `stable_sort` engines: seeded input patterns, wall-clock timing and a
//! comparison harness that checks each engine against `slice::sort_by`.

mod compare;
mod config;
mod patterns;
mod timing;

use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};

pub use compare::{CaseReport, Mismatch, Summary, first_mismatch, run_all, run_all_with, run_case};
pub use config::{CheckConfig, DEFAULT_SIZES};
pub use patterns::{ALL_PATTERNS, DEFAULT_SEED, Pattern, Record, generate, scratch_buffer};
pub use timing::time_it;

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// A pattern name outside of [`ALL_PATTERNS`].
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    #[error(transparent)]
    Sort(#[from] stable_sort::SortError),
}

pub type HarnessResult<T> = Result<T, HarnessError>;

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 300;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 600;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 500;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1000;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
    group.sampling_mode(SamplingMode::Auto);
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
    group.sampling_mode(SamplingMode::Flat);
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
    group.sampling_mode(SamplingMode::Flat);
}

/// Picks one of the runtime presets by input length.
pub fn apply_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, len: usize) {
    if len <= 16384 {
        apply_small_runtime_config(group);
    } else if len <= 65536 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}
