use std::fmt;
use std::time::Duration;

use stable_sort::{SortAlgorithm, algorithm_name, stable_sort_by};
use tracing::{debug, info, warn};

use crate::{CheckConfig, HarnessResult, Pattern, Record, generate, scratch_buffer, time_it};

/// First position where two sequences disagree. `None` on a side means that sequence ended.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Mismatch<T> {
    pub index: usize,
    pub expected: Option<T>,
    pub actual: Option<T>,
}

impl<T: fmt::Display> fmt::Display for Mismatch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at index {}: expected ", self.index)?;
        match &self.expected {
            Some(value) => write!(f, "{value}")?,
            None => f.write_str("<end>")?,
        }
        f.write_str(", got ")?;
        match &self.actual {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("<end>"),
        }
    }
}

pub fn first_mismatch<T: PartialEq + Clone>(expected: &[T], actual: &[T]) -> Option<Mismatch<T>> {
    let index = expected
        .iter()
        .zip(actual)
        .position(|(e, a)| e != a)
        .or_else(|| (expected.len() != actual.len()).then(|| expected.len().min(actual.len())))?;

    Some(Mismatch {
        index,
        expected: expected.get(index).cloned(),
        actual: actual.get(index).cloned(),
    })
}

#[derive(Clone, Debug)]
pub struct CaseReport {
    pub pattern: Pattern,
    pub len: usize,
    pub algorithm: SortAlgorithm,
    pub reference_time: Duration,
    pub candidate_time: Duration,
    pub mismatch: Option<Mismatch<Record>>,
}

impl CaseReport {
    pub fn passed(&self) -> bool {
        self.mismatch.is_none()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Summary {
    pub reports: Vec<CaseReport>,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.reports.len()
    }

    pub fn failures(&self) -> usize {
        self.reports.iter().filter(|r| !r.passed()).count()
    }

    pub fn passed(&self) -> bool {
        self.failures() == 0
    }
}

/// Sorts two copies of the same generated input, one with `slice::sort_by` and one with
/// `algo`, and reports the first index where they differ.
pub fn run_case(
    pattern: Pattern,
    len: usize,
    seed: u64,
    algo: SortAlgorithm,
) -> HarnessResult<CaseReport> {
    let original = generate(pattern, len, seed);
    let mut expected = original.clone();
    let mut actual = original;
    let mut buffer = scratch_buffer(len);

    let ((), reference_time) = time_it(|| expected.sort_by(|a, b| a.key.cmp(&b.key)));
    let (sorted, candidate_time) =
        time_it(|| stable_sort_by(algo, &mut actual, &mut buffer, Record::key_less));
    sorted?;

    let mismatch = first_mismatch(&expected, &actual);
    match &mismatch {
        Some(m) => warn!(
            pattern = pattern.label(),
            len,
            algorithm = algorithm_name(algo),
            "mismatch {m}"
        ),
        None => debug!(
            pattern = pattern.label(),
            len,
            algorithm = algorithm_name(algo),
            reference_us = reference_time.as_micros() as u64,
            candidate_us = candidate_time.as_micros() as u64,
            "match"
        ),
    }

    Ok(CaseReport {
        pattern,
        len,
        algorithm: algo,
        reference_time,
        candidate_time,
        mismatch,
    })
}

pub fn run_all(config: &CheckConfig) -> HarnessResult<Summary> {
    run_all_with(config, |_| {})
}

/// Runs every case of `config`, pattern-major, handing each report to `on_case` as it lands.
pub fn run_all_with<F>(config: &CheckConfig, mut on_case: F) -> HarnessResult<Summary>
where
    F: FnMut(&CaseReport),
{
    info!(cases = config.case_count(), seed = config.seed, "running sort checks");

    let mut summary = Summary::default();
    for &pattern in &config.patterns {
        for &len in &config.sizes {
            for &algo in &config.algorithms {
                let report = run_case(pattern, len, config.seed, algo)?;
                on_case(&report);
                summary.reports.push(report);
            }
        }
    }

    info!(
        total = summary.total(),
        failures = summary.failures(),
        "sort checks finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use stable_sort::all_algorithms;

    use super::*;
    use crate::{ALL_PATTERNS, DEFAULT_SEED};

    #[test]
    fn mismatch_points_at_first_difference() {
        assert_eq!(first_mismatch(&[1, 2, 3], &[1, 2, 3]), None);
        assert_eq!(
            first_mismatch(&[1, 2, 3], &[1, 5, 4]),
            Some(Mismatch {
                index: 1,
                expected: Some(2),
                actual: Some(5)
            })
        );
        assert_eq!(
            first_mismatch(&[1, 2, 3], &[1, 2]),
            Some(Mismatch {
                index: 2,
                expected: Some(3),
                actual: None
            })
        );
        assert_eq!(first_mismatch::<u8>(&[], &[]), None);
    }

    #[test]
    fn mismatch_display() {
        let m = Mismatch {
            index: 4,
            expected: Some(Record::new(3, 1)),
            actual: Some(Record::new(3, 2)),
        };
        assert_eq!(m.to_string(), "at index 4: expected (3, 1), got (3, 2)");

        let m: Mismatch<Record> = Mismatch {
            index: 0,
            expected: None,
            actual: Some(Record::new(0, 0)),
        };
        assert_eq!(m.to_string(), "at index 0: expected <end>, got (0, 0)");
    }

    #[test]
    fn engines_agree_with_reference_on_every_pattern() {
        let config = CheckConfig {
            sizes: vec![10, 100, 1_000, 10_000],
            ..CheckConfig::default()
        };
        let mut seen = 0usize;
        let summary = run_all_with(&config, |report| {
            seen += 1;
            assert!(
                report.passed(),
                "{} {} {}: {:?}",
                report.pattern,
                report.len,
                algorithm_name(report.algorithm),
                report.mismatch,
            );
        })
        .unwrap();

        assert_eq!(seen, ALL_PATTERNS.len() * 4 * all_algorithms().len());
        assert_eq!(summary.total(), config.case_count());
        assert!(summary.passed());
    }

    #[test]
    fn engines_agree_with_each_other() {
        for &pattern in &ALL_PATTERNS {
            for &len in &[0_usize, 1, 2, 3, 1023, 4097] {
                let outputs: Vec<Vec<Record>> = all_algorithms()
                    .iter()
                    .map(|&algo| {
                        let mut data = generate(pattern, len, DEFAULT_SEED);
                        let mut buffer = scratch_buffer(len);
                        stable_sort_by(algo, &mut data, &mut buffer, Record::key_less).unwrap();
                        data
                    })
                    .collect();
                assert!(outputs.windows(2).all(|w| w[0] == w[1]), "{pattern} {len}");
            }
        }
    }

    #[test]
    fn record_scenario() {
        let input = [(3, 0), (1, 1), (2, 2), (1, 3), (2, 4), (3, 5)];
        let expected = [(1, 1), (1, 3), (2, 2), (2, 4), (3, 0), (3, 5)].map(|(k, i)| Record::new(k, i));

        for &algo in all_algorithms() {
            let mut data = input.map(|(k, i)| Record::new(k, i));
            let mut buffer = scratch_buffer(data.len());
            stable_sort_by(algo, &mut data, &mut buffer, Record::key_less).unwrap();
            assert_eq!(first_mismatch(&expected, &data), None);
        }
    }

    #[test]
    fn already_sorted_output_is_unchanged() {
        for &algo in all_algorithms() {
            let mut data = generate(Pattern::Duplicates, 1000, DEFAULT_SEED);
            let mut buffer = scratch_buffer(data.len());
            stable_sort_by(algo, &mut data, &mut buffer, Record::key_less).unwrap();
            let once = data.clone();
            stable_sort_by(algo, &mut data, &mut buffer, Record::key_less).unwrap();
            assert_eq!(data, once);
        }
    }

    #[test]
    fn trivial_lengths_pass() {
        for &algo in all_algorithms() {
            for len in [0, 1] {
                let report = run_case(Pattern::Random, len, DEFAULT_SEED, algo).unwrap();
                assert!(report.passed());
                assert_eq!(report.len, len);
            }
        }
    }
}
