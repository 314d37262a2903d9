use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::HarnessError;

pub const DEFAULT_SEED: u64 = 42;
const RANDOM_KEY_MAX: i32 = 1000;
const DUPLICATE_KEYS: usize = 5;
const ALMOST_SORTED_SWAP_DIVISOR: usize = 100;

/// A sort key tagged with the position it was generated at, so stability is observable.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Record {
    pub key: i32,
    pub original_index: u32,
}

impl Record {
    pub fn new(key: i32, original_index: u32) -> Self {
        Self {
            key,
            original_index,
        }
    }

    /// Orders by `key` only.
    #[inline]
    pub fn key_less(a: &Record, b: &Record) -> bool {
        a.key < b.key
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.key, self.original_index)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Pattern {
    Random,
    Sorted,
    Reversed,
    Duplicates,
    AlmostSorted,
}

pub const ALL_PATTERNS: [Pattern; 5] = [
    Pattern::Random,
    Pattern::Sorted,
    Pattern::Reversed,
    Pattern::Duplicates,
    Pattern::AlmostSorted,
];

impl Pattern {
    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::Reversed => "reversed",
            Self::Duplicates => "duplicates",
            Self::AlmostSorted => "almost_sorted",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Pattern {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_PATTERNS
            .iter()
            .copied()
            .find(|pattern| pattern.label() == s)
            .ok_or_else(|| HarnessError::UnknownPattern(s.to_owned()))
    }
}

/// Builds `len` records shaped by `pattern`. The same `seed` always yields the same data.
///
/// - `random`: keys uniform in `0..=1000`
/// - `sorted`: key `i`
/// - `reversed`: key `len - i`
/// - `duplicates`: key `i % 5`
/// - `almost_sorted`: `sorted` with `len / 100` random adjacent swaps
pub fn generate(pattern: Pattern, len: usize, seed: u64) -> Vec<Record> {
    let mut rng = StdRng::seed_from_u64(seed);
    let keyed = |key: fn(usize) -> i32| {
        (0..len)
            .map(|i| Record::new(key(i), i as u32))
            .collect::<Vec<_>>()
    };

    match pattern {
        Pattern::Random => (0..len)
            .map(|i| Record::new(rng.random_range(0..=RANDOM_KEY_MAX), i as u32))
            .collect(),
        Pattern::Sorted => keyed(|i| i as i32),
        Pattern::Reversed => (0..len)
            .map(|i| Record::new((len - i) as i32, i as u32))
            .collect(),
        Pattern::Duplicates => keyed(|i| (i % DUPLICATE_KEYS) as i32),
        Pattern::AlmostSorted => {
            let mut data = keyed(|i| i as i32);
            if len >= 2 {
                for _ in 0..len / ALMOST_SORTED_SWAP_DIVISOR {
                    let idx = rng.random_range(0..=len - 2);
                    data.swap(idx, idx + 1);
                }
            }
            data
        }
    }
}

/// A caller-owned scratch buffer large enough to sort `len` records.
pub fn scratch_buffer(len: usize) -> Vec<Record> {
    vec![Record::default(); stable_sort::required_buffer_len(len)]
}
