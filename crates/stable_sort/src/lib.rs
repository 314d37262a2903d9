//! Stable, allocation-free merge sorts driven by a caller-supplied scratch buffer.
//!
//! Every entry point takes the data and a buffer of at least the same length. Elements are
//! relocated by swapping between the two, so `T` needs no `Clone`, `Copy` or `Default` bound.
//! After a successful call `data` is sorted and the buffer holds the values it held before,
//! in an unspecified order.

mod algorithms;
mod error;

pub use algorithms::{merge_sort_bottom_up, merge_sort_top_down};
pub use error::{SortError, SortResult};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    MergeSortBottomUp,
    MergeSortTopDown,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 2] =
    [SortAlgorithm::MergeSortBottomUp, SortAlgorithm::MergeSortTopDown];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::MergeSortBottomUp => "merge_sort_bottom_up",
        SortAlgorithm::MergeSortTopDown => "merge_sort_top_down",
    }
}

impl SortAlgorithm {
    pub fn from_name(name: &str) -> Option<Self> {
        all_algorithms()
            .iter()
            .copied()
            .find(|&algo| algorithm_name(algo) == name)
    }
}

/// Smallest scratch buffer accepted for `data_len` elements.
#[inline]
pub fn required_buffer_len(data_len: usize) -> usize {
    data_len
}

/// Sorts `data` so that `is_less` never holds for a later element against an earlier one,
/// keeping equal elements in their original order.
///
/// `is_less` must be a strict weak order. An inconsistent predicate yields some permutation
/// of the input but no ordering guarantee. Inputs of length 0 or 1 return immediately
/// without looking at `buffer`.
pub fn stable_sort_by<T, F>(
    algo: SortAlgorithm,
    data: &mut [T],
    buffer: &mut [T],
    is_less: F,
) -> SortResult<()>
where
    F: FnMut(&T, &T) -> bool,
{
    match algo {
        SortAlgorithm::MergeSortBottomUp => merge_sort_bottom_up::sort_by(data, buffer, is_less),
        SortAlgorithm::MergeSortTopDown => merge_sort_top_down::sort_by(data, buffer, is_less),
    }
}

pub fn stable_sort<T: Ord>(algo: SortAlgorithm, data: &mut [T], buffer: &mut [T]) -> SortResult<()> {
    stable_sort_by(algo, data, buffer, |a, b| a.lt(b))
}

pub fn stable_sort_by_key<T, K, F>(
    algo: SortAlgorithm,
    data: &mut [T],
    buffer: &mut [T],
    mut key: F,
) -> SortResult<()>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    stable_sort_by(algo, data, buffer, |a, b| key(a).lt(&key(b)))
}
