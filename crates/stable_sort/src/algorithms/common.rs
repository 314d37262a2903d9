use std::mem;

use crate::{SortError, SortResult};

/// Rejects a buffer that cannot mirror `data_len` elements.
#[inline]
pub fn check_buffer(data_len: usize, buffer_len: usize) -> SortResult<()> {
    if buffer_len < data_len {
        return Err(SortError::BufferTooShort {
            required: data_len,
            actual: buffer_len,
        });
    }
    Ok(())
}

/// Merges the sorted runs `left` and `right` into `out`.
///
/// Elements are relocated by swapping, so every consumed slot of `left` and `right` ends up
/// holding whatever `out` held at the matching position. The right head is emitted only when
/// it is strictly less than the left head; equal elements keep their left-first order.
/// Once either run is exhausted the rest of the other is moved over without comparisons.
#[inline]
pub fn merge_runs<T, F>(left: &mut [T], right: &mut [T], out: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert_eq!(out.len(), left.len() + right.len());

    let mut i = 0usize;
    let mut j = 0usize;
    let mut k = 0usize;

    while i < left.len() && j < right.len() {
        if is_less(&right[j], &left[i]) {
            mem::swap(&mut out[k], &mut right[j]);
            j += 1;
        } else {
            mem::swap(&mut out[k], &mut left[i]);
            i += 1;
        }
        k += 1;
    }

    if i < left.len() {
        out[k..].swap_with_slice(&mut left[i..]);
    } else if j < right.len() {
        out[k..].swap_with_slice(&mut right[j..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merge_counting(left: &mut [(u32, u32)], right: &mut [(u32, u32)]) -> (Vec<(u32, u32)>, usize) {
        let mut out = vec![(u32::MAX, u32::MAX); left.len() + right.len()];
        let mut comparisons = 0usize;
        merge_runs(left, right, &mut out, &mut |a: &(u32, u32), b: &(u32, u32)| {
            comparisons += 1;
            a.0 < b.0
        });
        (out, comparisons)
    }

    #[test]
    fn ties_take_left_first() {
        let mut left = [(1, 0), (3, 1), (3, 2)];
        let mut right = [(1, 3), (3, 4), (4, 5)];
        let (out, _) = merge_counting(&mut left, &mut right);
        assert_eq!(out, vec![(1, 0), (1, 3), (3, 1), (3, 2), (3, 4), (4, 5)]);
    }

    #[test]
    fn exhausted_run_stops_comparing() {
        let mut left = [(1, 0), (2, 1), (3, 2)];
        let mut right = [(10, 3), (11, 4), (12, 5)];
        let (out, comparisons) = merge_counting(&mut left, &mut right);
        assert_eq!(out, vec![(1, 0), (2, 1), (3, 2), (10, 3), (11, 4), (12, 5)]);
        assert_eq!(comparisons, 3);

        let mut left = [(10, 0), (11, 1)];
        let mut right = [(1, 2), (2, 3), (3, 4)];
        let (out, comparisons) = merge_counting(&mut left, &mut right);
        assert_eq!(out, vec![(1, 2), (2, 3), (3, 4), (10, 0), (11, 1)]);
        assert_eq!(comparisons, 3);
    }

    #[test]
    fn empty_runs() {
        let (out, comparisons) = merge_counting(&mut [], &mut [(5, 0), (6, 1)]);
        assert_eq!(out, vec![(5, 0), (6, 1)]);
        assert_eq!(comparisons, 0);

        let (out, comparisons) = merge_counting(&mut [(5, 0)], &mut []);
        assert_eq!(out, vec![(5, 0)]);
        assert_eq!(comparisons, 0);
    }

    #[test]
    fn consumed_slots_receive_previous_output() {
        let mut left = [(2, 0)];
        let mut right = [(1, 1)];
        let mut out = [(7, 7), (8, 8)];
        merge_runs(&mut left, &mut right, &mut out, &mut |a: &(u32, u32), b: &(u32, u32)| {
            a.0 < b.0
        });
        assert_eq!(out, [(1, 1), (2, 0)]);
        assert_eq!(right, [(7, 7)]);
        assert_eq!(left, [(8, 8)]);
    }

    #[test]
    fn buffer_check() {
        assert_eq!(check_buffer(4, 4), Ok(()));
        assert_eq!(check_buffer(4, 9), Ok(()));
        assert_eq!(
            check_buffer(4, 3),
            Err(SortError::BufferTooShort {
                required: 4,
                actual: 3
            })
        );
    }
}
