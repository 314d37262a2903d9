use crate::SortResult;

use super::common;

/// Recursive merge sort splitting at `len / 2`.
///
/// Both halves are sorted in place, merged into the matching range of `buffer` and swapped
/// back. Sibling calls work on disjoint sub-slices of `data` and `buffer`.
pub fn sort_by<T, F>(data: &mut [T], buffer: &mut [T], mut is_less: F) -> SortResult<()>
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    if len < 2 {
        return Ok(());
    }
    common::check_buffer(len, buffer.len())?;

    merge_sort_recursive(data, &mut buffer[..len], &mut is_less);
    Ok(())
}

fn merge_sort_recursive<T, F>(data: &mut [T], buf: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    if len < 2 {
        return;
    }

    let mid = len >> 1;
    let (left, right) = data.split_at_mut(mid);
    let (buf_left, buf_right) = buf.split_at_mut(mid);

    merge_sort_recursive(left, buf_left, is_less);
    merge_sort_recursive(right, buf_right, is_less);

    common::merge_runs(left, right, buf, is_less);
    data.swap_with_slice(buf);
}
