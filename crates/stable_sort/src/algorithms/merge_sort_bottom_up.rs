use crate::SortResult;

use super::common;

/// Iterative merge sort over runs of width 1, 2, 4, ...
///
/// Each pass merges neighbouring runs of `data` into `buffer[..len]` and swaps the result
/// back, so the sort finishes after `ceil(log2(len))` passes without allocating.
pub fn sort_by<T, F>(data: &mut [T], buffer: &mut [T], mut is_less: F) -> SortResult<()>
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    if len < 2 {
        return Ok(());
    }
    common::check_buffer(len, buffer.len())?;

    let buf = &mut buffer[..len];
    let mut width = 1usize;
    while width < len {
        merge_pass(data, buf, width, &mut is_less);
        data.swap_with_slice(buf);
        width <<= 1;
    }

    Ok(())
}

fn merge_pass<T, F>(src: &mut [T], dst: &mut [T], width: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let block = width << 1;
    for (src_block, dst_block) in src.chunks_mut(block).zip(dst.chunks_mut(block)) {
        let mid = width.min(src_block.len());
        let (left, right) = src_block.split_at_mut(mid);
        common::merge_runs(left, right, dst_block, is_less);
    }
}
