pub(crate) mod common;
pub mod merge_sort_bottom_up;
pub mod merge_sort_top_down;
