//! Recursive binary search over an ascending slice

use std::cmp::Ordering;

/// Search `sorted` for `target` by halving the window recursively
///
/// With duplicates, the index of whichever copy is hit first is returned.
pub fn binary_search<T: Ord>(sorted: &[T], target: &T) -> Option<usize> {
    let end = sorted.len().checked_sub(1)?;
    search_window(sorted, 0, end, target)
}

fn search_window<T: Ord>(sorted: &[T], start: usize, end: usize, target: &T) -> Option<usize> {
    if start > end {
        return None;
    }
    let mid = start + (end - start) / 2;
    match target.cmp(sorted.get(mid)?) {
        Ordering::Less => search_window(sorted, start, mid.checked_sub(1)?, target),
        Ordering::Greater => search_window(sorted, mid + 1, end, target),
        Ordering::Equal => Some(mid),
    }
}
