//! Fibonacci search over an ascending slice
//!
//! The window is split at Fibonacci-sized offsets instead of halves:
//! `mid = start + F(k-1) - 1`. Going left drops `k` by one, going right by two.
//! The slice is treated as if it were padded to `F(k)` elements by repeating
//! its last value; reads past the end return that value and no copy is made.

use std::cmp::Ordering;

use tracing::trace;

/// Fibonacci table `1, 1, 2, 3, 5, ...` ending at the first term `>= len`
///
/// Always holds at least two terms so that `F(k-1)` exists for `k = 1`.
pub fn fibonacci_numbers(len: usize) -> Vec<usize> {
    let mut table = vec![1, 1];
    let mut last = 1;
    let mut previous = 1;
    while last < len {
        let Some(next) = last.checked_add(previous) else {
            break;
        };
        previous = last;
        last = next;
        table.push(next);
    }
    table
}

/// Search `sorted` for `target`, returning its index
///
/// `sorted` must be ascending. When `target` occurs several times, some index
/// inside that run is returned. Unsorted input gives an unspecified answer but
/// never panics.
pub fn fibonacci_search<T: Ord>(sorted: &[T], target: &T) -> Option<usize> {
    let last = sorted.len().checked_sub(1)?;
    let table = fibonacci_numbers(sorted.len());

    let mut start = 0;
    let mut end = last;
    let mut k = table.len() - 1;

    // Padding repeats the last element
    let probe = |index: usize| sorted.get(index.min(last));

    while start <= end {
        // With k at 0 the window holds a single candidate
        let offset = k
            .checked_sub(1)
            .and_then(|i| table.get(i))
            .copied()
            .unwrap_or(1);
        let mid = start + offset - 1;
        let value = probe(mid)?;
        trace!(start, end, mid, k, "fibonacci probe");

        match target.cmp(value) {
            Ordering::Less => {
                end = mid.checked_sub(1)?;
                k = k.saturating_sub(1);
            }
            Ordering::Greater => {
                start = mid + 1;
                k = k.saturating_sub(2);
            }
            Ordering::Equal => {
                return Some(if mid <= end { mid } else { last });
            }
        }
    }

    None
}
