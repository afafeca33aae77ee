//! Sort strategies: native, top-down merge sort and bottom-up merge sort.
//!
//! All three are stable: elements that compare equal keep their input order.
//! - [`NativeSort`]: delegates to [`slice::sort_by`]. The default strategy of a
//!   [`Vector`](crate::Vector).
//! - [`TopDownMergeSort`]: recursive, splits into freshly copied halves and merges
//!   them back into the caller's slice.
//! - [`BottomUpMergeSort`]: iterative, merges runs of doubling width between the
//!   caller's slice and one scratch buffer, swapping their roles after every pass.

use crate::core::{Comparator, SortStrategy};
use log::trace;
use std::cmp::Ordering;

/// Strategy backed by the standard library's stable sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NativeSort;

impl<T> SortStrategy<T> for NativeSort {
    fn sort(&self, data: &mut [T], cmp: &dyn Comparator<T>) {
        data.sort_by(|a, b| cmp.compare(a, b));
    }

    fn name(&self) -> &'static str {
        "native"
    }
}

/// Recursive top-down merge sort.
///
/// Each level copies its two halves into new buffers, sorts the copies
/// independently and merges them back into the slice it was given.
/// O(n log n) time, O(log n) recursion depth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TopDownMergeSort;

impl<T: Clone> SortStrategy<T> for TopDownMergeSort {
    fn sort(&self, data: &mut [T], cmp: &dyn Comparator<T>) {
        top_down(data, cmp);
    }

    fn name(&self) -> &'static str {
        "top-down merge"
    }
}

fn top_down<T: Clone>(data: &mut [T], cmp: &dyn Comparator<T>) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    let mut left = data[..mid].to_vec();
    let mut right = data[mid..].to_vec();

    top_down(&mut left, cmp);
    top_down(&mut right, cmp);

    merge_halves(&left, &right, data, cmp);
}

/// Merges the sorted `left` and `right` into `out`, which must hold exactly
/// `left.len() + right.len()` slots.
///
/// On ties the element from `left` is emitted first.
fn merge_halves<T: Clone>(left: &[T], right: &[T], out: &mut [T], cmp: &dyn Comparator<T>) {
    debug_assert_eq!(left.len() + right.len(), out.len());

    let (mut i, mut j) = (0, 0);
    while i + j < out.len() {
        let take_left = j == right.len()
            || (i < left.len() && cmp.compare(&right[j], &left[i]) != Ordering::Less);

        if take_left {
            out[i + j] = left[i].clone();
            i += 1;
        } else {
            out[i + j] = right[j].clone();
            j += 1;
        }
    }
}

/// Iterative bottom-up merge sort.
///
/// Pass `k` merges adjacent runs of width `2^k` from the current source buffer
/// into the other buffer, then the two buffers trade roles. When the last pass
/// leaves the result in the scratch buffer it is copied back once.
/// O(n log n) time, one scratch buffer of length n.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BottomUpMergeSort;

impl<T: Clone> SortStrategy<T> for BottomUpMergeSort {
    fn sort(&self, data: &mut [T], cmp: &dyn Comparator<T>) {
        let len = data.len();
        if len < 2 {
            return;
        }

        let mut scratch = data.to_vec();
        // Tracks which buffer holds the current runs; `data` starts as the source.
        let mut src_is_data = true;

        let mut width = 1;
        while width < len {
            if src_is_data {
                merge_pass(data, &mut scratch, width, cmp);
            } else {
                merge_pass(&scratch, data, width, cmp);
            }
            src_is_data = !src_is_data;
            width = width.saturating_mul(2);
        }

        if !src_is_data {
            trace!("bottom-up merge: copying {len} elements back from scratch");
            data.clone_from_slice(&scratch);
        }
    }

    fn name(&self) -> &'static str {
        "bottom-up merge"
    }
}

/// Merges every pair of adjacent `width`-runs of `src` into the same index range of `dest`.
fn merge_pass<T: Clone>(src: &[T], dest: &mut [T], width: usize, cmp: &dyn Comparator<T>) {
    let step = width.saturating_mul(2);
    let mut start = 0;
    while start < src.len() {
        merge_runs(src, dest, start, width, cmp);
        start = start.saturating_add(step);
    }
}

/// Merges `src[start..start+width]` and `src[start+width..start+2*width]`
/// (both clamped to `src.len()`) into `dest[start..]`.
///
/// Once one run is drained the rest of the other is copied in bulk.
fn merge_runs<T: Clone>(
    src: &[T],
    dest: &mut [T],
    start: usize,
    width: usize,
    cmp: &dyn Comparator<T>,
) {
    let len = src.len();
    let end1 = start.saturating_add(width).min(len);
    let end2 = start.saturating_add(width.saturating_mul(2)).min(len);

    let (mut x, mut y, mut z) = (start, end1, start);
    while x < end1 && y < end2 {
        if cmp.compare(&src[y], &src[x]) == Ordering::Less {
            dest[z] = src[y].clone();
            y += 1;
        } else {
            dest[z] = src[x].clone();
            x += 1;
        }
        z += 1;
    }

    if x < end1 {
        dest[z..z + (end1 - x)].clone_from_slice(&src[x..end1]);
    } else if y < end2 {
        dest[z..z + (end2 - y)].clone_from_slice(&src[y..end2]);
    }
}
