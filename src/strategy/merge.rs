//! Top-down merge sort.
//!
//! # Algorithm Overview
//!
//! The inclusive range `[left, right]` is split at `mid = (left + right) / 2`,
//! both halves are sorted recursively, and the two sorted runs are merged:
//!
//! ```text
//!   [5, 2, 9 | 1, 5, 6]
//!   [2, 5, 9 | 1, 5, 6]     halves sorted
//!   [1, 2, 5, 5, 6, 9]      merged, the left 5 is taken before the right 5
//! ```
//!
//! When the heads of both runs compare equal the left head wins, which makes
//! the sort **stable**.
//!
//! # Memory
//!
//! One scratch buffer the size of the input is allocated per call to
//! [`MergeSort::sort`] and reused by every merge step. Each merge copies its
//! range into the scratch buffer and writes the merged result back.
//!
//! Time complexity: O(n log n) for every input
//! Space complexity: O(n)

use super::SortStrategy;

/// Stable top-down merge sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeSort;

impl MergeSort {
    /// Creates a new merge sort strategy.
    pub fn new() -> Self {
        Self
    }
}

impl SortStrategy for MergeSort {
    fn sort<T: Ord + Clone>(&self, data: &mut [T]) {
        if data.len() < 2 {
            return;
        }

        let last = data.len() - 1;
        let mut scratch = data.to_vec();
        merge_sort(data, &mut scratch, 0, last);
    }

    fn name(&self) -> &'static str {
        "MergeSort"
    }
}

fn merge_sort<T: Ord + Clone>(data: &mut [T], scratch: &mut [T], left: usize, right: usize) {
    if left >= right {
        return;
    }

    let mid = left + (right - left) / 2;
    merge_sort(data, scratch, left, mid);
    merge_sort(data, scratch, mid + 1, right);
    merge(data, scratch, left, mid, right);
}

/// Merges the sorted runs `data[left..=mid]` and `data[mid + 1..=right]`.
fn merge<T: Ord + Clone>(data: &mut [T], scratch: &mut [T], left: usize, mid: usize, right: usize) {
    scratch[left..=right].clone_from_slice(&data[left..=right]);

    let mut i = left;
    let mut j = mid + 1;
    for slot in &mut data[left..=right] {
        // Ties go to the left run.
        let take_left = j > right || (i <= mid && scratch[i] <= scratch[j]);
        if take_left {
            slot.clone_from(&scratch[i]);
            i += 1;
        } else {
            slot.clone_from(&scratch[j]);
            j += 1;
        }
    }
}
