//! Partition-exchange sorting (quicksort).
//!
//! # Algorithm Overview
//!
//! 1. **Pick the pivot**: always the last element of the current range
//! 2. **Partition**: walk the range once, moving every element strictly less
//!    than the pivot to the front, then swap the pivot into the slot right
//!    after them
//! 3. **Recurse** on the ranges left and right of the pivot's final position
//!
//! ```text
//!   [5, 2, 9, 1, 5, 6]      pivot = 6
//!    ^store
//!   [5, 2, 1, 5, 9, 6]      5, 2, 1, 5 < 6 moved to the front
//!                ^store
//!   [5, 2, 1, 5, 6, 9]      pivot swapped into place at index 4
//! ```
//!
//! # Characteristics
//!
//! | Case | Comparisons |
//! |------|-------------|
//! | Average | O(n log n) |
//! | Already sorted / reversed | O(n²) |
//!
//! The pivot choice is deterministic: no randomization and no
//! median-of-three. Elements equal to the pivot stay where the scan left
//! them, so the sort is **not stable**.
//!
//! Recursion always descends into the smaller partition and loops over the
//! larger one, which keeps stack depth logarithmic even on sorted input.

use super::SortStrategy;

/// Quicksort with a last-element pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuickSort;

impl QuickSort {
    /// Creates a new quicksort strategy.
    pub fn new() -> Self {
        Self
    }
}

impl SortStrategy for QuickSort {
    fn sort<T: Ord + Clone>(&self, data: &mut [T]) {
        quick_sort(data);
    }

    fn name(&self) -> &'static str {
        "QuickSort"
    }
}

fn quick_sort<T: Ord>(mut data: &mut [T]) {
    while data.len() > 1 {
        let pivot = partition(data);
        let (left, right) = std::mem::take(&mut data).split_at_mut(pivot);
        // Skip the pivot, it is already in its final position.
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort(left);
            data = right;
        } else {
            quick_sort(right);
            data = left;
        }
    }
}

/// Partitions `data` around its last element and returns the pivot's final index.
///
/// Everything before the returned index is strictly less than the pivot,
/// everything after it is greater than or equal. `data` must not be empty.
fn partition<T: Ord>(data: &mut [T]) -> usize {
    let high = data.len() - 1;
    let mut store = 0;

    for j in 0..high {
        if data[j] < data[high] {
            data.swap(store, j);
            store += 1;
        }
    }

    data.swap(store, high);
    store
}
