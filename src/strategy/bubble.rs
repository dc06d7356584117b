//! Adjacent-exchange sorting (bubble sort).
//!
//! Pass `i` walks the first `n - i` elements and swaps every adjacent pair
//! that is out of order, which carries the largest remaining element to
//! position `n - 1 - i`. There is no early exit on a pass without swaps, so
//! every input costs exactly `n(n-1)/2` comparisons.
//!
//! Swapping only on strict `>` keeps equal elements in their original order.

use super::SortStrategy;

/// Bubble sort with a fixed pass count.
///
/// Time complexity: O(n²) for every input
/// Space complexity: O(1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BubbleSort;

impl BubbleSort {
    /// Creates a new bubble sort strategy.
    pub fn new() -> Self {
        Self
    }
}

impl SortStrategy for BubbleSort {
    fn sort<T: Ord + Clone>(&self, data: &mut [T]) {
        let len = data.len();
        for i in 0..len.saturating_sub(1) {
            for j in 0..len - 1 - i {
                if data[j] > data[j + 1] {
                    data.swap(j, j + 1);
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "BubbleSort"
    }
}
