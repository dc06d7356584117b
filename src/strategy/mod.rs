//! In-place sorting algorithms.
//!
//! This module provides multiple sorting implementations that can be
//! swapped at runtime behind the [`SortStrategy`] trait.
//!
//! Available algorithms:
//! - [`QuickSort`]: Partition-exchange around the last element of each range
//! - [`BubbleSort`]: Fixed number of adjacent-exchange passes
//! - [`MergeSort`]: Top-down divide and conquer with a scratch buffer

mod bubble;
mod merge;
mod quick;

pub use bubble::BubbleSort;
pub use merge::MergeSort;
pub use quick::QuickSort;

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Trait for in-place sorting algorithms.
///
/// Implementors reorder a slice into non-decreasing order without changing
/// its length. The slice is only borrowed for the duration of the call.
pub trait SortStrategy {
    /// Sort `data` in place into non-decreasing order.
    ///
    /// `Clone` is required so that algorithms needing auxiliary storage
    /// (merge sort) can copy elements; the others never clone.
    fn sort<T: Ord + Clone>(&self, data: &mut [T]);

    /// Human-readable name used in logs and transcripts.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Available sorting algorithms.
///
/// Use this enum to select which algorithm a
/// [`DataProcessor`](crate::DataProcessor) should use. It implements
/// [`SortStrategy`] itself by dispatching to the matching variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortAlgorithm {
    /// Last-element pivot partition-exchange. Not stable.
    #[default]
    Quick,
    /// Adjacent-pair exchange passes. Stable, always O(n²).
    Bubble,
    /// Top-down merge sort, ties taken from the left run. Stable.
    Merge,
}

impl SortAlgorithm {
    /// Every algorithm, in the order the demo runs them.
    pub const ALL: [SortAlgorithm; 3] = [Self::Quick, Self::Bubble, Self::Merge];

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Quick => "QuickSort",
            SortAlgorithm::Bubble => "BubbleSort",
            SortAlgorithm::Merge => "MergeSort",
        }
    }

    /// Whether equal elements keep their relative order.
    pub fn is_stable(self) -> bool {
        !matches!(self, SortAlgorithm::Quick)
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = ParseError;

    /// Accepts `quick`, `QuickSort`, `quick-sort`, `quick_sort` and so on.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        let stem = normalized.strip_suffix("sort").unwrap_or(&normalized);

        match stem {
            "quick" => Ok(SortAlgorithm::Quick),
            "bubble" => Ok(SortAlgorithm::Bubble),
            "merge" => Ok(SortAlgorithm::Merge),
            _ => Err(ParseError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl SortStrategy for SortAlgorithm {
    #[inline]
    fn sort<T: Ord + Clone>(&self, data: &mut [T]) {
        match self {
            SortAlgorithm::Quick => QuickSort.sort(data),
            SortAlgorithm::Bubble => BubbleSort.sort(data),
            SortAlgorithm::Merge => MergeSort.sort(data),
        }
    }

    fn name(&self) -> &'static str {
        SortAlgorithm::name(*self)
    }
}

/// Element types shared by the strategy tests.
#[cfg(test)]
pub(crate) mod testing {
    use std::cell::Cell;
    use std::cmp::Ordering;
    use std::rc::Rc;

    /// An element ordered only by `key`; `tag` records where it started.
    #[derive(Debug, Clone, Copy)]
    pub struct Tagged {
        pub key: i32,
        pub tag: usize,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    pub fn tagged(keys: &[i32]) -> Vec<Tagged> {
        keys.iter()
            .enumerate()
            .map(|(tag, &key)| Tagged { key, tag })
            .collect()
    }

    /// An integer that counts every comparison made against it.
    #[derive(Debug, Clone)]
    pub struct Counted {
        pub value: i32,
        pub comparisons: Rc<Cell<usize>>,
    }

    impl PartialEq for Counted {
        fn eq(&self, other: &Self) -> bool {
            self.cmp(other) == Ordering::Equal
        }
    }

    impl Eq for Counted {}

    impl PartialOrd for Counted {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Counted {
        fn cmp(&self, other: &Self) -> Ordering {
            self.comparisons.set(self.comparisons.get() + 1);
            self.value.cmp(&other.value)
        }
    }

    pub fn counted(values: &[i32]) -> (Vec<Counted>, Rc<Cell<usize>>) {
        let comparisons = Rc::new(Cell::new(0));
        let data = values
            .iter()
            .map(|&value| Counted {
                value,
                comparisons: Rc::clone(&comparisons),
            })
            .collect();
        (data, comparisons)
    }
}
