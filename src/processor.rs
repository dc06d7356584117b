//! The strategy client.
//!
//! The [`DataProcessor`] owns the currently selected sorting strategy and
//! applies it to whatever data it is handed. The strategy can be swapped
//! between calls; each call uses the one bound at the time it starts.

use tracing::{debug, debug_span, trace};

use crate::strategy::{SortAlgorithm, SortStrategy};

/// Sorts data with a swappable [`SortStrategy`].
///
/// Defaults to [`SortAlgorithm`], so any of the built-in algorithms can be
/// selected at runtime. Other strategy types can be plugged in through the
/// type parameter.
#[derive(Debug, Clone, Default)]
pub struct DataProcessor<S = SortAlgorithm> {
    strategy: S,
}

impl<S: SortStrategy> DataProcessor<S> {
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    /// Replaces the current strategy. The next [`process`](Self::process) call uses it.
    pub fn set_strategy(&mut self, strategy: S) {
        debug!(
            from = self.strategy.name(),
            to = strategy.name(),
            "swapping sort strategy"
        );
        self.strategy = strategy;
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Sorts `data` in place with the current strategy and hands it back.
    pub fn process<'a, T: Ord + Clone>(&self, data: &'a mut [T]) -> &'a mut [T] {
        let _span = debug_span!("process", strategy = self.strategy.name(), len = data.len())
            .entered();

        self.strategy.sort(data);
        trace!("sorted");
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::testing::{tagged, Tagged};
    use crate::strategy::MergeSort;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    fn tags(data: &[Tagged]) -> Vec<usize> {
        data.iter().map(|t| t.tag).collect()
    }

    #[test]
    fn default_processor_uses_quick_sort() {
        let processor: DataProcessor = DataProcessor::default();
        assert_eq!(*processor.strategy(), SortAlgorithm::Quick);
    }

    #[test]
    fn process_returns_the_same_sorted_slice() {
        let processor = DataProcessor::new(SortAlgorithm::Merge);
        let mut data = vec![5, 2, 9, 1, 5, 6];
        let ptr = data.as_ptr();

        let sorted = processor.process(&mut data);
        assert_eq!(sorted.as_ptr(), ptr);
        assert_eq!(sorted, &[1, 2, 5, 5, 6, 9]);
        assert_eq!(data.len(), 6);
    }

    #[test]
    fn each_algorithm_sorts_a_fresh_copy_of_the_demo_input() {
        let mut processor = DataProcessor::new(SortAlgorithm::default());
        for algorithm in SortAlgorithm::ALL {
            processor.set_strategy(algorithm);
            let mut data = [5, 2, 9, 1, 5, 6];
            processor.process(&mut data);
            assert_eq!(data, [1, 2, 5, 5, 6, 9], "{algorithm}");
        }
    }

    #[test]
    fn swapping_strategy_only_affects_later_calls() {
        // Quicksort moves the trailing 1 (tag 3) ahead of the other 1s,
        // merge sort keeps them in input order.
        let keys = [1, 1, 2, 1];

        let mut processor = DataProcessor::new(SortAlgorithm::Quick);
        let mut first = tagged(&keys);
        processor.process(&mut first);

        processor.set_strategy(SortAlgorithm::Merge);
        let mut second = tagged(&keys);
        processor.process(&mut second);

        assert_eq!(tags(&first), vec![3, 0, 1, 2]);
        assert_eq!(tags(&second), vec![0, 1, 3, 2]);
        assert_eq!(*processor.strategy(), SortAlgorithm::Merge);
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let processor: DataProcessor = DataProcessor::default();
        let mut data: Vec<i64> = Vec::new();
        assert!(processor.process(&mut data).is_empty());
    }

    #[derive(Debug, Default)]
    struct Recording {
        calls: Cell<usize>,
    }

    impl SortStrategy for Recording {
        fn sort<T: Ord + Clone>(&self, data: &mut [T]) {
            self.calls.set(self.calls.get() + 1);
            MergeSort.sort(data);
        }
    }

    #[test]
    fn accepts_custom_strategies() {
        let processor = DataProcessor::new(Recording::default());
        let mut words = ["b", "c", "a"];
        processor.process(&mut words);
        processor.process(&mut words);

        assert_eq!(words, ["a", "b", "c"]);
        assert_eq!(processor.strategy().calls.get(), 2);
    }
}
