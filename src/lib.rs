//! Pluggable in-place sorting strategies.
//!
//! This crate provides three interchangeable sorting algorithms behind the
//! [`SortStrategy`] trait, and a [`DataProcessor`] that holds the currently
//! selected one and can swap it at runtime.
//!
//! # Quick Start
//!
//! ```
//! use sortsy::prelude::*;
//!
//! let mut processor = DataProcessor::new(SortAlgorithm::Quick);
//! let mut data = [5, 2, 9, 1, 5, 6];
//! processor.process(&mut data);
//! assert_eq!(data, [1, 2, 5, 5, 6, 9]);
//!
//! processor.set_strategy(SortAlgorithm::Merge);
//! let mut words = ["pear", "fig", "apple"];
//! processor.process(&mut words);
//! assert_eq!(words, ["apple", "fig", "pear"]);
//! ```

pub mod error;
pub mod processor;
pub mod report;
pub mod strategy;

// Re-export commonly needed types at crate root for convenience
pub use error::ParseError;
pub use processor::DataProcessor;
pub use report::Format;
pub use strategy::{BubbleSort, MergeSort, QuickSort, SortAlgorithm, SortStrategy};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use sortsy::prelude::*;
/// ```
pub mod prelude {
    // Strategies
    pub use crate::strategy::{BubbleSort, MergeSort, QuickSort, SortAlgorithm, SortStrategy};

    // Client
    pub use crate::processor::DataProcessor;

    // Output
    pub use crate::report::{transcript_line, Format};
}
