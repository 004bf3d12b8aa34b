//! Selection between the available sorted-slice searches

use std::fmt;

use clap::ValueEnum;

use crate::search::{binary_search, fibonacci_search};

/// Which search to run over a sorted slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SearchAlgorithm {
    /// Fibonacci-interval partitioning
    #[default]
    Fibonacci,
    /// Recursive halving
    Binary,
}

impl SearchAlgorithm {
    /// Run the selected search
    pub fn search<T: Ord>(self, sorted: &[T], target: &T) -> Option<usize> {
        match self {
            Self::Fibonacci => fibonacci_search(sorted, target),
            Self::Binary => binary_search(sorted, target),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fibonacci => f.write_str("fibonacci"),
            Self::Binary => f.write_str("binary"),
        }
    }
}
