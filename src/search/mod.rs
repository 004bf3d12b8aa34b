//! Searches over ascending slices

/// Recursive binary search
pub mod binary;
/// Fibonacci-interval search
pub mod fibonacci;
/// Algorithm selection
pub mod strategy;

pub use binary::binary_search;
pub use fibonacci::{fibonacci_numbers, fibonacci_search};
pub use strategy::SearchAlgorithm;
