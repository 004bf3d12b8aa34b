//! Classic algorithm exercises: backtracking maze search, Fibonacci search and
//! the Josephus elimination ring
//!
//! The three components are independent. Each works on caller-owned data,
//! performs no I/O and reports "nothing found" as a normal outcome rather
//! than an error. The `io` module adds file loading, PNG export and the CLI.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Backtracking path search over a walled grid
pub mod maze;
/// Josephus elimination on an index-arena ring
pub mod ring;
/// Fibonacci and binary search over sorted slices
pub mod search;

pub use io::error::{ClassicsError, Result};
