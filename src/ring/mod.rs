//! Josephus elimination on a circular doubly-linked ring
//!
//! This module contains:
//! - The index-arena ring and its traversal
//! - Lazy and eager elimination
//! - The closed-form survivor formula used to cross-check simulations

/// Index-arena ring storage and traversal
pub mod arena;
/// Elimination iterator and outcome
pub mod elimination;
/// Closed-form survivor computation
pub mod formula;

pub use arena::{JosephusRing, Traversal};
pub use elimination::{Elimination, Eliminations};
pub use formula::josephus_survivor;
