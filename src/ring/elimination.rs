//! Step-by-step Josephus elimination over a [`JosephusRing`]

use tracing::{debug, trace};

use crate::ring::JosephusRing;

/// Full result of an elimination run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elimination {
    /// Ids in the order they left the ring
    pub order: Vec<usize>,
    /// Id of the last remaining participant
    pub survivor: usize,
}

/// Lazy elimination produced by [`JosephusRing::eliminations`]
///
/// Yields one eliminated id per step until a single participant remains.
/// Dropping the iterator early leaves the ring partially eliminated but
/// consistent.
#[derive(Debug)]
pub struct Eliminations<'a> {
    ring: &'a mut JosephusRing,
    current: usize,
    step: usize,
}

impl<'a> Eliminations<'a> {
    pub(crate) fn new(ring: &'a mut JosephusRing, current: usize, step: usize) -> Self {
        debug!(
            participants = ring.len(),
            start = ring.id_at(current),
            step,
            "elimination started"
        );
        Self {
            ring,
            current,
            step,
        }
    }

    /// Participants still in the ring
    pub fn remaining(&self) -> usize {
        self.ring.len()
    }

    /// Read-only view of the ring between steps
    pub fn ring(&self) -> &JosephusRing {
        &*self.ring
    }

    /// Survivor id, available once only one participant remains
    pub fn survivor(&self) -> Option<usize> {
        (self.ring.len() == 1).then(|| self.ring.id_at(self.current))
    }
}

impl Iterator for Eliminations<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.ring.len() <= 1 {
            return None;
        }

        let victim = self.ring.advance(self.current, self.step - 1);
        let id = self.ring.id_at(victim);
        self.current = self.ring.unlink(victim);
        trace!(id, remaining = self.ring.len(), "eliminated");

        if self.ring.len() == 1 {
            debug!(survivor = self.ring.id_at(self.current), "elimination finished");
        }
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.ring.len().saturating_sub(1);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Eliminations<'_> {}
