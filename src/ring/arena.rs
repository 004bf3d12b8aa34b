//! Circular doubly-linked ring of numbered participants
//!
//! Nodes live in a `Vec` arena and refer to their neighbours by index, so the
//! ring owns every node and no reference cycle exists. Unlinking a node only
//! rewrites the `next`/`prev` indices of its two neighbours; the slot itself
//! stays in the arena and is flagged as unlinked in a `BitVec`.

use bitvec::vec::BitVec;

use crate::io::error::{Result, invalid_parameter};
use crate::ring::elimination::{Elimination, Eliminations};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Node {
    id: usize,
    prev: usize,
    next: usize,
}

/// Ring of participants numbered `1..=count` in ring order
#[derive(Debug, Clone)]
pub struct JosephusRing {
    nodes: Vec<Node>,
    linked: BitVec,
    first: usize,
    len: usize,
}

impl JosephusRing {
    /// Build a ring of `count` participants, participant `i` followed by `i + 1`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `count` is zero
    pub fn build(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(invalid_parameter(
                "count",
                &count,
                &"ring needs at least one participant",
            ));
        }

        let nodes = (0..count)
            .map(|index| Node {
                id: index + 1,
                prev: (index + count - 1) % count,
                next: (index + 1) % count,
            })
            .collect();

        Ok(Self {
            nodes,
            linked: BitVec::repeat(true, count),
            first: 0,
            len: count,
        })
    }

    /// Number of participants still in the ring
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false` for a successfully built ring
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Id of the node traversal starts from
    pub fn first_id(&self) -> usize {
        self.id_at(self.first)
    }

    /// Whether participant `id` is still linked into the ring
    pub fn contains(&self, id: usize) -> bool {
        id.checked_sub(1)
            .is_some_and(|index| self.is_linked(index))
    }

    /// Ids of the `(previous, next)` neighbours of a linked participant
    pub fn neighbours(&self, id: usize) -> Option<(usize, usize)> {
        if !self.contains(id) {
            return None;
        }
        let node = self.nodes.get(id - 1)?;
        Some((self.id_at(node.prev), self.id_at(node.next)))
    }

    /// Ids in ring order starting at the first node, each exactly once
    pub fn iter(&self) -> Traversal<'_> {
        Traversal {
            ring: self,
            cursor: self.first,
            remaining: self.len,
        }
    }

    /// Collect [`JosephusRing::iter`] into a vector
    pub fn traverse_from_first(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Verify that the links still describe a single ring of `len` nodes
    ///
    /// Checks that `prev` and `next` are mutual inverses for every linked
    /// node and that `len` steps along `next` lead back to the first node
    /// while visiting only linked nodes.
    pub fn check_links(&self) -> bool {
        let mutual = self.nodes.iter().enumerate().all(|(index, node)| {
            !self.is_linked(index)
                || (self.prev_of(node.next) == index && self.next_of(node.prev) == index)
        });

        let mut cursor = self.first;
        for _ in 0..self.len {
            if !self.is_linked(cursor) {
                return false;
            }
            cursor = self.next_of(cursor);
        }

        mutual && cursor == self.first && self.linked.count_ones() == self.len
    }

    /// Eliminate participants one at a time, lazily
    ///
    /// Counting starts at the participant `start_offset - 1` places after the
    /// first node. Each step advances `step - 1` places, unlinks that
    /// participant and continues from its former successor.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `start_offset` is outside `1..=len` or
    /// `step` is outside `1..=len`
    pub fn eliminations(&mut self, start_offset: usize, step: usize) -> Result<Eliminations<'_>> {
        if start_offset == 0 || start_offset > self.len {
            return Err(invalid_parameter(
                "start_offset",
                &start_offset,
                &format!("must be between 1 and {}", self.len),
            ));
        }
        if step == 0 || step > self.len {
            return Err(invalid_parameter(
                "step",
                &step,
                &format!("must be between 1 and {}", self.len),
            ));
        }

        let current = self.advance(self.first, start_offset - 1);
        Ok(Eliminations::new(self, current, step))
    }

    /// Run the whole elimination, leaving only the survivor in the ring
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` under the same conditions as
    /// [`JosephusRing::eliminations`]
    pub fn eliminate(&mut self, start_offset: usize, step: usize) -> Result<Elimination> {
        let order: Vec<usize> = self.eliminations(start_offset, step)?.collect();
        Ok(Elimination {
            order,
            survivor: self.first_id(),
        })
    }

    pub(crate) fn id_at(&self, index: usize) -> usize {
        self.nodes.get(index).map_or(0, |node| node.id)
    }

    pub(crate) fn advance(&self, from: usize, steps: usize) -> usize {
        (0..steps).fold(from, |index, _| self.next_of(index))
    }

    /// Unlink the node at `index` and return its former successor
    pub(crate) fn unlink(&mut self, index: usize) -> usize {
        let Some(&Node { prev, next, .. }) = self.nodes.get(index) else {
            return index;
        };

        if let Some(node) = self.nodes.get_mut(prev) {
            node.next = next;
        }
        if let Some(node) = self.nodes.get_mut(next) {
            node.prev = prev;
        }
        if let Some(node) = self.nodes.get_mut(index) {
            node.prev = index;
            node.next = index;
        }
        self.linked.set(index, false);
        self.len -= 1;

        if self.first == index {
            self.first = next;
        }
        next
    }

    fn is_linked(&self, index: usize) -> bool {
        self.linked.get(index).is_some_and(|bit| *bit)
    }

    fn next_of(&self, index: usize) -> usize {
        self.nodes.get(index).map_or(index, |node| node.next)
    }

    fn prev_of(&self, index: usize) -> usize {
        self.nodes.get(index).map_or(index, |node| node.prev)
    }
}

/// Iterator over ring ids produced by [`JosephusRing::iter`]
#[derive(Debug, Clone)]
pub struct Traversal<'a> {
    ring: &'a JosephusRing,
    cursor: usize,
    remaining: usize,
}

impl Iterator for Traversal<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.remaining = self.remaining.checked_sub(1)?;
        let id = self.ring.id_at(self.cursor);
        self.cursor = self.ring.next_of(self.cursor);
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Traversal<'_> {}

impl<'a> IntoIterator for &'a JosephusRing {
    type Item = usize;
    type IntoIter = Traversal<'a>;

    fn into_iter(self) -> Traversal<'a> {
        self.iter()
    }
}
