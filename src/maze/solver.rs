//! Backtracking path search over a maze grid
//!
//! The search is depth-first with a first-success policy: neighbours are tried
//! in the caller's [`DirectionOrder`] and the first direction that eventually
//! reaches the target wins. Cells on the discovered path end up `Visited`,
//! abandoned branches end up `DeadEnd`.
//!
//! The result is *a* path, not the shortest one. Comparing several orders with
//! [`compare_orders`] is how the classic exercise looks for a shorter route.
//!
//! The traversal keeps its own frame stack instead of recursing, so large
//! mazes cannot exhaust the thread stack. Success is reported the moment the
//! target is marked `Visited`, which is exactly when the recursive formulation
//! would first observe the target as visited.

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::maze::{Cell, Direction, DirectionOrder, MazeGrid, Position};

/// Result of a search, including the path it marked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Whether the target was reached
    pub found: bool,
    /// Discovered path from start to target, empty when nothing was found
    ///
    /// Also empty when the target was already visited before the search began,
    /// since no new path was walked.
    pub path: Vec<Position>,
    /// Cells marked `Visited` after the search
    pub visited: usize,
    /// Cells marked `DeadEnd` after the search
    pub dead_ends: usize,
}

/// Outcome of one direction order in [`compare_orders`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyReport {
    /// Order that was tried
    pub order: DirectionOrder,
    /// Search result for this order
    pub outcome: SearchOutcome,
    /// Grid as left by the search
    pub grid: MazeGrid,
}

impl StrategyReport {
    /// Number of cells on the marked path
    pub fn path_len(&self) -> usize {
        self.outcome.path.len()
    }

    /// Number of cells the search touched
    pub const fn explored(&self) -> usize {
        self.outcome.visited + self.outcome.dead_ends
    }
}

struct Frame {
    position: Position,
    next_direction: usize,
}

/// Search for a path from `start` to `target`, marking the grid in place
///
/// Returns `true` when the target is reached. `start == target` succeeds
/// without marking anything. Neighbours outside the grid behave like walls.
pub fn find_path(
    grid: &mut MazeGrid,
    start: Position,
    target: Position,
    order: &DirectionOrder,
) -> bool {
    explore(grid, start, target, order).is_some()
}

/// Same search as [`find_path`], also returning the path and cell counts
pub fn solve(
    grid: &mut MazeGrid,
    start: Position,
    target: Position,
    order: &DirectionOrder,
) -> SearchOutcome {
    let path = explore(grid, start, target, order);
    let found = path.is_some();
    let outcome = SearchOutcome {
        found,
        path: path.unwrap_or_default(),
        visited: grid.count(Cell::Visited),
        dead_ends: grid.count(Cell::DeadEnd),
    };
    debug!(
        found,
        path_len = outcome.path.len(),
        visited = outcome.visited,
        dead_ends = outcome.dead_ends,
        %order,
        "maze search finished"
    );
    outcome
}

// Returns the walked path on success
fn explore(
    grid: &mut MazeGrid,
    start: Position,
    target: Position,
    order: &DirectionOrder,
) -> Option<Vec<Position>> {
    if start == target {
        return Some(vec![start]);
    }
    if grid.get(target) == Some(Cell::Visited) {
        return Some(Vec::new());
    }
    if !grid.get(start).is_some_and(Cell::is_open) {
        return None;
    }

    grid.set(start, Cell::Visited);
    let mut stack = vec![Frame {
        position: start,
        next_direction: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(&direction) = order.directions().get(frame.next_direction) else {
            // Every direction failed from here
            let position = frame.position;
            grid.set(position, Cell::DeadEnd);
            stack.pop();
            continue;
        };
        frame.next_direction += 1;

        let Some(neighbour) = direction.step(frame.position) else {
            continue;
        };
        if !grid.get(neighbour).is_some_and(Cell::is_open) {
            continue;
        }

        grid.set(neighbour, Cell::Visited);
        stack.push(Frame {
            position: neighbour,
            next_direction: 0,
        });
        if neighbour == target {
            return Some(stack.into_iter().map(|entry| entry.position).collect());
        }
    }

    None
}

/// Recover a chain of `Visited` cells from `start` to `target`
///
/// Scans the marked grid breadth-first through `Visited` cells only, so dead
/// ends are never part of the result. Returns `None` when no such chain exists.
pub fn traced_path(grid: &MazeGrid, start: Position, target: Position) -> Option<Vec<Position>> {
    if start == target {
        return grid.contains(start).then(|| vec![start]);
    }
    if grid.get(start) != Some(Cell::Visited) {
        return None;
    }

    let mut came_from: HashMap<Position, Position> = HashMap::new();
    let mut queue = VecDeque::from([start]);
    came_from.insert(start, start);

    while let Some(current) = queue.pop_front() {
        if current == target {
            let mut path = vec![current];
            let mut cursor = current;
            while cursor != start {
                cursor = *came_from.get(&cursor)?;
                path.push(cursor);
            }
            path.reverse();
            return Some(path);
        }

        for direction in Direction::ALL {
            let Some(next) = direction.step(current) else {
                continue;
            };
            if grid.get(next) == Some(Cell::Visited) && !came_from.contains_key(&next) {
                came_from.insert(next, current);
                queue.push_back(next);
            }
        }
    }

    None
}

/// Run the search once per order, each on its own copy of `grid`
///
/// Reachability does not depend on the order, so `found` agrees across all
/// reports; the marked path and the work done may differ.
pub fn compare_orders(
    grid: &MazeGrid,
    start: Position,
    target: Position,
    orders: &[DirectionOrder],
) -> Vec<StrategyReport> {
    orders
        .iter()
        .map(|order| {
            let mut attempt = grid.clone();
            let outcome = solve(&mut attempt, start, target, order);
            StrategyReport {
                order: *order,
                outcome,
                grid: attempt,
            }
        })
        .collect()
}

/// Successful report with the fewest path cells, earliest on ties
pub fn fewest_steps(reports: &[StrategyReport]) -> Option<&StrategyReport> {
    reports
        .iter()
        .filter(|report| report.outcome.found)
        .min_by_key(|report| report.path_len())
}
