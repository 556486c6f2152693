use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, HashMap, HashSet},
    rc::Rc,
};

use super::{SolveError, Strategy, TrackedCell, Walk};
use crate::maze::{Coord, MazeGrid};

/// Manhattan distance, exact lower bound of the remaining moves on a 4-connected grid.
fn manhattan(a: Coord, b: Coord) -> usize {
    a.0.abs_diff(b.0) as usize + a.1.abs_diff(b.1) as usize
}

/// Frontier entry, ordered by estimated total cost, then by insertion order.
struct Candidate {
    estimated_cost: usize,
    order: usize,
    cell: Rc<TrackedCell>,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.estimated_cost, self.order).cmp(&(other.estimated_cost, other.order))
    }
}

/// A* from start to end with a Manhattan heuristic. Returns a shortest path in edge count.
pub(super) fn solve_astar(maze: &MazeGrid) -> Result<Walk, SolveError> {
    let start = maze.start();
    let goal = maze.end();

    // Using Reverse to turn the max-heap into a min-heap
    let mut pq: BinaryHeap<Reverse<Candidate>> = BinaryHeap::new();
    let mut order = 0;
    pq.push(Reverse(Candidate {
        estimated_cost: manhattan(start, goal),
        order,
        cell: TrackedCell::root(start),
    }));

    // Best known cost to reach each cell
    let mut costs = HashMap::from([(start, 0)]);
    // Cells whose cost is final
    let mut visited = HashSet::new();

    while let Some(Reverse(Candidate { cell: current, .. })) = pq.pop() {
        if !visited.insert(current.coord) {
            continue;
        }

        if current.coord == goal {
            return Ok(Walk {
                path: current.path(),
                backtrack_count: 0,
            });
        }

        let new_cost = current.traveling_cost + 1;
        for coord in maze.open_neighbors(current.coord) {
            let is_cheaper = costs
                .get(&coord)
                .is_none_or(|&existing_cost| new_cost < existing_cost);
            if !is_cheaper {
                continue;
            }
            costs.insert(coord, new_cost);
            order += 1;
            pq.push(Reverse(Candidate {
                estimated_cost: new_cost + manhattan(coord, goal),
                order,
                cell: TrackedCell::child(&current, coord),
            }));
        }
    }

    Err(SolveError::NoPath {
        strategy: Strategy::AStar,
    })
}
