use std::collections::{HashSet, VecDeque};

use super::{SolveError, Strategy, TrackedCell, Walk};
use crate::maze::MazeGrid;

/// Breadth-first search from start to end. Returns a shortest path in edge count.
pub(super) fn solve_bfs(maze: &MazeGrid) -> Result<Walk, SolveError> {
    let start = maze.start();
    let goal = maze.end();

    let mut queue = VecDeque::from([TrackedCell::root(start)]);
    let mut visited = HashSet::from([start]);

    while let Some(current) = queue.pop_front() {
        if current.coord == goal {
            return Ok(Walk {
                path: current.path(),
                backtrack_count: 0,
            });
        }

        // Neighbors are expanded in +x, -x, +y, -y order
        let unvisited = maze
            .open_neighbors(current.coord)
            .filter(|&c| visited.insert(c))
            .collect::<Vec<_>>();
        for coord in unvisited {
            queue.push_back(TrackedCell::child(&current, coord));
        }
    }

    Err(SolveError::NoPath {
        strategy: Strategy::Bfs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_path_around_a_block() {
        let maze = MazeGrid::from_pattern(
            &[
                "......", //
                ".####.",
                "......",
            ],
            (0, 0),
            (5, 2),
        )
        .unwrap();
        let walk = solve_bfs(&maze).unwrap();
        assert_eq!(walk.path.len() - 1, 7);
        assert_eq!(walk.backtrack_count, 0);
    }

    #[test]
    fn test_path_is_contiguous() {
        let maze = MazeGrid::from_pattern(
            &[
                "..#....", //
                "#.#.##.",
                "#...#..",
                "###.#.#",
                "......#",
            ],
            (0, 0),
            (6, 2),
        )
        .unwrap();
        let walk = solve_bfs(&maze).unwrap();
        for pair in walk.path.windows(2) {
            assert!(maze.open_neighbors(pair[0]).any(|c| c == pair[1]));
        }
    }

    #[test]
    fn test_unreachable_end() {
        let maze = MazeGrid::from_pattern(&["..#.."], (0, 0), (4, 0)).unwrap();
        assert!(matches!(
            solve_bfs(&maze),
            Err(SolveError::NoPath {
                strategy: Strategy::Bfs
            })
        ));
    }
}
