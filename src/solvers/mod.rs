use std::rc::Rc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

mod astar;
mod bfs;
mod wall_follower;

use crate::maze::{Coord, MazeGrid};
use crate::stats::ExplorationResult;
use astar::solve_astar;
use bfs::solve_bfs;
use wall_follower::follow_right_wall;

#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    #[error("{strategy} exhausted its frontier without reaching the end")]
    NoPath { strategy: Strategy },
    #[error("{strategy} gave up after {limit} steps without reaching the end")]
    StepLimitExceeded { strategy: Strategy, limit: usize },
}

#[derive(Default)]
struct TrackedCell {
    /// Coordinates of the cell in the maze
    coord: Coord,
    /// The parent cell from which this cell was reached
    parent: Option<Rc<TrackedCell>>,
    /// Cost to reach this cell from the start
    traveling_cost: usize,
}

impl TrackedCell {
    fn root(coord: Coord) -> Rc<Self> {
        Rc::new(TrackedCell {
            coord,
            parent: None,
            traveling_cost: 0,
        })
    }

    fn child(parent: &Rc<TrackedCell>, coord: Coord) -> Rc<Self> {
        Rc::new(TrackedCell {
            coord,
            parent: Some(parent.clone()),
            traveling_cost: parent.traveling_cost + 1, // Uniform cost for each step
        })
    }

    /// The positions from the root to this cell, both included.
    fn path(&self) -> Vec<Coord> {
        let mut path = vec![self.coord];
        let mut current = self.parent.as_ref();
        while let Some(cell) = current {
            path.push(cell.coord);
            current = cell.parent.as_ref();
        }
        path.reverse();
        path
    }
}

/// The walk a strategy produced, before timing is attached.
struct Walk {
    /// Every position in order, start included.
    path: Vec<Coord>,
    backtrack_count: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Right-hand rule with backtracking
    #[default]
    WallFollower,
    Bfs,
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::WallFollower, Strategy::Bfs, Strategy::AStar];

    /// Tag reported as `strategy_name`.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::WallFollower => "wall_follower",
            Strategy::Bfs => "bfs",
            Strategy::AStar => "astar",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::WallFollower => write!(f, "Wall Follower (right-hand rule)"),
            Strategy::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Strategy::AStar => write!(f, "A* Search"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wall-follower" | "wall_follower" => Ok(Strategy::WallFollower),
            "bfs" => Ok(Strategy::Bfs),
            "astar" | "a-star" => Ok(Strategy::AStar),
            other => Err(format!("unknown strategy {other:?}")),
        }
    }
}

/// Bound on the wall follower's iterations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepLimit {
    /// One step per (cell, facing) state of the maze. A deterministic walk that takes more
    /// steps than that is going around in a cycle.
    #[default]
    Auto,
    Fixed(usize),
    /// Walk until the end is reached, forever if it never is.
    Unbounded,
}

impl StepLimit {
    fn resolve(self, maze: &MazeGrid) -> Option<usize> {
        match self {
            StepLimit::Auto => Some(4 * maze.width() as usize * maze.height() as usize + 4),
            StepLimit::Fixed(limit) => Some(limit),
            StepLimit::Unbounded => None,
        }
    }
}

impl std::str::FromStr for StepLimit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(StepLimit::Auto),
            "unbounded" => Ok(StepLimit::Unbounded),
            n => n
                .parse::<usize>()
                .map(StepLimit::Fixed)
                .map_err(|_| format!("step limit must be auto, unbounded or a number, got {n:?}")),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveConfig {
    pub step_limit: StepLimit,
}

/// A finished exploration: the walk itself and its statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Exploration {
    /// Every position visited in order, start and end included.
    pub path: Vec<Coord>,
    pub result: ExplorationResult,
}

/// Runs `strategy` on `maze`, timing the search.
pub fn explore(
    maze: &MazeGrid,
    strategy: Strategy,
    config: &SolveConfig,
) -> Result<Exploration, SolveError> {
    let started = Instant::now();
    let walk = match strategy {
        Strategy::WallFollower => follow_right_wall(maze, config.step_limit.resolve(maze))?,
        Strategy::Bfs => solve_bfs(maze)?,
        Strategy::AStar => solve_astar(maze)?,
    };
    let elapsed = started.elapsed();

    let move_count = walk.path.len().saturating_sub(1);
    let result = ExplorationResult::new(strategy, elapsed, move_count, walk.backtrack_count);
    tracing::debug!(
        "[solve] {} reached {:?} in {} moves, {} backtracks, {:.6}s",
        strategy.name(),
        maze.end(),
        result.move_count,
        result.backtrack_count,
        result.elapsed_seconds
    );
    Ok(Exploration {
        path: walk.path,
        result,
    })
}

/// Runs `strategy` on `maze` with the default configuration and reports only the statistics.
pub fn solve(maze: &MazeGrid, strategy: Strategy) -> Result<ExplorationResult, SolveError> {
    explore(maze, strategy, &SolveConfig::default()).map(|exploration| exploration.result)
}
