use std::collections::VecDeque;

use super::{SolveError, Strategy, Walk};
use crate::maze::{Coord, Direction, MazeGrid};

/// Number of recent positions kept to notice the explorer standing still.
const HISTORY_LEN: usize = 3;

/// Right-hand-rule explorer.
///
/// Each step it tries turning right, going straight, turning left and finally turning around,
/// taking the first open cell. Turning around into the cell it just left (a dead end) counts as
/// a backtrack. When the last [`HISTORY_LEN`] recorded positions are all the same it is stuck,
/// and retreats along its trail to the nearest earlier position with more than one way out.
struct WallFollower<'a> {
    maze: &'a MazeGrid,
    position: Coord,
    facing: Direction,
    /// Positions recorded at the end of the last few steps
    recent: VecDeque<Coord>,
    /// Every position walked so far, start included. Consecutive entries are adjacent.
    trail: Vec<Coord>,
    backtrack_count: usize,
}

impl<'a> WallFollower<'a> {
    fn new(maze: &'a MazeGrid) -> Self {
        WallFollower {
            maze,
            position: maze.start(),
            facing: Direction::East,
            recent: VecDeque::with_capacity(HISTORY_LEN),
            trail: vec![maze.start()],
            backtrack_count: 0,
        }
    }

    fn remember(&mut self, coord: Coord) {
        if self.recent.len() == HISTORY_LEN {
            self.recent.pop_front();
        }
        self.recent.push_back(coord);
    }

    fn advance(&mut self, next: Coord) {
        self.position = next;
        self.trail.push(next);
        self.remember(next);
    }

    fn is_stuck(&self) -> bool {
        self.recent.len() == HISTORY_LEN && self.recent.iter().all(|&c| c == self.recent[0])
    }

    fn is_choice_point(&self, coord: Coord) -> bool {
        self.maze.open_neighbors(coord).nth(1).is_some()
    }

    /// Retraces the trail back to the nearest earlier choice point, one counted step at a time.
    /// Returns `false` without moving if there is none.
    fn backtrack(&mut self) -> bool {
        let current = self.trail.len() - 1;
        let Some(target) = (0..current)
            .rev()
            .find(|&i| self.is_choice_point(self.trail[i]))
        else {
            return false;
        };

        let retreat = self.trail[target..current]
            .iter()
            .rev()
            .copied()
            .collect::<Vec<_>>();
        tracing::trace!(
            "[wall follower] retreating {} steps from {:?} to {:?}",
            retreat.len(),
            self.position,
            self.trail[target]
        );
        for coord in retreat {
            if let Some(direction) = Direction::between(self.position, coord) {
                self.facing = direction;
            }
            self.position = coord;
            self.trail.push(coord);
            self.backtrack_count += 1;
        }
        self.recent.clear();
        true
    }

    fn step(&mut self) {
        if self.is_stuck() {
            tracing::trace!("[wall follower] stuck at {:?}", self.position);
            if !self.backtrack() {
                self.facing = self.facing.reverse();
                let ahead = self.facing.step(self.position);
                if self.maze.is_open(ahead) {
                    self.advance(ahead);
                } else {
                    self.remember(self.position);
                }
            }
            return;
        }

        let previous = self.trail.len().checked_sub(2).map(|i| self.trail[i]);
        let choices = [
            self.facing.turn_right(),
            self.facing,
            self.facing.turn_left(),
            self.facing.reverse(),
        ];
        for direction in choices {
            let next = direction.step(self.position);
            if !self.maze.is_open(next) {
                continue;
            }
            if direction == self.facing.reverse() && Some(next) == previous {
                tracing::trace!("[wall follower] dead end at {:?}, turning back", self.position);
                self.backtrack_count += 1;
            }
            self.facing = direction;
            self.advance(next);
            return;
        }

        // Walled in on all sides
        self.remember(self.position);
    }
}

/// Walks the maze keeping the right hand on the wall until the end is reached.
///
/// With `limit` set, gives up after that many steps.
pub(super) fn follow_right_wall(maze: &MazeGrid, limit: Option<usize>) -> Result<Walk, SolveError> {
    let mut follower = WallFollower::new(maze);
    let mut steps = 0usize;

    while follower.position != maze.end() {
        if let Some(limit) = limit.filter(|&limit| steps >= limit) {
            tracing::debug!(
                "[wall follower] step limit {} hit at {:?}",
                limit,
                follower.position
            );
            return Err(SolveError::StepLimitExceeded {
                strategy: Strategy::WallFollower,
                limit,
            });
        }
        follower.step();
        steps += 1;
    }

    Ok(Walk {
        path: follower.trail,
        backtrack_count: follower.backtrack_count,
    })
}
