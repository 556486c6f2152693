pub mod cell;
pub(crate) mod grid;

use std::collections::{HashSet, VecDeque};

pub use cell::{Cell, Tile};
pub(crate) use grid::Grid;

/// `(x, y)` position in the maze, with `y` growing downwards.
pub type Coord = (u16, u16);

#[derive(Debug, thiserror::Error)]
pub enum MazeError {
    #[error(
        "invalid maze dimensions {width}x{height}: random mazes need both sides >= 3 and one side >= 5"
    )]
    InvalidDimensions { width: u16, height: u16 },
    #[error("invalid maze pattern: {0}")]
    InvalidPattern(String),
    #[error("invalid {role} position {coord:?}: {reason}")]
    InvalidEndpoint {
        role: &'static str,
        coord: Coord,
        reason: &'static str,
    },
    #[error("gave up generating a maze after {attempts} attempts")]
    GenerationExhausted { attempts: usize },
}

/// Axis-aligned unit step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// +x
    East,
    /// -x
    West,
    /// +y
    South,
    /// -y
    North,
}

impl Direction {
    /// Neighbor order used everywhere a search expands a cell.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::South,
        Direction::North,
    ];

    /// Quarter turn clockwise (with `y` pointing down).
    pub fn turn_right(self) -> Self {
        match self {
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
            Direction::North => Direction::East,
        }
    }

    pub fn turn_left(self) -> Self {
        match self {
            Direction::East => Direction::North,
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::South => Direction::North,
            Direction::North => Direction::South,
        }
    }

    /// Moves one step. Leaving the `u16` range yields a coordinate no maze contains.
    pub fn step(self, (x, y): Coord) -> Coord {
        // NOTE: When x < 1 or y < 1, wrap to u16::MAX, and when x + 1 or y + 1 exceeds
        // u16::MAX, clamp to u16::MAX. Either way the bounds check filters the result out,
        // as the largest index possible is u16::MAX - 1.
        match self {
            Direction::East => (x.saturating_add(1), y),
            Direction::West => (x.wrapping_sub(1), y),
            Direction::South => (x, y.saturating_add(1)),
            Direction::North => (x, y.wrapping_sub(1)),
        }
    }

    /// The direction leading from `from` to the adjacent `to`, if they are adjacent.
    pub fn between(from: Coord, to: Coord) -> Option<Self> {
        Direction::ALL
            .into_iter()
            .find(|direction| direction.step(from) == to)
    }
}

/// A rectangular maze of open and wall cells with a start and an end.
///
/// Built once and never mutated afterwards. `start` and `end` are always distinct open cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGrid {
    grid: Grid,
    start: Coord,
    end: Coord,
}

impl MazeGrid {
    /// Wraps a finished grid, checking both endpoints.
    pub(crate) fn from_grid(grid: Grid, start: Coord, end: Coord) -> Result<Self, MazeError> {
        for (role, coord) in [("start", start), ("end", end)] {
            if !grid.contains(coord) {
                return Err(MazeError::InvalidEndpoint {
                    role,
                    coord,
                    reason: "out of bounds",
                });
            }
            if !grid[coord].is_open() {
                return Err(MazeError::InvalidEndpoint {
                    role,
                    coord,
                    reason: "on a wall",
                });
            }
        }
        if start == end {
            return Err(MazeError::InvalidEndpoint {
                role: "end",
                coord: end,
                reason: "same as start",
            });
        }
        Ok(MazeGrid { grid, start, end })
    }

    /// Parses a hand-drawn maze, one string per row. `#`/`1` are walls, `.`/`0` are open.
    ///
    /// Connectivity is not checked, so a pattern may leave `end` unreachable.
    pub fn from_pattern<S: AsRef<str>>(
        rows: &[S],
        start: Coord,
        end: Coord,
    ) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = rows
            .first()
            .map(|row| row.as_ref().chars().count())
            .unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidPattern("pattern is empty".to_string()));
        }
        if width > u16::MAX as usize || height > u16::MAX as usize {
            return Err(MazeError::InvalidPattern(format!(
                "pattern {width}x{height} exceeds the maximum size"
            )));
        }

        let mut grid = Grid::new(width as u16, height as u16, Cell::Wall);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != width {
                return Err(MazeError::InvalidPattern(format!(
                    "row {y} has {} cells, expected {width}",
                    row.chars().count()
                )));
            }
            for (x, glyph) in row.chars().enumerate() {
                let cell = Cell::from_glyph(glyph).ok_or_else(|| {
                    MazeError::InvalidPattern(format!("unknown glyph {glyph:?} at ({x}, {y})"))
                })?;
                grid.set((x as u16, y as u16), cell);
            }
        }
        MazeGrid::from_grid(grid, start, end)
    }

    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.grid.contains(coord).then(|| self.grid[coord])
    }

    /// Out-of-bounds coordinates are never open.
    pub fn is_open(&self, coord: Coord) -> bool {
        self.cell(coord).is_some_and(Cell::is_open)
    }

    /// The in-bounds axis-aligned neighbors, always in `+x, -x, +y, -y` order.
    pub fn neighbors4(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |direction| direction.step(coord))
            .filter(move |&c| self.grid.contains(c))
    }

    pub fn open_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.neighbors4(coord).filter(move |&c| self.is_open(c))
    }

    pub fn open_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.grid.positions_of(Cell::Open)
    }

    /// Checks that every open cell can be reached from `start`.
    pub fn is_fully_connected(&self) -> bool {
        let mut seen = HashSet::from([self.start]);
        let mut queue = VecDeque::from([self.start]);
        while let Some(coord) = queue.pop_front() {
            for next in self.open_neighbors(coord) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen.len() == self.open_cells().count()
    }

    /// Draws the maze with `walk` overlaid, one terminal line per row.
    pub fn render(&self, walk: &[Coord]) -> String {
        let trail = walk.iter().copied().collect::<HashSet<_>>();
        let mut out = String::new();
        for y in 0..self.height() {
            for x in 0..self.width() {
                let coord = (x, y);
                let tile = if coord == self.start {
                    Tile::Start
                } else if coord == self.end {
                    Tile::End
                } else if trail.contains(&coord) {
                    Tile::Trail
                } else {
                    Tile::from(self.grid[coord])
                };
                out.push_str(&tile.to_string());
            }
            out.push('\n');
        }
        out
    }
}
