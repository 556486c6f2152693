use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

mod dfs;
mod fixed;

use dfs::randomized_dfs;
use fixed::fixed_layout;

use crate::maze::{Cell, Coord, Grid, MazeError, MazeGrid};

/// How many carves to try before giving up on a random maze.
const MAX_GENERATION_ATTEMPTS: usize = 64;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MazeKind {
    #[default]
    Random,
    Static,
}

impl MazeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MazeKind::Random => "random",
            MazeKind::Static => "static",
        }
    }
}

impl std::fmt::Display for MazeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MazeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(MazeKind::Random),
            "static" => Ok(MazeKind::Static),
            other => Err(format!("unknown maze type {other:?}")),
        }
    }
}

/// Builds a maze of the given kind. `width` and `height` are ignored for [`MazeKind::Static`].
pub fn create_maze(
    kind: MazeKind,
    width: u16,
    height: u16,
    seed: Option<u64>,
) -> Result<MazeGrid, MazeError> {
    match kind {
        MazeKind::Random => generate_random(width, height, seed),
        MazeKind::Static => generate_static(),
    }
}

/// Carves a random maze. Every open cell is reachable from every other one.
///
/// Carves that leave no distinct start and end are silently regenerated from the same RNG
/// stream, so a seed always reproduces the same maze.
pub fn generate_random(width: u16, height: u16, seed: Option<u64>) -> Result<MazeGrid, MazeError> {
    // Both sides need an interior, and one of them room for a two-cell carve step
    if width < 3 || height < 3 || width.max(height) < 5 {
        return Err(MazeError::InvalidDimensions { width, height });
    }

    let mut rng = get_rng(seed);
    for attempt in 1..=MAX_GENERATION_ATTEMPTS {
        let grid = randomized_dfs(width, height, &mut rng);
        match pick_endpoints(&grid, &mut rng) {
            Some((start, end)) => {
                tracing::debug!(
                    "[generate] {}x{} maze carved on attempt {}, start {:?}, end {:?}",
                    width,
                    height,
                    attempt,
                    start,
                    end
                );
                return MazeGrid::from_grid(grid, start, end);
            }
            None => {
                tracing::debug!(
                    "[generate] attempt {} left no distinct start and end, regenerating",
                    attempt
                );
            }
        }
    }
    Err(MazeError::GenerationExhausted {
        attempts: MAX_GENERATION_ATTEMPTS,
    })
}

/// Loads the fixed layout, start `(11, 0)` and end `(13, 47)`.
pub fn generate_static() -> Result<MazeGrid, MazeError> {
    fixed_layout()
}

/// Chooses the start among open cells of the topmost row that has any, and the end among open
/// cells of the bottommost such row.
fn pick_endpoints<R: Rng>(grid: &Grid, rng: &mut R) -> Option<(Coord, Coord)> {
    let open = grid.positions_of(Cell::Open).collect::<Vec<_>>();
    // Positions come row by row, so the first and last open cells sit on the extreme rows
    let top = open.first()?.1;
    let bottom = open.last()?.1;

    let top_cells = open.iter().copied().filter(|c| c.1 == top).collect::<Vec<_>>();
    let start = *top_cells.choose(rng)?;
    let bottom_cells = open
        .iter()
        .copied()
        .filter(|&c| c.1 == bottom && c != start)
        .collect::<Vec<_>>();
    let end = *bottom_cells.choose(rng)?;
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_tiny_dimensions() {
        for (w, h) in [(0, 10), (2, 10), (10, 2), (3, 3), (4, 4)] {
            assert!(matches!(
                generate_random(w, h, Some(1)),
                Err(MazeError::InvalidDimensions { .. })
            ));
        }
    }

    #[test]
    fn test_smallest_mazes_still_get_distinct_endpoints() {
        for seed in 0..50 {
            let maze = generate_random(5, 3, Some(seed)).unwrap();
            assert_ne!(maze.start(), maze.end());
            assert!(maze.is_open(maze.start()) && maze.is_open(maze.end()));
        }
    }

    #[test]
    fn test_endpoints_on_extreme_open_rows() {
        let maze = generate_random(31, 23, Some(11)).unwrap();
        let rows = maze.open_cells().map(|c| c.1).collect::<Vec<_>>();
        let top = *rows.iter().min().unwrap();
        let bottom = *rows.iter().max().unwrap();
        assert_eq!(maze.start().1, top);
        assert_eq!(maze.end().1, bottom);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        assert_eq!(
            generate_random(30, 30, Some(5)).unwrap(),
            generate_random(30, 30, Some(5)).unwrap()
        );
    }

    #[test]
    fn test_static_ignores_dimensions() {
        let a = create_maze(MazeKind::Static, 5, 5, None).unwrap();
        let b = create_maze(MazeKind::Static, 200, 90, Some(3)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, generate_static().unwrap());
    }

    #[test]
    fn test_maze_kind_parsing() {
        assert_eq!("random".parse::<MazeKind>(), Ok(MazeKind::Random));
        assert_eq!("static".parse::<MazeKind>(), Ok(MazeKind::Static));
        assert!("spiral".parse::<MazeKind>().is_err());
        assert_eq!(MazeKind::Static.to_string(), "static");
    }
}
