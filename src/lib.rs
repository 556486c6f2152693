pub mod config;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod solvers;
pub mod stats;
pub mod trials;

pub use generators::{MazeKind, create_maze, generate_random, generate_static};
pub use maze::{Coord, MazeError, MazeGrid};
pub use solvers::{Exploration, SolveConfig, SolveError, StepLimit, Strategy, explore, solve};
pub use stats::ExplorationResult;
