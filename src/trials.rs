//! Batches of independent explorations run in parallel.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::generators::{MazeKind, create_maze};
use crate::maze::MazeError;
use crate::solvers::{SolveConfig, SolveError, Strategy, explore};
use crate::stats::ExplorationResult;

#[derive(Debug, thiserror::Error)]
pub enum TrialError {
    #[error("trial {trial}: {source}")]
    Maze {
        trial: usize,
        #[source]
        source: MazeError,
    },
    #[error("trial {trial}: {source}")]
    Solve {
        trial: usize,
        #[source]
        source: SolveError,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialPlan {
    pub maze_kind: MazeKind,
    pub width: u16,
    pub height: u16,
    pub strategies: Vec<Strategy>,
    pub runs: usize,
    /// Trial `i` uses seed `seed + i`; unseeded trials draw from OS entropy.
    pub seed: Option<u64>,
    pub solve: SolveConfig,
}

impl Default for TrialPlan {
    fn default() -> Self {
        Self {
            maze_kind: MazeKind::Random,
            width: 30,
            height: 30,
            strategies: Strategy::ALL.to_vec(),
            runs: 1,
            seed: None,
            solve: SolveConfig::default(),
        }
    }
}

/// Runs one trial: builds its own maze and explores it with every planned strategy.
fn run_trial(plan: &TrialPlan, trial: usize) -> Result<Vec<ExplorationResult>, TrialError> {
    let seed = plan.seed.map(|s| s.wrapping_add(trial as u64));
    let maze = create_maze(plan.maze_kind, plan.width, plan.height, seed)
        .map_err(|source| TrialError::Maze { trial, source })?;

    plan.strategies
        .iter()
        .map(|&strategy| {
            explore(&maze, strategy, &plan.solve)
                .map(|exploration| exploration.result)
                .map_err(|source| TrialError::Solve { trial, source })
        })
        .collect()
}

/// Runs `plan.runs` independent trials across the rayon thread pool.
///
/// Results come back grouped by trial in trial order, strategies in plan order within a trial.
/// Trials share nothing, so callers must not rely on them having run in any particular order.
pub fn run_trials(plan: &TrialPlan) -> Result<Vec<ExplorationResult>, TrialError> {
    tracing::info!(
        "[trials] {} runs of {:?} on {} mazes",
        plan.runs,
        plan.strategies,
        plan.maze_kind
    );
    let per_trial = (0..plan.runs)
        .into_par_iter()
        .map(|trial| run_trial(plan, trial))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(per_trial.into_iter().flatten().collect())
}
