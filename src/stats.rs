//! Run statistics shared by every strategy, and their aggregation across runs.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::solvers::Strategy;

/// Outcome of one exploration. The field set is the same for every strategy, so results from
/// different strategies can be grouped and averaged together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorationResult {
    pub strategy_name: String,
    pub elapsed_seconds: f64,
    /// Edges traversed by the returned walk.
    pub move_count: usize,
    pub backtrack_count: usize,
    pub moves_per_second: f64,
}

impl ExplorationResult {
    pub fn new(
        strategy: Strategy,
        elapsed: Duration,
        move_count: usize,
        backtrack_count: usize,
    ) -> Self {
        let elapsed_seconds = elapsed.as_secs_f64();
        ExplorationResult {
            strategy_name: strategy.name().to_string(),
            elapsed_seconds,
            move_count,
            backtrack_count,
            moves_per_second: moves_per_second(move_count, elapsed_seconds),
        }
    }
}

/// `move_count / elapsed_seconds`, or 0 when no time elapsed.
pub fn moves_per_second(move_count: usize, elapsed_seconds: f64) -> f64 {
    if elapsed_seconds > 0.0 {
        move_count as f64 / elapsed_seconds
    } else {
        0.0
    }
}

/// Per-strategy means over a batch of runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySummary {
    pub strategy_name: String,
    pub runs: usize,
    pub avg_elapsed_seconds: f64,
    pub avg_move_count: f64,
    pub avg_backtrack_count: f64,
    pub avg_moves_per_second: f64,
}

/// Groups results by strategy name, sorted by name. Input order does not matter.
pub fn summarize(results: &[ExplorationResult]) -> Vec<StrategySummary> {
    let mut groups: BTreeMap<&str, Vec<&ExplorationResult>> = BTreeMap::new();
    for result in results {
        groups
            .entry(result.strategy_name.as_str())
            .or_default()
            .push(result);
    }

    groups
        .into_iter()
        .map(|(name, runs)| {
            let n = runs.len() as f64;
            let mean = |field: fn(&ExplorationResult) -> f64| {
                runs.iter().map(|r| field(r)).sum::<f64>() / n
            };
            StrategySummary {
                strategy_name: name.to_string(),
                runs: runs.len(),
                avg_elapsed_seconds: mean(|r| r.elapsed_seconds),
                avg_move_count: mean(|r| r.move_count as f64),
                avg_backtrack_count: mean(|r| r.backtrack_count as f64),
                avg_moves_per_second: mean(|r| r.moves_per_second),
            }
        })
        .collect()
}

/// The run with the fewest moves. Ties go to the earliest result.
pub fn best_run(results: &[ExplorationResult]) -> Option<&ExplorationResult> {
    results.iter().min_by_key(|r| r.move_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, elapsed_seconds: f64, move_count: usize, backtrack_count: usize) -> ExplorationResult {
        ExplorationResult {
            strategy_name: name.to_string(),
            elapsed_seconds,
            move_count,
            backtrack_count,
            moves_per_second: moves_per_second(move_count, elapsed_seconds),
        }
    }

    #[test]
    fn test_moves_per_second() {
        assert_eq!(moves_per_second(10, 2.0), 5.0);
        assert_eq!(moves_per_second(10, 0.0), 0.0);
        assert_eq!(moves_per_second(0, 1.0), 0.0);
    }

    #[test]
    fn test_new_derives_rate() {
        let r = ExplorationResult::new(Strategy::Bfs, Duration::from_millis(500), 20, 0);
        assert_eq!(r.strategy_name, "bfs");
        assert_eq!(r.elapsed_seconds, 0.5);
        assert_eq!(r.moves_per_second, 40.0);

        let instant = ExplorationResult::new(Strategy::AStar, Duration::ZERO, 20, 0);
        assert_eq!(instant.moves_per_second, 0.0);
    }

    #[test]
    fn test_serialized_field_set() {
        let value = serde_json::to_value(result("bfs", 1.0, 4, 0)).unwrap();
        let mut keys = value.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
        keys.sort();
        assert_eq!(
            keys,
            [
                "backtrack_count",
                "elapsed_seconds",
                "move_count",
                "moves_per_second",
                "strategy_name"
            ]
        );
    }

    #[test]
    fn test_summarize_groups_by_strategy() {
        let results = vec![
            result("wall_follower", 2.0, 30, 3),
            result("bfs", 1.0, 10, 0),
            result("wall_follower", 4.0, 50, 1),
        ];
        let summary = summarize(&results);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].strategy_name, "bfs");
        assert_eq!(summary[0].runs, 1);
        assert_eq!(summary[1].strategy_name, "wall_follower");
        assert_eq!(summary[1].runs, 2);
        assert_eq!(summary[1].avg_elapsed_seconds, 3.0);
        assert_eq!(summary[1].avg_move_count, 40.0);
        assert_eq!(summary[1].avg_backtrack_count, 2.0);
        assert_eq!(summary[1].avg_moves_per_second, 13.75);
    }

    #[test]
    fn test_best_run() {
        assert!(best_run(&[]).is_none());
        let results = vec![
            result("wall_follower", 2.0, 30, 3),
            result("bfs", 1.0, 10, 0),
            result("astar", 1.0, 10, 0),
        ];
        assert_eq!(best_run(&results).unwrap().strategy_name, "bfs");
    }
}
