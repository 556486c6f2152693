use anyhow::Result;

use maze_explorer::{
    ExplorationResult, MazeKind,
    config::ExplorerConfig,
    create_maze, explore, logging,
    stats::{best_run, summarize},
    trials::run_trials,
};

fn print_result(result: &ExplorationResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(result)?);
    } else {
        println!(
            "[{}] Time: {:.5}s, Moves: {}, Backtracks: {}, Moves/sec: {:.5}",
            result.strategy_name,
            result.elapsed_seconds,
            result.move_count,
            result.backtrack_count,
            result.moves_per_second
        );
    }
    Ok(())
}

/// One maze, every selected strategy on it.
fn run_once(config: &ExplorerConfig) -> Result<()> {
    let maze = create_maze(config.maze_kind, config.width, config.height, config.seed)?;
    let solve_config = config.solve_config();
    for &strategy in &config.strategies {
        let exploration = explore(&maze, strategy, &solve_config)?;
        if config.visualize {
            println!("{}", strategy);
            print!("{}", maze.render(&exploration.path));
        }
        print_result(&exploration.result, config.json)?;
    }
    Ok(())
}

/// Many independent runs, then per-strategy means and the best single run.
fn run_batch(config: &ExplorerConfig) -> Result<()> {
    let results = run_trials(&config.trial_plan())?;
    for result in &results {
        print_result(result, config.json)?;
    }

    let summaries = summarize(&results);
    if config.json {
        for summary in &summaries {
            println!("{}", serde_json::to_string(summary)?);
        }
        return Ok(());
    }

    println!("\n=== Summary Statistics ===");
    for summary in &summaries {
        println!("\nStrategy: {}", summary.strategy_name);
        println!("  Runs:             {}", summary.runs);
        println!("  Avg time (s):     {:.5}", summary.avg_elapsed_seconds);
        println!("  Avg moves:        {:.5}", summary.avg_move_count);
        println!("  Avg backtracks:   {:.1}", summary.avg_backtrack_count);
        println!("  Avg moves/sec:    {:.5}", summary.avg_moves_per_second);
    }
    if let Some(best) = best_run(&results) {
        println!("\n=== Best Single Run ===");
        println!(
            "Strategy: {}, Moves: {}, Time: {:.5}s, Backtracks: {}",
            best.strategy_name, best.move_count, best.elapsed_seconds, best.backtrack_count
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let config = match ExplorerConfig::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => e.exit(),
    };
    let _guard = logging::init(config.log_file.as_deref())?;

    if config.maze_kind == MazeKind::Static {
        tracing::info!("Width and height are ignored for the static maze");
    }

    if config.runs > 1 {
        run_batch(&config)
    } else {
        run_once(&config)
    }
}
