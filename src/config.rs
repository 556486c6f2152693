//! Command-line options.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

use crate::generators::MazeKind;
use crate::solvers::{SolveConfig, StepLimit, Strategy};
use crate::trials::TrialPlan;

#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub maze_kind: MazeKind,
    /// Ignored for static mazes
    pub width: u16,
    /// Ignored for static mazes
    pub height: u16,
    pub strategies: Vec<Strategy>,
    pub runs: usize,
    pub seed: Option<u64>,
    pub step_limit: StepLimit,
    /// Print one JSON object per result instead of text
    pub json: bool,
    /// Draw the maze and the walk after each exploration
    pub visualize: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            maze_kind: MazeKind::Random,
            width: 30,
            height: 30,
            strategies: Strategy::ALL.to_vec(),
            runs: 1,
            seed: None,
            step_limit: StepLimit::Auto,
            json: false,
            visualize: false,
            log_file: None,
        }
    }
}

fn make_options_parser() -> Command {
    Command::new("maze-explorer")
        .about("Generate a maze and explore it with a wall follower, BFS and A*")
        .arg(
            Arg::new("type")
                .long("type")
                .help("Type of maze to generate")
                .value_parser(|s: &str| s.parse::<MazeKind>())
                .default_value("random"),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .help("Width of the maze, ignored for static mazes")
                .value_parser(clap::value_parser!(u16))
                .default_value("30"),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .help("Height of the maze, ignored for static mazes")
                .value_parser(clap::value_parser!(u16))
                .default_value("30"),
        )
        .arg(
            Arg::new("strategy")
                .short('s')
                .long("strategy")
                .help("Exploration strategy, may be repeated")
                .value_parser(["wall-follower", "bfs", "astar", "all"])
                .action(ArgAction::Append)
                .default_value("all"),
        )
        .arg(
            Arg::new("runs")
                .short('n')
                .long("runs")
                .help("Number of independent runs, each on its own maze")
                .value_parser(clap::value_parser!(u32).range(1..))
                .default_value("1"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed for reproducible random mazes")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("step-limit")
                .long("step-limit")
                .help("Wall follower step bound: auto, unbounded or a number")
                .value_parser(|s: &str| s.parse::<StepLimit>())
                .default_value("auto"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print results as JSON, one object per line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("visualize")
                .long("visualize")
                .help("Draw the maze and the walk after each exploration")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("FILE")
                .help("Write logs to this file instead of stderr")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

impl ExplorerConfig {
    /// Parses command-line arguments, binary name first.
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = make_options_parser().try_get_matches_from(args)?;
        let defaults = ExplorerConfig::default();

        let names = matches
            .get_many::<String>("strategy")
            .map(|values| values.map(String::as_str).collect::<Vec<_>>())
            .unwrap_or_default();
        let strategies = if names.is_empty() || names.contains(&"all") {
            Strategy::ALL.to_vec()
        } else {
            let mut strategies = Vec::new();
            for strategy in names.iter().filter_map(|name| name.parse::<Strategy>().ok()) {
                if !strategies.contains(&strategy) {
                    strategies.push(strategy);
                }
            }
            strategies
        };

        Ok(ExplorerConfig {
            maze_kind: matches
                .get_one::<MazeKind>("type")
                .copied()
                .unwrap_or(defaults.maze_kind),
            width: matches
                .get_one::<u16>("width")
                .copied()
                .unwrap_or(defaults.width),
            height: matches
                .get_one::<u16>("height")
                .copied()
                .unwrap_or(defaults.height),
            strategies,
            runs: matches
                .get_one::<u32>("runs")
                .map(|&runs| runs as usize)
                .unwrap_or(defaults.runs),
            seed: matches.get_one::<u64>("seed").copied(),
            step_limit: matches
                .get_one::<StepLimit>("step-limit")
                .copied()
                .unwrap_or(defaults.step_limit),
            json: matches.get_flag("json"),
            visualize: matches.get_flag("visualize"),
            log_file: matches.get_one::<PathBuf>("log-file").cloned(),
        })
    }

    pub fn solve_config(&self) -> SolveConfig {
        SolveConfig {
            step_limit: self.step_limit,
        }
    }

    pub fn trial_plan(&self) -> TrialPlan {
        TrialPlan {
            maze_kind: self.maze_kind,
            width: self.width,
            height: self.height,
            strategies: self.strategies.clone(),
            runs: self.runs,
            seed: self.seed,
            solve: self.solve_config(),
        }
    }
}
