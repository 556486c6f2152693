use maze_explorer::{
    MazeGrid, SolveConfig, SolveError, StepLimit, Strategy, explore, generate_random,
    generate_static, solve,
};
use proptest::prelude::*;

fn corridor() -> MazeGrid {
    MazeGrid::from_pattern(
        &[
            ".....", //
            "#####",
            "#####",
            "#####",
            "#####",
        ],
        (0, 0),
        (4, 0),
    )
    .unwrap()
}

/// A side branch below the start that the right-hand rule walks into first.
fn dead_end_branch() -> MazeGrid {
    MazeGrid::from_pattern(
        &[
            ".......", //
            ".######",
            ".######",
            ".######",
        ],
        (0, 0),
        (6, 0),
    )
    .unwrap()
}

#[test]
fn straight_corridor_takes_four_moves_with_every_strategy() {
    let maze = corridor();
    for strategy in Strategy::ALL {
        let result = solve(&maze, strategy).unwrap();
        assert_eq!(result.move_count, 4, "{strategy}");
        assert_eq!(result.backtrack_count, 0, "{strategy}");
    }
}

#[test]
fn dead_end_forces_wall_follower_to_backtrack() {
    let maze = dead_end_branch();

    let follower = solve(&maze, Strategy::WallFollower).unwrap();
    assert!(follower.backtrack_count > 0);
    assert_eq!(follower.move_count, 12);

    for strategy in [Strategy::Bfs, Strategy::AStar] {
        let result = solve(&maze, strategy).unwrap();
        assert_eq!(result.backtrack_count, 0);
        assert_eq!(result.move_count, 6);
    }
}

#[test]
fn static_maze_is_solved_by_every_strategy() {
    let maze = generate_static().unwrap();
    assert_eq!(maze.start(), (11, 0));
    assert_eq!(maze.end(), (13, maze.height() - 1));

    let bfs = explore(&maze, Strategy::Bfs, &SolveConfig::default()).unwrap();
    let astar = explore(&maze, Strategy::AStar, &SolveConfig::default()).unwrap();
    let follower = explore(&maze, Strategy::WallFollower, &SolveConfig::default()).unwrap();

    assert_eq!(bfs.result.move_count, 127);
    assert_eq!(astar.result.move_count, bfs.result.move_count);
    assert!(follower.result.move_count >= bfs.result.move_count);
    for exploration in [&bfs, &astar, &follower] {
        assert!(exploration.result.move_count > 0);
        assert_eq!(exploration.path.first(), Some(&maze.start()));
        assert_eq!(exploration.path.last(), Some(&maze.end()));
    }
}

#[test]
fn static_maze_is_identical_across_calls() {
    let a = generate_static().unwrap();
    let b = generate_static().unwrap();
    assert_eq!(a, b);
    assert_eq!((a.start(), a.end()), (b.start(), b.end()));
}

#[test]
fn unreachable_end_is_reported_not_hung() {
    let maze = MazeGrid::from_pattern(
        &[
            "..#..", //
            "..#..",
        ],
        (0, 0),
        (4, 1),
    )
    .unwrap();

    for strategy in [Strategy::Bfs, Strategy::AStar] {
        assert!(matches!(
            solve(&maze, strategy),
            Err(SolveError::NoPath { .. })
        ));
    }
    // The default bound stops the wall follower circling its own island
    assert!(matches!(
        solve(&maze, Strategy::WallFollower),
        Err(SolveError::StepLimitExceeded { .. })
    ));
    let bounded = SolveConfig {
        step_limit: StepLimit::Fixed(10),
    };
    assert!(matches!(
        explore(&maze, Strategy::WallFollower, &bounded),
        Err(SolveError::StepLimitExceeded { limit: 10, .. })
    ));
}

#[test]
fn result_rate_is_derived_from_moves_and_time() {
    let maze = generate_random(41, 41, Some(17)).unwrap();
    for strategy in Strategy::ALL {
        let result = solve(&maze, strategy).unwrap();
        assert!(result.elapsed_seconds >= 0.0);
        if result.elapsed_seconds > 0.0 {
            let expected = result.move_count as f64 / result.elapsed_seconds;
            assert!((result.moves_per_second - expected).abs() <= expected * 1e-12);
        } else {
            assert_eq!(result.moves_per_second, 0.0);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_mazes_are_connected(seed in any::<u64>(), width in 5u16..40, height in 3u16..40) {
        let maze = generate_random(width, height, Some(seed)).unwrap();
        prop_assert!(maze.is_open(maze.start()));
        prop_assert!(maze.is_open(maze.end()));
        prop_assert_ne!(maze.start(), maze.end());
        prop_assert!(maze.is_fully_connected());
    }

    #[test]
    fn optimal_searches_agree_and_bound_the_wall_follower(
        seed in any::<u64>(),
        width in 5u16..35,
        height in 5u16..35,
    ) {
        let maze = generate_random(width, height, Some(seed)).unwrap();
        let bfs = solve(&maze, Strategy::Bfs).unwrap();
        let astar = solve(&maze, Strategy::AStar).unwrap();
        let follower = solve(&maze, Strategy::WallFollower).unwrap();

        prop_assert_eq!(bfs.move_count, astar.move_count);
        prop_assert!(follower.move_count >= bfs.move_count);
        prop_assert_eq!(bfs.backtrack_count, 0);
        prop_assert_eq!(astar.backtrack_count, 0);
    }

    #[test]
    fn walks_are_contiguous(seed in any::<u64>()) {
        let maze = generate_random(25, 25, Some(seed)).unwrap();
        for strategy in Strategy::ALL {
            let exploration = explore(&maze, strategy, &SolveConfig::default()).unwrap();
            for pair in exploration.path.windows(2) {
                prop_assert!(maze.open_neighbors(pair[0]).any(|c| c == pair[1]));
            }
        }
    }
}
