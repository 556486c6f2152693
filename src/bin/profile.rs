use maze_explorer::{SolveConfig, Strategy, explore, generate_random, logging};

fn main() -> anyhow::Result<()> {
    let _guard = logging::init(None)?;

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1);

    let maze = generate_random(u8::MAX as u16, u8::MAX as u16, Some(0))?;
    let config = SolveConfig::default();
    for _ in 0..num_iters {
        for strategy in Strategy::ALL {
            explore(&maze, strategy, &config)?;
        }
    }
    Ok(())
}
