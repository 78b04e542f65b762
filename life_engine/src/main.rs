use anyhow::Result;
use clap::Parser;
use life_engine::config::{self, SimulationConfig};
use life_engine::{ConsolePrinter, Grid, Simulation, ThreadPause};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Conway's Game of Life on a 5x5 board
///
/// Prints each generation to the console, waiting between them.
#[derive(Parser, Debug)]
#[command(name = "life")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Starting pattern: blinker, block, glider or random
    #[arg(allow_hyphen_values = true)]
    pattern: Option<String>,

    /// Number of generations to run after the starting one
    #[arg(allow_hyphen_values = true)]
    generations: Option<String>,

    /// Delay between generations in milliseconds
    #[arg(allow_hyphen_values = true)]
    delay_ms: Option<String>,
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config::LOG_LEVEL)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let config = SimulationConfig::from_args(
        cli.pattern.as_deref(),
        cli.generations.as_deref(),
        cli.delay_ms.as_deref(),
    );

    let Some(steps) = config.steps() else {
        info!(generations = config.generations, "Negative generation count, nothing to run");
        return Ok(());
    };

    // Random patterns differ on every run
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as u64);
    info!(pattern = config.pattern.name(), seed, "Building starting grid");

    let grid = Grid::new(config.pattern.cells(seed));
    let mut simulation = Simulation::new(grid, steps, config.delay);
    simulation.run(&mut ConsolePrinter::stdout(), &mut ThreadPause)?;

    Ok(())
}
