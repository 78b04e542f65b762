use life_engine::{patterns, ConsolePrinter, Grid, Simulation, ThreadPause};
use std::time::Duration;

fn main() {
    let cells = patterns::parse(
        "\
        m .....
        m .#...
        m ..#..
        m ###..
        m .....",
    )
    .unwrap();

    let mut simulation = Simulation::new(Grid::new(cells), 12, Duration::from_millis(150));
    simulation
        .run(&mut ConsolePrinter::stdout(), &mut ThreadPause)
        .unwrap();
}
