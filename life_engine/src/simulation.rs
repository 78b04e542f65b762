use crate::error::PauseInterrupted;
use crate::grid::Grid;
use crate::render::Printer;
use std::io;
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// Waits between generations.
///
/// Pacing is best effort: an implementation may return early or report an
/// interruption, and the simulation carries on with the next generation either way.
pub trait Pause {
    fn pause(&mut self, delay: Duration) -> Result<(), PauseInterrupted>;
}

/// Blocks the current thread for the whole delay.
pub struct ThreadPause;

impl Pause for ThreadPause {
    fn pause(&mut self, delay: Duration) -> Result<(), PauseInterrupted> {
        thread::sleep(delay);
        Ok(())
    }
}

/// A simulation of the Game of Life.
/// Main entry point for running generations.
pub struct Simulation {
    grid: Grid,
    generations: usize,
    delay: Duration,
}

impl Simulation {
    /// Creates a new simulation.
    ///
    /// # Arguments
    /// * `grid` - The starting generation.
    /// * `generations` - The number of steps to run after the starting generation.
    /// * `delay` - How long to wait after each step.
    pub fn new(grid: Grid, generations: usize, delay: Duration) -> Simulation {
        Simulation {
            grid,
            generations,
            delay,
        }
    }

    /// Runs the simulation to completion.
    ///
    /// Prints generations `0..=generations`, stepping and pausing between each of them.
    /// An interrupted pause is ignored. Errors from the printer are returned as is.
    pub fn run(&mut self, printer: &mut dyn Printer, pause: &mut dyn Pause) -> io::Result<()> {
        info!(
            generations = self.generations,
            delay_ms = self.delay.as_millis() as u64,
            population = self.grid.population(),
            "Starting simulation"
        );

        for generation in 0..=self.generations {
            printer.print(&self.grid, generation)?;

            if generation < self.generations {
                self.grid.step();
                debug!(
                    generation = generation + 1,
                    population = self.grid.population(),
                    "Stepped grid"
                );

                if !self.delay.is_zero() {
                    if let Err(e) = pause.pause(self.delay) {
                        debug!(generation, "Ignoring pause error: {}", e);
                    }
                }
            }
        }

        info!(population = self.grid.population(), "Simulation finished");
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}
