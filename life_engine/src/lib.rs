//! # life_engine
//!
//! Conway's Game of Life on a fixed 5x5 board whose outside is always dead.
//! The [`Grid`] holds the cells and applies the B3/S23 rule, while a
//! [`Simulation`] prints and paces successive generations.

pub mod config;
pub mod patterns;

pub use error::GridError;
pub use error::PauseInterrupted;
pub use grid::Cells;
pub use grid::Grid;
pub use grid::SIZE;
pub use patterns::Pattern;
pub use render::ConsolePrinter;
pub use render::Printer;
pub use simulation::Pause;
pub use simulation::Simulation;
pub use simulation::ThreadPause;

mod error;
mod grid;
mod render;
mod simulation;
