//! Defaults and argument handling for the `life` binary.

use crate::patterns::Pattern;
use std::time::Duration;
use tracing::{debug, Level};

pub const PATTERN: Pattern = Pattern::Blinker;
pub const GENERATIONS: i32 = 10;
pub const DELAY_MS: i32 = 300;

/// Maximum level of the log events written to stderr.
pub const LOG_LEVEL: Level = Level::WARN;

/// Settings for a single run of the simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub pattern: Pattern,
    /// Requested number of steps. Negative counts are kept so that nothing gets rendered.
    pub generations: i32,
    pub delay: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            pattern: PATTERN,
            generations: GENERATIONS,
            delay: delay_from_millis(DELAY_MS),
        }
    }
}

impl SimulationConfig {
    /// Builds a configuration from raw command line values.
    ///
    /// Missing values and values that don't parse as 32-bit integers fall back
    /// to their defaults without reporting an error. A negative delay means no pause.
    pub fn from_args(
        pattern: Option<&str>,
        generations: Option<&str>,
        delay_ms: Option<&str>,
    ) -> SimulationConfig {
        SimulationConfig {
            pattern: pattern.map_or(PATTERN, Pattern::from_name),
            generations: parse_or("generations", generations, GENERATIONS),
            delay: delay_from_millis(parse_or("delay_ms", delay_ms, DELAY_MS)),
        }
    }

    /// The number of steps to simulate, or `None` when the requested count is
    /// negative and not even the starting generation should be rendered.
    pub fn steps(&self) -> Option<usize> {
        usize::try_from(self.generations).ok()
    }
}

fn delay_from_millis(millis: i32) -> Duration {
    Duration::from_millis(millis.max(0) as u64)
}

fn parse_or(name: &str, value: Option<&str>, fallback: i32) -> i32 {
    match value {
        None => fallback,
        Some(value) => value.parse().unwrap_or_else(|_| {
            debug!(name, value, "Unparseable value, using default");
            fallback
        }),
    }
}
