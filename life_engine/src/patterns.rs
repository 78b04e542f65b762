//! Ready-made 5x5 starting patterns.

use crate::error::GridError;
use crate::grid::{Cells, SIZE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;

/// Probability used when a random pattern is picked by name.
pub const RANDOM_ALIVE_PROBABILITY: f64 = 0.35;

/// A named starting pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    Blinker,
    Block,
    Glider,
    Random,
}

impl Pattern {
    /// Looks up a pattern by name, ignoring case.
    /// Unknown names fall back to [`Pattern::Blinker`].
    pub fn from_name(name: &str) -> Pattern {
        match name.to_lowercase().as_str() {
            "block" => Pattern::Block,
            "glider" => Pattern::Glider,
            "random" => Pattern::Random,
            _ => Pattern::Blinker,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Blinker => "blinker",
            Pattern::Block => "block",
            Pattern::Glider => "glider",
            Pattern::Random => "random",
        }
    }

    /// Builds the starting cells for this pattern.
    ///
    /// # Arguments
    /// * `seed` - The seed for the random number generator. Only used by [`Pattern::Random`].
    pub fn cells(&self, seed: u64) -> Cells {
        match self {
            Pattern::Blinker => blinker(),
            Pattern::Block => block(),
            Pattern::Glider => glider(),
            Pattern::Random => fill_random(seed, RANDOM_ALIVE_PROBABILITY),
        }
    }
}

/// All cells dead.
pub fn empty() -> Cells {
    [[false; SIZE]; SIZE]
}

/// A horizontal period-2 oscillator in the middle row.
pub fn blinker() -> Cells {
    let mut cells = empty();
    cells[2][1] = true;
    cells[2][2] = true;
    cells[2][3] = true;
    cells
}

/// A 2x2 still life.
pub fn block() -> Cells {
    let mut cells = empty();
    cells[1][1] = true;
    cells[1][2] = true;
    cells[2][1] = true;
    cells[2][2] = true;
    cells
}

/// A glider in the top-left corner, heading down and to the right.
pub fn glider() -> Cells {
    let mut cells = empty();
    cells[0][1] = true;
    cells[1][2] = true;
    cells[2][0] = true;
    cells[2][1] = true;
    cells[2][2] = true;
    cells
}

/// Fills every cell independently with the given probability of being alive.
///
/// The same seed and probability always produce the same cells.
///
/// # Arguments
/// * `seed` - The seed for the random number generator.
/// * `alive_probability` - The chance of each cell being alive, between `0.0` and `1.0`.
pub fn random(seed: u64, alive_probability: f64) -> Result<Cells, GridError> {
    if !(0.0..=1.0).contains(&alive_probability) {
        return Err(GridError::InvalidProbability(alive_probability));
    }

    Ok(fill_random(seed, alive_probability))
}

fn fill_random(seed: u64, alive_probability: f64) -> Cells {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut cells = empty();

    for row in cells.iter_mut() {
        for cell in row.iter_mut() {
            *cell = rng.gen_bool(alive_probability);
        }
    }

    cells
}

/// Builds cells from exactly 5 rows of exactly 5 characters.
///
/// Any of `1`, `X`, `O`, `#` or `*` marks a live cell. Every other character is dead.
///
/// ```
/// let cells = life_engine::patterns::of(&["..X..", "..X..", "..X..", ".....", "....."]).unwrap();
/// assert!(cells[1][2]);
/// ```
pub fn of<S: AsRef<str>>(rows: &[S]) -> Result<Cells, GridError> {
    if rows.len() != SIZE {
        return Err(GridError::InvalidRowCount(rows.len()));
    }

    let mut cells = empty();
    for (r, line) in rows.iter().enumerate() {
        let line = line.as_ref();
        let len = line.chars().count();
        if len != SIZE {
            return Err(GridError::InvalidRowLength { row: r, len });
        }

        for (c, value) in line.chars().enumerate() {
            cells[r][c] = is_alive_char(value);
        }
    }

    Ok(cells)
}

/// Parses a pattern written as `m` lines, one per row.
///
/// Lines that don't start with `m ` are ignored, so comments and metadata can be mixed in.
///
/// ```text
/// # glider
/// m .X...
/// m ..X..
/// m XXX..
/// m .....
/// m .....
/// ```
pub fn parse(contents: &str) -> Result<Cells, GridError> {
    let rows: Vec<&str> = Regex::new(r"(?m)^\s*m (.*)$")
        .unwrap()
        .captures_iter(contents)
        .filter_map(|captures| captures.get(1))
        .map(|row| row.as_str().trim_end())
        .collect();

    of(&rows)
}

fn is_alive_char(value: char) -> bool {
    matches!(value, '1' | 'X' | 'O' | '#' | '*')
}
