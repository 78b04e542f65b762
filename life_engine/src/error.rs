use thiserror::Error;

/// Errors raised while building a grid or its starting cells.
///
/// All of these happen at construction time. Once a [`Grid`](crate::Grid)
/// exists, stepping it can never fail.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GridError {
    /// The source cells were missing or not exactly 5x5.
    #[error("grid must be 5x5, got {rows} rows and {cols} columns")]
    InvalidDimensions { rows: usize, cols: usize },
    /// The probability of a cell being alive was outside `[0.0, 1.0]`.
    #[error("alive probability must be between 0.0 and 1.0, got {0}")]
    InvalidProbability(f64),
    /// A textual pattern did not have exactly 5 rows.
    #[error("pattern must have exactly 5 rows, got {0}")]
    InvalidRowCount(usize),
    /// A textual pattern row did not have exactly 5 characters.
    #[error("pattern row {row} must have exactly 5 characters, got {len}")]
    InvalidRowLength { row: usize, len: usize },
}

/// Returned by a [`Pause`](crate::Pause) that was woken before its delay elapsed.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("pause was interrupted")]
pub struct PauseInterrupted;
