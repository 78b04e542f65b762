use crate::error::GridError;
use std::fmt;

/// Width and height of every grid.
pub const SIZE: usize = 5;

/// Row-major cell storage where `true` means alive.
pub type Cells = [[bool; SIZE]; SIZE];

/// Glyphs used when rendering live and dead cells.
pub(crate) const ALIVE_GLYPH: char = '■';
pub(crate) const DEAD_GLYPH: char = '·';

/// A 5x5 Game of Life board.
///
/// Everything outside the board is permanently dead: there is no wraparound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Cells,
}

impl Grid {
    /// Creates a grid holding its own copy of `cells`.
    pub fn new(cells: Cells) -> Grid {
        Grid { cells }
    }

    /// Creates a grid from dynamically sized rows.
    ///
    /// Every row is checked, so ragged input is rejected as well.
    ///
    /// # Arguments
    /// * `rows` - The rows of the grid, top to bottom.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Grid, GridError> {
        let invalid = |cols: usize| GridError::InvalidDimensions {
            rows: rows.len(),
            cols,
        };

        if rows.len() != SIZE {
            return Err(invalid(rows.first().map_or(0, |row| row.as_ref().len())));
        }

        let mut cells = [[false; SIZE]; SIZE];
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != SIZE {
                return Err(invalid(row.len()));
            }
            cells[r].copy_from_slice(row);
        }

        Ok(Grid { cells })
    }

    /// Returns whether the cell at the given position is alive.
    /// Positions outside the grid are dead.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        row < SIZE && col < SIZE && self.cells[row][col]
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    /// The number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().flatten().filter(|alive| **alive).count()
    }

    pub fn is_empty(&self) -> bool {
        self.population() == 0
    }

    /// Counts the live cells among the 8 neighbors of the given position.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> usize {
        let mut count = 0;

        for i in -1..=1 {
            for j in -1..=1 {
                // Skip the cell itself
                if i == 0 && j == 0 {
                    continue;
                }

                let n_row = row as i64 + i;
                let n_col = col as i64 + j;

                // Off-grid neighbors count as dead
                if n_row < 0 || n_row >= SIZE as i64 || n_col < 0 || n_col >= SIZE as i64 {
                    continue;
                }

                if self.cells[n_row as usize][n_col as usize] {
                    count += 1;
                }
            }
        }

        count
    }

    /// Advances the grid by one generation using the B3/S23 rule.
    ///
    /// Every cell is computed from the current generation before any of them is replaced.
    pub fn step(&mut self) {
        let mut next = [[false; SIZE]; SIZE];

        for (row, next_row) in next.iter_mut().enumerate() {
            for (col, next_cell) in next_row.iter_mut().enumerate() {
                let neighbors = self.count_live_neighbors(row, col);
                *next_cell = matches!(
                    (self.cells[row][col], neighbors),
                    (true, 2) | (true, 3) | (false, 3)
                );
            }
        }

        self.cells = next;
    }
}

impl TryFrom<Vec<Vec<bool>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        Grid::from_rows(&rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for (col, alive) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", if *alive { ALIVE_GLYPH } else { DEAD_GLYPH })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns;

    #[test]
    fn when_creating_a_grid_the_source_cells_are_copied() {
        let mut cells = patterns::blinker();
        let grid = Grid::new(cells);

        cells[0][0] = true;

        assert!(!grid.is_alive(0, 0));
        assert_eq!(grid.cells(), &patterns::blinker());
    }

    #[test]
    fn when_creating_a_grid_from_rows_with_the_wrong_row_count_it_fails() {
        let rows = vec![vec![false; 5]; 4];

        assert_eq!(
            Grid::from_rows(&rows),
            Err(GridError::InvalidDimensions { rows: 4, cols: 5 })
        );
    }

    #[test]
    fn when_creating_a_grid_from_rows_with_the_wrong_column_count_it_fails() {
        let rows = vec![vec![false; 4]; 5];

        assert_eq!(
            Grid::from_rows(&rows),
            Err(GridError::InvalidDimensions { rows: 5, cols: 4 })
        );
    }

    #[test]
    fn when_creating_a_grid_from_ragged_rows_it_fails() {
        let mut rows = vec![vec![false; 5]; 5];
        rows[3].push(true);

        assert_eq!(
            Grid::try_from(rows),
            Err(GridError::InvalidDimensions { rows: 5, cols: 6 })
        );
    }

    #[test]
    fn when_creating_a_grid_from_no_rows_it_fails() {
        let rows: Vec<Vec<bool>> = Vec::new();

        assert_eq!(
            Grid::from_rows(&rows),
            Err(GridError::InvalidDimensions { rows: 0, cols: 0 })
        );
    }

    #[test]
    fn when_creating_a_grid_from_valid_rows_the_cells_match() {
        let rows: Vec<Vec<bool>> = patterns::glider().iter().map(|row| row.to_vec()).collect();
        let grid = Grid::from_rows(&rows).unwrap();

        assert_eq!(grid, Grid::new(patterns::glider()));
    }

    #[test]
    fn when_counting_neighbors_off_grid_positions_count_as_dead() {
        let mut cells = patterns::empty();
        cells[0][0] = true;
        let grid = Grid::new(cells);

        assert_eq!(grid.count_live_neighbors(0, 0), 0);
        assert_eq!(grid.count_live_neighbors(0, 1), 1);
        assert_eq!(grid.count_live_neighbors(1, 1), 1);
        assert_eq!(grid.count_live_neighbors(2, 2), 0);
    }

    #[test]
    fn when_counting_neighbors_the_cell_itself_is_excluded() {
        let grid = Grid::new([[true; SIZE]; SIZE]);

        assert_eq!(grid.count_live_neighbors(2, 2), 8);
        assert_eq!(grid.count_live_neighbors(0, 0), 3);
        assert_eq!(grid.count_live_neighbors(0, 2), 5);
        assert_eq!(grid.count_live_neighbors(4, 4), 3);
    }

    #[test]
    fn when_stepping_a_block_it_does_not_change() {
        let mut grid = Grid::new(patterns::block());

        grid.step();

        assert_eq!(grid, Grid::new(patterns::block()));
    }

    #[test]
    fn when_stepping_a_blinker_once_it_becomes_vertical() {
        let mut grid = Grid::new(patterns::blinker());

        grid.step();

        let expected = patterns::of(&[".....", "..X..", "..X..", "..X..", "....."]).unwrap();
        assert_eq!(grid, Grid::new(expected));
    }

    #[test]
    fn when_stepping_a_blinker_twice_it_returns_to_the_start() {
        let mut grid = Grid::new(patterns::blinker());

        grid.step();
        grid.step();

        assert_eq!(grid, Grid::new(patterns::blinker()));
    }

    #[test]
    fn when_stepping_a_glider_four_times_it_moves_one_cell_diagonally() {
        let mut grid = Grid::new(patterns::glider());

        for _ in 0..4 {
            grid.step();
        }

        let expected = patterns::of(&[".....", "..X..", "...X.", ".XXX.", "....."]).unwrap();
        assert_eq!(grid, Grid::new(expected));
    }

    #[test]
    fn when_a_glider_reaches_the_corner_the_cells_pushed_off_grid_are_lost() {
        let mut grid = Grid::new(patterns::glider());

        // Two full periods bring the glider against the bottom-right corner
        for _ in 0..8 {
            grid.step();
        }
        let at_corner = patterns::of(&[".....", ".....", "...X.", "....X", "..XXX"]).unwrap();
        assert_eq!(grid, Grid::new(at_corner));

        // It then collapses into a block instead of leaving the grid
        for _ in 0..4 {
            grid.step();
        }
        let collapsed = patterns::of(&[".....", ".....", ".....", "...XX", "...XX"]).unwrap();
        assert_eq!(grid, Grid::new(collapsed));
    }

    #[test]
    fn when_stepping_a_lone_corner_cell_it_dies() {
        let mut cells = patterns::empty();
        cells[0][0] = true;
        let mut grid = Grid::new(cells);

        grid.step();

        assert!(grid.is_empty());
    }

    #[test]
    fn when_stepping_the_same_grid_the_result_is_deterministic() {
        let cells = patterns::random(7, 0.5).unwrap();
        let mut first = Grid::new(cells);
        let mut second = Grid::new(cells);

        first.step();
        second.step();

        assert_eq!(first, second);
        assert_eq!(first.cells().len(), SIZE);
        assert!(first.cells().iter().all(|row| row.len() == SIZE));
    }

    #[test]
    fn when_checking_cells_outside_the_grid_they_are_dead() {
        let grid = Grid::new([[true; SIZE]; SIZE]);

        assert!(!grid.is_alive(5, 0));
        assert!(!grid.is_alive(0, 5));
        assert_eq!(grid.count_live_neighbors(9, 9), 0);
    }

    #[test]
    fn when_counting_the_population_only_live_cells_are_counted() {
        assert_eq!(Grid::new(patterns::empty()).population(), 0);
        assert_eq!(Grid::new(patterns::blinker()).population(), 3);
        assert_eq!(Grid::new(patterns::glider()).population(), 5);
    }

    #[test]
    fn when_displaying_a_grid_each_row_is_a_line_of_glyphs() {
        let grid = Grid::new(patterns::blinker());

        assert_eq!(
            grid.to_string(),
            "· · · · ·\n· · · · ·\n· ■ ■ ■ ·\n· · · · ·\n· · · · ·\n"
        );
    }
}
