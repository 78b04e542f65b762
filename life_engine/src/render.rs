use crate::grid::{Grid, ALIVE_GLYPH, DEAD_GLYPH};
use crossterm::{
    queue,
    style::{Color, Print, SetForegroundColor},
};
use std::io::{self, Write};

/// Receives each generation the simulation produces.
pub trait Printer {
    fn print(&mut self, grid: &Grid, generation: usize) -> io::Result<()>;
}

/// Writes generations as text: a `Generation <n>` header, one line of glyphs per row and a blank line.
pub struct ConsolePrinter<W: Write> {
    out: W,
    color: bool,
}

impl ConsolePrinter<io::Stdout> {
    /// Prints to stdout, coloring live cells only when stdout is a terminal.
    pub fn stdout() -> Self {
        use std::io::IsTerminal;

        let out = io::stdout();
        let color = out.is_terminal();
        ConsolePrinter { out, color }
    }
}

impl<W: Write> ConsolePrinter<W> {
    pub fn new(out: W, color: bool) -> Self {
        ConsolePrinter { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Printer for ConsolePrinter<W> {
    fn print(&mut self, grid: &Grid, generation: usize) -> io::Result<()> {
        queue!(self.out, Print(format!("Generation {}\n", generation)))?;

        if !self.color {
            queue!(self.out, Print(grid))?;
        } else {
            for row in grid.cells() {
                for (col, alive) in row.iter().enumerate() {
                    if col > 0 {
                        queue!(self.out, Print(' '))?;
                    }

                    if *alive {
                        queue!(
                            self.out,
                            SetForegroundColor(Color::Green),
                            Print(ALIVE_GLYPH),
                            SetForegroundColor(Color::Reset)
                        )?;
                    } else {
                        queue!(self.out, Print(DEAD_GLYPH))?;
                    }
                }
                queue!(self.out, Print('\n'))?;
            }
        }

        queue!(self.out, Print('\n'))?;
        self.out.flush()
    }
}
