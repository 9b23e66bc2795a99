//! 8x8 monochrome frame
//!
//! `Matrix` is the draw handle lines render into. Each row is stored as a byte,
//! bit `c` holding column `c`, so a whole frame is eight bytes and can be copied
//! freely between the engine and the display.

use std::fmt;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, ORIENTATIONS};

const ROWS: usize = BOARD_HEIGHT as usize;

/// Anything a line can be drawn onto.
pub trait Surface {
    /// Light columns `col_start..=col_end` of `row`. Columns outside the board are
    /// clipped.
    fn draw_segment(&mut self, row: u8, col_start: i8, col_end: i8);
}

/// One frame of the LED matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Matrix {
    rows: [u8; ROWS],
}

impl Matrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from raw row bytes (bit `c` = column `c`).
    pub fn from_rows(rows: [u8; ROWS]) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[u8; ROWS] {
        &self.rows
    }

    pub fn row(&self, row: u8) -> u8 {
        self.rows.get(row as usize).copied().unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.rows = [0; ROWS];
    }

    pub fn is_lit(&self, row: u8, col: u8) -> bool {
        col < BOARD_WIDTH && self.row(row) & (1 << col) != 0
    }

    pub fn set(&mut self, row: u8, col: u8, lit: bool) {
        if row >= BOARD_HEIGHT || col >= BOARD_WIDTH {
            return;
        }
        let bits = &mut self.rows[row as usize];
        if lit {
            *bits |= 1 << col;
        } else {
            *bits &= !(1 << col);
        }
    }

    pub fn lit_count(&self) -> u32 {
        self.rows.iter().map(|r| r.count_ones()).sum()
    }

    /// Rotate the frame clockwise by `steps` quarter turns.
    pub fn rotated(&self, steps: u8) -> Matrix {
        let mut out = *self;
        for _ in 0..steps % ORIENTATIONS {
            out = out.rotated_once();
        }
        out
    }

    fn rotated_once(&self) -> Matrix {
        let n = BOARD_WIDTH;
        let mut out = Matrix::new();
        for row in 0..n {
            for col in 0..n {
                // Clockwise: the left column becomes the top row.
                out.set(row, col, self.is_lit(n - 1 - col, row));
            }
        }
        out
    }
}

impl Surface for Matrix {
    fn draw_segment(&mut self, row: u8, col_start: i8, col_end: i8) {
        if row >= BOARD_HEIGHT {
            return;
        }
        let start = col_start.max(0);
        let end = col_end.min(BOARD_WIDTH as i8 - 1);
        for col in start..=end {
            self.set(row, col as u8, true);
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_HEIGHT {
            for col in 0..BOARD_WIDTH {
                f.write_str(if self.is_lit(row, col) { "#" } else { "." })?;
            }
            if row + 1 < BOARD_HEIGHT {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
