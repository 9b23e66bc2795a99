//! Scrolling text for the 8x8 matrix.
//!
//! Text enters from the right edge and leaves on the left, one column per frame,
//! like a hardware LED ticker.

use crate::core::Matrix;
use crate::font::{glyph_columns, GLYPH_H};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
/// Glyphs sit on the bottom rows, leaving the top row dark.
const TOP_ROW: u8 = BOARD_HEIGHT - GLYPH_H;

/// A message laid out as one long strip of columns.
#[derive(Debug, Clone)]
pub struct Marquee {
    columns: Vec<u8>,
}

impl Marquee {
    pub fn new(text: &str) -> Self {
        let mut columns = vec![0u8; WIDTH];
        for ch in text.chars() {
            columns.extend_from_slice(&glyph_columns(ch));
            columns.push(0);
        }
        columns.extend(std::iter::repeat(0u8).take(WIDTH));
        Self { columns }
    }

    /// Number of frames needed to scroll the whole text through.
    pub fn len(&self) -> usize {
        self.columns.len() + 1 - WIDTH
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Frames in display order; the first and last are blank.
    pub fn frames(&self) -> impl Iterator<Item = Matrix> + '_ {
        self.columns.windows(WIDTH).map(|window| {
            let mut frame = Matrix::new();
            for (col, bits) in window.iter().enumerate() {
                for row in 0..GLYPH_H {
                    if bits & (1 << row) != 0 {
                        frame.set(TOP_ROW + row, col as u8, true);
                    }
                }
            }
            frame
        })
    }
}
