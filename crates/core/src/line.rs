//! Line module - one sweeping bar of lit cells
//!
//! A line occupies the columns `[x, x + span]` of a single row. While moving it
//! bounces between the walls; the two bounce thresholds are deliberately
//! asymmetric (right edge reaching column 8, left edge reaching column -1), which
//! gives a sweep period of `2 * (9 - span)` ticks.

use crate::matrix::Surface;
use crate::types::{Direction, Edge, BOARD_WIDTH};

const RIGHT_WALL: i8 = BOARD_WIDTH as i8;
const LEFT_WALL: i8 = -1;

/// One horizontal bar on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    x: i8,
    /// Number of lit columns minus one.
    span: u8,
    direction: Direction,
}

impl Line {
    /// Create a line of `length` columns starting at column `x`.
    ///
    /// A zero length is treated as a single-column peg.
    pub fn new(x: i8, length: u8, direction: Direction) -> Self {
        Self {
            x,
            span: length.max(1) - 1,
            direction,
        }
    }

    /// Create a frozen line, as found below the moving one.
    pub fn stopped(x: i8, length: u8) -> Self {
        Self::new(x, length, Direction::Stopped)
    }

    /// Place a new line just outside `edge`, heading onto the board.
    pub fn spawn(length: u8, edge: Edge) -> Self {
        let mut line = Self::new(0, length, edge.inward());
        line.x = match edge {
            Edge::Left => LEFT_WALL,
            Edge::Right => RIGHT_WALL - line.span as i8,
        };
        line
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn span(&self) -> u8 {
        self.span
    }

    pub fn length(&self) -> u8 {
        self.span + 1
    }

    /// Rightmost occupied column.
    pub fn end(&self) -> i8 {
        self.x + self.span as i8
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_moving(&self) -> bool {
        self.direction.is_moving()
    }

    /// Sweep period in ticks for a moving line of this width.
    pub fn period(&self) -> u32 {
        2 * (9 - self.span as u32)
    }

    /// Move one column in the current direction, bouncing at the walls.
    pub fn advance(&mut self) {
        match self.direction {
            Direction::MovingRight => {
                self.x += 1;
                if self.end() == RIGHT_WALL {
                    self.direction = Direction::MovingLeft;
                }
            }
            Direction::MovingLeft => {
                self.x -= 1;
                if self.x == LEFT_WALL {
                    self.direction = Direction::MovingRight;
                }
            }
            Direction::Stopped => {}
        }
    }

    pub fn stop(&mut self) {
        self.direction = Direction::Stopped;
    }

    /// Draw the line on `row` of the surface.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, row: u8) {
        surface.draw_segment(row, self.x, self.end());
    }

    /// Cut the line down to `[x, x + span]`.
    pub(crate) fn trim(&mut self, x: i8, span: u8) {
        self.x = x;
        self.span = span;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;

    #[test]
    fn test_new_stores_span() {
        let line = Line::new(2, 4, Direction::MovingRight);
        assert_eq!(line.x(), 2);
        assert_eq!(line.span(), 3);
        assert_eq!(line.length(), 4);
        assert_eq!(line.end(), 5);
    }

    #[test]
    fn test_zero_length_is_a_peg() {
        let line = Line::stopped(3, 0);
        assert_eq!(line.span(), 0);
        assert_eq!(line.end(), 3);
    }

    #[test]
    fn test_bounce_right() {
        let mut line = Line::new(3, 4, Direction::MovingRight);
        line.advance();
        assert_eq!(line.x(), 4);
        assert_eq!(line.end(), 7);
        assert_eq!(line.direction(), Direction::MovingRight);

        // One column of overshoot, then turn around.
        line.advance();
        assert_eq!(line.end(), 8);
        assert_eq!(line.direction(), Direction::MovingLeft);

        line.advance();
        assert_eq!(line.end(), 7);
    }

    #[test]
    fn test_bounce_left() {
        let mut line = Line::new(0, 2, Direction::MovingLeft);
        line.advance();
        assert_eq!(line.x(), -1);
        assert_eq!(line.direction(), Direction::MovingRight);
        line.advance();
        assert_eq!(line.x(), 0);
    }

    #[test]
    fn test_spawn_positions() {
        let left = Line::spawn(4, Edge::Left);
        assert_eq!(left.x(), -1);
        assert_eq!(left.direction(), Direction::MovingRight);

        let right = Line::spawn(4, Edge::Right);
        assert_eq!(right.x(), 5);
        assert_eq!(right.end(), 8);
        assert_eq!(right.direction(), Direction::MovingLeft);
    }

    #[test]
    fn test_stopped_line_does_not_move() {
        let mut line = Line::new(2, 3, Direction::MovingRight);
        line.stop();
        line.stop();
        line.advance();
        assert_eq!(line.x(), 2);
        assert_eq!(line.direction(), Direction::Stopped);
    }

    #[test]
    fn test_render_draws_segment() {
        let line = Line::stopped(2, 3);
        let mut matrix = Matrix::new();
        line.render(&mut matrix, 7);
        assert_eq!(matrix.row(7), 0b0001_1100);
        assert_eq!(matrix.lit_count(), 3);
    }
}
