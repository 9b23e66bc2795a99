//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The playfield is a fixed 8x8 LED matrix:
//!
//! - **Width**: 8 columns (indexed 0-7, left to right)
//! - **Height**: 8 rows (indexed 0-7, top to bottom)
//! - **Stack**: the first line sits on row 7, each committed line adds one row above
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_INTERVAL_MS` | 200 | Tick interval before the first commit |
//! | `MIN_INTERVAL_MS` | 40 | Floor for the shrinking tick interval |
//! | `COMPACTION_STEP_MS` | 100 | Delay between rows removed on overflow |
//! | `DEBOUNCE_MS` | 250 | Window in which repeated presses are ignored |
//! | `INPUT_POLL_MS` | 50 | How long the input thread blocks per poll |
//! | `SCROLL_DELAY_MS` | 50 | Marquee speed, one column per step |
//!
//! # Examples
//!
//! ```
//! use stacker_types::{Direction, GameAction, PlayState, BOARD_WIDTH};
//!
//! let action = GameAction::from_str("commit").unwrap();
//! assert_eq!(action, GameAction::Commit);
//!
//! assert_eq!(PlayState::GameOver.as_str(), "game_over");
//! assert!(Direction::MovingLeft.is_moving());
//! assert_eq!(BOARD_WIDTH, 8);
//! ```

/// Board dimensions
pub const BOARD_WIDTH: u8 = 8;
pub const BOARD_HEIGHT: u8 = 8;

/// Game timing constants (in milliseconds)
pub const INITIAL_INTERVAL_MS: u32 = 200;
pub const MIN_INTERVAL_MS: u32 = 40;
pub const COMPACTION_STEP_MS: u32 = 100;
pub const DEBOUNCE_MS: u32 = 250;
pub const INPUT_POLL_MS: u32 = 50;
pub const SCROLL_DELAY_MS: u32 = 50;

/// Multiplicative speed-up applied to the interval after every successful commit.
pub const SPEEDUP_FACTOR: f64 = 0.95;

/// Length of the very first line.
pub const INITIAL_LINE_LENGTH: u8 = 4;

/// Score from which every successful commit rotates the display.
pub const HARD_MODE_SCORE: u32 = 18;

/// Rows removed by one overflow compaction.
pub const COMPACTION_ROWS: u8 = 5;

/// Number of distinct display orientations (quarter turns).
pub const ORIENTATIONS: u8 = 4;


/// Motion of a line
///
/// Lines sweep back and forth until the player commits them, at which point they
/// become `Stopped` for the rest of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    MovingRight,
    MovingLeft,
    Stopped,
}

impl Direction {
    pub fn is_moving(&self) -> bool {
        !matches!(self, Direction::Stopped)
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::MovingRight => "right",
            Direction::MovingLeft => "left",
            Direction::Stopped => "stop",
        }
    }
}

/// Board edge a new line enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Right,
}

impl Edge {
    /// Direction that carries a line from this edge onto the board.
    pub fn inward(&self) -> Direction {
        match self {
            Edge::Left => Direction::MovingRight,
            Edge::Right => Direction::MovingLeft,
        }
    }
}

/// Game lifecycle
///
/// `Play` and `Pause` may alternate (pause only lasts for the overflow
/// compaction animation); `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayState {
    Play,
    Pause,
    GameOver,
}

impl PlayState {
    /// Parse state from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "play" => Some(PlayState::Play),
            "pause" => Some(PlayState::Pause),
            "game_over" | "gameover" => Some(PlayState::GameOver),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayState::Play => "play",
            PlayState::Pause => "pause",
            PlayState::GameOver => "game_over",
        }
    }

    /// The render loop keeps running in these states.
    pub fn is_running(&self) -> bool {
        matches!(self, PlayState::Play | PlayState::Pause)
    }
}

/// Player actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Freeze the moving line on top of the stack.
    Commit,
    /// Leave the game (user interrupt).
    Quit,
}

impl GameAction {
    /// Parse action from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "commit" => Some(GameAction::Commit),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Commit => "commit",
            GameAction::Quit => "quit",
        }
    }
}
