//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the Stacker rules: sweeping lines, the commit/trim
//! algorithm, overflow compaction and difficulty scaling. It has **no
//! dependencies** on terminals, threads or clocks, making it:
//!
//! - **Deterministic**: randomness comes from an injected [`RandomSource`]
//! - **Testable**: every rule is exercised by plain unit tests
//! - **Portable**: the same engine drives the terminal build or any other display
//!
//! # Module Structure
//!
//! - [`line`]: a single sweeping bar and its bounce rule
//! - [`game`]: the stack of lines, play state, commit algorithm
//! - [`matrix`]: the 8x8 frame lines are drawn into
//! - [`rng`]: seedable random source for edge choice and rotations
//! - [`config`]: difficulty tuning, overridable from the environment
//!
//! # Game Rules
//!
//! - A line sweeps left and right; pressing the button freezes it.
//! - Only the columns that overlap the line below survive; the next line is
//!   exactly as long as what survived.
//! - Missing the line below entirely ends the game.
//! - When the stack reaches the top of the board the oldest rows are removed so
//!   play can continue.
//! - Every successful commit speeds the sweep up by 5%, down to a floor.
//! - From a score of 18 on, every commit spins the display by a random quarter turn.
//!
//! # Example
//!
//! ```
//! use stacker_core::{CommitOutcome, GameEngine};
//!
//! let mut game = GameEngine::new(12345);
//! game.tick(); // first line moves onto the board
//!
//! match game.commit().unwrap() {
//!     CommitOutcome::Stacked(advance) => assert_eq!(advance.score, 1),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! assert_eq!(game.lines().len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod line;
pub mod matrix;
pub mod rng;

pub use stacker_types as types;

// Re-export commonly used types for convenience
pub use config::EngineConfig;
pub use error::EngineFault;
pub use game::{overlap, Advance, CommitOutcome, GameEngine, Overlap};
pub use line::Line;
pub use matrix::{Matrix, Surface};
pub use rng::{RandomSource, SimpleRng};
