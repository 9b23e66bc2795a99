//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and provides
//! [`TerminalInput`], the [`stacker_engine::InputSource`] used by the terminal
//! build.

pub mod map;
pub mod source;

pub use stacker_engine as engine;
pub use stacker_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::TerminalInput;
