//! crossterm-backed input source.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::engine::InputSource;
use crate::map::handle_key_event;
use crate::types::GameAction;

/// Reads key presses from the controlling terminal.
///
/// Auto-repeat and release events are dropped: one physical press is one
/// action, and the runtime's debounce handles bouncy keys.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn poll_action(&mut self, timeout: Duration) -> Result<Option<GameAction>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(handle_key_event(key)),
            _ => Ok(None),
        }
    }
}
