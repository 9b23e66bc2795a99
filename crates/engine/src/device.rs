//! Collaborator interfaces
//!
//! The runtime talks to the outside world through three narrow traits: a display
//! that presents 8x8 frames and scrolls banners, an input source that yields
//! player actions, and a clock for fixed delays. Any failure they report is
//! fatal to the game.

use std::thread;
use std::time::Duration;

use anyhow::Result;

use crate::core::Matrix;
use crate::types::GameAction;

/// Output device for frames and banners.
pub trait Display {
    /// Show a finished frame.
    fn present(&mut self, frame: &Matrix) -> Result<()>;

    /// Rotate everything presented from now on by `steps` quarter turns.
    fn set_orientation(&mut self, steps: u8) -> Result<()>;

    /// Scroll `text` across the display; returns once it has scrolled off.
    fn show_message(&mut self, text: &str) -> Result<()>;
}

/// Source of player input.
pub trait InputSource {
    /// Wait up to `timeout` for the next input.
    ///
    /// Returns `Ok(None)` when nothing arrived or the event was not a game input.
    fn poll_action(&mut self, timeout: Duration) -> Result<Option<GameAction>>;
}

/// Fixed-duration waits.
pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

/// Wall-clock sleeping on the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

impl<D: Display + ?Sized> Display for &mut D {
    fn present(&mut self, frame: &Matrix) -> Result<()> {
        (**self).present(frame)
    }

    fn set_orientation(&mut self, steps: u8) -> Result<()> {
        (**self).set_orientation(steps)
    }

    fn show_message(&mut self, text: &str) -> Result<()> {
        (**self).show_message(text)
    }
}
