//! TerminalDisplay: the 8x8 LED panel emulated in a terminal.

use std::time::Duration;

use anyhow::Result;
use tracing::debug;

use crate::core::Matrix;
use crate::engine::{Clock, Display, SystemClock};
use crate::fb::FrameBuffer;
use crate::marquee::Marquee;
use crate::matrix_view::{MatrixView, Viewport};
use crate::renderer::TerminalRenderer;
use crate::types::{ORIENTATIONS, SCROLL_DELAY_MS};

pub const DEFAULT_CAPTION: &str = "space: stack   q: quit";

pub struct TerminalDisplay<C: Clock = SystemClock> {
    renderer: TerminalRenderer,
    view: MatrixView,
    fb: FrameBuffer,
    orientation: u8,
    scroll_delay: Duration,
    clock: C,
    caption: String,
}

impl TerminalDisplay<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TerminalDisplay<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TerminalDisplay<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view: MatrixView::default(),
            fb: FrameBuffer::new(0, 0),
            orientation: 0,
            scroll_delay: Duration::from_millis(SCROLL_DELAY_MS as u64),
            clock,
            caption: DEFAULT_CAPTION.to_string(),
        }
    }

    pub fn with_scroll_delay(mut self, delay: Duration) -> Self {
        self.scroll_delay = delay;
        self
    }

    pub fn orientation(&self) -> u8 {
        self.orientation
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }

    /// Switch the terminal into raw alternate-screen mode.
    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    /// Restore the terminal.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    fn draw(&mut self, frame: &Matrix) -> Result<()> {
        let (width, height) = self.renderer.size();
        self.view
            .render_into(frame, &self.caption, Viewport::new(width, height), &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}

impl<C: Clock> Display for TerminalDisplay<C> {
    fn present(&mut self, frame: &Matrix) -> Result<()> {
        let rotated = frame.rotated(self.orientation);
        self.draw(&rotated)
    }

    fn set_orientation(&mut self, steps: u8) -> Result<()> {
        self.orientation = steps % ORIENTATIONS;
        debug!(orientation = self.orientation, "display rotated");
        Ok(())
    }

    fn show_message(&mut self, text: &str) -> Result<()> {
        debug!(text, "scrolling message");
        // Banners are always drawn upright, whatever the play orientation.
        for frame in Marquee::new(text).frames() {
            self.draw(&frame)?;
            self.clock.sleep(self.scroll_delay);
        }
        Ok(())
    }
}
