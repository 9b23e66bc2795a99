//! MatrixView: maps an 8x8 frame into a terminal framebuffer.
//!
//! The panel is drawn as a grid of LEDs inside a border, centred in the
//! viewport, with one caption line underneath. This module is pure (no I/O).

use crate::core::Matrix;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

const PANEL_BG: Rgb = Rgb::new(20, 8, 8);
const LED_ON: CellStyle = CellStyle::new(Rgb::new(255, 60, 40), PANEL_BG);
const LED_OFF: CellStyle = CellStyle::new(Rgb::new(70, 25, 25), PANEL_BG);
const BORDER: CellStyle = CellStyle::new(Rgb::new(160, 160, 160), Rgb::new(0, 0, 0));
const CAPTION: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the LED panel.
#[derive(Debug, Clone)]
pub struct MatrixView {
    /// Terminal columns per LED.
    led_w: u16,
    /// Terminal rows per LED.
    led_h: u16,
}

impl Default for MatrixView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self { led_w: 2, led_h: 1 }
    }
}

impl MatrixView {
    pub fn new(led_w: u16, led_h: u16) -> Self {
        Self {
            led_w: led_w.max(1),
            led_h: led_h.max(1),
        }
    }

    /// Size of the bordered panel in terminal cells.
    pub fn panel_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.led_w + 2,
            BOARD_HEIGHT as u16 * self.led_h + 2,
        )
    }

    /// Top-left corner of the panel within `viewport`.
    pub fn origin(&self, viewport: Viewport) -> (u16, u16) {
        let (w, h) = self.panel_size();
        // One extra row below the panel holds the caption.
        (
            viewport.width.saturating_sub(w) / 2,
            viewport.height.saturating_sub(h + 1) / 2,
        )
    }

    /// Render `frame` and `caption` into `fb`, resizing it to the viewport.
    pub fn render_into(&self, frame: &Matrix, caption: &str, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (x0, y0) = self.origin(viewport);
        let (w, h) = self.panel_size();
        self.draw_border(fb, x0, y0, w, h);

        for row in 0..BOARD_HEIGHT {
            for col in 0..BOARD_WIDTH {
                let (ch, style) = if frame.is_lit(row, col) {
                    ('█', LED_ON)
                } else {
                    ('·', LED_OFF)
                };
                let px = x0 + 1 + col as u16 * self.led_w;
                let py = y0 + 1 + row as u16 * self.led_h;
                fb.fill_rect(px, py, self.led_w, self.led_h, style.cell(ch));
            }
        }

        fb.put_str_centered(x0, w, y0 + h, caption, CAPTION);
    }

    pub fn render(&self, frame: &Matrix, caption: &str, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, caption, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let right = x + w - 1;
        let bottom = y + h - 1;
        fb.set(x, y, BORDER.cell('┌'));
        fb.set(right, y, BORDER.cell('┐'));
        fb.set(x, bottom, BORDER.cell('└'));
        fb.set(right, bottom, BORDER.cell('┘'));
        for dx in 1..w - 1 {
            fb.set(x + dx, y, BORDER.cell('─'));
            fb.set(x + dx, bottom, BORDER.cell('─'));
        }
        for dy in 1..h - 1 {
            fb.set(x, y + dy, BORDER.cell('│'));
            fb.set(right, y + dy, BORDER.cell('│'));
        }
    }
}
