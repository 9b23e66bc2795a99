//! Terminal front end for the Stacker panel.
//!
//! Renders the 8x8 matrix into a simple framebuffer that is diffed and flushed
//! to the terminal, so the game runs anywhere crossterm does without LED
//! hardware. Each LED is drawn two characters wide to keep it roughly square.

pub mod display;
pub mod fb;
pub mod font;
pub mod marquee;
pub mod matrix_view;
pub mod renderer;

pub use stacker_core as core;
pub use stacker_engine as engine;
pub use stacker_types as types;

pub use display::{TerminalDisplay, DEFAULT_CAPTION};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use marquee::Marquee;
pub use matrix_view::{MatrixView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
