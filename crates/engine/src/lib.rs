//! Game runtime (engine-facing).
//!
//! Schedules the pure [`stacker_core::GameEngine`] against real time: a render
//! loop that ticks at the engine's interval and an input thread that turns button
//! presses into commit requests. The two talk over a channel; the engine itself
//! never leaves the render loop.
//!
//! Display, input and clock are reached through the traits in [`device`] so the
//! same runtime drives a terminal, an LED panel or a test double.

pub mod config;
pub mod debounce;
pub mod device;
pub mod session;

pub use stacker_core as core;
pub use stacker_types as types;

pub use config::RuntimeConfig;
pub use debounce::Debounce;
pub use device::{Clock, Display, InputSource, SystemClock};
pub use session::{game_over_message, Command, RunSummary, Session};
