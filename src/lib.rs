//! Stacker (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the pieces only
//! the binary needs: argument parsing and log setup.

pub mod cli;
pub mod logging;

pub use stacker_core as core;
pub use stacker_engine as engine;
pub use stacker_input as input;
pub use stacker_term as term;
pub use stacker_types as types;
