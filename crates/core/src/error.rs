//! Engine faults
//!
//! These are programming errors, not game outcomes: a lost game is reported
//! through [`PlayState::GameOver`](crate::types::PlayState), never through here.

use thiserror::Error;

use crate::types::PlayState;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineFault {
    #[error("commit requested with an empty line stack")]
    EmptyStack,

    #[error("stack holds {0} rows, more than the board height")]
    StackOverflow(usize),

    #[error("cannot {action} while the game is in state {state:?}")]
    WrongState {
        action: &'static str,
        state: PlayState,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
