//! Error taxonomy
//!
//! In-tick errors (rejected moves, bad input tokens) are local and recoverable;
//! only `InvalidConfig` is fatal, raised at construction time.

use thiserror::Error;

use crate::sim::Direction;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    /// The ship was asked to move off the grid. The move is rejected and
    /// the ship stays put.
    #[error("cannot move {direction}, out of bounds")]
    OutOfBounds { direction: Direction },

    /// An input token did not parse to any known command.
    #[error("unknown command {token:?}")]
    UnknownCommand { token: String },

    /// A construction precondition was violated. Never silently defaulted.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },
}
