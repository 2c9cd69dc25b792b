//! Reasons a pit cannot start a move.

use thiserror::Error;

use crate::core::Player;

/// An illegal move request. The board is untouched when one is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no game in progress")]
    NotInProgress,

    #[error("pit index {0} is outside the board")]
    OutOfRange(usize),

    #[error("pit {0} is a store")]
    Store(usize),

    #[error("pit {index} belongs to {owner}")]
    NotOwned { index: usize, owner: Player },

    #[error("pit {0} is empty")]
    EmptyPit(usize),
}
