//! Values a move hands back to the caller.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::Player;

/// Pit indices touched by one move, in visiting order.
///
/// A standard opening move touches 8 pits; captures add two more.
pub type Touched = SmallVec<[usize; 24]>;

/// Everything that changed during one accepted move.
///
/// The board is a snapshot taken after the move resolved, so a caller can
/// replay `touched` at its own pace while the engine moves on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Player who made the move.
    pub player: Player,

    /// Board after sowing, capture and turn hand-off.
    pub board: Board,

    /// Source pit first, then every pit that received a seed, then the
    /// opposite pit and store if a capture happened.
    pub touched: Touched,

    /// Seeds picked up from the source pit.
    pub seeds_sown: u32,

    /// Pit that received the last seed.
    pub landing_index: usize,

    /// The last seed landed in the mover's own store.
    pub extra_turn: bool,

    pub capture_occurred: bool,

    /// Seeds moved into the store by the capture (0 without one).
    pub captured_seeds: u32,

    /// Whose turn it is now.
    pub next_player: Player,
}

/// One entry in an engine's move history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: Player,

    /// Pit the move started from.
    pub pit: usize,

    /// Position of this move in the game, starting at 0.
    pub sequence: usize,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: Player, pit: usize, sequence: usize) -> Self {
        Self {
            player,
            pit,
            sequence,
        }
    }
}
