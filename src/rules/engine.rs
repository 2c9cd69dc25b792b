//! Rules engine trait consumed by presentation code.
//!
//! The trait is the seam between the rules and whatever drives them:
//! - What pits can be selected
//! - How a selection changes the board
//! - When the game ends and who won
//!
//! Presentation code can hold a `dyn RulesEngine` and be tested against
//! a stand-in implementation.

use serde::{Deserialize, Serialize};

use crate::board::{Board, PIT_COUNT};
use crate::core::Player;

use super::outcome::MoveOutcome;

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Created but `start_new_game` not yet called.
    #[default]
    NotStarted,
    InProgress,
    /// Finalized by `determine_winner`. `None` is a tie.
    Ended { winner: Option<Player> },
}

impl GameStatus {
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameStatus::InProgress)
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        matches!(self, GameStatus::Ended { .. })
    }

    /// Winner of an ended game; `None` while running or on a tie.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Ended { winner } => *winner,
            _ => None,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `perform_move`: `None` means the selection was illegal and nothing
///   changed
/// - `is_game_over`: pure query, never mutates
/// - `determine_winner`: collects leftover seeds, so call it once after
///   `is_game_over` returns true
pub trait RulesEngine {
    /// Reset to the starting layout with `Player::First` to move.
    fn start_new_game(&mut self);

    /// Can the current player start a move from `index`?
    fn can_select(&self, index: usize) -> bool;

    /// Sow from `index` and resolve the landing.
    fn perform_move(&mut self, index: usize) -> Option<MoveOutcome>;

    /// True once either player's small pits are all empty.
    fn is_game_over(&self) -> bool;

    /// Collect remaining seeds and compare stores. `None` is a tie.
    fn determine_winner(&mut self) -> Option<Player>;

    fn board(&self) -> &Board;

    fn current_player(&self) -> Player;

    fn status(&self) -> GameStatus;

    // === Convenience Methods ===

    /// Seeds in `player`'s store.
    fn store_count(&self, player: Player) -> u32 {
        self.board().store_count(player)
    }

    /// Every index the current player may select, ascending.
    fn legal_moves(&self) -> Vec<usize> {
        (0..PIT_COUNT).filter(|&index| self.can_select(index)).collect()
    }
}
