//! A single seed-holding cell.

use serde::Serialize;

use crate::core::Player;

/// A pit on the board: a small pit or a store.
///
/// Owner and kind are fixed at construction; only the seed count changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Pit {
    seeds: u32,
    is_store: bool,
    owner: Player,
}

impl Pit {
    /// Create a small pit.
    #[must_use]
    pub const fn small(owner: Player, seeds: u32) -> Self {
        Self {
            seeds,
            is_store: false,
            owner,
        }
    }

    /// Create an empty store.
    #[must_use]
    pub const fn store(owner: Player) -> Self {
        Self {
            seeds: 0,
            is_store: true,
            owner,
        }
    }

    #[must_use]
    pub const fn seeds(&self) -> u32 {
        self.seeds
    }

    #[must_use]
    pub const fn is_store(&self) -> bool {
        self.is_store
    }

    #[must_use]
    pub const fn owner(&self) -> Player {
        self.owner
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.seeds == 0
    }

    /// A pit can start a move for `player` if it is one of their small
    /// pits and holds at least one seed.
    #[must_use]
    pub fn can_be_selected_by(&self, player: Player) -> bool {
        !self.is_store && !self.is_empty() && self.owner == player
    }

    pub(crate) fn set_seeds(&mut self, seeds: u32) {
        self.seeds = seeds;
    }

    /// Remove and return every seed in the pit.
    pub(crate) fn take_all(&mut self) -> u32 {
        std::mem::take(&mut self.seeds)
    }

    pub(crate) fn add(&mut self, seeds: u32) {
        self.seeds += seeds;
    }
}

impl std::fmt::Display for Pit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.is_store { "Store" } else { "Pit" };
        write!(f, "{}[{}]: {} seeds", kind, self.owner, self.seeds)
    }
}
