//! The 16-pit board.

use std::ops::{Index, Range};

use serde::{Deserialize, Serialize};

use super::layout::{self, PIT_COUNT};
use super::pit::Pit;
use crate::core::{Player, DEFAULT_SEEDS_PER_PIT};

/// All sixteen pits in sowing order.
///
/// The layout never changes: which player owns an index and whether it
/// is a store are fixed for the lifetime of the board. Only seed counts
/// mutate. Indexing outside 0..16 panics.
///
/// Serializes as the 16 seed counts; owners and store flags are always
/// rebuilt from the layout when reading one back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u32; PIT_COUNT]", into = "[u32; PIT_COUNT]")]
pub struct Board {
    pits: [Pit; PIT_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position: empty stores, 7 seeds in every small pit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seeds_per_pit(DEFAULT_SEEDS_PER_PIT)
    }

    /// Starting position with `seeds` in every small pit.
    #[must_use]
    pub fn with_seeds_per_pit(seeds: u32) -> Self {
        Self {
            pits: std::array::from_fn(|index| {
                let owner = layout::owner_of(index);
                if layout::is_store_index(index) {
                    Pit::store(owner)
                } else {
                    Pit::small(owner, seeds)
                }
            }),
        }
    }

    /// Build a position from 16 seed counts, stores included.
    ///
    /// Panics if `counts` does not hold exactly 16 values.
    #[must_use]
    pub fn from_counts(counts: &[u32]) -> Self {
        assert_eq!(
            counts.len(),
            PIT_COUNT,
            "board must have exactly {PIT_COUNT} pits"
        );
        let mut board = Self::with_seeds_per_pit(0);
        for (pit, &count) in board.pits.iter_mut().zip(counts) {
            pit.set_seeds(count);
        }
        board
    }

    // === Pit Access ===

    /// Get the pit at `index`.
    #[must_use]
    pub fn pit(&self, index: usize) -> &Pit {
        &self.pits[index]
    }

    /// Seed count of the pit at `index`.
    #[must_use]
    pub fn seeds(&self, index: usize) -> u32 {
        self.pits[index].seeds()
    }

    /// Overwrite the seed count of the pit at `index`.
    pub fn set_seeds(&mut self, index: usize, seeds: u32) {
        self.pits[index].set_seeds(seeds);
    }

    /// All pits in index order.
    #[must_use]
    pub fn pits(&self) -> &[Pit; PIT_COUNT] {
        &self.pits
    }

    /// Seed counts in index order.
    #[must_use]
    pub fn counts(&self) -> [u32; PIT_COUNT] {
        self.pits.map(|pit| pit.seeds())
    }

    pub(crate) fn take_all(&mut self, index: usize) -> u32 {
        self.pits[index].take_all()
    }

    pub(crate) fn add(&mut self, index: usize, seeds: u32) {
        self.pits[index].add(seeds);
    }

    // === Geometry ===

    #[must_use]
    pub fn store_index(&self, player: Player) -> usize {
        layout::store_index(player)
    }

    #[must_use]
    pub fn owned_range(&self, player: Player) -> Range<usize> {
        layout::owned_range(player)
    }

    /// The small pit across from `index`, or `None` for stores and
    /// positions outside 1..=14.
    #[must_use]
    pub fn opposite_index(&self, index: usize) -> Option<usize> {
        layout::opposite_index(index)
    }

    // === Queries ===

    /// True when every small pit of `player` is empty.
    #[must_use]
    pub fn is_side_empty(&self, player: Player) -> bool {
        self.owned_range(player).all(|index| self.pits[index].is_empty())
    }

    /// Seeds in `player`'s store.
    #[must_use]
    pub fn store_count(&self, player: Player) -> u32 {
        self.seeds(self.store_index(player))
    }

    /// Seeds still in `player`'s small pits.
    #[must_use]
    pub fn side_count(&self, player: Player) -> u32 {
        self.owned_range(player).map(|index| self.seeds(index)).sum()
    }

    /// Seeds on the whole board.
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        self.pits.iter().map(Pit::seeds).sum()
    }
}

impl From<[u32; PIT_COUNT]> for Board {
    fn from(counts: [u32; PIT_COUNT]) -> Self {
        Self::from_counts(&counts)
    }
}

impl From<Board> for [u32; PIT_COUNT] {
    fn from(board: Board) -> Self {
        board.counts()
    }
}

impl Index<usize> for Board {
    type Output = Pit;

    fn index(&self, index: usize) -> &Self::Output {
        self.pit(index)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board:")?;

        write!(f, "{}: ", Player::Second)?;
        for index in self.owned_range(Player::Second).rev() {
            write!(f, "[{}] ", self.seeds(index))?;
        }
        writeln!(f, "Store: [{}]", self.store_count(Player::Second))?;

        write!(f, "{}: Store: [{}]", Player::First, self.store_count(Player::First))?;
        for index in self.owned_range(Player::First) {
            write!(f, " [{}]", self.seeds(index))?;
        }
        Ok(())
    }
}
