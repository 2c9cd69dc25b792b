//! Fixed board geometry.
//!
//! ```text
//!          14 13 12 11 10  9  8
//!      15                        0
//!           1  2  3  4  5  6  7
//! ```
//!
//! Index 0 is First's store, 1..=7 First's small pits, 8..=14 Second's
//! small pits, 15 Second's store. Sowing walks indices upward and wraps
//! from 15 to 0. Every per-player lookup goes through the functions here.

use std::ops::Range;

use crate::core::Player;

/// Total pits on the board, stores included.
pub const PIT_COUNT: usize = 16;

/// Small pits per player.
pub const PITS_PER_SIDE: usize = 7;

/// Index of a player's store.
#[must_use]
pub const fn store_index(player: Player) -> usize {
    match player {
        Player::First => 0,
        Player::Second => PIT_COUNT - 1,
    }
}

/// Indices of a player's small pits (store excluded).
#[must_use]
pub const fn owned_range(player: Player) -> Range<usize> {
    match player {
        Player::First => 1..1 + PITS_PER_SIDE,
        Player::Second => 1 + PITS_PER_SIDE..1 + 2 * PITS_PER_SIDE,
    }
}

/// Owner of the pit at `index`.
///
/// Panics if `index` is not a board position.
#[must_use]
pub fn owner_of(index: usize) -> Player {
    assert!(index < PIT_COUNT, "pit index {index} out of range");
    if index <= PITS_PER_SIDE {
        Player::First
    } else {
        Player::Second
    }
}

#[must_use]
pub const fn is_store_index(index: usize) -> bool {
    index == store_index(Player::First) || index == store_index(Player::Second)
}

/// The small pit across the board from `index`.
///
/// `None` for stores and for anything outside 1..=14.
#[must_use]
pub const fn opposite_index(index: usize) -> Option<usize> {
    if index >= 1 && index <= 2 * PITS_PER_SIDE {
        Some(PIT_COUNT - 1 - index)
    } else {
        None
    }
}

/// The next index in sowing order.
#[must_use]
pub const fn next_index(index: usize) -> usize {
    (index + 1) % PIT_COUNT
}
