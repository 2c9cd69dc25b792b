//! # congklak
//!
//! Rules engine for Congklak, a two-player seed-sowing game of the
//! mancala family.
//!
//! ## The Board
//!
//! Sixteen pits in a ring: First's store at index 0, First's seven small
//! pits at 1..=7, Second's seven small pits at 8..=14 and Second's store
//! at 15. Every small pit starts with 7 seeds, 98 in all. Seeds only ever
//! move between pits, so that total never changes during a game.
//!
//! ## A Move
//!
//! 1. The current player picks up every seed from one of their non-empty
//!    small pits.
//! 2. Seeds are sown one per pit in increasing index order, wrapping from
//!    15 to 0 and skipping the opponent's store.
//! 3. Last seed in the mover's own store: the mover plays again.
//!    Last seed in one of the mover's own empty small pits, with seeds in
//!    the pit opposite: both pits are captured into the mover's store.
//! 4. Otherwise the turn passes.
//!
//! The game is over once either side has no seeds left in its small pits.
//! Each player then banks what remains on their side, and the larger store
//! wins.
//!
//! ## Example
//!
//! ```
//! use congklak::{Engine, Player};
//!
//! let mut engine = Engine::new();
//! engine.start_new_game();
//!
//! let outcome = engine.perform_move(1).expect("pit 1 is playable");
//! assert_eq!(outcome.landing_index, 8);
//! assert_eq!(engine.current_player(), Player::Second);
//! assert!(engine.perform_move(1).is_none());
//! ```
//!
//! ## Modules
//!
//! - `core`: Players, per-player storage, configuration, RNG
//! - `board`: Pits, the board and its fixed geometry
//! - `rules`: The engine, move outcomes and the `RulesEngine` trait
//! - `sim`: Random playouts and perft

pub mod board;
pub mod core;
pub mod rules;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameConfig, GameRng, Player, PlayerPair};

pub use crate::board::{Board, Pit, PITS_PER_SIDE, PIT_COUNT};

pub use crate::rules::{
    Engine, GameStatus, MoveError, MoveOutcome, MoveRecord, RulesEngine, Touched,
};

pub use crate::sim::{batch_random_playouts, perft, random_playout, PlayoutResult, SimConfig};
