//! Core types: players, per-player storage, configuration, RNG.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{ConfigError, GameConfig, DEFAULT_SEEDS_PER_PIT, MAX_SEEDS_PER_PIT};
pub use player::{Player, PlayerPair};
pub use rng::GameRng;
