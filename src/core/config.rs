//! Game configuration.
//!
//! The board geometry (two stores, seven small pits per side) is fixed.
//! Only the number of seeds placed in each small pit at the start of a
//! game can be configured.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Seeds per small pit in the standard game.
pub const DEFAULT_SEEDS_PER_PIT: u32 = 7;

/// Largest seeds-per-pit whose board total (14 small pits) fits in `u32`.
pub const MAX_SEEDS_PER_PIT: u32 = u32::MAX / 14;

/// Invalid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("seeds per pit must be at least 1")]
    NoSeeds,

    #[error("seeds per pit must be at most {max}, got {got}")]
    TooManySeeds { got: u32, max: u32 },
}

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seeds placed in every small pit by `start_new_game`.
    pub seeds_per_pit: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seeds_per_pit: DEFAULT_SEEDS_PER_PIT,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration (7 seeds per pit).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting seeds per small pit.
    ///
    /// Panics if `seeds` is zero or above `MAX_SEEDS_PER_PIT`.
    #[must_use]
    pub fn with_seeds_per_pit(mut self, seeds: u32) -> Self {
        assert!(seeds > 0, "Must have at least 1 seed per pit");
        assert!(
            seeds <= MAX_SEEDS_PER_PIT,
            "At most {MAX_SEEDS_PER_PIT} seeds per pit supported"
        );
        self.seeds_per_pit = seeds;
        self
    }

    /// Check a configuration that did not come through the builder.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seeds_per_pit == 0 {
            return Err(ConfigError::NoSeeds);
        }
        if self.seeds_per_pit > MAX_SEEDS_PER_PIT {
            return Err(ConfigError::TooManySeeds {
                got: self.seeds_per_pit,
                max: MAX_SEEDS_PER_PIT,
            });
        }
        Ok(())
    }
}
