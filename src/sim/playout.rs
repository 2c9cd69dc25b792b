//! Random playouts and move-tree counting.
//!
//! Both drive a private `Engine` per game, so batches can be split
//! across threads freely.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameConfig, GameRng, Player, PlayerPair};
use crate::rules::Engine;

/// Configuration for random playouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Seed for move selection. Same seed, same game.
    pub seed: u64,

    /// Moves after which an unfinished game is abandoned.
    pub max_moves: usize,

    /// Rules configuration for each game.
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_moves: 1000,
            game: GameConfig::default(),
        }
    }
}

impl SimConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }

    #[must_use]
    pub fn with_game_config(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }
}

/// Summary of one playout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutResult {
    pub seed: u64,

    /// The game reached its end before `max_moves`.
    pub completed: bool,

    /// Winner of a completed game; `None` on a tie or when abandoned.
    pub winner: Option<Player>,

    /// Store counts at the end (after collection when completed).
    pub scores: PlayerPair<u32>,

    pub moves: usize,
    pub extra_turns: usize,
    pub captures: usize,
}

/// Play one game choosing uniformly among legal moves.
pub fn random_playout(config: &SimConfig) -> PlayoutResult {
    let mut rng = GameRng::new(config.seed);
    let mut engine = Engine::with_config(config.game);
    engine.start_new_game();

    let mut moves = 0;
    let mut extra_turns = 0;
    let mut captures = 0;

    while moves < config.max_moves && !engine.is_game_over() {
        let legal = engine.legal_moves();
        let Some(&pit) = rng.choose(&legal) else {
            break;
        };
        let Some(outcome) = engine.perform_move(pit) else {
            break;
        };

        moves += 1;
        extra_turns += usize::from(outcome.extra_turn);
        captures += usize::from(outcome.capture_occurred);
    }

    let completed = engine.is_game_over();
    let winner = if completed {
        engine.determine_winner()
    } else {
        None
    };
    let scores = PlayerPair::new(|player| engine.score(player));

    debug!(
        seed = config.seed,
        moves,
        completed,
        first = scores[Player::First],
        second = scores[Player::Second],
        "playout finished"
    );

    PlayoutResult {
        seed: config.seed,
        completed,
        winner,
        scores,
        moves,
        extra_turns,
        captures,
    }
}

/// Run `count` playouts, each with its own seed forked from `config.seed`.
pub fn batch_random_playouts(config: &SimConfig, count: usize) -> Vec<PlayoutResult> {
    let mut rng = GameRng::new(config.seed);
    (0..count)
        .map(|_| random_playout(&config.with_seed(rng.fork().seed())))
        .collect()
}

/// Count move sequences of length `depth` from `engine`'s position.
///
/// Extra turns count as separate plies. A finished game is a leaf.
pub fn perft(engine: &Engine, depth: u32) -> u64 {
    if depth == 0 || engine.is_game_over() {
        return 1;
    }

    engine
        .legal_moves()
        .into_iter()
        .map(|pit| {
            let mut child = engine.clone();
            child.perform_move(pit);
            perft(&child, depth - 1)
        })
        .sum()
}
