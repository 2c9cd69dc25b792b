//! The Congklak rules engine.
//!
//! Owns one board and whose turn it is. Every rule decision lives here:
//! sowing, the extra-turn and capture checks, turn hand-off, game end and
//! the final seed collection.

use smallvec::smallvec;
use tracing::{debug, info, trace};

use crate::board::{layout, Board, PIT_COUNT};
use crate::core::{GameConfig, Player};

use super::engine::{GameStatus, RulesEngine};
use super::error::MoveError;
use super::outcome::{MoveOutcome, MoveRecord, Touched};

/// A single game of Congklak.
///
/// Single-threaded and synchronous: a move resolves completely before the
/// call returns. Separate engines share nothing, so they can run on
/// separate threads without coordination.
#[derive(Clone, Debug)]
pub struct Engine {
    config: GameConfig,
    board: Board,
    current_player: Player,
    status: GameStatus,
    history: Vec<MoveRecord>,
    /// Seeds on the board when the position was set up.
    total_seeds: u32,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create an engine with the standard configuration.
    ///
    /// The board shows the starting layout, but no move is accepted until
    /// `start_new_game` is called.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Create an engine with a custom configuration.
    ///
    /// Panics if the configuration is invalid.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        if let Err(err) = config.validate() {
            panic!("invalid game config: {err}");
        }
        let board = Board::with_seeds_per_pit(config.seeds_per_pit);
        Self {
            config,
            total_seeds: board.total_seeds(),
            board,
            current_player: Player::First,
            status: GameStatus::NotStarted,
            history: Vec::new(),
        }
    }

    /// Load an arbitrary position as a game in progress.
    ///
    /// Seed conservation is checked against the total on `board`.
    #[must_use]
    pub fn from_position(board: Board, current_player: Player) -> Self {
        Self {
            config: GameConfig::default(),
            total_seeds: board.total_seeds(),
            board,
            current_player,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Seeds in `player`'s store.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.board.store_count(player)
    }

    /// Accepted moves since the last `start_new_game`.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    // === Lifecycle ===

    /// Reset to the starting layout with `Player::First` to move.
    ///
    /// Valid from any state, including a finished game.
    pub fn start_new_game(&mut self) {
        self.board = Board::with_seeds_per_pit(self.config.seeds_per_pit);
        self.total_seeds = self.board.total_seeds();
        self.current_player = Player::First;
        self.status = GameStatus::InProgress;
        self.history.clear();

        info!(seeds = self.total_seeds, "new game started");
    }

    // === Selection ===

    /// Why `index` cannot start a move for the current player, if it can't.
    pub fn check_selection(&self, index: usize) -> Result<(), MoveError> {
        if !self.status.is_in_progress() {
            return Err(MoveError::NotInProgress);
        }
        if index >= PIT_COUNT {
            return Err(MoveError::OutOfRange(index));
        }

        let pit = self.board.pit(index);
        if pit.is_store() {
            return Err(MoveError::Store(index));
        }
        if pit.owner() != self.current_player {
            return Err(MoveError::NotOwned {
                index,
                owner: pit.owner(),
            });
        }
        if pit.is_empty() {
            return Err(MoveError::EmptyPit(index));
        }
        Ok(())
    }

    /// True iff the current player may start a move from `index`.
    #[must_use]
    pub fn can_select(&self, index: usize) -> bool {
        self.check_selection(index).is_ok()
    }

    /// Every index the current player may select, ascending.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..PIT_COUNT).filter(|&index| self.can_select(index)).collect()
    }

    // === Moves ===

    /// Sow from `index`; `None` if the selection is illegal.
    pub fn perform_move(&mut self, index: usize) -> Option<MoveOutcome> {
        self.try_move(index).ok()
    }

    /// Sow from `index` and resolve the landing.
    ///
    /// Seeds go one per pit in increasing index order, wrapping at 16 and
    /// skipping the opponent's store. Ending in the mover's store grants
    /// another turn. Ending in one of the mover's own small pits that was
    /// empty, with seeds across the board, captures both pits into the
    /// mover's store.
    pub fn try_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        if let Err(err) = self.check_selection(index) {
            debug!(pit = index, player = %self.current_player, error = %err, "move rejected");
            return Err(err);
        }

        let player = self.current_player;
        let own_store = layout::store_index(player);
        let opponent_store = layout::store_index(player.opponent());

        let seeds_sown = self.board.take_all(index);
        let mut touched: Touched = smallvec![index];
        let mut cursor = index;
        let mut in_hand = seeds_sown;

        while in_hand > 0 {
            cursor = layout::next_index(cursor);
            if cursor == opponent_store {
                continue;
            }
            self.board.add(cursor, 1);
            touched.push(cursor);
            in_hand -= 1;
            trace!(pit = cursor, remaining = in_hand, "seed sown");
        }
        let landing_index = cursor;

        let mut extra_turn = false;
        let mut captured_seeds = 0;
        if landing_index == own_store {
            extra_turn = true;
        } else if let Some(opposite) = self.capture_target(landing_index, player) {
            captured_seeds = self.board.take_all(landing_index) + self.board.take_all(opposite);
            self.board.add(own_store, captured_seeds);
            touched.push(opposite);
            touched.push(own_store);
        }

        if !extra_turn {
            self.current_player = player.opponent();
        }

        let sequence = self.history.len();
        self.history.push(MoveRecord::new(player, index, sequence));

        debug_assert_eq!(
            self.board.total_seeds(),
            self.total_seeds,
            "seed count changed during a move"
        );
        debug!(
            player = %player,
            pit = index,
            seeds = seeds_sown,
            landing = landing_index,
            extra_turn,
            captured = captured_seeds,
            "move performed"
        );

        Ok(MoveOutcome {
            player,
            board: self.board,
            touched,
            seeds_sown,
            landing_index,
            extra_turn,
            capture_occurred: captured_seeds > 0,
            captured_seeds,
            next_player: self.current_player,
        })
    }

    /// The opposite pit to capture from, if landing at `index` captures.
    ///
    /// A pit holding exactly one seed after sowing was empty before this
    /// move's last seed: a single move never passes the same pit twice
    /// with the standard seed total.
    fn capture_target(&self, index: usize, player: Player) -> Option<usize> {
        let pit = self.board.pit(index);
        if pit.owner() != player || pit.is_store() || pit.seeds() != 1 {
            return None;
        }
        let opposite = layout::opposite_index(index)?;
        (self.board.seeds(opposite) > 0).then_some(opposite)
    }

    // === Game End ===

    /// True once either player's small pits are all empty. Never mutates.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        Player::ALL
            .into_iter()
            .any(|player| self.board.is_side_empty(player))
    }

    /// Finish the game.
    ///
    /// Moves every seed left in each player's small pits into that
    /// player's own store, then compares stores. `None` is a tie.
    ///
    /// Panics if the game is not over.
    pub fn determine_winner(&mut self) -> Option<Player> {
        assert!(
            self.is_game_over(),
            "determine_winner called before the game is over"
        );

        for player in Player::ALL {
            let store = layout::store_index(player);
            for index in layout::owned_range(player) {
                let seeds = self.board.take_all(index);
                self.board.add(store, seeds);
            }
        }

        let first = self.score(Player::First);
        let second = self.score(Player::Second);
        let winner = match first.cmp(&second) {
            std::cmp::Ordering::Greater => Some(Player::First),
            std::cmp::Ordering::Less => Some(Player::Second),
            std::cmp::Ordering::Equal => None,
        };
        self.status = GameStatus::Ended { winner };

        info!(
            first,
            second,
            winner = winner.map_or("tie", Player::display_name),
            "game over"
        );
        winner
    }
}

impl RulesEngine for Engine {
    fn start_new_game(&mut self) {
        Engine::start_new_game(self);
    }

    fn can_select(&self, index: usize) -> bool {
        Engine::can_select(self, index)
    }

    fn perform_move(&mut self, index: usize) -> Option<MoveOutcome> {
        Engine::perform_move(self, index)
    }

    fn is_game_over(&self) -> bool {
        Engine::is_game_over(self)
    }

    fn determine_winner(&mut self) -> Option<Player> {
        Engine::determine_winner(self)
    }

    fn board(&self) -> &Board {
        Engine::board(self)
    }

    fn current_player(&self) -> Player {
        Engine::current_player(self)
    }

    fn status(&self) -> GameStatus {
        Engine::status(self)
    }
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Engine:")?;
        writeln!(f, "Current Player: {}", self.current_player)?;
        writeln!(f, "{}", self.board)?;
        write!(f, "Game Ended: {}", self.is_game_over())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> Engine {
        let mut engine = Engine::new();
        engine.start_new_game();
        engine
    }

    #[test]
    fn test_new_engine_not_started() {
        let engine = Engine::new();

        assert_eq!(engine.status(), GameStatus::NotStarted);
        assert_eq!(engine.current_player(), Player::First);
        assert_eq!(engine.board(), &Board::new());
        assert!(!engine.can_select(1));
        assert_eq!(engine.check_selection(1), Err(MoveError::NotInProgress));
    }

    #[test]
    fn test_move_before_start_is_rejected() {
        let mut engine = Engine::new();

        assert!(engine.perform_move(1).is_none());
        assert_eq!(engine.board(), &Board::new());
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_selection_errors() {
        let engine = started();

        assert_eq!(engine.check_selection(0), Err(MoveError::Store(0)));
        assert_eq!(engine.check_selection(15), Err(MoveError::Store(15)));
        assert_eq!(engine.check_selection(16), Err(MoveError::OutOfRange(16)));
        assert_eq!(
            engine.check_selection(8),
            Err(MoveError::NotOwned {
                index: 8,
                owner: Player::Second
            })
        );
        assert_eq!(engine.check_selection(1), Ok(()));
    }

    #[test]
    fn test_empty_pit_rejected() {
        let mut board = Board::new();
        board.set_seeds(3, 0);
        let mut engine = Engine::from_position(board, Player::First);

        assert_eq!(engine.check_selection(3), Err(MoveError::EmptyPit(3)));
        assert_eq!(engine.try_move(3), Err(MoveError::EmptyPit(3)));
        assert_eq!(engine.board(), &board);
    }

    #[test]
    fn test_legal_moves() {
        let mut engine = started();
        assert_eq!(engine.legal_moves(), vec![1, 2, 3, 4, 5, 6, 7]);

        engine.perform_move(1).unwrap();
        assert_eq!(engine.legal_moves(), (8..15).collect::<Vec<_>>());
    }

    #[test]
    fn test_opening_move() {
        let mut engine = started();

        let outcome = engine.perform_move(1).unwrap();

        assert_eq!(outcome.player, Player::First);
        assert_eq!(outcome.seeds_sown, 7);
        assert_eq!(outcome.landing_index, 8);
        assert_eq!(outcome.touched.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(!outcome.extra_turn);
        assert!(!outcome.capture_occurred);
        assert_eq!(outcome.captured_seeds, 0);
        assert_eq!(outcome.next_player, Player::Second);

        assert_eq!(engine.board().seeds(1), 0);
        for index in 2..=8 {
            assert_eq!(engine.board().seeds(index), 8);
        }
        assert_eq!(outcome.board, *engine.board());
    }

    #[test]
    fn test_sowing_skips_opponent_store() {
        let mut board = Board::new();
        board.set_seeds(7, 8);
        let mut engine = Engine::from_position(board, Player::First);

        let outcome = engine.perform_move(7).unwrap();

        assert_eq!(outcome.landing_index, 0);
        assert_eq!(outcome.touched.as_slice(), &[7, 8, 9, 10, 11, 12, 13, 14, 0]);
        assert!(!outcome.touched.contains(&15));
        assert_eq!(engine.board().seeds(15), 0);
        assert_eq!(engine.board().seeds(0), 1);
        assert!(outcome.extra_turn);
        assert_eq!(engine.current_player(), Player::First);
    }

    #[test]
    fn test_second_player_skips_first_store() {
        let mut board = Board::new();
        board.set_seeds(14, 3);
        let mut engine = Engine::from_position(board, Player::Second);

        let outcome = engine.perform_move(14).unwrap();

        assert_eq!(outcome.touched.as_slice(), &[14, 15, 1, 2]);
        assert_eq!(outcome.landing_index, 2);
        assert_eq!(engine.board().seeds(0), 0);
        assert_eq!(engine.board().seeds(15), 1);
        assert_eq!(engine.current_player(), Player::First);
    }

    #[test]
    fn test_capture() {
        let mut board = Board::new();
        board.set_seeds(1, 1);
        board.set_seeds(2, 0);
        board.set_seeds(13, 5);
        let mut engine = Engine::from_position(board, Player::First);

        let outcome = engine.perform_move(1).unwrap();

        assert!(outcome.capture_occurred);
        assert_eq!(outcome.captured_seeds, 6);
        assert_eq!(outcome.landing_index, 2);
        assert_eq!(outcome.touched.as_slice(), &[1, 2, 13, 0]);
        assert_eq!(engine.board().seeds(2), 0);
        assert_eq!(engine.board().seeds(13), 0);
        assert_eq!(engine.board().seeds(0), 6);
        assert_eq!(engine.current_player(), Player::Second);
    }

    #[test]
    fn test_no_capture_when_opposite_empty() {
        let mut board = Board::new();
        board.set_seeds(1, 1);
        board.set_seeds(2, 0);
        board.set_seeds(13, 0);
        let mut engine = Engine::from_position(board, Player::First);

        let outcome = engine.perform_move(1).unwrap();

        assert!(!outcome.capture_occurred);
        assert_eq!(engine.board().seeds(2), 1);
        assert_eq!(engine.board().seeds(0), 0);
    }

    #[test]
    fn test_no_capture_on_opponent_side() {
        let mut board = Board::new();
        board.set_seeds(7, 1);
        board.set_seeds(8, 0);
        let mut engine = Engine::from_position(board, Player::First);

        let outcome = engine.perform_move(7).unwrap();

        assert_eq!(outcome.landing_index, 8);
        assert!(!outcome.capture_occurred);
        assert_eq!(engine.board().seeds(8), 1);
    }

    #[test]
    fn test_full_lap_lands_in_emptied_source() {
        // 15 seeds from pit 1: 2..=14, skip 15, 0, then back to 1.
        let mut board = Board::new();
        board.set_seeds(1, 15);
        let mut engine = Engine::from_position(board, Player::First);

        let outcome = engine.perform_move(1).unwrap();

        assert_eq!(outcome.landing_index, 1);
        assert!(outcome.capture_occurred);
        assert_eq!(outcome.captured_seeds, 1 + 8);
        assert_eq!(engine.board().seeds(0), 1 + 9);
        assert_eq!(engine.board().seeds(1), 0);
        assert_eq!(engine.board().seeds(14), 0);
    }

    #[test]
    fn test_history_records_moves() {
        let mut engine = started();
        engine.perform_move(1).unwrap();
        engine.perform_move(8).unwrap();
        assert!(engine.perform_move(0).is_none());

        assert_eq!(
            engine.history(),
            &[
                MoveRecord::new(Player::First, 1, 0),
                MoveRecord::new(Player::Second, 8, 1),
            ]
        );
    }

    #[test]
    fn test_is_game_over() {
        let mut board = Board::new();
        let engine = Engine::from_position(board, Player::First);
        assert!(!engine.is_game_over());

        for index in 8..=14 {
            board.set_seeds(index, 0);
        }
        let engine = Engine::from_position(board, Player::First);
        assert!(engine.is_game_over());
        assert_eq!(engine.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_determine_winner_collects_and_ends() {
        let mut board = Board::new();
        for index in 1..=7 {
            board.set_seeds(index, 0);
        }
        board.set_seeds(0, 60);
        let mut engine = Engine::from_position(board, Player::Second);

        let winner = engine.determine_winner();

        assert_eq!(winner, Some(Player::First));
        assert_eq!(engine.score(Player::First), 60);
        assert_eq!(engine.score(Player::Second), 49);
        assert_eq!(engine.board().side_count(Player::Second), 0);
        assert_eq!(
            engine.status(),
            GameStatus::Ended {
                winner: Some(Player::First)
            }
        );
        assert!(!engine.can_select(8));
    }

    #[test]
    fn test_determine_winner_tie() {
        let mut counts = [0; 16];
        counts[0] = 20;
        counts[15] = 15;
        counts[10] = 5;
        let mut engine = Engine::from_position(Board::from_counts(&counts), Player::First);

        assert_eq!(engine.determine_winner(), None);
        assert_eq!(engine.status(), GameStatus::Ended { winner: None });
        assert_eq!(engine.score(Player::Second), 20);
    }

    #[test]
    fn test_history_sequence_counts_accepted_moves() {
        let mut engine = started();
        for _ in 0..6 {
            let pit = engine.legal_moves()[0];
            engine.perform_move(pit).unwrap();
        }

        for (position, record) in engine.history().iter().enumerate() {
            assert_eq!(record.sequence, position);
        }
    }

    #[test]
    #[should_panic(expected = "invalid game config")]
    fn test_with_config_rejects_oversized_config() {
        let config: GameConfig =
            serde_json::from_str(r#"{"seeds_per_pit":400000000}"#).unwrap();
        let _ = Engine::with_config(config);
    }

    #[test]
    fn test_deserialized_board_keeps_layout() {
        let board: Board =
            serde_json::from_str("[5,7,7,7,7,7,7,7,7,7,7,7,7,7,7,0]").unwrap();
        let engine = Engine::from_position(board, Player::Second);

        assert!(!engine.can_select(0));
        assert_eq!(engine.check_selection(0), Err(MoveError::Store(0)));
    }

    #[test]
    #[should_panic(expected = "before the game is over")]
    fn test_determine_winner_too_early() {
        let mut engine = started();
        engine.determine_winner();
    }

    #[test]
    fn test_start_new_game_resets() {
        let mut engine = started();
        engine.perform_move(1).unwrap();
        engine.perform_move(8).unwrap();

        engine.start_new_game();

        assert_eq!(engine.board(), &Board::new());
        assert_eq!(engine.current_player(), Player::First);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_custom_config() {
        let mut engine = Engine::with_config(GameConfig::new().with_seeds_per_pit(3));
        engine.start_new_game();

        assert_eq!(engine.board().total_seeds(), 42);
        let outcome = engine.perform_move(5).unwrap();
        assert_eq!(outcome.landing_index, 8);
    }

    #[test]
    fn test_trait_object() {
        let mut engine: Box<dyn RulesEngine> = Box::new(Engine::new());
        engine.start_new_game();

        assert_eq!(engine.legal_moves(), vec![1, 2, 3, 4, 5, 6, 7]);
        let outcome = engine.perform_move(3).unwrap();
        assert_eq!(outcome.landing_index, 10);
        assert_eq!(engine.current_player(), Player::Second);
        assert_eq!(engine.store_count(Player::First), 0);
        assert_eq!(engine.board().seeds(10), 8);
    }

    #[test]
    fn test_display() {
        let text = format!("{}", started());

        assert!(text.contains("Engine:"));
        assert!(text.contains("Current Player: Player 1"));
        assert!(text.contains("Board:"));
        assert!(text.contains("Game Ended: false"));
    }
}
