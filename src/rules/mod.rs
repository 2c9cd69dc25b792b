//! Game rules: move execution, game end and scoring.
//!
//! `Engine` implements the Congklak rules behind the `RulesEngine` trait.
//! Board and pits carry no rules of their own; every decision about
//! sowing, captures, extra turns and winners is made here.

pub mod engine;
pub mod error;
pub mod game;
pub mod outcome;

pub use engine::{GameStatus, RulesEngine};
pub use error::MoveError;
pub use game::Engine;
pub use outcome::{MoveOutcome, MoveRecord, Touched};
