//! Board representation: pits, stores and the fixed geometry between them.
//!
//! The board carries no game rules. It answers geometry questions
//! (where is a store, which pit is opposite) and holds seed counts.

mod board;
pub mod layout;
mod pit;

pub use board::Board;
pub use layout::{PITS_PER_SIDE, PIT_COUNT};
pub use pit::Pit;
