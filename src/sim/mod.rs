//! Simulation helpers built on the rules engine.
//!
//! Random playouts and `perft` exercise the engine over many positions;
//! they serve as a test oracle for the rules and as a throughput
//! benchmark.

mod playout;

pub use playout::{batch_random_playouts, perft, random_playout, PlayoutResult, SimConfig};
