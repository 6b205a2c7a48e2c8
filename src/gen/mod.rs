//! Seeded puzzle generation.

pub mod puzzle;
pub mod rng;

pub use puzzle::{generate, Difficulty, Puzzle};
pub use rng::GameRng;
