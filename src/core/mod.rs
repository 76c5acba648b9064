//! Shared building blocks: deterministic randomness.
//!
//! Every random choice in either game (ace values, draws, fallback moves)
//! goes through `GameRng` so runs can be replayed from a seed.

pub mod rng;

pub use rng::GameRng;
