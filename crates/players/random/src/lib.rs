//! Random Move Draughts Player
//!
//! A player that selects uniformly at random from all currently valid
//! component moves. Useful for:
//! - Exercising the match runner without search cost
//! - Baseline comparisons (any real player should easily beat this)
//! - Stress testing move generation

use draughts_core::{FullMove, Gamestate, Move, Player};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};


/// A draughts player that plays random legal moves.
///
/// No evaluation at all: every call picks one of the component moves the
/// rules currently allow, so forced captures and continuations are honored
/// automatically.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self::seeded(rand::thread_rng().gen())
    }

    /// Reproducible variant for tests and seeded matches.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn next_move(&mut self, state: &Gamestate, _last_opponent_move: Option<&FullMove>) -> Move {
        *state
            .valid_moves()
            .choose(&mut self.rng)
            .expect("asked to move in a finished game")
    }

    fn name(&self) -> &str {
        "random"
    }
}
