//! Tree Search Draughts Player
//!
//! Fixed-depth minimax over a persistent game tree with material evaluation
//! and a mean-of-children hedge just above the search horizon. There is no
//! pruning: the tree is expanded exhaustively to the scheduled depth, and
//! subtrees survive across turns by re-rooting at whichever full move was
//! actually played.

mod eval;
mod tree;

use std::collections::VecDeque;

use draughts_core::{FullMove, Gamestate, Move, Player};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::tree::SearchNode;

#[cfg(test)]
mod lib_tests;

// Re-export for direct use if needed
pub use eval::evaluate;

/// Weight of the mean-of-children term added to the minimax extreme just
/// above the evaluation horizon.
const DEFAULT_AVERAGE_WEIGHT: f64 = 0.1;

/// Depth schedule for one difficulty level: how many plies to look ahead,
/// keyed by how far into the game we are. Difficulties differ only in these
/// numbers; the search itself is identical.
#[derive(Debug, Clone, Copy)]
pub struct Difficulty {
    pub label: &'static str,
    pub initial_depth: u8,
    pub mid_depth: u8,
    pub late_depth: u8,
    pub mid_ply_threshold: u32,
    pub late_ply_threshold: u32,
}

impl Difficulty {
    pub fn easy() -> Self {
        Self {
            label: "easy",
            initial_depth: 1,
            mid_depth: 2,
            late_depth: 2,
            mid_ply_threshold: 8,
            late_ply_threshold: 40,
        }
    }

    pub fn medium() -> Self {
        Self {
            label: "medium",
            initial_depth: 2,
            mid_depth: 3,
            late_depth: 3,
            mid_ply_threshold: 8,
            late_ply_threshold: 40,
        }
    }

    pub fn hard() -> Self {
        Self {
            label: "hard",
            initial_depth: 3,
            mid_depth: 4,
            late_depth: 5,
            mid_ply_threshold: 8,
            late_ply_threshold: 40,
        }
    }

    /// Look-ahead depth for the given point in the game: shallower while the
    /// opening is still symmetric, deeper once play has developed.
    pub fn depth_for(&self, ply_count: u32) -> u8 {
        if ply_count < self.mid_ply_threshold {
            self.initial_depth
        } else if ply_count < self.late_ply_threshold {
            self.mid_depth
        } else {
            self.late_depth
        }
    }
}

/// A draughts player that searches a persistent tree of future states.
///
/// Because the match runner requests one component move per call, a chosen
/// multi-jump is streamed back one jump at a time: the remaining components
/// wait in `pending` and the tree re-roots once the last one is emitted.
pub struct MinimaxPlayer {
    name: String,
    difficulty: Difficulty,
    average_weight: f64,
    tree: Option<SearchNode>,
    pending: VecDeque<Move>,
    chosen: Option<FullMove>,
    rng: StdRng,
}

impl MinimaxPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::seeded(difficulty, rand::thread_rng().gen())
    }

    /// Reproducible variant: ties between equal-best moves are broken by a
    /// seeded generator.
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            name: format!("tree search ({})", difficulty.label),
            difficulty,
            average_weight: DEFAULT_AVERAGE_WEIGHT,
            tree: None,
            pending: VecDeque::new(),
            chosen: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn with_average_weight(mut self, weight: f64) -> Self {
        self.average_weight = weight;
        self
    }

    /// Carries the tree over into the new turn: the child reached by the
    /// opponent's full move becomes the root, or a fresh root is built from
    /// the live state when no subtree is available.
    fn reroot(&mut self, state: &Gamestate, last_opponent_move: Option<&FullMove>) {
        let carried = match (self.tree.take(), last_opponent_move) {
            (Some(root), Some(played)) => root.into_child(played),
            _ => None,
        };
        self.tree = Some(carried.unwrap_or_else(|| SearchNode::new(state.clone())));
    }

    fn reroot_at_own(&mut self, full_move: &FullMove) {
        if let Some(root) = self.tree.take() {
            self.tree = root.into_child(full_move);
        }
    }
}

impl Player for MinimaxPlayer {
    fn next_move(&mut self, state: &Gamestate, last_opponent_move: Option<&FullMove>) -> Move {
        // Mid-chain: keep streaming the move chosen on the first call.
        if let Some(mv) = self.pending.pop_front() {
            if self.pending.is_empty() {
                let chosen = self
                    .chosen
                    .take()
                    .expect("mid-chain state carries the chosen full move");
                self.reroot_at_own(&chosen);
            }
            return mv;
        }

        self.reroot(state, last_opponent_move);
        let depth = self.difficulty.depth_for(state.ply_count);
        let root = self.tree.as_mut().expect("reroot always leaves a root");
        root.search(depth, self.average_weight);

        let candidates = root.best_moves();
        let chosen = candidates
            .choose(&mut self.rng)
            .expect("asked to move in a finished game")
            .clone();

        if chosen.len() > 1 {
            let first = chosen[0];
            self.pending = chosen[1..].iter().copied().collect();
            self.chosen = Some(chosen);
            first
        } else {
            let mv = chosen[0];
            self.reroot_at_own(&chosen);
            mv
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        self.tree = None;
        self.pending.clear();
        self.chosen = None;
    }
}
