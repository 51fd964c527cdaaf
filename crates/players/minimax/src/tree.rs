//! The owned game tree the player searches over.
//!
//! Every node holds a private clone of a hypothetical future state, one
//! child per full move. The tree persists across turns: after each full
//! move actually played, the matching child becomes the new root and every
//! sibling subtree is dropped.

use draughts_core::{FullMove, Gamestate, Team};

use crate::eval::evaluate;

/// Score of a state whose side to move has no legal reply, from the Team 1
/// perspective. Far outside the reachable material range.
pub(crate) const WIN_SCORE: f64 = 1000.0;

/// One hypothetical future state and the subtree below it.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub state: Gamestate,
    pub children: Vec<(FullMove, SearchNode)>,
    pub expanded: bool,
    pub terminal: bool,
    pub score: f64,
}

impl SearchNode {
    pub fn new(state: Gamestate) -> Self {
        Self {
            state,
            children: Vec::new(),
            expanded: false,
            terminal: false,
            score: 0.0,
        }
    }

    /// Generates the children once, one per full move, each built by playing
    /// the chain out on a clone. A node whose state offers no full moves is
    /// terminal: the side to move there has lost.
    fn expand(&mut self) {
        if self.expanded {
            return;
        }
        for full_move in self.state.full_moves() {
            let mut next = self.state.clone();
            for mv in &full_move {
                next.update(*mv);
            }
            self.children.push((full_move, SearchNode::new(next)));
        }
        self.terminal = self.children.is_empty();
        self.expanded = true;
    }

    /// Expands to `depth` plies below this node and backpropagates scores.
    ///
    /// Leaves at the horizon take the material balance and terminal nodes a
    /// win score signed against the side out of moves. Interior nodes take
    /// the best child score for their side to move (Team 1 max, Team 2 min);
    /// directly above the horizon the children's mean, scaled by
    /// `average_weight`, is added to that extreme so a single best or worst
    /// continuation does not dominate the boundary estimate.
    ///
    /// Subtrees kept from earlier turns are rescored, never rebuilt.
    pub fn search(&mut self, depth: u8, average_weight: f64) -> f64 {
        if depth > 0 {
            self.expand();
        }
        if self.terminal {
            self.score = match self.state.turn {
                Team::One => -WIN_SCORE,
                Team::Two => WIN_SCORE,
            };
            return self.score;
        }
        if depth == 0 {
            self.score = evaluate(&self.state);
            return self.score;
        }

        let mut sum = 0.0;
        let mut best = match self.state.turn {
            Team::One => f64::NEG_INFINITY,
            Team::Two => f64::INFINITY,
        };
        for (_, child) in &mut self.children {
            let score = child.search(depth - 1, average_weight);
            sum += score;
            best = match self.state.turn {
                Team::One => best.max(score),
                Team::Two => best.min(score),
            };
        }

        self.score = if depth == 1 {
            best + average_weight * sum / self.children.len() as f64
        } else {
            best
        };
        self.score
    }

    /// All full moves whose child score ties the best score for this node's
    /// side to move.
    pub fn best_moves(&self) -> Vec<FullMove> {
        let scores = self.children.iter().map(|(_, child)| child.score);
        let best = match self.state.turn {
            Team::One => scores.fold(f64::NEG_INFINITY, f64::max),
            Team::Two => scores.fold(f64::INFINITY, f64::min),
        };
        self.children
            .iter()
            .filter(|(_, child)| child.score == best)
            .map(|(full_move, _)| full_move.clone())
            .collect()
    }

    /// Takes ownership of the child reached by `full_move`, dropping this
    /// node and every sibling subtree.
    pub fn into_child(mut self, full_move: &FullMove) -> Option<SearchNode> {
        let idx = self
            .children
            .iter()
            .position(|(candidate, _)| candidate == full_move)?;
        Some(self.children.swap_remove(idx).1)
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tree_tests;
