//! Material-based position evaluation.

use draughts_core::{Gamestate, Rank, Team};

/// Material values: a man is worth 1, a king 3.
const MAN_VALUE: f64 = 1.0;
const KING_VALUE: f64 = 3.0;

/// Evaluates the position as a material balance from the fixed Team 1
/// perspective: positive favors Team 1, negative favors Team 2.
pub fn evaluate(state: &Gamestate) -> f64 {
    let mut score = 0.0;
    for piece in state.board.iter().flatten() {
        let value = match piece.rank {
            Rank::Man => MAN_VALUE,
            Rank::King => KING_VALUE,
        };
        match piece.team {
            Team::One => score += value,
            Team::Two => score -= value,
        }
    }
    score
}
