pub mod error;
pub mod gamestate;
pub mod geometry;
pub mod render;
pub mod types;

// Re-export core game logic (not player-specific)
pub use error::*;
pub use gamestate::*;
pub use geometry::*;
pub use types::*;

// =============================================================================
// Player trait — implemented by all move suppliers (random, tree search, ...)
// =============================================================================

/// Trait that all draughts players must implement.
///
/// The match runner owns the live [`Gamestate`] and asks the side to move
/// for one component move at a time, so a multi-jump turn results in several
/// calls to the same player. A player is only asked to move while the game
/// is not over.
pub trait Player: Send {
    /// Choose the next component move.
    ///
    /// # Arguments
    /// * `state` - The live game state (read access only)
    /// * `last_opponent_move` - The opponent's most recently completed full
    ///   move, if any
    fn next_move(&mut self, state: &Gamestate, last_opponent_move: Option<&FullMove>) -> Move;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Reset internal state for a new game (a search player discards its
    /// tree here).
    fn new_game(&mut self) {}

    /// Called when the move just submitted was rejected. The game state was
    /// not mutated and the same player will be asked again.
    fn notify_invalid(&mut self, _error: &MoveError) {}
}
