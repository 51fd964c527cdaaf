use super::*;
use draughts_core::{Direction, Piece, Team};

fn empty_state() -> Gamestate {
    let mut state = Gamestate::new();
    state.board = [None; 32];
    state
}

/// Stepping the king to 9 loses it to the enemy king on 14; the other
/// three destinations are equally safe.
fn hanging_king_state() -> Gamestate {
    let mut state = empty_state();
    state.board[5] = Some(Piece::king(Team::One));
    state.board[14] = Some(Piece::king(Team::Two));
    state
}

/// A forced double jump for Team 1 (8 over 13 to 17, then over 21 to 24),
/// with a spare Team 2 man on 31 so the game continues afterwards.
fn double_jump_state() -> Gamestate {
    let mut state = empty_state();
    state.board[8] = Some(Piece::man(Team::One));
    state.board[13] = Some(Piece::man(Team::Two));
    state.board[21] = Some(Piece::man(Team::Two));
    state.board[31] = Some(Piece::man(Team::Two));
    state
}

#[test]
fn returns_a_legal_opening_move() {
    let mut player = MinimaxPlayer::seeded(Difficulty::easy(), 7);
    let state = Gamestate::new();

    let mv = player.next_move(&state, None);

    assert!(state.is_valid(mv));
}

#[test]
fn fixed_seed_selects_deterministically() {
    let state = hanging_king_state();
    for seed in 0..5 {
        let mut a = MinimaxPlayer::seeded(Difficulty::medium(), seed);
        let mut b = MinimaxPlayer::seeded(Difficulty::medium(), seed);
        assert_eq!(a.next_move(&state, None), b.next_move(&state, None));
    }
}

#[test]
fn never_selects_a_dominated_move() {
    let state = hanging_king_state();
    for seed in 0..20 {
        let mut player = MinimaxPlayer::seeded(Difficulty::medium(), seed);
        let mv = player.next_move(&state, None);
        assert_ne!(
            mv,
            Move::new(5, Direction::SouthEast),
            "seed {} hung the king",
            seed
        );
        assert!(state.is_valid(mv));
    }
}

#[test]
fn streams_a_multi_jump_one_component_per_call() {
    let mut state = double_jump_state();
    let mut player = MinimaxPlayer::seeded(Difficulty::medium(), 11);

    let first = player.next_move(&state, None);
    assert_eq!(first, Move::new(8, Direction::SouthEast));
    state.update(first);
    assert_eq!(state.continuation, Some(17));

    let second = player.next_move(&state, state.last_full_move.as_ref());
    assert_eq!(second, Move::new(17, Direction::SouthWest));
    assert!(state.is_valid(second));
    state.update(second);
    assert_eq!(state.turn, Team::Two);

    // Opponent replies; the player must pick up the new turn cleanly.
    let reply = Move::new(31, Direction::NorthWest);
    assert!(state.is_valid(reply));
    state.update(reply);

    let next = player.next_move(&state, state.last_full_move.as_ref());
    assert!(state.is_valid(next));
}

#[test]
fn new_game_discards_chain_and_tree() {
    let chain_state = double_jump_state();
    let mut player = MinimaxPlayer::seeded(Difficulty::medium(), 3);
    let first = player.next_move(&chain_state, None);
    assert_eq!(first, Move::new(8, Direction::SouthEast));

    player.new_game();

    let fresh = Gamestate::new();
    let mv = player.next_move(&fresh, None);
    assert!(fresh.is_valid(mv), "stale chain component leaked: {}", mv);
}
