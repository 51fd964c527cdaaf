//! The authoritative game state machine: board contents, whose turn it is,
//! pending multi-jump continuation, and the counters that decide draws.

use crate::error::MoveError;
use crate::geometry::{jump_path, target_position};
use crate::types::{row_of, Direction, FullMove, Move, Piece, Rank, Team, BOARD_SQUARES};

/// Plies without a capture after which the game is drawn (40 full turns).
pub const NO_CAPTURE_DRAW_PLIES: u32 = 80;

/// Terminal result of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Win(Team),
    Draw,
}

#[derive(Clone, Debug)]
pub struct Gamestate {
    pub board: [Option<Piece>; 32],
    pub turn: Team,
    /// Square a piece just captured from and must keep jumping from, if any.
    pub continuation: Option<u8>,
    /// Completed plies (one side's full move each).
    pub ply_count: u32,
    /// Plies since the last capture.
    pub plys_since_capture: u32,
    /// The most recently completed full move.
    pub last_full_move: Option<FullMove>,
    /// Capture components of the turn in progress, waiting for the chain to
    /// end.
    chain: Vec<Move>,
}

impl Gamestate {
    /// Standard initial layout: twelve Team 1 men on squares 0-11, twelve
    /// Team 2 men on squares 20-31, Team 1 to move.
    pub fn new() -> Self {
        let mut board = [None; 32];
        for sq in 0..12 {
            board[sq] = Some(Piece::man(Team::One));
        }
        for sq in 20..32 {
            board[sq] = Some(Piece::man(Team::Two));
        }
        Gamestate {
            board,
            turn: Team::One,
            continuation: None,
            ply_count: 0,
            plys_since_capture: 0,
            last_full_move: None,
            chain: Vec::new(),
        }
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }

    /// True iff the piece on `mv.pos` can jump in `mv.dir` right now: an
    /// opposing piece one step away, an empty landing square two steps away,
    /// and a direction the piece is allowed to move in.
    pub fn is_jump(&self, mv: Move) -> bool {
        if mv.pos >= BOARD_SQUARES {
            return false;
        }
        let piece = match self.piece_at(mv.pos) {
            Some(p) => p,
            None => return false,
        };
        if !piece.directions().contains(&mv.dir) {
            return false;
        }
        match jump_path(mv.pos, mv.dir) {
            Some((over, landing)) => {
                matches!(self.piece_at(over), Some(p) if p.team != piece.team)
                    && self.piece_at(landing).is_none()
            }
            None => false,
        }
    }

    /// True iff the piece on `pos` has at least one jump available.
    pub fn can_jump(&self, pos: u8) -> bool {
        if pos >= BOARD_SQUARES {
            return false;
        }
        match self.piece_at(pos) {
            Some(piece) => piece
                .directions()
                .iter()
                .any(|&dir| self.is_jump(Move::new(pos, dir))),
            None => false,
        }
    }

    fn side_can_jump(&self, team: Team) -> bool {
        (0..BOARD_SQUARES)
            .any(|sq| matches!(self.piece_at(sq), Some(p) if p.team == team) && self.can_jump(sq))
    }

    /// Full legality check for `mv` in the current state.
    ///
    /// The continuation constraint is tested before the whole-board capture
    /// scan: mid-chain, the only legal moves are further jumps by the piece
    /// that just captured.
    pub fn validate(&self, mv: Move) -> Result<(), MoveError> {
        if mv.pos >= BOARD_SQUARES {
            return Err(MoveError::PositionOutOfRange(mv.pos));
        }
        let piece = match self.piece_at(mv.pos) {
            Some(p) if p.team == self.turn => p,
            _ => return Err(MoveError::WrongSide(mv.pos)),
        };
        if let Some(sq) = self.continuation {
            if sq != mv.pos {
                return Err(MoveError::MustContinueFrom(sq));
            }
        }
        if self.is_jump(mv) {
            return Ok(());
        }
        if self.side_can_jump(self.turn) {
            return Err(MoveError::CaptureCompulsory);
        }
        if !piece.directions().contains(&mv.dir) {
            return Err(MoveError::WrongDirection);
        }
        match target_position(mv.pos, mv.dir) {
            Some(target) if self.piece_at(target).is_none() => Ok(()),
            _ => Err(MoveError::DestinationBlocked),
        }
    }

    pub fn is_valid(&self, mv: Move) -> bool {
        self.validate(mv).is_ok()
    }

    /// Every legal component move, scanned in (position, direction) order.
    pub fn valid_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for pos in 0..BOARD_SQUARES {
            for dir in Direction::ALL {
                let mv = Move::new(pos, dir);
                if self.is_valid(mv) {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    /// Every maximal move chain available this turn: a single non-capturing
    /// move, a single jump with no follow-up, or a multi-jump sequence
    /// played out on private clones until its continuation ends.
    pub fn full_moves(&self) -> Vec<FullMove> {
        let mut chains = Vec::new();
        for mv in self.valid_moves() {
            if self.is_jump(mv) {
                let mut next = self.clone();
                next.update(mv);
                if next.continuation.is_some() {
                    for rest in next.full_moves() {
                        let mut chain = Vec::with_capacity(rest.len() + 1);
                        chain.push(mv);
                        chain.extend(rest);
                        chains.push(chain);
                    }
                    continue;
                }
            }
            chains.push(vec![mv]);
        }
        chains
    }

    /// Applies a move the caller has already validated. Passing an invalid
    /// move is a programming error: this method panics or silently corrupts
    /// the state rather than reporting.
    pub fn update(&mut self, mv: Move) {
        let piece = self.piece_at(mv.pos).expect("no piece on move origin");
        if self.is_jump(mv) {
            let (over, landing) = jump_path(mv.pos, mv.dir).expect("jump squares off board");
            self.board[over as usize] = None;
            self.board[mv.pos as usize] = None;
            let promotes = piece.rank == Rank::Man && row_of(landing) == piece.team.promotion_row();
            self.board[landing as usize] = Some(if promotes { piece.promoted() } else { piece });
            self.chain.push(mv);
            // Crowning always ends the turn, even with another jump available.
            if !promotes && self.can_jump(landing) {
                self.continuation = Some(landing);
            } else {
                self.finish_capture_turn();
            }
        } else {
            let target = target_position(mv.pos, mv.dir).expect("move target off board");
            self.board[mv.pos as usize] = None;
            let promotes = piece.rank == Rank::Man && row_of(target) == piece.team.promotion_row();
            self.board[target as usize] = Some(if promotes { piece.promoted() } else { piece });
            self.last_full_move = Some(vec![mv]);
            self.plys_since_capture += 1;
            self.end_turn();
        }
    }

    fn finish_capture_turn(&mut self) {
        self.last_full_move = Some(std::mem::take(&mut self.chain));
        self.plys_since_capture = 0;
        self.end_turn();
    }

    fn end_turn(&mut self) {
        self.continuation = None;
        self.ply_count += 1;
        self.turn = self.turn.other();
    }

    /// Terminal check: a side left without a legal move loses; otherwise 40
    /// full turns without a capture is a draw. The no-move check runs first.
    pub fn game_over(&self) -> Option<GameOutcome> {
        if self.valid_moves().is_empty() {
            return Some(GameOutcome::Win(self.turn.other()));
        }
        if self.plys_since_capture >= NO_CAPTURE_DRAW_PLIES {
            return Some(GameOutcome::Draw);
        }
        None
    }
}

impl Default for Gamestate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "gamestate_tests.rs"]
mod gamestate_tests;
