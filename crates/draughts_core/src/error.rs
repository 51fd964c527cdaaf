use thiserror::Error;

/// Why a submitted move was rejected.
///
/// Two classes are distinguished: a malformed move, whose position does not
/// name a board square at all, and a well-formed move that is illegal in the
/// current state. Validation never mutates the game, so both classes are
/// recoverable by submitting another move.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("position {0} is not a board square (valid squares are 0 to 31)")]
    PositionOutOfRange(u8),
    #[error("square {0} does not hold a piece of the side to move")]
    WrongSide(u8),
    #[error("the piece on square {0} just captured and must continue jumping")]
    MustContinueFrom(u8),
    #[error("a capture is available and capturing is compulsory")]
    CaptureCompulsory,
    #[error("men cannot move backwards")]
    WrongDirection,
    #[error("the destination square is off the board or occupied")]
    DestinationBlocked,
}

impl MoveError {
    /// True for shape errors, false for moves that are well-formed but
    /// illegal right now.
    pub fn is_malformed(self) -> bool {
        matches!(self, MoveError::PositionOutOfRange(_))
    }
}
