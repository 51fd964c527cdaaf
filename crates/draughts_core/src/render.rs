//! Text rendering of the board.

use std::fmt;

use crate::gamestate::Gamestate;

impl fmt::Display for Gamestate {
    /// One line per row of glyphs framed by `|`, with even rows offset half
    /// a square right of odd rows, followed by a status line naming whose
    /// turn it is or which square must continue jumping.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            for col in 0..4 {
                let glyph = self.board[row * 4 + col].map_or(' ', |p| p.glyph());
                if row % 2 == 0 {
                    write!(f, "| |{}", glyph)?;
                } else {
                    write!(f, "|{}| ", glyph)?;
                }
            }
            writeln!(f, "|")?;
        }
        match self.continuation {
            Some(sq) => write!(
                f,
                "Team {} must continue jumping from square {}",
                self.turn, sq
            ),
            None => write!(f, "Team {} to move", self.turn),
        }
    }
}
