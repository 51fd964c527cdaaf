//! Position arithmetic over the 32-square compressed board.
//!
//! Only the dark squares are playable, so the 8x8 board collapses to 32
//! indices in reading order, four per row:
//!
//! ```text
//! | 0| 1| 2| 3|
//! | 4| 5| 6| 7|
//! | 8| 9|10|11|
//! |12|13|14|15|
//! |16|17|18|19|
//! |20|21|22|23|
//! |24|25|26|27|
//! |28|29|30|31|
//! ```
//!
//! Even rows sit half a square to the right of odd rows, so the same
//! diagonal step shifts the index differently depending on row parity.

use crate::types::{col_of, row_of, Direction, BOARD_SQUARES};

/// Returns the diagonal neighbor of `pos` in `dir`, or `None` when the step
/// would leave the board. Row 0 blocks the two northward directions, row 7
/// the two southward ones, and the outer column of each row blocks the
/// directions that would cross the edge. Knows nothing about occupancy.
pub fn target_position(pos: u8, dir: Direction) -> Option<u8> {
    if pos >= BOARD_SQUARES {
        return None;
    }
    let row = row_of(pos);
    let col = col_of(pos);
    if row % 2 == 0 {
        match dir {
            Direction::NorthEast if row == 0 || col == 3 => None,
            Direction::NorthEast => Some(pos - 3),
            Direction::NorthWest if row == 0 => None,
            Direction::NorthWest => Some(pos - 4),
            Direction::SouthWest => Some(pos + 4),
            Direction::SouthEast if col == 3 => None,
            Direction::SouthEast => Some(pos + 5),
        }
    } else {
        match dir {
            Direction::NorthEast => Some(pos - 4),
            Direction::NorthWest if col == 0 => None,
            Direction::NorthWest => Some(pos - 5),
            Direction::SouthWest if row == 7 || col == 0 => None,
            Direction::SouthWest => Some(pos + 3),
            Direction::SouthEast if row == 7 => None,
            Direction::SouthEast => Some(pos + 4),
        }
    }
}

/// The (jumped-over, landing) square pair for a jump from `pos` in `dir`,
/// when both squares exist.
pub fn jump_path(pos: u8, dir: Direction) -> Option<(u8, u8)> {
    let over = target_position(pos, dir)?;
    let landing = target_position(over, dir)?;
    Some((over, landing))
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod geometry_tests;
