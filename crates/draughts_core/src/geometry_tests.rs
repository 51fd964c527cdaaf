use super::*;
use crate::types::Direction;

/// Independent model of the board geometry: expand a compressed index to
/// (row, column) on the full 8x8 checkerboard, step diagonally, and map
/// back. Even rows hold the odd columns, odd rows the even columns.
fn model(pos: u8, dir: Direction) -> Option<u8> {
    let row = (pos / 4) as i8;
    let col = (pos % 4) as i8;
    let c8 = if row % 2 == 0 { 2 * col + 1 } else { 2 * col };
    let (dr, dc) = match dir {
        Direction::NorthEast => (-1, 1),
        Direction::NorthWest => (-1, -1),
        Direction::SouthWest => (1, -1),
        Direction::SouthEast => (1, 1),
    };
    let (r2, c2) = (row + dr, c8 + dc);
    if !(0..8).contains(&r2) || !(0..8).contains(&c2) {
        return None;
    }
    let col2 = if r2 % 2 == 0 { (c2 - 1) / 2 } else { c2 / 2 };
    Some((r2 * 4 + col2) as u8)
}

#[test]
fn matches_checkerboard_geometry_for_all_squares() {
    for pos in 0..32 {
        for dir in Direction::ALL {
            assert_eq!(
                target_position(pos, dir),
                model(pos, dir),
                "square {} direction {}",
                pos,
                dir
            );
        }
    }
}

#[test]
fn top_row_blocks_northward_steps() {
    for pos in 0..4 {
        assert_eq!(target_position(pos, Direction::NorthEast), None);
        assert_eq!(target_position(pos, Direction::NorthWest), None);
    }
    assert_eq!(target_position(0, Direction::SouthWest), Some(4));
    assert_eq!(target_position(0, Direction::SouthEast), Some(5));
}

#[test]
fn bottom_row_blocks_southward_steps() {
    for pos in 28..32 {
        assert_eq!(target_position(pos, Direction::SouthWest), None);
        assert_eq!(target_position(pos, Direction::SouthEast), None);
    }
    assert_eq!(target_position(28, Direction::NorthEast), Some(24));
    assert_eq!(target_position(28, Direction::NorthWest), None);
}

#[test]
fn row_parity_changes_the_offset() {
    // Even row: square 9 sits right of square 13's column.
    assert_eq!(target_position(9, Direction::SouthWest), Some(13));
    assert_eq!(target_position(9, Direction::SouthEast), Some(14));
    // Odd row: square 13 sits left of square 17's column.
    assert_eq!(target_position(13, Direction::SouthWest), Some(16));
    assert_eq!(target_position(13, Direction::SouthEast), Some(17));
}

#[test]
fn edge_columns_block_crossing_directions() {
    // Column 3 of an even row has no eastward neighbors.
    assert_eq!(target_position(11, Direction::NorthEast), None);
    assert_eq!(target_position(11, Direction::SouthEast), None);
    assert_eq!(target_position(11, Direction::NorthWest), Some(7));
    assert_eq!(target_position(11, Direction::SouthWest), Some(15));
    // Column 0 of an odd row has no westward neighbors.
    assert_eq!(target_position(4, Direction::NorthWest), None);
    assert_eq!(target_position(4, Direction::SouthWest), None);
    assert_eq!(target_position(4, Direction::NorthEast), Some(0));
    assert_eq!(target_position(4, Direction::SouthEast), Some(8));
}

#[test]
fn positions_off_the_board_have_no_neighbors() {
    for dir in Direction::ALL {
        assert_eq!(target_position(32, dir), None);
        assert_eq!(target_position(255, dir), None);
    }
}

#[test]
fn jump_path_returns_both_squares() {
    assert_eq!(jump_path(0, Direction::SouthEast), Some((5, 9)));
    assert_eq!(jump_path(1, Direction::SouthWest), Some((5, 8)));
    assert_eq!(jump_path(28, Direction::NorthEast), Some((24, 21)));
    // A jump whose landing square would leave the board does not exist.
    assert_eq!(jump_path(3, Direction::SouthEast), None);
    assert_eq!(jump_path(8, Direction::SouthWest), None);
}
