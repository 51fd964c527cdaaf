use std::fmt;

/// Number of playable squares on the compressed board.
pub const BOARD_SQUARES: u8 = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Team {
    One,
    Two,
}

impl Team {
    pub fn other(self) -> Team {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }

    /// Row a man of this team is crowned on. Team 1 starts at the top of the
    /// board and advances toward row 7; Team 2 advances toward row 0.
    pub fn promotion_row(self) -> u8 {
        match self {
            Team::One => 7,
            Team::Two => 0,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::One => write!(f, "1"),
            Team::Two => write!(f, "2"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rank {
    Man,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub team: Team,
    pub rank: Rank,
}

impl Piece {
    pub fn man(team: Team) -> Self {
        Self {
            team,
            rank: Rank::Man,
        }
    }

    pub fn king(team: Team) -> Self {
        Self {
            team,
            rank: Rank::King,
        }
    }

    /// The crowned version of this piece.
    pub fn promoted(self) -> Self {
        Piece::king(self.team)
    }

    /// Directions this piece may move or jump in. Men are restricted to
    /// their two forward diagonals; kings use all four.
    pub fn directions(self) -> &'static [Direction] {
        match (self.rank, self.team) {
            (Rank::King, _) => &Direction::ALL,
            (Rank::Man, Team::One) => &[Direction::SouthWest, Direction::SouthEast],
            (Rank::Man, Team::Two) => &[Direction::NorthEast, Direction::NorthWest],
        }
    }

    /// Board glyph: `o`/`O` for Team 1 man/king, `x`/`X` for Team 2.
    pub fn glyph(self) -> char {
        match (self.team, self.rank) {
            (Team::One, Rank::Man) => 'o',
            (Team::One, Rank::King) => 'O',
            (Team::Two, Rank::Man) => 'x',
            (Team::Two, Rank::King) => 'X',
        }
    }
}

/// Diagonal directions with the board oriented row 0 at the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    NorthEast,
    NorthWest,
    SouthWest,
    SouthEast,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthWest,
        Direction::SouthEast,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::NorthEast => "NE",
            Direction::NorthWest => "NW",
            Direction::SouthWest => "SW",
            Direction::SouthEast => "SE",
        };
        write!(f, "{}", s)
    }
}

/// One component move: a piece on `pos` stepping or jumping toward `dir`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub pos: u8, // 0..32
    pub dir: Direction,
}

impl Move {
    pub fn new(pos: u8, dir: Direction) -> Self {
        Self { pos, dir }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pos, self.dir)
    }
}

/// A maximal chain of component moves making up one turn: a single
/// non-capturing move, a single jump, or a multi-jump capture sequence.
/// Never empty.
pub type FullMove = Vec<Move>;

// Helpers
pub fn row_of(sq: u8) -> u8 {
    sq / 4
}
pub fn col_of(sq: u8) -> u8 {
    sq % 4
}
