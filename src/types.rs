//! Core value types: teams, piece kinds, pieces and board positions

use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

/// Error parsing [`Position`] from algebraic notation
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PositionParseError {
    /// File character is not in `a..=h`
    #[error("unexpected file char {0:?}")]
    UnexpectedFileChar(char),
    /// Rank character is not in `1..=8`
    #[error("unexpected rank char {0:?}")]
    UnexpectedRankChar(char),
    /// The string is not exactly two characters long
    #[error("invalid string length")]
    BadLength,
}

/// Error parsing [`Team`] from its one-letter form
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum TeamParseError {
    /// Character is neither `w` nor `b`
    #[error("unexpected team char {0:?}")]
    UnexpectedChar(char),
    /// The string is not exactly one character long
    #[error("invalid string length")]
    BadLength,
}

/// One of the two sides in a chess game
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Team {
    White = 0,
    Black = 1,
}

impl Team {
    /// Returns the opposing team
    #[inline]
    pub const fn opponent(&self) -> Team {
        match *self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Returns the row delta of a single pawn push for this team
    ///
    /// White pawns move toward increasing rows, Black pawns toward decreasing
    /// ones.
    #[inline]
    pub const fn pawn_direction(&self) -> i8 {
        match *self {
            Team::White => 1,
            Team::Black => -1,
        }
    }

    /// Returns the back rank where this team's pieces start
    #[inline]
    pub const fn home_rank(&self) -> u8 {
        match *self {
            Team::White => 1,
            Team::Black => 8,
        }
    }

    /// Returns the rank where this team's pawns start
    ///
    /// A pawn may make a double push only from this rank.
    #[inline]
    pub const fn pawn_rank(&self) -> u8 {
        match *self {
            Team::White => 2,
            Team::Black => 7,
        }
    }

    /// Returns the rank on which this team's pawns promote
    #[inline]
    pub const fn promotion_rank(&self) -> u8 {
        match *self {
            Team::White => 8,
            Team::Black => 1,
        }
    }

    pub fn as_char(&self) -> char {
        match *self {
            Team::White => 'w',
            Team::Black => 'b',
        }
    }

    pub fn from_char(c: char) -> Option<Team> {
        match c {
            'w' => Some(Team::White),
            'b' => Some(Team::Black),
            _ => None,
        }
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Team {
    type Err = TeamParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 1 {
            return Err(TeamParseError::BadLength);
        }
        let ch = s.as_bytes()[0] as char;
        Team::from_char(ch).ok_or(TeamParseError::UnexpectedChar(ch))
    }
}

/// Kind of a chess piece, without team affiliation
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    King = 0,
    Queen = 1,
    Bishop = 2,
    Knight = 3,
    Rook = 4,
    Pawn = 5,
}

impl PieceKind {
    /// Returns the lowercase letter for this kind
    ///
    /// The knight is rendered as `n`, keeping `k` for the king.
    pub fn as_char(&self) -> char {
        match *self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Rook => 'r',
            PieceKind::Pawn => 'p',
        }
    }

    /// Parses a kind from its lowercase letter
    ///
    /// Accepts both `n` and `h` for the knight, as older board fixtures use
    /// `h` (for "horse") there.
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c {
            'k' => Some(PieceKind::King),
            'q' => Some(PieceKind::Queen),
            'b' => Some(PieceKind::Bishop),
            'n' | 'h' => Some(PieceKind::Knight),
            'r' => Some(PieceKind::Rook),
            'p' => Some(PieceKind::Pawn),
            _ => None,
        }
    }
}

/// A chess piece: a team plus a piece kind
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    team: Team,
    kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(team: Team, kind: PieceKind) -> Piece {
        Piece { team, kind }
    }

    #[inline]
    pub const fn team(&self) -> Team {
        self.team
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Returns the same piece with its kind replaced
    ///
    /// Promotion is the only way a piece ever changes kind.
    #[inline]
    pub const fn promoted(&self, kind: PieceKind) -> Piece {
        Piece {
            team: self.team,
            kind,
        }
    }

    /// Returns the glyph for this piece: uppercase for White, lowercase for
    /// Black
    pub fn as_char(&self) -> char {
        let c = self.kind.as_char();
        match self.team {
            Team::White => c.to_ascii_uppercase(),
            Team::Black => c,
        }
    }

    /// Parses a piece from its glyph; the letter case selects the team
    pub fn from_char(c: char) -> Option<Piece> {
        let team = if c.is_ascii_uppercase() {
            Team::White
        } else {
            Team::Black
        };
        let kind = PieceKind::from_char(c.to_ascii_lowercase())?;
        Some(Piece::new(team, kind))
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

/// A square on the board, as a 1-indexed (row, column) pair
///
/// Row 1 is White's back rank, row 8 is Black's. Column 1 is the `a` file.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position from 1-indexed row and column
    ///
    /// # Panics
    ///
    /// Panics unless both `row` and `col` are between 1 and 8.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Position {
        assert!(
            1 <= row && row <= 8 && 1 <= col && col <= 8,
            "row and column must be between 1 and 8"
        );
        Position { row, col }
    }

    /// Creates a position, returning `None` if either index is out of range
    #[inline]
    pub const fn try_new(row: u8, col: u8) -> Option<Position> {
        if 1 <= row && row <= 8 && 1 <= col && col <= 8 {
            Some(Position { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(&self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(&self) -> u8 {
        self.col
    }

    /// Shifts the position by the given deltas, returning `None` if the
    /// result would fall off the board
    #[inline]
    pub fn offset(&self, drow: i8, dcol: i8) -> Option<Position> {
        let row = (self.row as i16 + drow as i16) as u8;
        let col = (self.col as i16 + dcol as i16) as u8;
        Position::try_new(row, col)
    }

    /// Iterates over all 64 squares, row by row from White's side
    pub fn iter() -> impl Iterator<Item = Position> {
        (1_u8..=8_u8).flat_map(|row| (1_u8..=8_u8).map(move |col| Position { row, col }))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "{}{}",
            (b'a' + self.col - 1) as char,
            (b'0' + self.row) as char
        )
    }
}

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 {
            return Err(PositionParseError::BadLength);
        }
        let bytes = s.as_bytes();
        let col = match bytes[0] {
            b @ b'a'..=b'h' => b - b'a' + 1,
            b => return Err(PositionParseError::UnexpectedFileChar(b as char)),
        };
        let row = match bytes[1] {
            b @ b'1'..=b'8' => b - b'0',
            b => return Err(PositionParseError::UnexpectedRankChar(b as char)),
        };
        Ok(Position { row, col })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team() {
        assert_eq!(Team::White.opponent(), Team::Black);
        assert_eq!(Team::Black.opponent(), Team::White);
        assert_eq!(Team::White.pawn_direction(), 1);
        assert_eq!(Team::Black.pawn_direction(), -1);
        assert_eq!(Team::White.home_rank(), 1);
        assert_eq!(Team::Black.home_rank(), 8);
        assert_eq!(Team::White.pawn_rank(), 2);
        assert_eq!(Team::Black.pawn_rank(), 7);
        assert_eq!(Team::White.promotion_rank(), 8);
        assert_eq!(Team::Black.promotion_rank(), 1);
        assert_eq!(Team::from_str("w"), Ok(Team::White));
        assert_eq!(Team::from_str("b"), Ok(Team::Black));
        assert_eq!(Team::from_str("x"), Err(TeamParseError::UnexpectedChar('x')));
        assert_eq!(Team::from_str("wb"), Err(TeamParseError::BadLength));
    }

    #[test]
    fn test_position() {
        let mut count = 0;
        for pos in Position::iter() {
            assert_eq!(pos, Position::new(pos.row(), pos.col()));
            count += 1;
        }
        assert_eq!(count, 64);

        assert_eq!(Position::try_new(0, 4), None);
        assert_eq!(Position::try_new(4, 9), None);
        assert_eq!(Position::try_new(8, 8), Some(Position::new(8, 8)));
    }

    #[test]
    fn test_position_offset() {
        let pos = Position::new(2, 2);
        assert_eq!(pos.offset(1, 0), Some(Position::new(3, 2)));
        assert_eq!(pos.offset(-1, -1), Some(Position::new(1, 1)));
        assert_eq!(pos.offset(-2, 0), None);
        assert_eq!(Position::new(8, 8).offset(0, 1), None);
        assert_eq!(Position::new(1, 1).offset(0, -1), None);
    }

    #[test]
    fn test_position_str() {
        assert_eq!(Position::new(1, 1).to_string(), "a1".to_string());
        assert_eq!(Position::new(4, 5).to_string(), "e4".to_string());
        assert_eq!(Position::from_str("a1"), Ok(Position::new(1, 1)));
        assert_eq!(Position::from_str("h8"), Ok(Position::new(8, 8)));
        assert_eq!(
            Position::from_str("i4"),
            Err(PositionParseError::UnexpectedFileChar('i'))
        );
        assert_eq!(
            Position::from_str("a9"),
            Err(PositionParseError::UnexpectedRankChar('9'))
        );
        assert_eq!(Position::from_str("a10"), Err(PositionParseError::BadLength));
    }

    #[test]
    fn test_piece_char() {
        for team in [Team::White, Team::Black] {
            for kind in [
                PieceKind::King,
                PieceKind::Queen,
                PieceKind::Bishop,
                PieceKind::Knight,
                PieceKind::Rook,
                PieceKind::Pawn,
            ] {
                let piece = Piece::new(team, kind);
                assert_eq!(Piece::from_char(piece.as_char()), Some(piece));
            }
        }
        assert_eq!(Piece::new(Team::White, PieceKind::Knight).as_char(), 'N');
        assert_eq!(Piece::new(Team::Black, PieceKind::King).as_char(), 'k');
        assert_eq!(
            Piece::from_char('h'),
            Some(Piece::new(Team::Black, PieceKind::Knight))
        );
        assert_eq!(
            Piece::from_char('H'),
            Some(Piece::new(Team::White, PieceKind::Knight))
        );
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::from_char(' '), None);
    }

    #[test]
    fn test_promoted() {
        let pawn = Piece::new(Team::White, PieceKind::Pawn);
        let queen = pawn.promoted(PieceKind::Queen);
        assert_eq!(queen.team(), Team::White);
        assert_eq!(queen.kind(), PieceKind::Queen);
    }
}
