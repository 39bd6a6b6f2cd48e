//! The board: an 8×8 grid of optional pieces, with no rule knowledge

use crate::moves::Move;
use crate::types::{Piece, PieceKind, Position, Team};

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

/// Error parsing [`Board`] from its pipe-delimited text form
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    /// The text does not contain exactly 8 lines
    #[error("expected 8 ranks, got {0}")]
    BadRankCount(usize),
    /// A line is not a well-formed run of 8 `|`-delimited cells
    #[error("malformed rank {0}")]
    MalformedRank(u8),
    /// A cell holds a character that is not a piece glyph or a space
    #[error("unexpected piece char {0:?}")]
    UnexpectedChar(char),
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8×8 chess board
///
/// The board owns piece placement and nothing else: it has no notion of whose
/// turn it is or whether a king is in check. Rule enforcement lives in
/// [`Game`](crate::game::Game).
///
/// `clone()` produces a fully independent deep copy, so a cloned board can be
/// mutated freely for speculative move evaluation without affecting the
/// original. Equality and hashing are structural, over the full grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

#[inline]
const fn index(pos: Position) -> usize {
    (pos.row() as usize - 1) * 8 + (pos.col() as usize - 1)
}

impl Board {
    /// Returns an empty board
    #[inline]
    pub const fn empty() -> Board {
        Board { cells: [None; 64] }
    }

    /// Returns a board with the standard 32-piece starting arrangement
    pub fn initial() -> Board {
        let mut res = Board::empty();
        for col in 1..=8 {
            res.put(Position::new(2, col), Piece::new(Team::White, PieceKind::Pawn));
            res.put(Position::new(7, col), Piece::new(Team::Black, PieceKind::Pawn));
        }
        for (team, row) in [(Team::White, 1), (Team::Black, 8)] {
            for (i, kind) in BACK_RANK.iter().enumerate() {
                res.put(Position::new(row, i as u8 + 1), Piece::new(team, *kind));
            }
        }
        res
    }

    /// Clears the board and places the standard starting arrangement
    #[inline]
    pub fn reset(&mut self) {
        *self = Board::initial();
    }

    /// Returns the piece at `pos`, if any
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.cells[index(pos)]
    }

    /// Places `piece` at `pos`, overwriting any occupant
    #[inline]
    pub fn put(&mut self, pos: Position, piece: Piece) {
        self.cells[index(pos)] = Some(piece);
    }

    /// Clears the cell at `pos`, returning its former occupant
    #[inline]
    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        self.cells[index(pos)].take()
    }

    /// Carries out `mv` mechanically: the occupant of the source square is
    /// placed on the destination square, capturing anything there
    ///
    /// No legality checking happens here; that is the caller's concern.
    ///
    /// # Panics
    ///
    /// Panics if the source square is empty. A move against an empty square
    /// is a contract violation by the caller, not an illegal move in the
    /// chess sense.
    pub fn apply_move(&mut self, mv: Move) {
        let piece = self
            .take(mv.src())
            .unwrap_or_else(|| panic!("no piece to move at {}", mv.src()));
        self.put(mv.dst(), piece);
    }

    /// Replaces the kind of the pawn standing at `pos` with `kind`
    ///
    /// Has no effect unless `pos` lies on the piece's promotion rank.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is empty.
    pub fn promote(&mut self, pos: Position, kind: PieceKind) {
        let piece = self
            .get(pos)
            .unwrap_or_else(|| panic!("no piece to promote at {}", pos));
        if pos.row() == piece.team().promotion_rank() {
            self.put(pos, piece.promoted(kind));
        }
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::empty()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for row in (1..=8).rev() {
            for col in 1..=8 {
                let glyph = match self.get(Position::new(row, col)) {
                    Some(piece) => piece.as_char(),
                    None => ' ',
                };
                write!(f, "|{}", glyph)?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Board, Self::Err> {
        let lines: Vec<&str> = s.lines().collect();
        if lines.len() != 8 {
            return Err(BoardParseError::BadRankCount(lines.len()));
        }
        let mut res = Board::empty();
        for (i, line) in lines.iter().enumerate() {
            // The first line of text is the top rank, i.e. row 8.
            let row = 8 - i as u8;
            let bytes = line.as_bytes();
            if bytes.len() != 17 || bytes.iter().step_by(2).any(|&b| b != b'|') {
                return Err(BoardParseError::MalformedRank(row));
            }
            for col in 1..=8 {
                let b = bytes[2 * col as usize - 1];
                if b == b' ' {
                    continue;
                }
                let piece = Piece::from_char(b as char)
                    .ok_or(BoardParseError::UnexpectedChar(b as char))?;
                res.put(Position::new(row, col), piece);
            }
        }
        Ok(res)
    }
}
