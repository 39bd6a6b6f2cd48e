//! Move representation and coordinate notation

use crate::types::{PieceKind, Position, PositionParseError};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error parsing [`Move`] from coordinate notation
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// The string is not four or five characters long
    #[error("bad string length")]
    BadLength,
    /// Source square cannot be parsed
    #[error("bad source: {0}")]
    BadSrc(PositionParseError),
    /// Destination square cannot be parsed
    #[error("bad destination: {0}")]
    BadDst(PositionParseError),
    /// Promotion character is not one of `q`, `r`, `n`, `b`
    #[error("bad promote char {0:?}")]
    BadPromote(char),
}

/// A move from one square to another, with an optional promotion kind
///
/// The promotion kind is present only on pawn moves landing on the far rank;
/// such moves come out of move generation with the kind already attached, one
/// move per promotion choice.
///
/// Moves compare by value over all three fields.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    src: Position,
    dst: Position,
    promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(src: Position, dst: Position) -> Move {
        Move {
            src,
            dst,
            promotion: None,
        }
    }

    /// Creates a move carrying a promotion kind
    ///
    /// # Panics
    ///
    /// Panics unless `kind` is one of the four promotion choices: queen,
    /// rook, knight or bishop. A pawn cannot promote to a king or stay a
    /// pawn, and such a move would not survive coordinate notation either.
    #[inline]
    pub const fn with_promotion(src: Position, dst: Position, kind: PieceKind) -> Move {
        assert!(
            matches!(
                kind,
                PieceKind::Queen | PieceKind::Rook | PieceKind::Knight | PieceKind::Bishop
            ),
            "promotion kind must be queen, rook, knight or bishop"
        );
        Move {
            src,
            dst,
            promotion: Some(kind),
        }
    }

    #[inline]
    pub const fn src(&self) -> Position {
        self.src
    }

    #[inline]
    pub const fn dst(&self) -> Position {
        self.dst
    }

    #[inline]
    pub const fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.src, self.dst)?;
        match self.promotion {
            Some(PieceKind::Queen) => write!(f, "q")?,
            Some(PieceKind::Rook) => write!(f, "r")?,
            Some(PieceKind::Knight) => write!(f, "n")?,
            Some(PieceKind::Bishop) => write!(f, "b")?,
            _ => {}
        };
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Move, Self::Err> {
        if !matches!(s.len(), 4 | 5) {
            return Err(MoveParseError::BadLength);
        }
        let src = Position::from_str(&s[0..2]).map_err(MoveParseError::BadSrc)?;
        let dst = Position::from_str(&s[2..4]).map_err(MoveParseError::BadDst)?;
        let promotion = if s.len() == 5 {
            Some(match s.as_bytes()[4] {
                b'q' => PieceKind::Queen,
                b'r' => PieceKind::Rook,
                b'n' => PieceKind::Knight,
                b'b' => PieceKind::Bishop,
                b => return Err(MoveParseError::BadPromote(b as char)),
            })
        } else {
            None
        };
        Ok(Move {
            src,
            dst,
            promotion,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_str() {
        let mv = Move::new(Position::new(2, 5), Position::new(4, 5));
        assert_eq!(mv.to_string(), "e2e4".to_string());
        assert_eq!(Move::from_str("e2e4"), Ok(mv));

        let mv = Move::with_promotion(Position::new(7, 1), Position::new(8, 1), PieceKind::Queen);
        assert_eq!(mv.to_string(), "a7a8q".to_string());
        assert_eq!(Move::from_str("a7a8q"), Ok(mv));

        for (s, kind) in [
            ("h7h8q", PieceKind::Queen),
            ("h7h8r", PieceKind::Rook),
            ("h7h8n", PieceKind::Knight),
            ("h7h8b", PieceKind::Bishop),
        ] {
            let mv = Move::from_str(s).unwrap();
            assert_eq!(mv.promotion(), Some(kind));
            assert_eq!(mv.to_string(), s.to_string());
        }
    }

    #[test]
    fn test_move_str_errors() {
        assert_eq!(Move::from_str("e2e"), Err(MoveParseError::BadLength));
        assert_eq!(Move::from_str("e2e4e5"), Err(MoveParseError::BadLength));
        assert_eq!(
            Move::from_str("i2e4"),
            Err(MoveParseError::BadSrc(
                PositionParseError::UnexpectedFileChar('i')
            ))
        );
        assert_eq!(
            Move::from_str("e2e9"),
            Err(MoveParseError::BadDst(
                PositionParseError::UnexpectedRankChar('9')
            ))
        );
        assert_eq!(Move::from_str("e7e8k"), Err(MoveParseError::BadPromote('k')));
    }

    #[test]
    #[should_panic(expected = "promotion kind must be queen, rook, knight or bishop")]
    fn test_promotion_to_king_is_rejected() {
        Move::with_promotion(Position::new(7, 1), Position::new(8, 1), PieceKind::King);
    }

    #[test]
    fn test_move_equality() {
        let plain = Move::new(Position::new(7, 1), Position::new(8, 1));
        let promo = Move::with_promotion(Position::new(7, 1), Position::new(8, 1), PieceKind::Rook);
        assert_ne!(plain, promo);
        assert_ne!(
            promo,
            Move::with_promotion(Position::new(7, 1), Position::new(8, 1), PieceKind::Queen)
        );
    }
}
