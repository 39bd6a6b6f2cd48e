//! Geometric move generation: where a piece could go, ignoring check
//!
//! Everything here is raw geometry with blocking and capture semantics. A
//! candidate produced by this module may still be illegal because it leaves
//! the mover's own king attacked; filtering that out is the job of
//! [`Game::valid_moves`](crate::game::Game::valid_moves).

use crate::board::Board;
use crate::moves::Move;
use crate::types::{PieceKind, Position, Team};

use std::ops::{Deref, DerefMut};
use std::slice;

use arrayvec::ArrayVec;

/// All 8 king/queen directions: orthogonals first, then diagonals
const OCTO_DIRS: [(i8, i8); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Promotion choices, in the order the candidates are generated
const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
];

/// A list of moves
///
/// 256 entries is more than any side can ever have on an 8×8 board, so the
/// backing [`ArrayVec`] never spills.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct MoveList(ArrayVec<Move, 256>);

impl MoveList {
    #[inline]
    pub fn new() -> MoveList {
        MoveList(ArrayVec::new())
    }
}

impl Deref for MoveList {
    type Target = ArrayVec<Move, 256>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveList {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a mut MoveList {
    type Item = &'a mut Move;
    type IntoIter = slice::IterMut<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

/// Walks from `src` along each direction in `dirs`, up to `max_steps` squares
///
/// A walk stops at the board edge or at the first occupied square, which is
/// included as a capture iff it holds an opposing piece.
fn gen_slider(
    board: &Board,
    team: Team,
    src: Position,
    dirs: &[(i8, i8)],
    max_steps: u8,
    out: &mut MoveList,
) {
    for &(drow, dcol) in dirs {
        let mut pos = src;
        for _ in 0..max_steps {
            pos = match pos.offset(drow, dcol) {
                Some(next) => next,
                None => break,
            };
            match board.get(pos) {
                None => out.push(Move::new(src, pos)),
                Some(blocker) => {
                    if blocker.team() != team {
                        out.push(Move::new(src, pos));
                    }
                    break;
                }
            }
        }
    }
}

fn gen_knight(board: &Board, team: Team, src: Position, out: &mut MoveList) {
    for &(drow, dcol) in &KNIGHT_JUMPS {
        let dst = match src.offset(drow, dcol) {
            Some(dst) => dst,
            None => continue,
        };
        // Jump semantics: only the landing square matters.
        if board.get(dst).map_or(true, |p| p.team() != team) {
            out.push(Move::new(src, dst));
        }
    }
}

/// Pushes a pawn move, fanning out into the four promotion choices when the
/// destination lies on the promotion rank
fn push_pawn_move(team: Team, src: Position, dst: Position, out: &mut MoveList) {
    if dst.row() == team.promotion_rank() {
        for kind in PROMOTION_KINDS {
            out.push(Move::with_promotion(src, dst, kind));
        }
    } else {
        out.push(Move::new(src, dst));
    }
}

fn gen_pawn(board: &Board, team: Team, src: Position, out: &mut MoveList) {
    let dir = team.pawn_direction();

    // Forward pushes: one square onto an empty square; two squares only from
    // the pawn's starting rank, with both squares empty.
    if let Some(fwd) = src.offset(dir, 0) {
        if board.get(fwd).is_none() {
            push_pawn_move(team, src, fwd, out);
            if src.row() == team.pawn_rank() {
                if let Some(fwd2) = fwd.offset(dir, 0) {
                    if board.get(fwd2).is_none() {
                        out.push(Move::new(src, fwd2));
                    }
                }
            }
        }
    }

    // Diagonal captures, onto opposing pieces only.
    for dcol in [-1, 1] {
        if let Some(dst) = src.offset(dir, dcol) {
            if board.get(dst).map_or(false, |p| p.team() != team) {
                push_pawn_move(team, src, dst, out);
            }
        }
    }
}

/// Returns the geometric candidate moves for the piece at `src`
///
/// Candidates respect blocking and capture rules but ignore check entirely.
/// Returns an empty list if `src` is empty.
pub fn piece_moves(board: &Board, src: Position) -> MoveList {
    let mut out = MoveList::new();
    let piece = match board.get(src) {
        Some(piece) => piece,
        None => return out,
    };
    let team = piece.team();
    match piece.kind() {
        PieceKind::King => gen_slider(board, team, src, &OCTO_DIRS, 1, &mut out),
        PieceKind::Queen => gen_slider(board, team, src, &OCTO_DIRS, 7, &mut out),
        PieceKind::Rook => gen_slider(board, team, src, &ROOK_DIRS, 7, &mut out),
        PieceKind::Bishop => gen_slider(board, team, src, &BISHOP_DIRS, 7, &mut out),
        PieceKind::Knight => gen_knight(board, team, src, &mut out),
        PieceKind::Pawn => gen_pawn(board, team, src, &mut out),
    };
    out
}

/// Returns `true` if some piece of team `by` has `target` among its geometric
/// candidates
///
/// This deliberately uses raw geometry and never consults legal-move
/// filtering, so check detection cannot recurse into itself.
pub fn is_attacked(board: &Board, target: Position, by: Team) -> bool {
    for src in Position::iter() {
        match board.get(src) {
            Some(piece) if piece.team() == by => {}
            _ => continue,
        }
        if piece_moves(board, src).iter().any(|mv| mv.dst() == target) {
            return true;
        }
    }
    false
}
