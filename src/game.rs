//! Rule enforcement: legal moves, move commit, check, checkmate, stalemate

use crate::board::Board;
use crate::movegen::{self, MoveList};
use crate::moves::Move;
use crate::types::{Piece, PieceKind, Position, Team};

use thiserror::Error;

/// Reason a move was rejected by [`Game::make_move`]
///
/// All of these are recoverable, user-facing conditions: the game state is
/// left untouched and the caller is expected to ask for a different move.
/// Structural problems (a malformed board reaching the engine) are not
/// errors but panics; see [`Game::is_in_check`] and
/// [`Board::apply_move`](crate::board::Board::apply_move).
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The source square holds no piece
    #[error("no piece at {0}")]
    EmptySquare(Position),
    /// The piece on the source square belongs to the team not on turn
    #[error("piece at {0} belongs to {1:?}, who is not on turn")]
    NotYourTurn(Position, Team),
    /// The move is not among the legal moves of the piece
    #[error("illegal move {0}")]
    Illegal(Move),
}

/// A chess game: one active board plus whose-turn state
///
/// The game owns its board exclusively; [`Game::set_board`] replaces it
/// wholesale. All speculative evaluation (the self-check filter in
/// [`Game::valid_moves`]) runs on clones of the board, never on the live one,
/// so querying never mutates game state. Only [`Game::make_move`] advances
/// the turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Team,
}

impl Game {
    /// Starts a game from the standard position, White to move
    pub fn new() -> Game {
        Game {
            board: Board::initial(),
            turn: Team::White,
        }
    }

    /// Starts a game from the given board, White to move
    pub fn from_board(board: Board) -> Game {
        Game {
            board,
            turn: Team::White,
        }
    }

    /// Starts a game from the standard position with `turn` to move
    pub fn with_turn(turn: Team) -> Game {
        Game {
            board: Board::initial(),
            turn,
        }
    }

    /// Starts a game from the given board with `turn` to move
    pub fn from_parts(board: Board, turn: Team) -> Game {
        Game { board, turn }
    }

    /// Returns the active board
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the active board wholesale, discarding the previous one
    #[inline]
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Returns the team whose turn it is
    #[inline]
    pub fn turn(&self) -> Team {
        self.turn
    }

    /// Sets the team whose turn it is
    #[inline]
    pub fn set_turn(&mut self, turn: Team) {
        self.turn = turn;
    }

    /// Returns the legal moves for the piece at `src`
    ///
    /// Geometric candidates that would leave the mover's own king attacked
    /// are filtered out by simulating each candidate on a cloned board. The
    /// result is empty when `src` is empty; moves come out in generation
    /// order. The live board and the turn are never touched.
    pub fn valid_moves(&self, src: Position) -> MoveList {
        let mut res = MoveList::new();
        let piece = match self.board.get(src) {
            Some(piece) => piece,
            None => return res,
        };
        for mv in &movegen::piece_moves(&self.board, src) {
            if !self.leaves_king_attacked(*mv, piece.team()) {
                res.push(*mv);
            }
        }
        res
    }

    /// Commits `mv`, or rejects it leaving board and turn unchanged
    ///
    /// A committed move mutates the live board, performs the promotion if
    /// `mv` carries a promotion kind, and passes the turn to the opponent.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let piece = self
            .board
            .get(mv.src())
            .ok_or(MoveError::EmptySquare(mv.src()))?;
        if piece.team() != self.turn {
            return Err(MoveError::NotYourTurn(mv.src(), piece.team()));
        }
        if !self.valid_moves(mv.src()).contains(&mv) {
            return Err(MoveError::Illegal(mv));
        }
        self.board.apply_move(mv);
        if let Some(kind) = mv.promotion() {
            self.board.promote(mv.dst(), kind);
        }
        self.turn = self.turn.opponent();
        Ok(())
    }

    /// Returns `true` if `team`'s king is currently attacked
    ///
    /// # Panics
    ///
    /// Panics if `team` has no king on the board. A kingless board is
    /// malformed state constructed by the caller, not a game condition.
    pub fn is_in_check(&self, team: Team) -> bool {
        let king = king_position(&self.board, team);
        movegen::is_attacked(&self.board, king, team.opponent())
    }

    /// Returns `true` if `team` is in check with no legal move
    pub fn is_in_checkmate(&self, team: Team) -> bool {
        self.is_in_check(team) && !self.has_legal_moves(team)
    }

    /// Returns `true` if `team` is not in check yet has no legal move
    pub fn is_in_stalemate(&self, team: Team) -> bool {
        !self.is_in_check(team) && !self.has_legal_moves(team)
    }

    /// Returns `true` if `team` has at least one legal move
    ///
    /// Stops at the first surviving candidate instead of collecting the full
    /// legal-move set; this is the dominant cost of the terminal checks.
    pub fn has_legal_moves(&self, team: Team) -> bool {
        for src in Position::iter() {
            match self.board.get(src) {
                Some(piece) if piece.team() == team => {}
                _ => continue,
            }
            for mv in &movegen::piece_moves(&self.board, src) {
                if !self.leaves_king_attacked(*mv, team) {
                    return true;
                }
            }
        }
        false
    }

    /// Returns `true` if committing `mv` would leave `team`'s own king
    /// attacked
    ///
    /// The candidate is applied to a clone of the live board; the live board
    /// is never mutated here.
    fn leaves_king_attacked(&self, mv: Move, team: Team) -> bool {
        let mut scratch = self.board.clone();
        scratch.apply_move(mv);
        let king = king_position(&scratch, team);
        movegen::is_attacked(&scratch, king, team.opponent())
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

/// Locates `team`'s king by scanning the board
///
/// # Panics
///
/// Panics if no king of that team exists.
fn king_position(board: &Board, team: Team) -> Position {
    let king = Piece::new(team, PieceKind::King);
    Position::iter()
        .find(|&pos| board.get(pos) == Some(king))
        .unwrap_or_else(|| panic!("no {:?} king on the board", team))
}
