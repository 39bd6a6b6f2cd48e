//! # rookery
//!
//! A small chess rules engine. It keeps board state, generates legal moves
//! per piece, enforces turn order, and detects check, checkmate and
//! stalemate. Presentation (CLI, server, UI) is left entirely to the caller.
//!
//! The engine is split the same way the rules are:
//!
//! - [`Board`] is a plain 8×8 grid of optional [`Piece`]s with placement and
//!   movement mechanics and zero rule knowledge;
//! - [`movegen`] computes geometric candidate moves per piece kind, with
//!   blocking and capture semantics but ignoring check;
//! - [`Game`] owns a board plus the turn, filters candidates through
//!   clone-and-simulate self-check detection, and commits moves.
//!
//! Castling, en passant and draw counters are deliberately not modeled.
//!
//! # Example
//!
//! ```
//! # use rookery::{Game, Team};
//! let mut game = Game::new();
//! game.make_move("e2e4".parse().unwrap()).unwrap();
//! game.make_move("e7e5".parse().unwrap()).unwrap();
//! assert_eq!(game.turn(), Team::White);
//! assert!(!game.is_in_check(Team::White));
//! ```

pub mod board;
pub mod game;
pub mod movegen;
pub mod moves;
pub mod types;

pub use board::Board;
pub use game::{Game, MoveError};
pub use movegen::MoveList;
pub use moves::Move;
pub use types::{Piece, PieceKind, Position, Team};
