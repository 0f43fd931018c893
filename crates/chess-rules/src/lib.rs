//! Pseudo-legal move generation for orthodox chess.
//!
//! This crate provides:
//! - [`BoardState`] - piece registry, location index, history and turn
//! - Composable geometric generators in [`movegen`] (rays and leapers)
//! - The piece rule table in [`rules`], one [`PieceDefinition`] per kind
//! - Pawn pushes, captures, en passant and promotion
//! - [`apply_move`] and the [`Game`] collaborator it delegates to
//!
//! Moves produced here follow piece geometry and occupancy only; whether a
//! move leaves the mover's king in check is for the caller to decide.
//!
//! # Example
//!
//! ```
//! use chess_core::Square;
//! use chess_rules::{apply_move, AutoQueen, BoardState};
//!
//! let mut state = BoardState::standard();
//! let e2: Square = "e2".parse().unwrap();
//! let pawn = state.occupant(e2).unwrap();
//! let moves = pawn.definition().moves(&state, pawn);
//! assert_eq!(moves.len(), 2);
//!
//! let id = pawn.id();
//! apply_move(&mut state, &mut AutoQueen, id, "e4".parse().unwrap()).unwrap();
//! assert_eq!(state.history().len(), 1);
//! ```

mod game;
pub mod movegen;
pub mod rules;
mod state;

pub use game::{apply_move, AutoQueen, Game, MoveError};
pub use movegen::generate_moves;
pub use rules::{definition_for, OnMove, PieceDefinition, PROMOTION_CHOICES};
pub use state::{BoardState, Piece, SetupError};
