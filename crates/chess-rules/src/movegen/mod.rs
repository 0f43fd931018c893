//! Move generation.
//!
//! This module contains the composable geometric generators that piece
//! definitions are built from:
//! - Sliding rays (orthogonal, diagonal, and their star union)
//! - Fixed-offset leapers
//!
//! All generators are pure: they read the board and return squares in a
//! deterministic emission order.

mod leaper;
mod rays;

pub use leaper::leaper_moves;
pub use rays::{
    diagonal_moves, orthogonal_moves, ray_moves, star_moves, DIAGONAL, ORTHOGONAL, UNBOUNDED,
};

use chess_core::Move;

use crate::BoardState;

/// Generates every pseudo-legal move for the player to move.
///
/// Moves are grouped by piece in id order, each piece's destinations in
/// emission order. No check filtering is applied.
pub fn generate_moves(state: &BoardState) -> Vec<Move> {
    let us = state.turn();
    let mut moves = Vec::new();

    for piece in state.pieces().filter(|p| p.player() == us) {
        for to in piece.definition().destinations(state, piece) {
            moves.push(Move::new(piece.id(), piece.square(), to));
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Player;

    #[test]
    fn startpos_has_twenty_moves() {
        let state = BoardState::standard();
        assert_eq!(generate_moves(&state).len(), 20);
    }

    #[test]
    fn only_side_to_move_generates() {
        let mut state = BoardState::from_fen("8/8/8/8/8/8/8/R6n w").unwrap();
        assert!(generate_moves(&state)
            .iter()
            .all(|m| m.from.to_string() == "a1"));

        state.pass_turn();
        assert_eq!(state.turn(), Player::Black);
        assert!(generate_moves(&state)
            .iter()
            .all(|m| m.from.to_string() == "h1"));
    }
}
