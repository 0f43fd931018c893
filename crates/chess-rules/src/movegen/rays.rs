//! Sliding ray generators.

use chess_core::Square;

use crate::{BoardState, Piece};

/// Longest ray that fits on the board.
pub const UNBOUNDED: u8 = 7;

/// The four orthogonal unit vectors as (file, rank) deltas.
pub const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The four diagonal unit vectors as (file, rank) deltas.
pub const DIAGONAL: [(i8, i8); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

/// Walks each direction outward from the piece, at most `limit` steps.
///
/// Empty squares are emitted and the walk continues. An opposing piece is
/// emitted and ends the walk; a piece of the mover's side ends it without
/// being emitted. The board edge always ends the walk.
pub fn ray_moves(
    state: &BoardState,
    piece: &Piece,
    directions: &[(i8, i8)],
    limit: u8,
) -> Vec<Square> {
    let mut moves = Vec::new();
    let limit = limit.min(UNBOUNDED) as i8;

    for &(df, dr) in directions {
        for step in 1..=limit {
            let (Some(fx), Some(rx)) = (df.checked_mul(step), dr.checked_mul(step)) else {
                break;
            };
            let Some(sq) = piece.square().offset(fx, rx) else {
                break;
            };
            match state.occupant(sq) {
                None => moves.push(sq),
                Some(other) => {
                    if other.player() != piece.player() {
                        moves.push(sq);
                    }
                    break;
                }
            }
        }
    }

    moves
}

/// Rays along files and ranks.
#[inline]
pub fn orthogonal_moves(state: &BoardState, piece: &Piece, limit: u8) -> Vec<Square> {
    ray_moves(state, piece, &ORTHOGONAL, limit)
}

/// Rays along diagonals.
#[inline]
pub fn diagonal_moves(state: &BoardState, piece: &Piece, limit: u8) -> Vec<Square> {
    ray_moves(state, piece, &DIAGONAL, limit)
}

/// Diagonal rays followed by orthogonal rays.
pub fn star_moves(state: &BoardState, piece: &Piece, limit: u8) -> Vec<Square> {
    let mut moves = diagonal_moves(state, piece, limit);
    moves.extend(orthogonal_moves(state, piece, limit));
    moves
}
