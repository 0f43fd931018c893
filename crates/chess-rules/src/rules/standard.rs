//! Definitions for the pieces that need no special handling.

use chess_core::{PieceKind, Square};

use super::PieceDefinition;
use crate::movegen::{diagonal_moves, leaper_moves, orthogonal_moves, star_moves, UNBOUNDED};
use crate::{BoardState, Piece};

fn king_moves(state: &BoardState, piece: &Piece) -> Vec<Square> {
    star_moves(state, piece, 1)
}

fn queen_moves(state: &BoardState, piece: &Piece) -> Vec<Square> {
    star_moves(state, piece, UNBOUNDED)
}

fn bishop_moves(state: &BoardState, piece: &Piece) -> Vec<Square> {
    diagonal_moves(state, piece, UNBOUNDED)
}

fn rook_moves(state: &BoardState, piece: &Piece) -> Vec<Square> {
    orthogonal_moves(state, piece, UNBOUNDED)
}

fn knight_moves(state: &BoardState, piece: &Piece) -> Vec<Square> {
    leaper_moves(state, piece, 1, 2)
}

pub static KING: PieceDefinition = PieceDefinition {
    kind: PieceKind::King,
    movement: king_moves,
    capture: None,
    on_move: None,
};

pub static QUEEN: PieceDefinition = PieceDefinition {
    kind: PieceKind::Queen,
    movement: queen_moves,
    capture: None,
    on_move: None,
};

pub static BISHOP: PieceDefinition = PieceDefinition {
    kind: PieceKind::Bishop,
    movement: bishop_moves,
    capture: None,
    on_move: None,
};

pub static ROOK: PieceDefinition = PieceDefinition {
    kind: PieceKind::Rook,
    movement: rook_moves,
    capture: None,
    on_move: None,
};

pub static KNIGHT: PieceDefinition = PieceDefinition {
    kind: PieceKind::Knight,
    movement: knight_moves,
    capture: None,
    on_move: None,
};
