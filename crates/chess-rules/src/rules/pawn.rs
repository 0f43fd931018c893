//! Pawn rules: pushes, diagonal captures, en passant and promotion.
//!
//! First-move and en passant eligibility are derived from history on every
//! call rather than cached on the piece.

use chess_core::{Move, MoveFlags, PieceId, PieceKind, Square};
use tracing::{debug, trace};

use super::{OnMove, PieceDefinition, PROMOTION_CHOICES};
use crate::{BoardState, Game, Piece};

pub static PAWN: PieceDefinition = PieceDefinition {
    kind: PieceKind::Pawn,
    movement: pawn_moves,
    capture: Some(pawn_captures),
    on_move: Some(pawn_on_move),
};

/// Returns true if any recorded move ended on the pawn's current square.
///
/// A pawn no move has ever landed on is still on its starting square.
pub fn has_moved(state: &BoardState, piece: &Piece) -> bool {
    state.history().iter().any(|m| m.to == piece.square())
}

/// One step forward onto an empty square, plus a second step when the pawn
/// has not moved and both squares are empty.
pub fn pawn_moves(state: &BoardState, piece: &Piece) -> Vec<Square> {
    let dir = piece.player().pawn_direction();
    let mut moves = Vec::with_capacity(2);

    let Some(one) = piece.square().offset(0, dir) else {
        return moves;
    };
    if state.is_occupied(one) {
        return moves;
    }
    moves.push(one);

    if !has_moved(state, piece) {
        if let Some(two) = piece.square().offset(0, 2 * dir) {
            if !state.is_occupied(two) {
                moves.push(two);
            }
        }
    }

    moves
}

/// The forward diagonals holding an opposing piece, then the en passant
/// square if one is available.
pub fn pawn_captures(state: &BoardState, piece: &Piece) -> Vec<Square> {
    let dir = piece.player().pawn_direction();
    let them = piece.player().opposite();
    let mut moves = Vec::with_capacity(2);

    for df in [-1, 1] {
        if let Some(sq) = piece.square().offset(df, dir) {
            if state.is_side(sq, them) {
                moves.push(sq);
            }
        }
    }

    if let Some(target) = en_passant_target(state, piece) {
        if !moves.contains(&target) {
            moves.push(target);
        }
    }

    moves
}

/// Returns the square this pawn may capture onto en passant.
///
/// The preceding move must be an opposing pawn's double step that ended
/// beside this pawn on the same rank. Empty history, or a preceding mover
/// that is no longer on the board, gives `None`.
pub fn en_passant_target(state: &BoardState, piece: &Piece) -> Option<Square> {
    let last = state.last_move()?;
    let mover = state.piece(last.piece)?;

    if mover.kind() != PieceKind::Pawn || mover.player() == piece.player() {
        return None;
    }
    if last.rank_distance() != 2 || last.file_distance() != 0 {
        return None;
    }
    if last.to.rank() != piece.square().rank() {
        return None;
    }
    let df = last.to.file().index() as i8 - piece.square().file().index() as i8;
    if df.abs() != 1 {
        return None;
    }

    piece
        .square()
        .offset(df, piece.player().pawn_direction())
}

/// Completes en passant captures and promotions.
///
/// Declines, leaving the state untouched, for every other move.
pub fn pawn_on_move(state: &mut BoardState, game: &mut dyn Game, id: PieceId, mv: &Move) -> OnMove {
    let Some(&piece) = state.piece(id) else {
        return OnMove::Declined;
    };
    let us = piece.player();
    let them = us.opposite();
    if state.is_side(mv.to, us) {
        return OnMove::Declined;
    }

    if mv.from.file() != mv.to.file() {
        let beside = Square::new(mv.to.file(), mv.from.rank());
        if !state.is_side(mv.to, them) {
            if let Some(victim) = state.occupant(beside).filter(|p| p.player() == them) {
                let victim = victim.id();
                state.capture(victim);
                state.relocate(id, mv.to);
                state.record(mv.with_flags(MoveFlags {
                    capture: true,
                    en_passant: true,
                    promotion: None,
                }));
                state.pass_turn();
                debug!(piece = %id, from = %mv.from, to = %mv.to, captured = %victim, "en passant");
                return OnMove::Handled;
            }
        }
    }

    if mv.to.rank() == us.promotion_rank() {
        let captured = state
            .occupant(mv.to)
            .filter(|p| p.player() == them)
            .map(|p| p.id());
        if let Some(victim) = captured {
            state.capture(victim);
        }
        state.relocate(id, mv.to);

        let choice = game.promotion_choice(&piece.with_square(mv.to), state, &PROMOTION_CHOICES);
        state.set_definition(id, choice);
        state.record(mv.with_flags(MoveFlags {
            capture: captured.is_some(),
            en_passant: false,
            promotion: Some(choice.kind),
        }));
        state.pass_turn();
        debug!(piece = %id, from = %mv.from, to = %mv.to, promotion = %choice.kind, "promotion");
        return OnMove::Handled;
    }

    trace!(piece = %id, from = %mv.from, to = %mv.to, "pawn move needs no special handling");
    OnMove::Declined
}
