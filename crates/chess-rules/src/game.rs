//! Move application and the game collaborator.
//!
//! [`apply_move`] is the single entry point that changes a [`BoardState`].
//! It validates the move against the piece's pseudo-legal destinations,
//! gives the piece's on-move hook the first chance to perform the
//! transition, and otherwise applies the default one.

use chess_core::{Move, MoveFlags, PieceId, Player, Square};
use thiserror::Error;
use tracing::debug;

use crate::rules::{OnMove, PieceDefinition, QUEEN};
use crate::{BoardState, Piece};

/// Decisions the rule engine delegates to whoever drives the game.
pub trait Game {
    /// Picks the definition a promoting pawn becomes.
    ///
    /// Called exactly once per promotion, after the pawn has been placed on
    /// its destination. The answer is taken as given.
    fn promotion_choice(
        &mut self,
        piece: &Piece,
        state: &BoardState,
        choices: &[&'static PieceDefinition],
    ) -> &'static PieceDefinition;
}

impl<F> Game for F
where
    F: FnMut(&Piece, &BoardState, &[&'static PieceDefinition]) -> &'static PieceDefinition,
{
    fn promotion_choice(
        &mut self,
        piece: &Piece,
        state: &BoardState,
        choices: &[&'static PieceDefinition],
    ) -> &'static PieceDefinition {
        self(piece, state, choices)
    }
}

/// A collaborator that always promotes to a queen.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoQueen;

impl Game for AutoQueen {
    fn promotion_choice(
        &mut self,
        _piece: &Piece,
        _state: &BoardState,
        _choices: &[&'static PieceDefinition],
    ) -> &'static PieceDefinition {
        &QUEEN
    }
}

/// Errors returned when a move cannot be applied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece with id {0} is on the board")]
    UnknownPiece(PieceId),

    #[error("piece {piece} belongs to {owner}, but it is {turn}'s turn")]
    NotYourTurn {
        piece: PieceId,
        owner: Player,
        turn: Player,
    },

    #[error("piece {piece} cannot move from {from} to {to}")]
    IllegalDestination {
        piece: PieceId,
        from: Square,
        to: Square,
    },
}

/// Moves a piece, returning the move as recorded in history.
///
/// The state is only changed when `Ok` is returned. Check is not
/// considered.
pub fn apply_move(
    state: &mut BoardState,
    game: &mut dyn Game,
    id: PieceId,
    to: Square,
) -> Result<Move, MoveError> {
    let piece = state.piece(id).ok_or(MoveError::UnknownPiece(id))?;
    if piece.player() != state.turn() {
        return Err(MoveError::NotYourTurn {
            piece: id,
            owner: piece.player(),
            turn: state.turn(),
        });
    }

    let from = piece.square();
    let definition = piece.definition();
    if !definition.destinations(state, piece).contains(&to) {
        return Err(MoveError::IllegalDestination { piece: id, from, to });
    }

    let mv = Move::new(id, from, to);
    if let Some(hook) = definition.on_move {
        if hook(state, game, id, &mv) == OnMove::Handled {
            return Ok(*state.history().front().unwrap_or(&mv));
        }
    }

    Ok(default_transition(state, mv))
}

/// Captures whatever stands on the destination, moves the piece, records
/// the move and passes the turn.
fn default_transition(state: &mut BoardState, mv: Move) -> Move {
    let mover = state.piece(mv.piece).map(|p| p.player());
    let victim = state
        .occupant(mv.to)
        .filter(|p| Some(p.player()) != mover)
        .map(|p| p.id());

    if let Some(victim) = victim {
        state.capture(victim);
    }
    state.relocate(mv.piece, mv.to);

    let mv = mv.with_flags(MoveFlags {
        capture: victim.is_some(),
        ..MoveFlags::default()
    });
    state.record(mv);
    state.pass_turn();

    debug!(piece = %mv.piece, from = %mv.from, to = %mv.to, capture = mv.flags.capture, "move applied");
    mv
}
