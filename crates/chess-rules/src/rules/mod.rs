//! Piece rule table.
//!
//! Piece behaviour is data: every piece kind has one shared, stateless
//! [`PieceDefinition`] holding a movement rule, an optional capture rule and
//! an optional on-move hook. A piece points at its current definition and
//! promotion swaps that pointer.

mod pawn;
mod standard;

pub use pawn::{en_passant_target, has_moved, pawn_captures, pawn_moves, pawn_on_move, PAWN};
pub use standard::{BISHOP, KING, KNIGHT, QUEEN, ROOK};

use std::fmt;

use chess_core::{Move, PieceId, PieceKind, Square};

use crate::{BoardState, Game, Piece};

/// Returns candidate destinations for a piece. Must not mutate the state.
pub type MoveRule = fn(&BoardState, &Piece) -> Vec<Square>;

/// Runs special effects when a move is applied.
///
/// Returning [`OnMove::Handled`] means the hook already performed the whole
/// transition on the state (relocation, captures, history, turn) and the
/// caller applies nothing further.
pub type OnMoveHook = fn(&mut BoardState, &mut dyn Game, PieceId, &Move) -> OnMove;

/// Outcome of an on-move hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnMove {
    /// The hook completed the transition.
    Handled,
    /// The hook left the state untouched; apply the default transition.
    Declined,
}

/// Behaviour shared by every piece of one kind.
pub struct PieceDefinition {
    pub kind: PieceKind,
    pub movement: MoveRule,
    /// Capture destinations when they differ from movement; `None` means
    /// movement squares double as capture squares.
    pub capture: Option<MoveRule>,
    pub on_move: Option<OnMoveHook>,
}

impl PieceDefinition {
    /// Returns the display symbol.
    #[inline]
    pub fn symbol(&self) -> &'static str {
        self.kind.symbol()
    }

    /// Movement destinations, without squares held by the mover's side.
    pub fn moves(&self, state: &BoardState, piece: &Piece) -> Vec<Square> {
        let mut squares = (self.movement)(state, piece);
        squares.retain(|&sq| !state.is_side(sq, piece.player()));
        squares
    }

    /// Capture destinations, without squares held by the mover's side.
    pub fn captures(&self, state: &BoardState, piece: &Piece) -> Vec<Square> {
        match self.capture {
            Some(rule) => {
                let mut squares = rule(state, piece);
                squares.retain(|&sq| !state.is_side(sq, piece.player()));
                squares
            }
            None => self.moves(state, piece),
        }
    }

    /// Every square the piece may move to or capture on: movement squares
    /// first, then capture squares not already listed.
    pub fn destinations(&self, state: &BoardState, piece: &Piece) -> Vec<Square> {
        let mut squares = self.moves(state, piece);
        if self.capture.is_some() {
            for sq in self.captures(state, piece) {
                if !squares.contains(&sq) {
                    squares.push(sq);
                }
            }
        }
        squares
    }
}

impl PartialEq for PieceDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for PieceDefinition {}

impl fmt::Debug for PieceDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PieceDefinition")
            .field("kind", &self.kind)
            .field("capture", &self.capture.is_some())
            .field("on_move", &self.on_move.is_some())
            .finish()
    }
}

/// Kinds a pawn may be promoted to, in the order offered.
pub static PROMOTION_CHOICES: [&PieceDefinition; 4] = [&KNIGHT, &ROOK, &BISHOP, &QUEEN];

/// Returns the shared definition for a piece kind.
pub fn definition_for(kind: PieceKind) -> &'static PieceDefinition {
    match kind {
        PieceKind::Pawn => &PAWN,
        PieceKind::Knight => &KNIGHT,
        PieceKind::Bishop => &BISHOP,
        PieceKind::Rook => &ROOK,
        PieceKind::Queen => &QUEEN,
        PieceKind::King => &KING,
    }
}
