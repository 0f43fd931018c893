//! Fixed-offset leaper generator.

use chess_core::Square;

use crate::{BoardState, Piece};

/// Squares reached by leaping `a` squares along one axis and `b` along the
/// other, in every sign and axis combination, clipped to the board.
///
/// Leaps cannot be blocked, so occupancy is not consulted here; callers
/// drop squares held by the mover's own side.
pub fn leaper_moves(_state: &BoardState, piece: &Piece, a: i8, b: i8) -> Vec<Square> {
    // A magnitude with no negation is far off the board anyway.
    let (pa, pb) = (Some(a), Some(b));
    let (na, nb) = (a.checked_neg(), b.checked_neg());
    let offsets = [
        (pa, pb),
        (na, pb),
        (na, nb),
        (pa, nb),
        (pb, pa),
        (nb, pa),
        (nb, na),
        (pb, na),
    ];

    let mut moves = Vec::with_capacity(offsets.len());
    for (df, dr) in offsets {
        let (Some(df), Some(dr)) = (df, dr) else {
            continue;
        };
        if let Some(sq) = piece.square().offset(df, dr) {
            // Symmetric magnitudes repeat offsets.
            if !moves.contains(&sq) {
                moves.push(sq);
            }
        }
    }
    moves
}
