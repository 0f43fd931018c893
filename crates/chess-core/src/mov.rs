//! Move records as kept in board history.

use crate::{PieceId, PieceKind, Square};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Extra facts attached to a move when it is recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveFlags {
    /// An opposing piece was removed by this move.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub capture: bool,
    /// The captured piece was taken en passant.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub en_passant: bool,
    /// The kind the moving pawn was promoted to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PieceKind>,
}

impl MoveFlags {
    /// Returns true if no flag is set.
    pub fn is_empty(&self) -> bool {
        *self == MoveFlags::default()
    }
}

/// A move of one piece from one square to another.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The piece that moved.
    pub piece: PieceId,
    pub from: Square,
    pub to: Square,
    #[serde(default, skip_serializing_if = "MoveFlags::is_empty")]
    pub flags: MoveFlags,
}

impl Move {
    /// Creates a move without flags.
    #[inline]
    pub const fn new(piece: PieceId, from: Square, to: Square) -> Self {
        Move {
            piece,
            from,
            to,
            flags: MoveFlags {
                capture: false,
                en_passant: false,
                promotion: None,
            },
        }
    }

    /// Returns this move with the given flags merged in.
    #[must_use]
    pub fn with_flags(mut self, flags: MoveFlags) -> Self {
        self.flags.capture |= flags.capture;
        self.flags.en_passant |= flags.en_passant;
        if flags.promotion.is_some() {
            self.flags.promotion = flags.promotion;
        }
        self
    }

    /// Returns the number of ranks travelled, ignoring direction.
    #[inline]
    pub fn rank_distance(&self) -> u8 {
        self.from.rank().index().abs_diff(self.to.rank().index())
    }

    /// Returns the number of files travelled, ignoring direction.
    #[inline]
    pub fn file_distance(&self) -> u8 {
        self.from.file().index().abs_diff(self.to.file().index())
    }

    /// Returns the coordinate notation for this move (e.g., "e2e4", "e7e8=Q").
    pub fn to_notation(&self) -> String {
        let sep = if self.flags.capture { "x" } else { "" };
        match self.flags.promotion {
            Some(kind) => format!("{}{}{}={}", self.from, sep, self.to, kind.symbol()),
            None => format!("{}{}{}", self.from, sep, self.to),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {})", self.piece, self.to_notation())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}
