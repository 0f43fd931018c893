//! FEN (Forsyth-Edwards Notation) board layouts.
//!
//! Only the piece placement and the active colour are meaningful here.
//! Castling, en passant and clock fields are accepted and ignored: en passant
//! eligibility is derived from move history, not from a target square.

use crate::{File, PieceKind, Player, Rank, Square};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 1 to 6 fields, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),
}

/// A piece standing on a square, as read from a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub square: Square,
    pub kind: PieceKind,
    pub player: Player,
}

/// A parsed board layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Pieces in FEN reading order (rank 8 first, a-file first).
    pub placements: Vec<Placement>,
    /// Player to move.
    pub turn: Player,
}

impl Layout {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string. A missing active colour defaults to white.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.is_empty() || parts.len() > 6 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let placements = Self::parse_placement(parts[0])?;

        let turn = match parts.get(1).copied() {
            None | Some("w") => Player::White,
            Some("b") => Player::Black,
            Some(other) => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        Ok(Layout { placements, turn })
    }

    fn parse_placement(placement: &str) -> Result<Vec<Placement>, FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut placements = Vec::new();
        for (i, row) in ranks.iter().enumerate() {
            let rank = Rank::ALL[7 - i];
            let mut file_index = 0u32;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file_index += skip;
                    continue;
                }
                let Some((kind, player)) = PieceKind::from_fen_char(c) else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c, rank
                    )));
                };
                let Some(file) = File::from_index(file_index as u8).filter(|_| file_index < 8) else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "rank {} has more than 8 squares",
                        rank
                    )));
                };
                placements.push(Placement {
                    square: Square::new(file, rank),
                    kind,
                    player,
                });
                file_index += 1;
            }
            if file_index != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    rank, file_index
                )));
            }
        }

        Ok(placements)
    }

    /// Returns the placement and active-colour fields as a FEN prefix.
    pub fn to_fen(&self) -> String {
        let mut board = [[None; 8]; 8];
        for p in &self.placements {
            board[p.square.rank().index() as usize][p.square.file().index() as usize] =
                Some(p.kind.to_fen_char(p.player));
        }

        let mut out = String::new();
        for (i, row) in board.iter().rev().enumerate() {
            if i > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for cell in row {
                match cell {
                    Some(c) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(*c);
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }

        let turn = match self.turn {
            Player::White => 'w',
            Player::Black => 'b',
        };
        format!("{} {}", out, turn)
    }
}
