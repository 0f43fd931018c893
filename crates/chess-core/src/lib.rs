//! Core types for the chess rule engine.
//!
//! This crate provides the vocabulary shared by the rule engine:
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Player`] for the two sides
//! - [`PieceKind`] and [`PieceId`] for piece types and identities
//! - [`Move`] and [`MoveFlags`] for history records
//! - [`Layout`] for reading board setups from FEN

mod fen;
mod mov;
mod piece;
mod player;
mod square;

pub use fen::{FenError, Layout, Placement};
pub use mov::{Move, MoveFlags};
pub use piece::{PieceId, PieceKind};
pub use player::Player;
pub use square::{CoordError, File, Rank, Square};
