//! Board state: piece registry, location index, history and turn.

use std::collections::{BTreeMap, VecDeque};
use std::fmt;

use chess_core::{FenError, Layout, Move, PieceId, PieceKind, Placement, Player, Square};
use thiserror::Error;

use crate::rules::{definition_for, PieceDefinition};

/// Errors that can occur while setting up a board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error(transparent)]
    Fen(#[from] FenError),

    #[error("square {0} is already occupied")]
    SquareOccupied(Square),
}

/// A piece on the board.
///
/// The definition is the behaviour the piece currently exhibits; promotion
/// swaps it while the identity stays the same.
#[derive(Clone, Copy)]
pub struct Piece {
    id: PieceId,
    definition: &'static PieceDefinition,
    square: Square,
    player: Player,
}

impl Piece {
    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub fn definition(&self) -> &'static PieceDefinition {
        self.definition
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.definition.kind
    }

    #[inline]
    pub fn square(&self) -> Square {
        self.square
    }

    #[inline]
    pub fn player(&self) -> Player {
        self.player
    }

    /// The same piece standing on another square.
    pub(crate) fn with_square(mut self, square: Square) -> Piece {
        self.square = square;
        self
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.definition == other.definition
            && self.square == other.square
            && self.player == other.player
    }
}

impl Eq for Piece {}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Piece({} {} {} on {})",
            self.id,
            self.player,
            self.kind(),
            self.square
        )
    }
}

#[inline]
fn slot(sq: Square) -> usize {
    sq.rank().index() as usize * 8 + sq.file().index() as usize
}

/// The complete board state read by move generators.
///
/// The registry and the square index are only ever changed together, so
/// every location query agrees with the registry between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pieces: BTreeMap<PieceId, Piece>,
    squares: [Option<PieceId>; 64],
    /// Most recent move first.
    history: VecDeque<Move>,
    captured: Vec<PieceId>,
    turn: Player,
    next_id: u32,
}

impl BoardState {
    /// Creates an empty board with `turn` to move.
    pub fn empty(turn: Player) -> Self {
        BoardState {
            pieces: BTreeMap::new(),
            squares: [None; 64],
            history: VecDeque::new(),
            captured: Vec::new(),
            turn,
            next_id: 0,
        }
    }

    /// Creates the standard starting position.
    pub fn standard() -> Self {
        Self::from_fen(Layout::STARTPOS).expect("STARTPOS is valid")
    }

    /// Creates a board from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, SetupError> {
        Self::from_layout(&Layout::parse(fen)?)
    }

    /// Creates a board from a parsed layout. Ids follow layout order.
    pub fn from_layout(layout: &Layout) -> Result<Self, SetupError> {
        let mut state = BoardState::empty(layout.turn);
        for p in &layout.placements {
            state.place(p.kind, p.player, p.square)?;
        }
        Ok(state)
    }

    /// The current placement and turn, ready for export.
    pub fn layout(&self) -> Layout {
        let placements = self
            .pieces
            .values()
            .map(|p| Placement {
                square: p.square,
                kind: p.kind(),
                player: p.player,
            })
            .collect();
        Layout {
            placements,
            turn: self.turn,
        }
    }

    /// The placement and active-colour fields of the current position.
    pub fn to_fen(&self) -> String {
        self.layout().to_fen()
    }

    /// Puts a new piece on an empty square and returns its id.
    pub fn place(
        &mut self,
        kind: PieceKind,
        player: Player,
        square: Square,
    ) -> Result<PieceId, SetupError> {
        if self.squares[slot(square)].is_some() {
            return Err(SetupError::SquareOccupied(square));
        }
        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.pieces.insert(
            id,
            Piece {
                id,
                definition: definition_for(kind),
                square,
                player,
            },
        );
        self.squares[slot(square)] = Some(id);
        Ok(id)
    }

    // Queries

    /// Returns the player to move.
    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns a live piece by id.
    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    /// Iterates over live pieces in id order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    /// Returns the piece standing on `sq`.
    #[inline]
    pub fn occupant(&self, sq: Square) -> Option<&Piece> {
        self.squares[slot(sq)].and_then(|id| self.pieces.get(&id))
    }

    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[slot(sq)].is_some()
    }

    /// Returns true if `sq` holds a piece owned by `player`.
    #[inline]
    pub fn is_side(&self, sq: Square, player: Player) -> bool {
        self.occupant(sq).is_some_and(|p| p.player == player)
    }

    /// All occupied squares.
    pub fn piece_locations(&self) -> BTreeMap<Square, &Piece> {
        self.pieces.values().map(|p| (p.square, p)).collect()
    }

    /// Squares occupied by `player`.
    pub fn side_locations(&self, player: Player) -> BTreeMap<Square, &Piece> {
        self.pieces
            .values()
            .filter(|p| p.player == player)
            .map(|p| (p.square, p))
            .collect()
    }

    /// Squares occupied by the player to move.
    pub fn own_piece_locations(&self) -> BTreeMap<Square, &Piece> {
        self.side_locations(self.turn)
    }

    /// Squares occupied by the player not to move.
    pub fn opponent_piece_locations(&self) -> BTreeMap<Square, &Piece> {
        self.side_locations(self.turn.opposite())
    }

    /// Move history, most recent move first.
    #[inline]
    pub fn history(&self) -> &VecDeque<Move> {
        &self.history
    }

    /// The immediately preceding move, if any.
    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.front()
    }

    /// Ids of captured pieces, in capture order.
    #[inline]
    pub fn captured(&self) -> &[PieceId] {
        &self.captured
    }

    // Transitions. Each keeps the registry and the square index in step.

    /// Moves a live piece to `to`. Anything standing on `to` must have been
    /// captured first.
    pub fn relocate(&mut self, id: PieceId, to: Square) {
        let Some(piece) = self.pieces.get_mut(&id) else {
            return;
        };
        debug_assert!(
            !matches!(self.squares[slot(to)], Some(other) if other != id),
            "relocating {id} onto occupied square {to}"
        );
        self.squares[slot(piece.square)] = None;
        piece.square = to;
        self.squares[slot(to)] = Some(id);
    }

    /// Removes a live piece from the board and records it as captured.
    pub fn capture(&mut self, id: PieceId) -> Option<Piece> {
        let piece = self.pieces.remove(&id)?;
        self.squares[slot(piece.square)] = None;
        self.captured.push(id);
        Some(piece)
    }

    /// Swaps the behaviour of a live piece, keeping its identity and square.
    pub fn set_definition(&mut self, id: PieceId, definition: &'static PieceDefinition) {
        if let Some(piece) = self.pieces.get_mut(&id) {
            piece.definition = definition;
        }
    }

    /// Prepends a move to history.
    pub fn record(&mut self, mv: Move) {
        self.history.push_front(mv);
    }

    /// Hands the turn to the other player.
    pub fn pass_turn(&mut self) {
        self.turn = self.turn.opposite();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::QUEEN;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn standard_setup() {
        let state = BoardState::standard();
        assert_eq!(state.turn(), Player::White);
        assert_eq!(state.pieces().count(), 32);
        assert_eq!(state.own_piece_locations().len(), 16);
        assert_eq!(state.opponent_piece_locations().len(), 16);
        assert_eq!(state.occupant(sq("e1")).unwrap().kind(), PieceKind::King);
        assert_eq!(state.occupant(sq("d8")).unwrap().kind(), PieceKind::Queen);
        assert_eq!(state.occupant(sq("d8")).unwrap().player(), Player::Black);
        assert!(!state.is_occupied(sq("e4")));
        assert!(state.history().is_empty());
    }

    #[test]
    fn exports_current_position_as_fen() {
        let mut state = BoardState::standard();
        assert_eq!(state.to_fen(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");

        let pawn = state.occupant(sq("e2")).unwrap().id();
        state.relocate(pawn, sq("e4"));
        state.pass_turn();
        assert_eq!(state.to_fen(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b");
        assert_eq!(BoardState::from_layout(&state.layout()).unwrap().to_fen(), state.to_fen());
    }

    #[test]
    fn place_rejects_occupied_square() {
        let mut state = BoardState::empty(Player::White);
        state
            .place(PieceKind::Rook, Player::White, sq("a1"))
            .unwrap();
        assert_eq!(
            state.place(PieceKind::Knight, Player::Black, sq("a1")),
            Err(SetupError::SquareOccupied(sq("a1")))
        );
    }

    #[test]
    fn location_views_follow_turn() {
        let mut state = BoardState::from_fen("8/8/8/8/8/8/8/Rr6 w").unwrap();
        assert_eq!(
            state.own_piece_locations().keys().copied().collect::<Vec<_>>(),
            vec![sq("a1")]
        );
        state.pass_turn();
        assert_eq!(
            state.own_piece_locations().keys().copied().collect::<Vec<_>>(),
            vec![sq("b1")]
        );
        assert_eq!(state.piece_locations().len(), 2);
    }

    #[test]
    fn relocate_and_capture_keep_index_in_step() {
        let mut state = BoardState::from_fen("8/8/8/8/8/8/8/R6r w").unwrap();
        let rook = state.occupant(sq("a1")).unwrap().id();
        let victim = state.occupant(sq("h1")).unwrap().id();

        assert!(state.capture(victim).is_some());
        state.relocate(rook, sq("h1"));

        assert!(!state.is_occupied(sq("a1")));
        assert_eq!(state.occupant(sq("h1")).unwrap().id(), rook);
        assert_eq!(state.piece(victim), None);
        assert_eq!(state.captured(), &[victim]);
        assert_eq!(state.piece_locations().len(), 1);
        assert!(state.capture(victim).is_none());
    }

    #[test]
    fn history_is_most_recent_first() {
        let mut state = BoardState::empty(Player::White);
        let first = Move::new(PieceId(0), sq("e2"), sq("e4"));
        let second = Move::new(PieceId(1), sq("e7"), sq("e5"));
        state.record(first);
        state.record(second);
        assert_eq!(state.last_move(), Some(&second));
        assert_eq!(state.history().back(), Some(&first));
    }

    #[test]
    fn set_definition_keeps_identity() {
        let mut state = BoardState::from_fen("8/P7/8/8/8/8/8/8 w").unwrap();
        let pawn = state.occupant(sq("a7")).unwrap().id();
        state.set_definition(pawn, &QUEEN);
        let piece = state.piece(pawn).unwrap();
        assert_eq!(piece.kind(), PieceKind::Queen);
        assert_eq!(piece.square(), sq("a7"));
    }
}
