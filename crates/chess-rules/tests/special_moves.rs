//! En passant, promotion and history through `apply_move`.

use chess_core::{Move, PieceId, PieceKind, Player, Square};
use chess_rules::{
    apply_move, generate_moves, AutoQueen, BoardState, Game, MoveError, Piece, PieceDefinition,
    PROMOTION_CHOICES,
};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn play(state: &mut BoardState, from: &str, to: &str) -> Move {
    let id = state.occupant(sq(from)).unwrap().id();
    apply_move(state, &mut AutoQueen, id, sq(to)).unwrap()
}

/// Records every promotion request and answers with a fixed choice.
struct Recorder {
    answer: &'static PieceDefinition,
    calls: Vec<(PieceId, Square, Vec<PieceKind>)>,
}

impl Game for Recorder {
    fn promotion_choice(
        &mut self,
        piece: &Piece,
        _state: &BoardState,
        choices: &[&'static PieceDefinition],
    ) -> &'static PieceDefinition {
        self.calls.push((
            piece.id(),
            piece.square(),
            choices.iter().map(|d| d.kind).collect(),
        ));
        self.answer
    }
}

#[test]
fn double_step_only_before_first_move() {
    let mut state = BoardState::standard();
    play(&mut state, "e2", "e3");
    play(&mut state, "a7", "a6");

    let pawn = state.occupant(sq("e3")).unwrap();
    assert_eq!(pawn.definition().moves(&state, pawn), vec![sq("e4")]);

    let untouched = state.occupant(sq("d2")).unwrap();
    assert_eq!(
        untouched.definition().moves(&state, untouched),
        vec![sq("d3"), sq("d4")]
    );
}

#[test]
fn en_passant_after_black_double_step() {
    let mut state = BoardState::standard();
    play(&mut state, "e2", "e4");
    play(&mut state, "a7", "a6");
    play(&mut state, "e4", "e5");
    play(&mut state, "d7", "d5");

    let white = state.occupant(sq("e5")).unwrap();
    let white_id = white.id();
    let black_id = state.occupant(sq("d5")).unwrap().id();
    assert!(white.definition().captures(&state, white).contains(&sq("d6")));

    let mv = apply_move(&mut state, &mut AutoQueen, white_id, sq("d6")).unwrap();
    assert!(mv.flags.en_passant);
    assert!(mv.flags.capture);
    assert_eq!(state.piece(black_id), None);
    assert_eq!(state.captured(), &[black_id]);
    assert!(!state.is_occupied(sq("d5")));
    assert_eq!(state.occupant(sq("d6")).unwrap().id(), white_id);
    assert_eq!(state.turn(), Player::Black);
    assert_eq!(state.last_move(), Some(&mv));
    assert_eq!(state.history().len(), 5);
}

#[test]
fn en_passant_expires_after_one_move() {
    let mut state = BoardState::standard();
    play(&mut state, "e2", "e4");
    play(&mut state, "a7", "a6");
    play(&mut state, "e4", "e5");
    play(&mut state, "d7", "d5");
    play(&mut state, "h2", "h3");
    play(&mut state, "a6", "a5");

    let white = state.occupant(sq("e5")).unwrap();
    let id = white.id();
    assert!(!white.definition().captures(&state, white).contains(&sq("d6")));
    assert!(matches!(
        apply_move(&mut state, &mut AutoQueen, id, sq("d6")),
        Err(MoveError::IllegalDestination { .. })
    ));
}

#[test]
fn black_takes_en_passant_too() {
    let mut state = BoardState::from_fen("4k3/8/8/8/5p2/8/4P3/4K3 w").unwrap();
    play(&mut state, "e2", "e4");

    let black = state.occupant(sq("f4")).unwrap();
    assert_eq!(black.definition().captures(&state, black), vec![sq("e3")]);

    let mv = play(&mut state, "f4", "e3");
    assert!(mv.flags.en_passant);
    assert!(!state.is_occupied(sq("e4")));
    assert_eq!(state.captured().len(), 1);
}

#[test]
fn promotion_asks_once_with_four_candidates() {
    let mut state = BoardState::from_fen("7k/3P4/8/8/8/8/8/K7 w").unwrap();
    let pawn = state.occupant(sq("d7")).unwrap().id();
    let mut game = Recorder {
        answer: PROMOTION_CHOICES[2],
        calls: Vec::new(),
    };

    let mv = apply_move(&mut state, &mut game, pawn, sq("d8")).unwrap();

    assert_eq!(
        game.calls,
        vec![(
            pawn,
            sq("d8"),
            vec![
                PieceKind::Knight,
                PieceKind::Rook,
                PieceKind::Bishop,
                PieceKind::Queen
            ]
        )]
    );
    let piece = state.piece(pawn).unwrap();
    assert_eq!(piece.definition(), PROMOTION_CHOICES[2]);
    assert_eq!(piece.kind(), PieceKind::Bishop);
    assert_eq!(piece.square(), sq("d8"));
    assert_eq!(mv.flags.promotion, Some(PieceKind::Bishop));
    assert_eq!(state.turn(), Player::Black);

    // The promoted piece now moves as a bishop.
    state.pass_turn();
    let piece = state.piece(pawn).unwrap();
    assert_eq!(piece.definition().moves(&state, piece).len(), 7);
}

#[test]
fn ordinary_moves_never_ask_the_game() {
    let mut state = BoardState::standard();
    let mut game = Recorder {
        answer: PROMOTION_CHOICES[3],
        calls: Vec::new(),
    };
    for (from, to) in [("g1", "f3"), ("b8", "c6"), ("e2", "e4"), ("c6", "d4")] {
        let id = state.occupant(sq(from)).unwrap().id();
        apply_move(&mut state, &mut game, id, sq(to)).unwrap();
    }
    assert!(game.calls.is_empty());
    assert_eq!(state.turn(), Player::White);
}

#[test]
fn every_generated_move_applies() {
    let mut state = BoardState::from_fen("r3k2r/1P4P1/8/2pP4/8/8/8/R3K2R w").unwrap();
    play(&mut state, "a1", "a2");
    play(&mut state, "c5", "c4");
    for mv in generate_moves(&state) {
        let mut scratch = state.clone();
        let applied = apply_move(&mut scratch, &mut AutoQueen, mv.piece, mv.to).unwrap();
        assert_eq!((applied.from, applied.to), (mv.from, mv.to));
        assert_eq!(scratch.turn(), Player::Black);
        assert_eq!(scratch.history().len(), state.history().len() + 1);
        assert_eq!(
            scratch.pieces().count() + scratch.captured().len(),
            state.pieces().count() + state.captured().len()
        );
    }
}

#[test]
fn history_exports_as_json() {
    let mut state = BoardState::from_fen("8/8/8/3pP3/8/8/8/4K2k b").unwrap();
    play(&mut state, "h1", "h2");
    play(&mut state, "e1", "e2");
    play(&mut state, "h2", "h1");

    let history: Vec<&Move> = state.history().iter().collect();
    let json = serde_json::to_string(&history).unwrap();
    let back: Vec<Move> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), 3);
    assert_eq!(back[0].to, sq("h1"));
    assert_eq!(back[2].from, sq("h1"));
}
