//! Make/undo move tests.

use super::{find_move, play, position};
use crate::board::{CastlingRights, Color, GameState, Piece, Square};
use rand::prelude::*;

#[test]
fn test_en_passant_make_undo() {
    let mut state = position("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let before = state.snapshot();
    let mv = find_move(&mut state, "e5", "f6");
    assert!(mv.is_en_passant);

    state.make_move(&mv);
    assert_eq!(state.piece_at(Square(3, 5)), None, "captured pawn removed");
    assert_eq!(
        state.piece_at(Square(2, 5)),
        Some((Color::White, Piece::Pawn))
    );

    assert!(state.undo_move());
    assert_eq!(state.snapshot(), before);
    assert_eq!(
        state.piece_at(Square(3, 5)),
        Some((Color::Black, Piece::Pawn)),
        "captured pawn restored beside the capturing pawn, not on f6"
    );
    assert_eq!(state.piece_at(Square(2, 5)), None);
}

#[test]
fn test_promotion_make_undo() {
    let mut state = position("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let before = state.snapshot();
    let mv = find_move(&mut state, "a7", "a8");
    assert!(mv.is_promotion);

    state.make_move(&mv);
    assert_eq!(
        state.piece_at(Square(0, 0)),
        Some((Color::White, Piece::Queen))
    );

    state.undo_move();
    assert_eq!(state.snapshot(), before);
    assert_eq!(
        state.piece_at(Square(1, 0)),
        Some((Color::White, Piece::Pawn))
    );
}

#[test]
fn test_castle_make_undo_moves_rook() {
    let mut state = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let before = state.snapshot();

    let kingside = find_move(&mut state, "e1", "g1");
    assert!(kingside.is_castle);
    state.make_move(&kingside);
    assert_eq!(state.piece_at(Square(7, 5)), Some((Color::White, Piece::Rook)));
    assert_eq!(state.piece_at(Square(7, 7)), None);
    assert_eq!(state.king_square(Color::White), Square(7, 6));
    assert!(!state.castling_rights().white_kingside());
    assert!(!state.castling_rights().white_queenside());
    assert!(state.castling_rights().black_kingside());

    state.undo_move();
    assert_eq!(state.snapshot(), before);

    let queenside = find_move(&mut state, "e1", "c1");
    state.make_move(&queenside);
    assert_eq!(state.piece_at(Square(7, 3)), Some((Color::White, Piece::Rook)));
    assert_eq!(state.piece_at(Square(7, 0)), None);
    state.undo_move();
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_undo_every_legal_move_restores_position() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
    ];
    for fen in fens {
        let mut state = position(fen);
        let before = state.snapshot();
        for mv in state.generate_moves() {
            state.make_move(&mv);
            state.undo_move();
            assert_eq!(state.snapshot(), before, "undo of {mv} in {fen}");
            assert_eq!(state.to_fen(), position(fen).to_fen());
        }
    }
}

#[test]
fn test_undo_on_empty_log_is_noop() {
    let mut state = GameState::new();
    let before = state.snapshot();
    assert!(!state.undo_move());
    assert_eq!(state.snapshot(), before);
    assert_eq!(state.en_passant_log().len(), 1);
    assert_eq!(state.castle_rights_log().len(), 1);
}

#[test]
fn test_logs_track_move_log() {
    let mut state = GameState::new();
    play(&mut state, &["e2e4", "e7e5", "g1f3"]);
    assert_eq!(state.move_log().len(), 3);
    assert_eq!(state.en_passant_log().len(), 4);
    assert_eq!(state.castle_rights_log().len(), 4);
    assert_eq!(state.en_passant_log()[0], None);
    assert_eq!(state.en_passant_log()[1], Some("e3".parse().unwrap()));
    assert_eq!(state.en_passant_log()[2], Some("e6".parse().unwrap()));
    assert_eq!(state.en_passant_target(), None);

    state.undo_move();
    assert_eq!(state.en_passant_target(), Some("e6".parse().unwrap()));
    state.undo_move();
    assert_eq!(state.en_passant_target(), Some("e3".parse().unwrap()));
    state.undo_move();
    assert_eq!(state.en_passant_target(), None);
    assert_eq!(state.castling_rights(), CastlingRights::all());
}

#[test]
fn test_random_playout_unwinds_to_start() {
    let mut state = GameState::new();
    let start = state.snapshot();
    let mut rng = StdRng::seed_from_u64(7);
    let mut snapshots = Vec::new();

    for _ in 0..60 {
        let moves = state.generate_moves();
        let Some(mv) = moves.choose(&mut rng).copied() else {
            break;
        };
        snapshots.push(state.snapshot());
        state.make_move(&mv);
    }

    while let Some(expected) = snapshots.pop() {
        assert!(state.undo_move());
        assert_eq!(state.snapshot(), expected);
    }
    assert_eq!(state.snapshot(), start);
}

#[test]
fn test_undo_clears_terminal_flags() {
    let mut state = GameState::new();
    play(&mut state, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert!(state.generate_moves().is_empty());
    assert!(state.is_checkmate());

    state.undo_move();
    assert!(!state.is_checkmate());
    assert!(!state.is_stalemate());
}
