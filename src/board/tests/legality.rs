//! Full-board legality: check detection, move generation, move application.

use std::str::FromStr;

use crate::board::{Board, Color, Move, Piece, Square};

fn sq(notation: &str) -> Square {
    Square::from_str(notation).unwrap()
}

fn board(fen: &str) -> Board {
    Board::try_from_fen(fen).unwrap()
}

#[test]
fn starting_position_has_twenty_moves() {
    let board = Board::new();
    let moves = board.generate_moves();
    assert_eq!(moves.len(), 20);

    // 16 pawn moves, 4 knight moves, nothing else can stir
    let pawn_moves = moves
        .iter()
        .filter(|m| m.piece() == Some(Piece::Pawn))
        .count();
    assert_eq!(pawn_moves, 16);
    assert!(moves.iter().all(|m| !m.is_capture()));
}

#[test]
fn generation_is_deterministic() {
    let board = board("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let first = board.generate_moves();
    let second = board.generate_moves();
    assert_eq!(first.as_slice(), second.as_slice());
}

#[test]
fn rook_check_is_detected() {
    let board = board("4k3/8/8/8/8/8/4R3/4K3 b - - 0 1");
    assert!(board.in_check(Color::Black));
    assert!(!board.in_check(Color::White));
    assert_eq!(board.side_in_check(), Some(Color::Black));
    assert!(board.is_valid());
}

#[test]
fn both_kings_attacked_is_invalid_and_unattributed() {
    let board = board("4k3/4R3/8/8/8/8/4r3/4K3 w - - 0 1");
    assert!(board.in_check(Color::White));
    assert!(board.in_check(Color::Black));
    assert_eq!(board.side_in_check(), None);
    assert!(!board.is_valid());
}

#[test]
fn checked_side_must_resolve_the_check() {
    let board = board("4k3/8/8/8/8/8/4R3/4K3 b - - 0 1");
    for mv in board.generate_moves() {
        let mut child = board.clone();
        child.make_move(mv);
        assert!(!child.in_check(Color::Black), "{mv} leaves the check");
    }
}

#[test]
fn stalemate_yields_empty_list() {
    let board = board("8/8/8/3k4/8/8/5q2/7K w - - 0 1");
    assert!(board.generate_moves().is_empty());
    assert!(board.is_stalemate());
    assert!(!board.is_checkmate());
    assert!(!board.in_check(Color::White));
}

#[test]
fn fools_mate_is_checkmate() {
    let board = board("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    assert!(board.in_check(Color::White));
    assert!(board.is_checkmate());
    assert!(!board.is_stalemate());
    assert!(board.generate_moves().is_empty());
}

#[test]
fn open_castling_position_has_twenty_six_moves() {
    let board = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let moves = board.generate_moves();
    assert_eq!(moves.len(), 26);

    let kingside = Move::quiet(Piece::King, sq("e1"), sq("g1"));
    let queenside = Move::quiet(Piece::King, sq("e1"), sq("c1"));
    assert!(moves.find(kingside).is_some());
    assert!(moves.find(queenside).is_some());
    assert!(kingside.is_castle_kingside());
    assert!(queenside.is_castle_queenside());
}

#[test]
fn castling_is_blocked_through_attacked_transit() {
    // Black rook on f7 covers f1: no kingside castle, queenside still on
    let board = board("4k3/5r2/8/8/8/8/8/R3K2R w KQ - 0 1");
    let moves = board.generate_moves();
    assert!(moves
        .find(Move::quiet(Piece::King, sq("e1"), sq("g1")))
        .is_none());
    assert!(moves
        .find(Move::quiet(Piece::King, sq("e1"), sq("c1")))
        .is_some());
}

#[test]
fn castling_needs_an_empty_path() {
    let board = Board::new();
    let moves = board.generate_moves();
    assert!(moves.iter().all(|m| !m.is_castling()));
}

#[test]
fn castling_moves_both_king_and_rook() {
    let mut white = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    white.make_move(Move::quiet(Piece::King, sq("e1"), sq("g1")));
    assert_eq!(white.piece_at(sq("g1")), Some((Color::White, Piece::King)));
    assert_eq!(white.piece_at(sq("f1")), Some((Color::White, Piece::Rook)));
    assert!(white.is_empty(sq("e1")));
    assert!(white.is_empty(sq("h1")));
    assert!(!white.castling().has(Color::White, true));
    assert!(!white.castling().has(Color::White, false));
    assert!(white.castling().has(Color::Black, true));

    let mut black = board("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    black.make_move(Move::quiet(Piece::King, sq("e8"), sq("c8")));
    assert_eq!(black.piece_at(sq("c8")), Some((Color::Black, Piece::King)));
    assert_eq!(black.piece_at(sq("d8")), Some((Color::Black, Piece::Rook)));
    assert!(black.is_empty(sq("a8")));
}

#[test]
fn en_passant_capture_is_generated_and_applied() {
    let mut board = board("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3");
    assert_eq!(board.en_passant_target(), Some(sq("d6")));

    let ep = Move::new(Piece::Pawn, sq("e5"), sq("d6"), Some(Piece::Pawn), None);
    let moves = board.generate_moves();
    assert!(moves.find(ep).is_some());

    board.make_move(ep);
    assert_eq!(board.piece_at(sq("d6")), Some((Color::White, Piece::Pawn)));
    assert!(board.is_empty(sq("d5")), "captured pawn must vanish from d5");
    assert!(board.is_empty(sq("e5")));
    assert_eq!(board.en_passant_target(), None);
    assert_eq!(board.halfmove_clock(), 0);
}

#[test]
fn promotion_fans_out_to_four_moves() {
    let board = board("8/P6k/8/8/8/8/8/K7 w - - 0 1");
    let moves = board.generate_moves();

    let promotions: Vec<Move> = moves
        .iter()
        .copied()
        .filter(|m| m.is_promotion())
        .collect();
    assert_eq!(promotions.len(), 4);
    for promo in [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight] {
        assert!(promotions.iter().any(|m| m.promotion() == Some(promo)));
    }
    assert!(promotions
        .iter()
        .all(|m| m.from() == sq("a7") && m.to() == sq("a8")));
}

#[test]
fn applying_a_promotion_replaces_the_pawn() {
    let mut board = board("8/P6k/8/8/8/8/8/K7 w - - 0 1");
    board.make_move(Move::new(
        Piece::Pawn,
        sq("a7"),
        sq("a8"),
        None,
        Some(Piece::Queen),
    ));
    assert_eq!(board.piece_at(sq("a8")), Some((Color::White, Piece::Queen)));
    assert!(board.is_empty(sq("a7")));
    assert_eq!(board.army(Color::White).pieces(Piece::Pawn).popcount(), 0);
}

#[test]
fn pinned_rook_stays_on_the_pin_line() {
    let board = board("4k3/8/8/8/4r3/8/4R3/4K3 w - - 0 1");
    for mv in board.generate_moves() {
        if mv.from() == sq("e2") {
            assert_eq!(mv.to().file(), 4, "{mv} breaks the pin");
        }
    }
    // The capture along the pin line is still available
    let capture = Move::new(Piece::Rook, sq("e2"), sq("e4"), Some(Piece::Rook), None);
    assert!(board.generate_moves().find(capture).is_some());
}

#[test]
fn double_push_sets_the_en_passant_target() {
    let mut board = Board::new();
    board.make_move(Move::quiet(Piece::Pawn, sq("e2"), sq("e4")));

    assert_eq!(board.side_to_move(), Color::Black);
    assert_eq!(board.en_passant_target(), Some(sq("e3")));
    assert_eq!(board.halfmove_clock(), 0);
    assert_eq!(board.fullmove_number(), 1);

    board.make_move(Move::quiet(Piece::Knight, sq("b8"), sq("c6")));
    assert_eq!(board.side_to_move(), Color::White);
    assert_eq!(board.en_passant_target(), None);
    assert_eq!(board.halfmove_clock(), 1);
    assert_eq!(board.fullmove_number(), 2);
}

#[test]
fn king_and_rook_moves_shed_castling_rights() {
    let mut after_king = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    after_king.make_move(Move::quiet(Piece::King, sq("e1"), sq("e2")));
    assert!(!after_king.castling().has(Color::White, true));
    assert!(!after_king.castling().has(Color::White, false));
    assert!(after_king.castling().has(Color::Black, true));
    assert!(after_king.castling().has(Color::Black, false));

    let mut after_rook = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    after_rook.make_move(Move::quiet(Piece::Rook, sq("h1"), sq("h2")));
    assert!(!after_rook.castling().has(Color::White, true));
    assert!(after_rook.castling().has(Color::White, false));
}

#[test]
fn capturing_a_rook_sheds_the_opponents_right() {
    let mut board = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    board.make_move(Move::new(
        Piece::Rook,
        sq("a1"),
        sq("a8"),
        Some(Piece::Rook),
        None,
    ));
    assert!(!board.castling().has(Color::Black, false));
    assert!(board.castling().has(Color::Black, true));
    assert!(!board.castling().has(Color::White, false));
    assert!(board.castling().has(Color::White, true));
    assert_eq!(board.halfmove_clock(), 0);
}

#[test]
fn null_move_leaves_the_position_untouched() {
    let mut board = Board::new();
    let before = board.clone();
    board.make_move(Move::NULL);
    assert_eq!(board, before);
}

#[test]
fn fen_round_trips() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
        "8/8/8/3k4/8/8/5q2/7K w - - 11 40",
        "4k3/8/8/8/8/8/4R3/4K3 b - - 5 20",
    ];
    for fen in fens {
        let board = board(fen);
        assert_eq!(board.to_fen(), fen);
    }
}

#[test]
fn start_position_round_trips() {
    let board = Board::new();
    assert_eq!(Board::try_from_fen(&board.to_fen()).unwrap(), board);
}

#[test]
fn malformed_fen_is_rejected() {
    assert!(Board::try_from_fen("").is_err());
    assert!(Board::try_from_fen("rnbqkbnr/pppppppp w KQkq -").is_err());
    assert!(Board::try_from_fen(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1"
    )
    .is_err());
    assert!(Board::try_from_fen(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KZkq - 0 1"
    )
    .is_err());
    assert!(Board::try_from_fen(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq zz 0 1"
    )
    .is_err());
}
