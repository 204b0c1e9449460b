//! End-to-end scenarios driven through the game controller.

use chess_core::{Color, Location, Piece, PieceKind, Promotion};
use chess_rules::{Chessboard, Game, GameState, MoveError, Status};

fn loc(s: &str) -> Location {
    s.parse().unwrap()
}

fn board_with(pieces: &[(&str, PieceKind, Color)]) -> Chessboard {
    let mut board = Chessboard::empty();
    for &(at, kind, color) in pieces {
        board.place(Piece::new(kind, color), loc(at));
    }
    board
}

#[test]
fn bare_castling_succeeds_both_wings() {
    // White king on E1, rooks on A1/H1, nothing else in the way.
    let base = board_with(&[
        ("E1", PieceKind::King, Color::White),
        ("A1", PieceKind::Rook, Color::White),
        ("H1", PieceKind::Rook, Color::White),
    ]);

    let mut game = Game::from_board(base.clone());
    game.apply_move(loc("E1"), loc("G1")).unwrap();
    let king = game.board().piece_at(loc("G1")).unwrap();
    let rook = game.board().piece_at(loc("F1")).unwrap();
    assert_eq!(king.kind, PieceKind::King);
    assert_eq!(rook.kind, PieceKind::Rook);
    assert!(king.has_moved);
    assert!(rook.has_moved);
    assert_eq!(game.board().piece_at(loc("E1")), None);
    assert_eq!(game.board().piece_at(loc("H1")), None);

    let mut game = Game::from_board(base);
    game.apply_move(loc("E1"), loc("C1")).unwrap();
    assert_eq!(game.board().piece_at(loc("C1")).unwrap().kind, PieceKind::King);
    assert_eq!(game.board().piece_at(loc("D1")).unwrap().kind, PieceKind::Rook);
    assert_eq!(game.board().piece_at(loc("A1")), None);
}

#[test]
fn rook_on_c6_denies_queenside_only() {
    let board = board_with(&[
        ("E1", PieceKind::King, Color::White),
        ("A1", PieceKind::Rook, Color::White),
        ("H1", PieceKind::Rook, Color::White),
        ("C6", PieceKind::Rook, Color::Black),
        ("H8", PieceKind::King, Color::Black),
    ]);

    let mut game = Game::from_board(board.clone());
    let err = game.apply_move(loc("E1"), loc("C1")).unwrap_err();
    assert!(matches!(err, MoveError::Invalid { .. }));

    let mut game = Game::from_board(board);
    game.apply_move(loc("E1"), loc("G1")).unwrap();
    assert_eq!(game.board().piece_at(loc("G1")).unwrap().kind, PieceKind::King);
}

#[test]
fn castling_rights_survive_other_moves_but_not_king_trips() {
    // Mirrors a full sequence: both sides castle-eligible, then the black
    // king steps out and back, after which only White keeps the right.
    let board = board_with(&[
        ("E1", PieceKind::King, Color::White),
        ("A1", PieceKind::Rook, Color::White),
        ("H1", PieceKind::Rook, Color::White),
        ("E8", PieceKind::King, Color::Black),
        ("A8", PieceKind::Rook, Color::Black),
        ("H8", PieceKind::Rook, Color::Black),
    ]);
    let game = Game::from_board(board);

    // Every castle works on a fresh clone.
    for (mover, from, to) in [
        (Color::White, "E1", "G1"),
        (Color::White, "E1", "C1"),
        (Color::Black, "E8", "G8"),
        (Color::Black, "E8", "C8"),
    ] {
        let mut setup = game.board().clone();
        setup.set_to_move(mover);
        let mut probe = Game::from_board(setup);
        probe.apply_move(loc(from), loc(to)).unwrap();
    }

    // Black king takes a round trip; White shuffles a rook meanwhile.
    let mut game = game;
    let mut setup = game.board().clone();
    setup.set_to_move(Color::Black);
    game = Game::from_board(setup);

    game.apply_move(loc("E8"), loc("D8")).unwrap();
    game.apply_move(loc("H1"), loc("G1")).unwrap();
    game.apply_move(loc("D8"), loc("E8")).unwrap();
    game.apply_move(loc("G1"), loc("H1")).unwrap();

    // Black moved its king: both wings gone.
    let mut probe = game.clone();
    assert!(probe.apply_move(loc("E8"), loc("G8")).is_err());
    let mut probe = game.clone();
    assert!(probe.apply_move(loc("E8"), loc("C8")).is_err());

    // White moved the kingside rook (even though it returned home), so only
    // the queenside castle remains.
    let mut setup = game.board().clone();
    setup.set_to_move(Color::White);
    let mut probe = Game::from_board(setup.clone());
    assert!(probe.apply_move(loc("E1"), loc("G1")).is_err());
    let mut probe = Game::from_board(setup);
    probe.apply_move(loc("E1"), loc("C1")).unwrap();
}

#[test]
fn en_passant_window_is_one_half_move() {
    let mut game = Game::new();
    game.apply_move(loc("E2"), loc("E4")).unwrap();
    game.apply_move(loc("A7"), loc("A6")).unwrap();
    game.apply_move(loc("E4"), loc("E5")).unwrap();
    game.apply_move(loc("D7"), loc("D5")).unwrap();

    // Immediately after the double push the capture is offered.
    assert!(game.available_moves(loc("E5")).contains(loc("D6")));

    let mut deferred = game.clone();
    deferred.apply_move(loc("B1"), loc("C3")).unwrap();
    deferred.apply_move(loc("A6"), loc("A5")).unwrap();
    // One half-move pair later the window has closed.
    assert!(!deferred.available_moves(loc("E5")).contains(loc("D6")));

    game.apply_move(loc("E5"), loc("D6")).unwrap();
    assert_eq!(game.board().piece_at(loc("D5")), None);
    assert_eq!(game.board().piece_at(loc("D6")).unwrap().kind, PieceKind::Pawn);
}

#[test]
fn scholars_mate() {
    let mut game = Game::new();
    for (from, to) in [
        ("E2", "E4"),
        ("E7", "E5"),
        ("F1", "C4"),
        ("B8", "C6"),
        ("D1", "H5"),
        ("G8", "F6"),
        ("H5", "F7"),
    ] {
        game.apply_move(loc(from), loc(to)).unwrap();
    }

    assert_eq!(
        game.status(),
        Status::Checkmate {
            winner: Color::White
        }
    );
    assert_eq!(game.state(), GameState::WhiteWins);
}

#[test]
fn check_flagged_playing_state() {
    // The attacked side still has material and an escape: game goes on.
    let mut board = board_with(&[
        ("E1", PieceKind::King, Color::White),
        ("A2", PieceKind::Rook, Color::White),
        ("E8", PieceKind::King, Color::Black),
        ("E6", PieceKind::Rook, Color::Black),
    ]);
    board.set_to_move(Color::Black);
    let mut game = Game::from_board(board);
    game.apply_move(loc("E6"), loc("E5")).unwrap();

    assert_eq!(
        game.status(),
        Status::Playing {
            check: Some(Color::White)
        }
    );
    assert_eq!(game.state(), GameState::Playing);
    assert!(game.is_check());
}

#[test]
fn promotion_protocol_end_to_end() {
    let mut board = board_with(&[
        ("A7", PieceKind::Pawn, Color::White),
        ("E1", PieceKind::King, Color::White),
        ("E8", PieceKind::King, Color::Black),
    ]);
    board.set_to_move(Color::White);
    let mut game = Game::from_board(board);

    assert!(game.is_promotion_required(loc("A7"), loc("A8")));

    let err = game.apply_move(loc("A7"), loc("A8")).unwrap_err();
    assert!(matches!(err, MoveError::PromotionRequired { .. }));
    assert_eq!(game.board().piece_at(loc("A7")).unwrap().kind, PieceKind::Pawn);

    game.set_promotion(Promotion::Queen);
    game.apply_move(loc("A7"), loc("A8")).unwrap();

    let queen = game.board().piece_at(loc("A8")).unwrap();
    assert_eq!(queen.kind, PieceKind::Queen);
    assert_eq!(queen.color, Color::White);
}

#[test]
fn smothered_corner_mate_and_stalemate_distinction() {
    // Checkmate: no moves and in check.
    let mut board = board_with(&[
        ("H8", PieceKind::King, Color::Black),
        ("G7", PieceKind::Pawn, Color::Black),
        ("H7", PieceKind::Pawn, Color::Black),
        ("A8", PieceKind::Rook, Color::White),
        ("C1", PieceKind::King, Color::White),
    ]);
    board.set_to_move(Color::Black);
    let game = Game::from_board(board);
    assert_eq!(
        game.status(),
        Status::Checkmate {
            winner: Color::White
        }
    );
    assert_eq!(game.state(), GameState::WhiteWins);

    // Stalemate: no moves, not in check.
    let mut board = board_with(&[
        ("H8", PieceKind::King, Color::Black),
        ("F7", PieceKind::Queen, Color::White),
        ("G6", PieceKind::King, Color::White),
    ]);
    board.set_to_move(Color::Black);
    let game = Game::from_board(board);
    assert_eq!(game.status(), Status::Stalemate);
    assert_eq!(game.state(), GameState::Draw);
}

#[test]
fn rejected_moves_never_mutate() {
    let mut game = Game::new();
    let before = game.board().clone();

    assert!(game.apply_move(loc("E2"), loc("D3")).is_err());
    assert!(game.apply_move(loc("E7"), loc("E5")).is_err());
    assert!(game.apply_move(loc("E4"), loc("E5")).is_err());

    assert_eq!(game.board(), &before);
    assert_eq!(game.to_move(), Color::White);
    assert_eq!(game.state(), GameState::Playing);
}
