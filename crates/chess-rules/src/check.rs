//! Check detection.
//!
//! A cell is attacked when any opposing piece's *raw* pattern reaches it.
//! Using the raw generator here (never the legality-filtered one) is
//! load-bearing: the legality filter calls into this module, so routing the
//! query through filtered moves would recurse forever. Kings count as
//! attackers like any other piece; the adjacency exclusion in the legality
//! layer is additive to this, not a substitute for it.

use chess_core::Color;
use chess_core::Location;

use crate::board::Chessboard;
use crate::movegen::raw_pattern;

/// Returns true if any piece opposing `defender` can reach `target` with a
/// raw (king-safety-ignoring) move.
pub fn is_attacked(board: &Chessboard, target: Location, defender: Color) -> bool {
    board
        .pieces_of(defender.opponent())
        .any(|(from, _)| raw_pattern(board, from).contains(target))
}

/// Returns true if the given color's king is currently attacked.
///
/// False on hand-built boards without that king.
pub fn is_in_check(board: &Chessboard, color: Color) -> bool {
    board
        .king_location(color)
        .is_some_and(|king| is_attacked(board, king, color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Piece, PieceKind};

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
    fn rook_attacks_along_rank_and_file() {
        let board = board_with(&[("A1", PieceKind::Rook, Color::Black)]);
        assert!(is_attacked(&board, loc("A8"), Color::White));
        assert!(is_attacked(&board, loc("H1"), Color::White));
        assert!(!is_attacked(&board, loc("B2"), Color::White));
    }

    #[test]
    fn attack_is_blocked_by_interposition() {
        let board = board_with(&[
            ("A1", PieceKind::Rook, Color::Black),
            ("A4", PieceKind::Pawn, Color::Black),
        ]);
        assert!(is_attacked(&board, loc("A3"), Color::White));
        assert!(!is_attacked(&board, loc("A8"), Color::White));
    }

    #[test]
    fn own_pieces_do_not_attack_their_color() {
        let board = board_with(&[("A1", PieceKind::Rook, Color::White)]);
        assert!(!is_attacked(&board, loc("A8"), Color::White));
        assert!(is_attacked(&board, loc("A8"), Color::Black));
    }

    #[test]
    fn pawn_attacks_diagonally() {
        let board = board_with(&[
            ("E4", PieceKind::Pawn, Color::Black),
            ("D3", PieceKind::Knight, Color::White),
        ]);
        assert!(is_attacked(&board, loc("D3"), Color::White));
    }

    #[test]
    fn kings_are_attackers_too() {
        let board = board_with(&[("E4", PieceKind::King, Color::Black)]);
        assert!(is_attacked(&board, loc("E5"), Color::White));
        assert!(is_attacked(&board, loc("D3"), Color::White));
        assert!(!is_attacked(&board, loc("E6"), Color::White));
    }

    #[test]
    fn is_in_check_uses_king_cache() {
        let board = board_with(&[
            ("E1", PieceKind::King, Color::White),
            ("E8", PieceKind::Rook, Color::Black),
        ]);
        assert!(is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));
    }

    #[test]
    fn missing_king_is_not_in_check() {
        let board = board_with(&[("E8", PieceKind::Rook, Color::Black)]);
        assert!(!is_in_check(&board, Color::White));
    }
}
