//! King-safety legality filtering.
//!
//! Every raw candidate is simulated on a cloned board and kept only if the
//! mover's king is not attacked afterwards. Simulate-then-discard is the
//! engine's single source of truth for "a king may never be left in, or
//! moved into, check": there is no incremental check-delta bookkeeping to
//! keep consistent. Board size is fixed and small, so the clone is a cheap
//! value copy.

use chess_core::{Color, File, Location, MoveList, MoveMeta, PieceKind, Rank, Special};

use crate::board::Chessboard;
use crate::check::{is_attacked, is_in_check};
use crate::movegen::raw_pattern;

/// Which wing a castle goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// The file of the canonical rook corner for this side.
    const fn rook_file(self) -> File {
        match self {
            CastleSide::Kingside => File::H,
            CastleSide::Queenside => File::A,
        }
    }

    /// The file the king ends up on.
    const fn king_target_file(self) -> File {
        match self {
            CastleSide::Kingside => File::G,
            CastleSide::Queenside => File::C,
        }
    }

    /// Files that must be empty between king and rook.
    const fn between_files(self) -> &'static [File] {
        match self {
            CastleSide::Kingside => &[File::F, File::G],
            CastleSide::Queenside => &[File::B, File::C, File::D],
        }
    }

    /// Files the king crosses (destination included) that must be safe.
    const fn crossing_files(self) -> &'static [File] {
        match self {
            CastleSide::Kingside => &[File::F, File::G],
            CastleSide::Queenside => &[File::D, File::C],
        }
    }

    const fn special(self) -> Special {
        match self {
            CastleSide::Kingside => Special::CastleKingside,
            CastleSide::Queenside => Special::CastleQueenside,
        }
    }
}

/// Returns the king-safety-legal moves for the occupant of `from`.
///
/// Empty for a vacant cell. The turn indicator is deliberately not consulted
/// here; the game controller enforces whose turn it is.
pub fn legal_moves(board: &Chessboard, from: Location) -> MoveList {
    let Some(piece) = board.piece_at(from) else {
        return MoveList::new();
    };

    let mut legal = MoveList::new();
    for (to, meta) in raw_pattern(board, from).iter() {
        if piece.kind == PieceKind::King && near_enemy_king(board, piece.color, to) {
            // Two kings may never occupy adjacent cells. The opposing king's
            // own raw pattern does not cover the cell it occupies, so the
            // simulate-and-detect approach alone cannot catch every case.
            continue;
        }
        if simulate_is_safe(board, from, to, meta, piece.color) {
            legal.insert(to, meta);
        }
    }

    if piece.kind == PieceKind::King {
        for side in [CastleSide::Kingside, CastleSide::Queenside] {
            if can_castle(board, piece.color, side) {
                let back = Rank::from_index(piece.color.back_rank()).expect("back rank in range");
                legal.insert(
                    Location::new(side.king_target_file(), back),
                    MoveMeta::special(side.special()),
                );
            }
        }
    }

    legal
}

/// Applies the candidate on a clone and reports whether the mover's king
/// survives unattacked. Promotions simulate with a queen substitute; the
/// choice cannot affect whether the mover's own king ends up attacked.
fn simulate_is_safe(
    board: &Chessboard,
    from: Location,
    to: Location,
    meta: MoveMeta,
    mover: Color,
) -> bool {
    let mut clone = board.clone();
    clone.apply_unchecked(from, to, meta, PieceKind::Queen);
    !is_in_check(&clone, mover)
}

fn near_enemy_king(board: &Chessboard, mover: Color, to: Location) -> bool {
    board
        .king_location(mover.opponent())
        .is_some_and(|enemy| to.chebyshev(enemy) <= 1)
}

/// Checks full castling eligibility for one wing:
/// the king stands unmoved on its home cell and is not in check, the
/// canonical corner holds an unmoved rook of the same color, the cells
/// between them are empty, and neither cell the king crosses is attacked.
pub fn can_castle(board: &Chessboard, color: Color, side: CastleSide) -> bool {
    let back = Rank::from_index(color.back_rank()).expect("back rank in range");
    let king_home = Location::new(File::E, back);

    let Some(king) = board.piece_at(king_home) else {
        return false;
    };
    if king.kind != PieceKind::King || king.color != color || king.has_moved {
        return false;
    }
    if is_attacked(board, king_home, color) {
        return false;
    }

    let Some(rook) = board.piece_at(Location::new(side.rook_file(), back)) else {
        return false;
    };
    if rook.kind != PieceKind::Rook || rook.color != color || rook.has_moved {
        return false;
    }

    if side
        .between_files()
        .iter()
        .any(|&file| board.piece_at(Location::new(file, back)).is_some())
    {
        return false;
    }

    side.crossing_files()
        .iter()
        .all(|&file| !is_attacked(board, Location::new(file, back), color))
}
