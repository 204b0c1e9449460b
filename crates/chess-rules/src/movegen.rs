//! Raw (unvalidated) move generation.
//!
//! [`raw_pattern`] enumerates the destinations a piece can reach by geometry
//! and occupancy alone. Nothing here filters on whether the mover's own king
//! is left in check; that is the legality layer's job. The check detector
//! also relies on these raw patterns, which is what breaks the mutual
//! recursion between "is this move legal" and "is the king attacked".

use chess_core::{Color, Location, MoveMeta, MovePattern, Piece, PieceKind, Special};

use crate::board::Chessboard;

/// Knight offset jumps.
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Diagonal ray directions.
const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// Orthogonal ray directions.
const ROOK_RAYS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// King single steps (also the queen's directions, one cell at a time).
const KING_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Builds the raw destination set for the occupant of `from`.
///
/// Returns an empty pattern for a vacant cell. Castling destinations are not
/// produced here: they depend on rook identity, intervening emptiness and
/// path safety, and are injected by the legality layer instead.
pub fn raw_pattern(board: &Chessboard, from: Location) -> MovePattern {
    match board.piece_at(from) {
        Some(piece) => PatternBuilder::new(board, from, piece).build(),
        None => MovePattern::new(),
    }
}

/// Accumulates destinations for one piece at one origin.
struct PatternBuilder<'a> {
    board: &'a Chessboard,
    from: Location,
    piece: Piece,
    pattern: MovePattern,
}

impl<'a> PatternBuilder<'a> {
    fn new(board: &'a Chessboard, from: Location, piece: Piece) -> Self {
        PatternBuilder {
            board,
            from,
            piece,
            pattern: MovePattern::new(),
        }
    }

    fn build(mut self) -> MovePattern {
        match self.piece.kind {
            PieceKind::Pawn => self.pawn(),
            PieceKind::Knight => self.jumps(&KNIGHT_JUMPS),
            PieceKind::Bishop => self.rays(&BISHOP_RAYS),
            PieceKind::Rook => self.rays(&ROOK_RAYS),
            PieceKind::Queen => {
                self.rays(&BISHOP_RAYS);
                self.rays(&ROOK_RAYS);
            }
            PieceKind::King => self.jumps(&KING_STEPS),
        }
        self.pattern
    }

    fn color(&self) -> Color {
        self.piece.color
    }

    /// Single-cell destinations: on-board and not blocked by a same-color
    /// piece. Used by knights and kings.
    fn jumps(&mut self, offsets: &[(i8, i8)]) {
        for &(dx, dy) in offsets {
            let Some(to) = self.from.offset(dx, dy) else {
                continue;
            };
            match self.board.piece_at(to) {
                None => self.pattern.insert(to, MoveMeta::QUIET),
                Some(occupant) if occupant.color != self.color() => {
                    self.pattern.insert(to, MoveMeta::CAPTURE);
                }
                Some(_) => {}
            }
        }
    }

    /// Ray casting for sliders: each ray stops at the first occupied cell,
    /// including it as a capture if it holds an opposing piece.
    fn rays(&mut self, directions: &[(i8, i8)]) {
        for &(dx, dy) in directions {
            let mut cursor = self.from;
            while let Some(to) = cursor.offset(dx, dy) {
                match self.board.piece_at(to) {
                    None => {
                        self.pattern.insert(to, MoveMeta::QUIET);
                        cursor = to;
                    }
                    Some(occupant) => {
                        if occupant.color != self.color() {
                            self.pattern.insert(to, MoveMeta::CAPTURE);
                        }
                        break;
                    }
                }
            }
        }
    }

    fn pawn(&mut self) {
        let dir = self.color().pawn_direction();
        let promotion_row = self.color().promotion_rank();

        // Forward steps onto empty cells only.
        if let Some(one) = self.from.offset(0, dir) {
            if self.board.piece_at(one).is_none() {
                self.insert_pawn_advance(one, promotion_row, Special::None);

                if self.from.row() == self.color().pawn_start_rank() {
                    if let Some(two) = one.offset(0, dir) {
                        if self.board.piece_at(two).is_none() {
                            self.insert_pawn_advance(two, promotion_row, Special::DoublePush);
                        }
                    }
                }
            }
        }

        // Diagonal captures.
        for dx in [-1, 1] {
            let Some(to) = self.from.offset(dx, dir) else {
                continue;
            };
            if let Some(occupant) = self.board.piece_at(to) {
                if occupant.color != self.color() {
                    let meta = if to.row() == promotion_row {
                        MoveMeta::special_capture(Special::Promotion)
                    } else {
                        MoveMeta::CAPTURE
                    };
                    self.pattern.insert(to, meta);
                }
            }
        }

        self.en_passant(dir);
    }

    fn insert_pawn_advance(&mut self, to: Location, promotion_row: u8, special: Special) {
        let meta = if to.row() == promotion_row {
            MoveMeta::special(Special::Promotion)
        } else {
            MoveMeta::special(special)
        };
        self.pattern.insert(to, meta);
    }

    /// En passant: capture onto the empty cell behind an opposing pawn that
    /// double-pushed past this pawn on the immediately preceding half-move.
    fn en_passant(&mut self, dir: i8) {
        let Some(last) = self.board.last_move() else {
            return;
        };
        if !last.is_double_push() {
            return;
        }
        // The double-pushed pawn must now sit beside this pawn.
        if last.to.row() != self.from.row() || last.to.col().abs_diff(self.from.col()) != 1 {
            return;
        }
        let Some(behind) = Location::from_coords(last.to.col(), self.from.row()) else {
            return;
        };
        let Some(to) = behind.offset(0, dir) else {
            return;
        };
        if self.board.piece_at(to).is_none() {
            self.pattern
                .insert(to, MoveMeta::special_capture(Special::EnPassant));
        }
    }
}
