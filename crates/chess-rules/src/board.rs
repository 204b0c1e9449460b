//! Mailbox board representation.
//!
//! The board is a flat array of 64 optional piece values plus a few small
//! auxiliary fields: the per-color king location cache, the side to move and
//! the last committed move (consulted only for en passant). Pieces are plain
//! values, so `#[derive(Clone)]` yields a fully independent deep copy; that
//! clone is the only mechanism the engine uses to explore hypothetical moves
//! without touching the live board.

use std::fmt;

use chess_core::{Color, File, Location, MoveMeta, Piece, PieceKind, Rank, Special};

/// The most recently committed half-move.
///
/// Kept for exactly one half-move: a pawn may capture en passant only
/// immediately after the opposing pawn's double push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastMove {
    pub from: Location,
    pub to: Location,
    /// Kind of the piece that moved (before any promotion substitution).
    pub kind: PieceKind,
}

impl LastMove {
    /// Returns true if this was a pawn double push.
    #[inline]
    pub fn is_double_push(&self) -> bool {
        self.kind == PieceKind::Pawn && self.from.row().abs_diff(self.to.row()) == 2
    }
}

/// The 8x8 grid of occupants, turn indicator and en-passant memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chessboard {
    squares: [Option<Piece>; 64],
    kings: [Option<Location>; 2],
    to_move: Color,
    last_move: Option<LastMove>,
}

impl Chessboard {
    /// Creates an empty board with White to move.
    pub fn empty() -> Self {
        Chessboard {
            squares: [None; 64],
            kings: [None; 2],
            to_move: Color::White,
            last_move: None,
        }
    }

    /// Creates the standard starting position.
    pub fn standard() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Chessboard::empty();
        for color in [Color::White, Color::Black] {
            let back = Rank::from_index(color.back_rank()).expect("back rank in range");
            let pawns = Rank::from_index(color.pawn_start_rank()).expect("pawn rank in range");
            for (file, kind) in File::ALL.into_iter().zip(BACK_RANK) {
                board.place(Piece::new(kind, color), Location::new(file, back));
                board.place(Piece::new(PieceKind::Pawn, color), Location::new(file, pawns));
            }
        }
        board
    }

    /// Returns the occupant of a cell, if any.
    #[inline]
    pub fn piece_at(&self, at: Location) -> Option<Piece> {
        self.squares[at.index()]
    }

    /// Puts a piece on a cell, replacing any previous occupant.
    ///
    /// Keeps the king location cache in sync.
    pub fn place(&mut self, piece: Piece, at: Location) {
        self.squares[at.index()] = Some(piece);
        if piece.kind == PieceKind::King {
            self.kings[piece.color.index()] = Some(at);
        }
    }

    /// Removes and returns the occupant of a cell.
    pub fn remove(&mut self, at: Location) -> Option<Piece> {
        let removed = self.squares[at.index()].take();
        if let Some(piece) = removed {
            if piece.kind == PieceKind::King && self.kings[piece.color.index()] == Some(at) {
                self.kings[piece.color.index()] = None;
            }
        }
        removed
    }

    /// Returns the cached location of the given color's king.
    ///
    /// `None` only on hand-built boards that never received that king; in a
    /// legal game exactly one king per color is always present.
    #[inline]
    pub fn king_location(&self, color: Color) -> Option<Location> {
        self.kings[color.index()]
    }

    /// Returns the side to move.
    #[inline]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Overrides the side to move. Intended for position setup.
    #[inline]
    pub fn set_to_move(&mut self, color: Color) {
        self.to_move = color;
    }

    /// Returns the last committed half-move, if any.
    #[inline]
    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    /// Iterates over every occupied cell.
    pub fn pieces(&self) -> impl Iterator<Item = (Location, Piece)> + '_ {
        self.squares.iter().enumerate().filter_map(|(i, cell)| {
            cell.map(|piece| {
                let loc = Location::from_coords((i % 8) as u8, (i / 8) as u8)
                    .expect("flat index is in range");
                (loc, piece)
            })
        })
    }

    /// Iterates over the occupied cells of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Location, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// Commits an already-validated move, including all special-move side
    /// effects, then flips the turn.
    ///
    /// The caller is responsible for legality; this is shared verbatim by the
    /// live commit path and by legality simulation on clones, so the two can
    /// never drift apart. `promotion` is the substitute kind used when the
    /// move carries the promotion tag and is ignored otherwise.
    pub fn apply_unchecked(
        &mut self,
        from: Location,
        to: Location,
        meta: MoveMeta,
        promotion: PieceKind,
    ) {
        let Some(mut piece) = self.remove(from) else {
            return;
        };
        let moved_kind = piece.kind;
        piece.mark_moved();

        match meta.special {
            Special::EnPassant => {
                // The captured pawn sits behind the destination, on the
                // mover's origin row.
                if let Some(passed) = Location::from_coords(to.col(), from.row()) {
                    self.remove(passed);
                }
            }
            Special::CastleKingside => {
                self.relocate_castling_rook(piece.color, File::H, File::F);
            }
            Special::CastleQueenside => {
                self.relocate_castling_rook(piece.color, File::A, File::D);
            }
            Special::Promotion => {
                piece.kind = promotion;
            }
            Special::None | Special::DoublePush => {}
        }

        // An ordinary capture is implicit: placing over the occupant drops it.
        self.place(piece, to);

        self.last_move = Some(LastMove {
            from,
            to,
            kind: moved_kind,
        });
        self.to_move = self.to_move.opponent();
    }

    fn relocate_castling_rook(&mut self, color: Color, corner: File, target: File) {
        let back = Rank::from_index(color.back_rank()).expect("back rank in range");
        if let Some(mut rook) = self.remove(Location::new(corner, back)) {
            rook.mark_moved();
            self.place(rook, Location::new(target, back));
        }
    }
}

impl Default for Chessboard {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Chessboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{} ", rank)?;
            for file in File::ALL {
                match self.piece_at(Location::new(file, rank)) {
                    Some(piece) => write!(f, " {}", piece.symbol())?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   A B C D E F G H")
    }
}
