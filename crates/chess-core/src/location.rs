//! Board coordinate representation and algebraic notation.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors that can occur when parsing coordinate text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocationParseError {
    #[error("expected {expected} characters, got {got}")]
    WrongLength { expected: usize, got: usize },

    #[error("invalid file character '{0}', expected 'A'-'H'")]
    InvalidFile(char),

    #[error("invalid rank character '{0}', expected '1'-'8'")]
    InvalidRank(char),
}

/// A file (column) on the chess board, from A to H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// All files in order.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Creates a file from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(File::A),
            1 => Some(File::B),
            2 => Some(File::C),
            3 => Some(File::D),
            4 => Some(File::E),
            5 => Some(File::F),
            6 => Some(File::G),
            7 => Some(File::H),
            _ => None,
        }
    }

    /// Creates a file from a character ('a'-'h' or 'A'-'H').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(File::A),
            'B' => Some(File::B),
            'C' => Some(File::C),
            'D' => Some(File::D),
            'E' => Some(File::E),
            'F' => Some(File::F),
            'G' => Some(File::G),
            'H' => Some(File::H),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the canonical (uppercase) character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A rank (row) on the chess board, from 1 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    /// All ranks in order.
    pub const ALL: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    /// Creates a rank from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Rank::R1),
            1 => Some(Rank::R2),
            2 => Some(Rank::R3),
            3 => Some(Rank::R4),
            4 => Some(Rank::R5),
            5 => Some(Rank::R6),
            6 => Some(Rank::R7),
            7 => Some(Rank::R8),
            _ => None,
        }
    }

    /// Creates a rank from a character ('1'-'8').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Rank::R1),
            '2' => Some(Rank::R2),
            '3' => Some(Rank::R3),
            '4' => Some(Rank::R4),
            '5' => Some(Rank::R5),
            '6' => Some(Rank::R6),
            '7' => Some(Rank::R7),
            '8' => Some(Rank::R8),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A coordinate on the chess board.
///
/// Immutable once constructed. The canonical text form is the uppercase
/// file letter followed by the rank digit, e.g. column 2, row 4 is `"C5"`.
/// Parsing accepts either case.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    file: File,
    rank: Rank,
}

impl Location {
    /// Creates a location from file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Location { file, rank }
    }

    /// Creates a location from raw (column, row) indices.
    ///
    /// Returns `None` if either index falls outside the 8x8 board.
    #[inline]
    pub const fn from_coords(col: u8, row: u8) -> Option<Self> {
        match (File::from_index(col), Rank::from_index(row)) {
            (Some(file), Some(rank)) => Some(Location { file, rank }),
            _ => None,
        }
    }

    /// Returns the file of this location.
    #[inline]
    pub const fn file(self) -> File {
        self.file
    }

    /// Returns the rank of this location.
    #[inline]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Returns the column index (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.file.index()
    }

    /// Returns the row index (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.rank.index()
    }

    /// Returns the raw coordinates, row first, then column.
    #[inline]
    pub const fn coordinates(self) -> (u8, u8) {
        (self.row(), self.col())
    }

    /// Returns the flat 0-63 board index (row-major).
    #[inline]
    pub const fn index(self) -> usize {
        (self.row() * 8 + self.col()) as usize
    }

    /// Returns the location shifted by the given column/row deltas,
    /// or `None` if the result falls off the board.
    #[inline]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let col = self.col() as i8 + dx;
        let row = self.row() as i8 + dy;
        if (0..8).contains(&col) && (0..8).contains(&row) {
            Location::from_coords(col as u8, row as u8)
        } else {
            None
        }
    }

    /// Returns the Chebyshev (king-move) distance to another location.
    #[inline]
    pub const fn chebyshev(self, other: Self) -> u8 {
        let dc = self.col().abs_diff(other.col());
        let dr = self.row().abs_diff(other.row());
        if dc > dr {
            dc
        } else {
            dr
        }
    }

    /// Builds a location from a file character and a rank character.
    fn from_chars(fc: char, rc: char) -> Result<Self, LocationParseError> {
        let file = File::from_char(fc).ok_or(LocationParseError::InvalidFile(fc))?;
        let rank = Rank::from_char(rc).ok_or(LocationParseError::InvalidRank(rc))?;
        Ok(Location::new(file, rank))
    }

    /// Splits a 4-character extended move string (e.g. "A4C6" or "e2e4")
    /// into an ordered (from, to) pair.
    pub fn pair_from_extended(s: &str) -> Result<(Location, Location), LocationParseError> {
        let chars: Vec<char> = s.chars().collect();
        let &[a, b, c, d] = chars.as_slice() else {
            return Err(LocationParseError::WrongLength {
                expected: 4,
                got: chars.len(),
            });
        };
        Ok((Location::from_chars(a, b)?, Location::from_chars(c, d)?))
    }
}

impl FromStr for Location {
    type Err = LocationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let &[fc, rc] = chars.as_slice() else {
            return Err(LocationParseError::WrongLength {
                expected: 2,
                got: chars.len(),
            });
        };
        Location::from_chars(fc, rc)
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location({}{})", self.file, self.rank)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}
