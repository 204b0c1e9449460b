//! Move metadata and destination sets.
//!
//! A move here is a destination plus metadata; the origin is implied by the
//! piece the set was generated for. [`MovePattern`] holds the raw geometric
//! candidates, [`MoveList`] the candidates that survived king-safety
//! filtering. Both map unique destinations to their [`MoveMeta`].

use std::collections::hash_map;
use std::collections::HashMap;

use crate::Location;

/// Special-move tag carried by a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Special {
    /// Plain relocation or capture.
    #[default]
    None,
    /// Pawn double push from its starting rank.
    DoublePush,
    /// En passant capture onto an empty cell.
    EnPassant,
    /// Kingside castling (O-O).
    CastleKingside,
    /// Queenside castling (O-O-O).
    CastleQueenside,
    /// Pawn move landing on the last rank.
    Promotion,
}

impl Special {
    /// Returns true for either castling tag.
    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self, Special::CastleKingside | Special::CastleQueenside)
    }
}

/// Metadata attached to a candidate destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MoveMeta {
    /// True if the move takes an opposing piece (including en passant).
    pub capture: bool,
    /// Special-move tag, [`Special::None`] for ordinary moves.
    pub special: Special,
}

impl MoveMeta {
    /// A plain non-capturing move.
    pub const QUIET: MoveMeta = MoveMeta {
        capture: false,
        special: Special::None,
    };

    /// A plain capture.
    pub const CAPTURE: MoveMeta = MoveMeta {
        capture: true,
        special: Special::None,
    };

    /// A non-capturing move with a special tag.
    #[inline]
    pub const fn special(special: Special) -> Self {
        MoveMeta {
            capture: false,
            special,
        }
    }

    /// A capturing move with a special tag.
    #[inline]
    pub const fn special_capture(special: Special) -> Self {
        MoveMeta {
            capture: true,
            special,
        }
    }
}

/// The raw destination set of a piece: every cell reachable by geometry and
/// occupancy alone, with no king-safety filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovePattern {
    moves: HashMap<Location, MoveMeta>,
}

impl MovePattern {
    /// Creates an empty pattern.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a destination. A later insert for the same cell replaces the
    /// earlier metadata; destinations stay unique.
    #[inline]
    pub fn insert(&mut self, to: Location, meta: MoveMeta) {
        self.moves.insert(to, meta);
    }

    /// Returns the metadata for a destination, if present.
    #[inline]
    pub fn get(&self, to: Location) -> Option<MoveMeta> {
        self.moves.get(&to).copied()
    }

    /// Returns true if the destination is part of the pattern.
    #[inline]
    pub fn contains(&self, to: Location) -> bool {
        self.moves.contains_key(&to)
    }

    /// Returns the number of destinations.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if there are no destinations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Iterates over (destination, metadata) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Location, MoveMeta)> + '_ {
        self.moves.iter().map(|(l, m)| (*l, *m))
    }
}

impl IntoIterator for MovePattern {
    type Item = (Location, MoveMeta);
    type IntoIter = hash_map::IntoIter<Location, MoveMeta>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl FromIterator<(Location, MoveMeta)> for MovePattern {
    fn from_iter<I: IntoIterator<Item = (Location, MoveMeta)>>(iter: I) -> Self {
        MovePattern {
            moves: iter.into_iter().collect(),
        }
    }
}

/// The king-safety-legal subset of a [`MovePattern`].
///
/// Every entry is guaranteed legal for the mover's color at the time it was
/// generated; the metadata is carried over unchanged from the raw pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: HashMap<Location, MoveMeta>,
}

impl MoveList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vetted destination.
    #[inline]
    pub fn insert(&mut self, to: Location, meta: MoveMeta) {
        self.moves.insert(to, meta);
    }

    /// Returns the metadata for a destination, if present.
    #[inline]
    pub fn get(&self, to: Location) -> Option<MoveMeta> {
        self.moves.get(&to).copied()
    }

    /// Returns true if the destination is a legal move.
    #[inline]
    pub fn contains(&self, to: Location) -> bool {
        self.moves.contains_key(&to)
    }

    /// Returns the number of legal destinations.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if there are no legal destinations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Iterates over (destination, metadata) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Location, MoveMeta)> + '_ {
        self.moves.iter().map(|(l, m)| (*l, *m))
    }
}

impl IntoIterator for MoveList {
    type Item = (Location, MoveMeta);
    type IntoIter = hash_map::IntoIter<Location, MoveMeta>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(s: &str) -> Location {
        s.parse().unwrap()
    }

    #[test]
    fn pattern_keeps_unique_destinations() {
        let mut pattern = MovePattern::new();
        pattern.insert(loc("E4"), MoveMeta::QUIET);
        pattern.insert(loc("E5"), MoveMeta::CAPTURE);
        pattern.insert(loc("E4"), MoveMeta::CAPTURE);

        assert_eq!(pattern.len(), 2);
        assert_eq!(pattern.get(loc("E4")), Some(MoveMeta::CAPTURE));
        assert!(pattern.contains(loc("E5")));
        assert!(!pattern.contains(loc("E6")));
    }

    #[test]
    fn meta_constructors() {
        assert!(!MoveMeta::QUIET.capture);
        assert!(MoveMeta::CAPTURE.capture);

        let double = MoveMeta::special(Special::DoublePush);
        assert!(!double.capture);
        assert_eq!(double.special, Special::DoublePush);

        let ep = MoveMeta::special_capture(Special::EnPassant);
        assert!(ep.capture);
        assert_eq!(ep.special, Special::EnPassant);
    }

    #[test]
    fn special_is_castle() {
        assert!(Special::CastleKingside.is_castle());
        assert!(Special::CastleQueenside.is_castle());
        assert!(!Special::None.is_castle());
        assert!(!Special::Promotion.is_castle());
    }

    #[test]
    fn list_roundtrip() {
        let mut list = MoveList::new();
        assert!(list.is_empty());
        list.insert(loc("G1"), MoveMeta::special(Special::CastleKingside));
        assert_eq!(list.len(), 1);
        assert_eq!(
            list.get(loc("G1")).unwrap().special,
            Special::CastleKingside
        );
    }

    #[test]
    fn pattern_from_iterator() {
        let pattern: MovePattern = [(loc("A1"), MoveMeta::QUIET), (loc("B2"), MoveMeta::CAPTURE)]
            .into_iter()
            .collect();
        assert_eq!(pattern.len(), 2);
    }
}
