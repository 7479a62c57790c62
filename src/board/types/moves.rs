//! Move encoding and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

// Field layout of the packed move word:
// - bits 0-2:   moved piece (3 bits, 7 = none)
// - bits 3-5:   captured piece (3 bits, 7 = none)
// - bits 6-8:   promoted piece (3 bits, 7 = none)
// - bits 9-14:  origin square (6 bits)
// - bits 15-20: destination square (6 bits)
// - bits 21-27: en-passant cell (7 bits, 64 = none)
// - bits 28-30: check / checkmate / stalemate annotations
const PIECE_NONE: u32 = 7;
const EP_NONE: u32 = 64;

const CAPTURED_SHIFT: u32 = 3;
const PROMOTED_SHIFT: u32 = 6;
const FROM_SHIFT: u32 = 9;
const TO_SHIFT: u32 = 15;
const EP_SHIFT: u32 = 21;
const FLAG_CHECK: u32 = 1 << 28;
const FLAG_CHECKMATE: u32 = 1 << 29;
const FLAG_STALEMATE: u32 = 1 << 30;

const fn piece_field(piece: Option<Piece>) -> u32 {
    match piece {
        Some(p) => p.index() as u32,
        None => PIECE_NONE,
    }
}

/// Compact 32-bit move representation.
///
/// A pure value: the constructor packs whatever it is given and performs no
/// legality checking. Equality is whole-word equality, and [`Move::NULL`]
/// compares unequal to every move produced by [`Move::new`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u32);

impl Move {
    /// The invalid-move sentinel (no piece, no cells).
    ///
    /// Returned by collaborators (e.g. a move selector on a position with no
    /// legal moves) in place of a real move.
    pub const NULL: Move = Move(
        PIECE_NONE | (PIECE_NONE << CAPTURED_SHIFT) | (PIECE_NONE << PROMOTED_SHIFT)
            | (EP_NONE << EP_SHIFT),
    );

    /// Pack a move from its fields.
    ///
    /// The en-passant cell is derived from the fields themselves (see
    /// [`Move::en_passant_target`]), never from board state.
    #[must_use]
    pub const fn new(
        piece: Piece,
        from: Square,
        to: Square,
        captured: Option<Piece>,
        promotion: Option<Piece>,
    ) -> Self {
        let ep = match Move::en_passant_target(piece, from, to) {
            Some(sq) => sq.as_index() as u32,
            None => EP_NONE,
        };
        Move(
            piece.index() as u32
                | (piece_field(captured) << CAPTURED_SHIFT)
                | (piece_field(promotion) << PROMOTED_SHIFT)
                | ((from.as_index() as u32) << FROM_SHIFT)
                | ((to.as_index() as u32) << TO_SHIFT)
                | (ep << EP_SHIFT),
        )
    }

    /// Create a quiet move (no capture, no promotion)
    #[inline]
    #[must_use]
    pub const fn quiet(piece: Piece, from: Square, to: Square) -> Self {
        Move::new(piece, from, to, None, None)
    }

    /// The cell jumped over by a two-square pawn advance, eligible for an
    /// en-passant capture on the following move.
    ///
    /// Derived purely from the moved piece and the origin/destination cells;
    /// any other move yields `None`.
    #[must_use]
    pub const fn en_passant_target(piece: Piece, from: Square, to: Square) -> Option<Square> {
        if !matches!(piece, Piece::Pawn) || from.file() != to.file() {
            return None;
        }
        if from.rank() + 2 == to.rank() || to.rank() + 2 == from.rank() {
            Some(Square((from.rank() + to.rank()) / 2, from.file()))
        } else {
            None
        }
    }

    /// The moved piece, or `None` for the null move
    #[inline]
    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        Piece::from_index((self.0 & 0x7) as usize)
    }

    /// The captured piece, if any
    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<Piece> {
        Piece::from_index(((self.0 >> CAPTURED_SHIFT) & 0x7) as usize)
    }

    /// The promotion piece, if this move promotes
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        Piece::from_index(((self.0 >> PROMOTED_SHIFT) & 0x7) as usize)
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square::from_index(((self.0 >> FROM_SHIFT) & 0x3F) as usize)
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square::from_index(((self.0 >> TO_SHIFT) & 0x3F) as usize)
    }

    /// The en-passant cell opened by this move, if it is a double pawn push
    #[inline]
    #[must_use]
    pub const fn en_passant(self) -> Option<Square> {
        let ep = (self.0 >> EP_SHIFT) & 0x7F;
        if ep >= EP_NONE {
            None
        } else {
            Some(Square::from_index(ep as usize))
        }
    }

    /// Returns true if this move captures a piece
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured().is_some()
    }

    /// Returns true if this move is a pawn promotion
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion().is_some()
    }

    /// Returns true if this is the null/invalid move
    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.piece().is_none()
    }

    /// Recognize a castling move from the encoded fields alone: the king
    /// travelling e1-g1, e1-c1, e8-g8, or e8-c8.
    ///
    /// Does not validate that castling rights exist.
    #[must_use]
    pub const fn is_castling(self) -> bool {
        if !matches!(self.piece(), Some(Piece::King)) {
            return false;
        }
        let from = self.from().as_index();
        let to = self.to().as_index();
        matches!(
            (from, to),
            (4, 6) | (4, 2) | (60, 62) | (60, 58) // e1g1, e1c1, e8g8, e8c8
        )
    }

    /// Returns true if this is kingside castling (O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_kingside(self) -> bool {
        self.is_castling() && self.to().file() == 6
    }

    /// Returns true if this is queenside castling (O-O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_queenside(self) -> bool {
        self.is_castling() && self.to().file() == 2
    }

    /// Annotate this move as giving check
    #[inline]
    #[must_use]
    pub const fn with_check(self) -> Self {
        Move(self.0 | FLAG_CHECK)
    }

    /// Annotate this move as delivering checkmate
    #[inline]
    #[must_use]
    pub const fn with_checkmate(self) -> Self {
        Move(self.0 | FLAG_CHECK | FLAG_CHECKMATE)
    }

    /// Annotate this move as causing stalemate
    #[inline]
    #[must_use]
    pub const fn with_stalemate(self) -> Self {
        Move(self.0 | FLAG_STALEMATE)
    }

    /// Returns true if annotated as giving check
    #[inline]
    #[must_use]
    pub const fn is_check(self) -> bool {
        self.0 & FLAG_CHECK != 0
    }

    /// Returns true if annotated as delivering checkmate
    #[inline]
    #[must_use]
    pub const fn is_checkmate(self) -> bool {
        self.0 & FLAG_CHECKMATE != 0
    }

    /// Returns true if annotated as causing stalemate
    #[inline]
    #[must_use]
    pub const fn is_stalemate(self) -> bool {
        self.0 & FLAG_STALEMATE != 0
    }

    /// Strip the check/checkmate/stalemate annotation bits.
    ///
    /// Collaborators matching moves by equality should compare the stripped
    /// values when only one side carries annotations.
    #[inline]
    #[must_use]
    pub const fn without_annotations(self) -> Self {
        Move(self.0 & !(FLAG_CHECK | FLAG_CHECKMATE | FLAG_STALEMATE))
    }

    /// Get the raw 32-bit value (for hashing/storage)
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Create from raw 32-bit value
    #[inline]
    #[must_use]
    pub const fn from_u32(value: u32) -> Self {
        Move(value)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "Move(null)");
        }
        write!(f, "Move({}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion() {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if let Some(cap) = self.captured() {
            write!(f, " x{}", cap.to_char())?;
        }
        if self.is_castling() {
            write!(f, " castle")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "0000");
        }
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

pub(crate) const MAX_MOVES: usize = 256;

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [Move::NULL; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        if idx < self.len {
            Some(self.moves[idx])
        } else {
            None
        }
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    /// Find a list entry equal to `mv` ignoring annotation bits.
    #[must_use]
    pub fn find(&self, mv: Move) -> Option<Move> {
        let target = mv.without_annotations();
        self.iter()
            .copied()
            .find(|m| m.without_annotations() == target)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}
