//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::bitboard::Bitboard;
use super::piece::Color;
use super::square::Square;

/// White kingside castling flag cell (the king's destination, g1)
pub(crate) const CASTLE_WHITE_K: Square = Square(0, 6);
/// White queenside castling flag cell (c1)
pub(crate) const CASTLE_WHITE_Q: Square = Square(0, 2);
/// Black kingside castling flag cell (g8)
pub(crate) const CASTLE_BLACK_K: Square = Square(7, 6);
/// Black queenside castling flag cell (c8)
pub(crate) const CASTLE_BLACK_Q: Square = Square(7, 2);

/// Castling availability stored as a bitboard.
///
/// Each of the four rights sets the bit of the corresponding king
/// destination cell (g1, c1, g8, c8); every other bit stays clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(Bitboard);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(Bitboard::EMPTY)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(
            Bitboard::from_square(CASTLE_WHITE_K)
                .or(Bitboard::from_square(CASTLE_WHITE_Q))
                .or(Bitboard::from_square(CASTLE_BLACK_K))
                .or(Bitboard::from_square(CASTLE_BLACK_Q)),
        )
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0.contains(Self::flag_cell(color, kingside))
    }

    /// Grant a specific castling right
    #[inline]
    pub fn grant(&mut self, color: Color, kingside: bool) {
        self.0.set(Self::flag_cell(color, kingside));
    }

    /// Remove a specific castling right
    #[inline]
    pub fn revoke(&mut self, color: Color, kingside: bool) {
        self.0.clear(Self::flag_cell(color, kingside));
    }

    /// Remove both castling rights of one color (after a king move)
    #[inline]
    pub fn revoke_all(&mut self, color: Color) {
        self.0.clear(Self::flag_cell(color, true));
        self.0.clear(Self::flag_cell(color, false));
    }

    /// The underlying flag bitboard
    #[inline]
    #[must_use]
    pub const fn as_bitboard(self) -> Bitboard {
        self.0
    }

    /// Create from a raw flag bitboard
    #[inline]
    #[must_use]
    pub const fn from_bitboard(bb: Bitboard) -> Self {
        CastlingRights(bb)
    }

    /// The flag cell for a specific castling right
    #[inline]
    const fn flag_cell(color: Color, kingside: bool) -> Square {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}
