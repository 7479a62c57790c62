//! Bitboard type and operations.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::{Square, SquareIdx};

/// A 64-bit bitboard representing piece positions or attack squares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bitboard(pub u64);

// File masks (columns)
impl Bitboard {
    pub const FILE_A: Bitboard = Bitboard(0x0101010101010101);
    pub const FILE_B: Bitboard = Bitboard(0x0202020202020202);
    pub const FILE_C: Bitboard = Bitboard(0x0404040404040404);
    pub const FILE_D: Bitboard = Bitboard(0x0808080808080808);
    pub const FILE_E: Bitboard = Bitboard(0x1010101010101010);
    pub const FILE_F: Bitboard = Bitboard(0x2020202020202020);
    pub const FILE_G: Bitboard = Bitboard(0x4040404040404040);
    pub const FILE_H: Bitboard = Bitboard(0x8080808080808080);

    pub const RANK_1: Bitboard = Bitboard(0x00000000000000FF);
    pub const RANK_2: Bitboard = Bitboard(0x000000000000FF00);
    pub const RANK_3: Bitboard = Bitboard(0x0000000000FF0000);
    pub const RANK_4: Bitboard = Bitboard(0x00000000FF000000);
    pub const RANK_5: Bitboard = Bitboard(0x000000FF00000000);
    pub const RANK_6: Bitboard = Bitboard(0x0000FF0000000000);
    pub const RANK_7: Bitboard = Bitboard(0x00FF000000000000);
    pub const RANK_8: Bitboard = Bitboard(0xFF00000000000000);

    pub const EMPTY: Bitboard = Bitboard(0);
    pub const ALL: Bitboard = Bitboard(!0);
}

/// Union of the lowest `n` files (a..), used to clear eastward wrap bits.
const fn low_files(n: u32) -> u64 {
    let mut mask = 0u64;
    let mut i = 0;
    while i < n {
        mask |= Bitboard::FILE_A.0 << i;
        i += 1;
    }
    mask
}

/// Union of the highest `n` files (..h), used to clear westward wrap bits.
const fn high_files(n: u32) -> u64 {
    let mut mask = 0u64;
    let mut i = 0;
    while i < n {
        mask |= Bitboard::FILE_H.0 >> i;
        i += 1;
    }
    mask
}

impl Bitboard {
    /// Create a bitboard with a single square set
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1 << (sq.0 * 8 + sq.1))
    }

    /// Create a bitboard with every square in `squares` set
    #[must_use]
    pub fn from_squares(squares: &[Square]) -> Self {
        let mut bb = Bitboard::EMPTY;
        for &sq in squares {
            bb.set(sq);
        }
        bb
    }

    /// Returns an iterator over the square indices set in this bitboard
    #[inline]
    #[must_use]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }

    /// Returns true if the bitboard is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (population count)
    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if exactly one bit is set
    #[inline]
    #[must_use]
    pub const fn is_single(self) -> bool {
        self.0.is_power_of_two()
    }

    /// Returns true if the given square is set
    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1 << (sq.0 * 8 + sq.1))) != 0
    }

    /// Set the given square
    #[inline]
    pub fn set(&mut self, sq: Square) {
        self.0 |= 1 << sq.as_index();
    }

    /// Clear the given square
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.0 &= !(1 << sq.as_index());
    }

    /// The lowest set square, if any
    #[inline]
    #[must_use]
    pub fn first_square(self) -> Option<Square> {
        if self.is_empty() {
            None
        } else {
            Some(Square::from_index(self.0.trailing_zeros() as usize))
        }
    }

    /// Shift `n` ranks north (toward rank 8); shifts beyond 7 saturate to empty
    #[inline]
    #[must_use]
    pub const fn shift_north(self, n: u32) -> Self {
        if n > 7 {
            Bitboard::EMPTY
        } else {
            Bitboard(self.0 << (8 * n))
        }
    }

    /// Shift `n` ranks south (toward rank 1); shifts beyond 7 saturate to empty
    #[inline]
    #[must_use]
    pub const fn shift_south(self, n: u32) -> Self {
        if n > 7 {
            Bitboard::EMPTY
        } else {
            Bitboard(self.0 >> (8 * n))
        }
    }

    /// Shift `n` files east (toward file h), clearing file wrap-around;
    /// shifts beyond 7 saturate to empty
    #[inline]
    #[must_use]
    pub const fn shift_east(self, n: u32) -> Self {
        if n > 7 {
            Bitboard::EMPTY
        } else {
            Bitboard((self.0 << n) & !low_files(n))
        }
    }

    /// Shift `n` files west (toward file a), clearing file wrap-around;
    /// shifts beyond 7 saturate to empty
    #[inline]
    #[must_use]
    pub const fn shift_west(self, n: u32) -> Self {
        if n > 7 {
            Bitboard::EMPTY
        } else {
            Bitboard((self.0 >> n) & !high_files(n))
        }
    }

    /// The 8 (fewer at edges) squares adjacent to each set square.
    ///
    /// Built as the intersection of the three-file band and the three-rank
    /// band around the origin, minus the origin itself; edge squares simply
    /// lose the out-of-board file or rank term.
    #[must_use]
    pub fn neighbour_cells(self) -> Bitboard {
        let mut out = Bitboard::EMPTY;
        for idx in self.iter() {
            let sq = Square::from_idx(idx);
            let own_file = Bitboard::file_mask(sq.file());
            let own_rank = Bitboard::rank_mask(sq.rank());
            let files = own_file.shift_west(1) | own_file | own_file.shift_east(1);
            let ranks = own_rank.shift_south(1) | own_rank | own_rank.shift_north(1);
            out |= (files & ranks) ^ Bitboard::from_square(sq);
        }
        out
    }

    /// Get the file mask for a given file index (0-7)
    #[inline]
    #[must_use]
    pub const fn file_mask(file: usize) -> Self {
        Bitboard(Self::FILE_A.0 << file)
    }

    /// Get the rank mask for a given rank index (0-7)
    #[inline]
    #[must_use]
    pub const fn rank_mask(rank: usize) -> Self {
        Bitboard(Self::RANK_1.0 << (rank * 8))
    }

    /// Bitwise AND (const contexts)
    #[inline]
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        Bitboard(self.0 & other.0)
    }

    /// Bitwise OR (const contexts)
    #[inline]
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Bitboard(self.0 | other.0)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Bitboard) {
        self.0 ^= rhs.0;
    }
}

pub(crate) fn bit_for_square(sq: Square) -> Bitboard {
    Bitboard(1u64 << sq.index().as_usize())
}

pub(crate) fn pop_lsb(bb: &mut Bitboard) -> SquareIdx {
    let idx = bb.0.trailing_zeros() as u8;
    bb.0 &= bb.0 - 1;
    SquareIdx(idx)
}

/// Iterator over set bits in a Bitboard, in ascending square order
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = SquareIdx;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            Some(pop_lsb(&mut self.0))
        }
    }
}
