//! Per-side piece set ("army") and its attack/move generation.
//!
//! An army owns one bitboard per piece type. Two kinds of cell sets are
//! computed per piece and must not be confused:
//!
//! - *controlled* cells: everything the piece threatens, including cells
//!   occupied by friendly pieces (a defended piece is a controlled cell);
//! - *possible-move* cells: where the piece may actually relocate in
//!   isolation, which excludes friendly-occupied cells and, for pawns, adds
//!   the non-threatening push squares.
//!
//! Cross-side concerns (check, king safety after a move) are composed at the
//! board level; an army only ever sees the other side as interference
//! bitboards passed into these queries.

use super::masks::{slider_attacks, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};
use super::types::{bit_for_square, Bitboard, Color, Piece, Square};

/// One side's pieces: six disjoint bitboards plus the color tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Army {
    boards: [Bitboard; 6],
    color: Color,
}

impl Army {
    /// An army with no pieces
    #[must_use]
    pub const fn empty(color: Color) -> Self {
        Army {
            boards: [Bitboard::EMPTY; 6],
            color,
        }
    }

    /// An army with the standard starting placement for its color
    #[must_use]
    pub fn standard(color: Color) -> Self {
        let mut army = Army::empty(color);
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        let (home, pawn_rank) = match color {
            Color::White => (0, 1),
            Color::Black => (7, 6),
        };
        for (file, &piece) in back_rank.iter().enumerate() {
            army.set_piece(Square(home, file), piece);
            army.set_piece(Square(pawn_rank, file), Piece::Pawn);
        }
        army
    }

    /// This army's color
    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// The bitboard of one piece type
    #[inline]
    #[must_use]
    pub const fn pieces(&self, piece: Piece) -> Bitboard {
        self.boards[piece.index()]
    }

    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.boards[piece.index()] |= bit_for_square(sq);
    }

    pub(crate) fn remove_piece(&mut self, sq: Square, piece: Piece) {
        self.boards[piece.index()] &= !bit_for_square(sq);
    }

    /// Union of all six piece bitboards
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.boards
            .iter()
            .fold(Bitboard::EMPTY, |acc, &bb| acc | bb)
    }

    /// Total number of pieces across all types
    #[must_use]
    pub fn piece_count(&self) -> u32 {
        self.boards.iter().map(|bb| bb.popcount()).sum()
    }

    /// The piece type occupying `sq`, scanning in [`Piece::ALL`] order
    #[must_use]
    pub fn piece_in_cell(&self, sq: Square) -> Option<Piece> {
        let bit = bit_for_square(sq);
        Piece::ALL
            .into_iter()
            .find(|&piece| !(self.boards[piece.index()] & bit).is_empty())
    }

    /// The king's square, if the army has a king
    #[must_use]
    pub fn king_square(&self) -> Option<Square> {
        self.boards[Piece::King.index()].first_square()
    }

    /// Cells controlled by a single piece of type `piece` standing on `from`.
    ///
    /// `interference` carries any occupancy the army does not own (normally
    /// the opposing side); it only matters for sliders, where the first
    /// occupied cell of either side terminates the ray and is itself
    /// controlled.
    #[must_use]
    pub fn controlled_from(&self, piece: Piece, from: Square, interference: Bitboard) -> Bitboard {
        let idx = from.as_index();
        match piece {
            Piece::King => Bitboard(KING_ATTACKS[idx]),
            Piece::Knight => Bitboard(KNIGHT_ATTACKS[idx]),
            Piece::Pawn => Bitboard(PAWN_ATTACKS[self.color.index()][idx]),
            Piece::Bishop | Piece::Rook | Piece::Queen => {
                let occupancy = (self.occupied() | interference).0;
                let mut attacks = Bitboard::EMPTY;
                if piece != Piece::Bishop {
                    attacks |= Bitboard(slider_attacks(idx, occupancy, false));
                }
                if piece != Piece::Rook {
                    attacks |= Bitboard(slider_attacks(idx, occupancy, true));
                }
                attacks
            }
        }
    }

    /// Cells controlled by every piece of type `piece`
    #[must_use]
    pub fn controlled(&self, piece: Piece, interference: Bitboard) -> Bitboard {
        let mut out = Bitboard::EMPTY;
        for idx in self.pieces(piece).iter() {
            out |= self.controlled_from(piece, Square::from_idx(idx), interference);
        }
        out
    }

    /// Cells controlled by the whole army
    #[must_use]
    pub fn controlled_all(&self, interference: Bitboard) -> Bitboard {
        Piece::ALL
            .into_iter()
            .fold(Bitboard::EMPTY, |acc, piece| {
                acc | self.controlled(piece, interference)
            })
    }

    /// Cells a single piece may relocate to, considered in isolation.
    ///
    /// `opponent_occupied` supplies capture targets and ray blockers;
    /// `opponent_controlled` is only consulted for the king, whose possible
    /// moves exclude any cell the opponent attacks. Self-check safety for
    /// the other pieces is the board's responsibility, not the army's.
    #[must_use]
    pub fn possible_from(
        &self,
        piece: Piece,
        from: Square,
        opponent_occupied: Bitboard,
        opponent_controlled: Bitboard,
    ) -> Bitboard {
        let own = self.occupied();
        match piece {
            Piece::Pawn => self.pawn_possible_from(from, opponent_occupied),
            Piece::King => {
                self.controlled_from(piece, from, opponent_occupied)
                    & !own
                    & !opponent_controlled
            }
            _ => self.controlled_from(piece, from, opponent_occupied) & !own,
        }
    }

    /// Pawn relocation cells: single push onto an empty cell, double push
    /// from the starting rank across two empty cells, and diagonal captures
    /// only where the opponent actually stands.
    fn pawn_possible_from(&self, from: Square, opponent_occupied: Bitboard) -> Bitboard {
        let empty = !(self.occupied() | opponent_occupied);
        let pawn = bit_for_square(from);
        let (single, start_rank) = match self.color {
            Color::White => (pawn.shift_north(1), Color::White.pawn_start_rank()),
            Color::Black => (pawn.shift_south(1), Color::Black.pawn_start_rank()),
        };
        let single = single & empty;
        let double = if from.rank() == start_rank {
            let stepped = match self.color {
                Color::White => single.shift_north(1),
                Color::Black => single.shift_south(1),
            };
            stepped & empty
        } else {
            Bitboard::EMPTY
        };
        let captures = Bitboard(PAWN_ATTACKS[self.color.index()][from.as_index()])
            & opponent_occupied;
        single | double | captures
    }
}
