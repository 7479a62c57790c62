use super::army::Army;
use super::types::{bit_for_square, Bitboard, CastlingRights, Color, Piece, Square};

/// A full chess position: two armies plus the auxiliary state needed to
/// apply the rules (side to move, castling availability, en-passant target,
/// halfmove clock, fullmove number).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) armies: [Army; 2],
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    /// At most one bit: the cell a double pawn push just jumped over
    pub(crate) en_passant: Bitboard,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Board {
    /// The standard starting position
    #[must_use]
    pub fn new() -> Self {
        Board {
            armies: [Army::standard(Color::White), Army::standard(Color::Black)],
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: Bitboard::EMPTY,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// An empty board with no pieces and no rights
    #[must_use]
    pub fn empty() -> Self {
        Board {
            armies: [Army::empty(Color::White), Army::empty(Color::Black)],
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: Bitboard::EMPTY,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Assemble a position from externally supplied fields (the
    /// position-loading boundary).
    #[must_use]
    pub fn from_parts(
        armies: [Army; 2],
        side_to_move: Color,
        castling: CastlingRights,
        en_passant: Bitboard,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Self {
        Board {
            armies,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        }
    }

    /// One side's army
    #[inline]
    #[must_use]
    pub fn army(&self, color: Color) -> &Army {
        &self.armies[color.index()]
    }

    pub(crate) fn army_mut(&mut self, color: Color) -> &mut Army {
        &mut self.armies[color.index()]
    }

    /// The side to move
    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Current castling availability
    #[inline]
    #[must_use]
    pub const fn castling(&self) -> CastlingRights {
        self.castling
    }

    /// The en-passant target cell, if the last move was a double pawn push
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant.first_square()
    }

    /// Halfmoves since the last capture or pawn advance
    #[inline]
    #[must_use]
    pub const fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Fullmove counter, starting at 1 and incremented after Black moves
    #[inline]
    #[must_use]
    pub const fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// All occupied cells of both sides
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.armies[0].occupied() | self.armies[1].occupied()
    }

    /// Cells occupied by one side
    #[inline]
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.army(color).occupied()
    }

    /// The color and piece occupying `sq`, if any
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        for color in Color::BOTH {
            if let Some(piece) = self.army(color).piece_in_cell(sq) {
                return Some((color, piece));
            }
        }
        None
    }

    /// Returns true if `sq` is unoccupied
    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        (self.occupied() & bit_for_square(sq)).is_empty()
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.army_mut(color).set_piece(sq, piece);
    }

    pub(crate) fn remove_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.army_mut(color).remove_piece(sq, piece);
    }

    /// Structural validity of the position.
    ///
    /// Checks that each side has exactly one king, that no cell is claimed
    /// twice (within an army or across the two), that the en-passant field
    /// holds at most one bit, and that the two kings are not simultaneously
    /// attacked. The check query itself reports the both-in-check
    /// configuration as "no one"; this predicate is where it is surfaced.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        for color in Color::BOTH {
            let army = self.army(color);
            if army.pieces(Piece::King).popcount() != 1 {
                return false;
            }
            let mut seen = Bitboard::EMPTY;
            for piece in Piece::ALL {
                let bb = army.pieces(piece);
                if !(seen & bb).is_empty() {
                    return false;
                }
                seen |= bb;
            }
        }
        if !(self.armies[0].occupied() & self.armies[1].occupied()).is_empty() {
            return false;
        }
        if self.en_passant.popcount() > 1 {
            return false;
        }
        !(self.in_check(Color::White) && self.in_check(Color::Black))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
