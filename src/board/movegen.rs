//! Check detection and legal move generation.

use super::masks::PAWN_ATTACKS;
use super::types::{bit_for_square, Bitboard, Color, Move, MoveList, Piece, Square};
use super::Board;
use super::PROMOTION_PIECES;

impl Board {
    /// Every cell one side threatens, with the full board occupancy supplied
    /// to each piece's ray computation as interference.
    #[must_use]
    pub fn controlled_cells(&self, color: Color) -> Bitboard {
        self.army(color)
            .controlled_all(self.occupied_by(color.opponent()))
    }

    /// Returns true if `color`'s king stands on a cell the opponent controls
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        let king = self.army(color).pieces(Piece::King);
        !(king & self.controlled_cells(color.opponent())).is_empty()
    }

    /// The side currently in check, if exactly one is.
    ///
    /// Both kings simultaneously attacked is not a reachable position; this
    /// query deliberately answers `None` for it and leaves flagging the
    /// configuration to [`Board::is_valid`].
    #[must_use]
    pub fn side_in_check(&self) -> Option<Color> {
        match (self.in_check(Color::White), self.in_check(Color::Black)) {
            (true, false) => Some(Color::White),
            (false, true) => Some(Color::Black),
            _ => None,
        }
    }

    /// Generate all legal moves for the side to move.
    ///
    /// A pure query: candidates are produced per piece type, then origin
    /// cell, then destination cell (a deterministic order, not a canonical
    /// one), and each is verified against self-check by applying it to a
    /// scratch copy. Checkmated and stalemated positions produce an empty
    /// list.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let mover = self.side_to_move;
        let pseudo = self.generate_pseudo_moves();
        let mut legal = MoveList::new();

        for &mv in pseudo.iter() {
            let mut scratch = self.clone();
            scratch.make_move(mv);
            if !scratch.in_check(mover) {
                legal.push(mv);
            }
        }
        legal
    }

    fn generate_pseudo_moves(&self) -> MoveList {
        let mover = self.side_to_move;
        let opponent = mover.opponent();
        let army = self.army(mover);
        let enemy = self.army(opponent);
        let opponent_occupied = enemy.occupied();
        let opponent_controlled = self.controlled_cells(opponent);

        let mut moves = MoveList::new();
        for piece in Piece::ALL {
            for from_idx in army.pieces(piece).iter() {
                let from = Square::from_idx(from_idx);
                let targets =
                    army.possible_from(piece, from, opponent_occupied, opponent_controlled);
                for to_idx in targets.iter() {
                    let to = Square::from_idx(to_idx);
                    let captured = enemy.piece_in_cell(to);
                    if piece == Piece::Pawn && to.rank() == mover.pawn_promotion_rank() {
                        for promo in PROMOTION_PIECES {
                            moves.push(Move::new(piece, from, to, captured, Some(promo)));
                        }
                    } else {
                        moves.push(Move::new(piece, from, to, captured, None));
                    }
                }
                if piece == Piece::Pawn {
                    self.push_en_passant_capture(from, &mut moves);
                }
            }
        }
        self.generate_castling_moves(opponent_controlled, &mut moves);
        moves
    }

    /// En-passant capture: the pawn attack pattern meets the en-passant
    /// target cell. The captured pawn sits beside the origin, not on the
    /// destination, so the possible-move query cannot see it.
    fn push_en_passant_capture(&self, from: Square, moves: &mut MoveList) {
        let mover = self.side_to_move;
        let attacks = Bitboard(PAWN_ATTACKS[mover.index()][from.as_index()]);
        if (attacks & self.en_passant).is_empty() {
            return;
        }
        if let Some(to) = self.en_passant.first_square() {
            moves.push(Move::new(Piece::Pawn, from, to, Some(Piece::Pawn), None));
        }
    }

    /// Castling: rights present, the path between king and rook empty, the
    /// rook actually home, and none of the king's start, transit, or end
    /// cells controlled by the opponent.
    fn generate_castling_moves(&self, opponent_controlled: Bitboard, moves: &mut MoveList) {
        let mover = self.side_to_move;
        let home = mover.back_rank();
        let king_from = Square(home, 4);
        if self.army(mover).piece_in_cell(king_from) != Some(Piece::King) {
            return;
        }

        if self.castling.has(mover, true)
            && self.is_empty(Square(home, 5))
            && self.is_empty(Square(home, 6))
            && self.piece_at(Square(home, 7)) == Some((mover, Piece::Rook))
            && !self.any_controlled(
                opponent_controlled,
                &[king_from, Square(home, 5), Square(home, 6)],
            )
        {
            moves.push(Move::quiet(Piece::King, king_from, Square(home, 6)));
        }

        if self.castling.has(mover, false)
            && self.is_empty(Square(home, 1))
            && self.is_empty(Square(home, 2))
            && self.is_empty(Square(home, 3))
            && self.piece_at(Square(home, 0)) == Some((mover, Piece::Rook))
            && !self.any_controlled(
                opponent_controlled,
                &[king_from, Square(home, 3), Square(home, 2)],
            )
        {
            moves.push(Move::quiet(Piece::King, king_from, Square(home, 2)));
        }
    }

    fn any_controlled(&self, controlled: Bitboard, squares: &[Square]) -> bool {
        squares
            .iter()
            .any(|&sq| !(controlled & bit_for_square(sq)).is_empty())
    }

    /// Side to move is in check with no legal replies
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.in_check(self.side_to_move) && self.generate_moves().is_empty()
    }

    /// Side to move is not in check but has no legal moves
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.in_check(self.side_to_move) && self.generate_moves().is_empty()
    }

    /// Count leaf nodes of the legal move tree to `depth` (move generation
    /// validation)
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for &mv in moves.iter() {
            let mut child = self.clone();
            child.make_move(mv);
            nodes += child.perft(depth - 1);
        }
        nodes
    }
}
