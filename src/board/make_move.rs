//! Move application.

use super::types::{Bitboard, Color, Move, Piece, Square};
use super::Board;

impl Board {
    /// Apply `mv` to the position.
    ///
    /// Transitions both armies, side to move, castling rights, the
    /// en-passant target, and the two counters together; callers observe no
    /// intermediate state. The move is trusted: feed this only moves from
    /// [`Board::generate_moves`] or equivalents. The null move is ignored.
    pub fn make_move(&mut self, mv: Move) {
        let Some(piece) = mv.piece() else {
            return;
        };
        let mover = self.side_to_move;
        let opponent = mover.opponent();
        let from = mv.from();
        let to = mv.to();

        if let Some(captured) = mv.captured() {
            let victim_sq = if self.is_en_passant_capture(piece, to) {
                // The captured pawn sits beside the destination, on the
                // origin rank.
                Square(from.rank(), to.file())
            } else {
                to
            };
            self.remove_piece(victim_sq, opponent, captured);
            if captured == Piece::Rook {
                self.revoke_rook_rights(opponent, victim_sq);
            }
        }

        self.remove_piece(from, mover, piece);
        self.set_piece(to, mover, mv.promotion().unwrap_or(piece));

        if mv.is_castling() {
            let home = mover.back_rank();
            let (rook_from, rook_to) = if to.file() == 6 {
                (Square(home, 7), Square(home, 5))
            } else {
                (Square(home, 0), Square(home, 3))
            };
            self.remove_piece(rook_from, mover, Piece::Rook);
            self.set_piece(rook_to, mover, Piece::Rook);
        }

        match piece {
            Piece::King => self.castling.revoke_all(mover),
            Piece::Rook => self.revoke_rook_rights(mover, from),
            _ => {}
        }

        self.en_passant = match mv.en_passant() {
            Some(sq) => Bitboard::from_square(sq),
            None => Bitboard::EMPTY,
        };

        if piece == Piece::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if mover == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = opponent;
    }

    /// A pawn landing on the current en-passant target with an empty
    /// destination is the en-passant capture.
    fn is_en_passant_capture(&self, piece: Piece, to: Square) -> bool {
        piece == Piece::Pawn && self.en_passant_target() == Some(to) && self.is_empty(to)
    }

    fn revoke_rook_rights(&mut self, color: Color, rook_sq: Square) {
        let home = color.back_rank();
        if rook_sq == Square(home, 7) {
            self.castling.revoke(color, true);
        } else if rook_sq == Square(home, 0) {
            self.castling.revoke(color, false);
        }
    }
}
