//! FEN import and export (the position-loading boundary).

use std::fmt::Write as _;
use std::str::FromStr;

use super::error::FenError;
use super::types::{Bitboard, CastlingRights, Color, Piece, Square};
use super::Board;

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// Returns an error if the FEN string is invalid. Parses the four
    /// mandatory fields plus the optional halfmove clock and fullmove
    /// number.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Piece placement, rank 8 first
        for (rank_idx, rank_str) in parts[0].split('/').enumerate() {
            if rank_idx >= 8 {
                return Err(FenError::InvalidRank { rank: rank_idx });
            }
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    board.set_piece(Square(7 - rank_idx, file), color, piece);
                    file += 1;
                }
            }
        }

        match parts[1] {
            "w" => board.side_to_move = Color::White,
            "b" => board.side_to_move = Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        }

        let mut castling = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => castling.grant(Color::White, true),
                'Q' => castling.grant(Color::White, false),
                'k' => castling.grant(Color::Black, true),
                'q' => castling.grant(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }
        board.castling = castling;

        board.en_passant = if parts[3] == "-" {
            Bitboard::EMPTY
        } else {
            let sq = Square::from_str(parts[3]).map_err(|_| FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            })?;
            Bitboard::from_square(sq)
        };

        if let Some(clock) = parts.get(4) {
            board.halfmove_clock = clock.parse().map_err(|_| FenError::InvalidCounter {
                found: (*clock).to_string(),
            })?;
        }
        if let Some(number) = parts.get(5) {
            board.fullmove_number = number.parse().map_err(|_| FenError::InvalidCounter {
                found: (*number).to_string(),
            })?;
        }

        Ok(board)
    }

    /// Serialize the position to a FEN string
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for rank in (0..8).rev() {
            let mut empty_run = 0;
            for file in 0..8 {
                match self.piece_at(Square(rank, file)) {
                    Some((color, piece)) => {
                        if empty_run > 0 {
                            let _ = write!(fen, "{empty_run}");
                            empty_run = 0;
                        }
                        fen.push(piece.to_fen_char(color));
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                let _ = write!(fen, "{empty_run}");
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        let mut any_right = false;
        for (color, kingside, c) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if self.castling.has(color, kingside) {
                fen.push(c);
                any_right = true;
            }
        }
        if !any_right {
            fen.push('-');
        }

        fen.push(' ');
        match self.en_passant_target() {
            Some(sq) => {
                let _ = write!(fen, "{sq}");
            }
            None => fen.push('-'),
        }

        let _ = write!(fen, " {} {}", self.halfmove_clock, self.fullmove_number);
        fen
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
