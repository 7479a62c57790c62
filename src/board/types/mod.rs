//! Core chess types.
//!
//! This module contains the fundamental value types used throughout the
//! crate:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - board square with file/rank/diagonal derivations
//! - `Bitboard` - 64-bit board representation
//! - `Move` and `MoveList` - packed move representation
//! - `CastlingRights` - castling availability as a bitboard

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

// Re-export all public types
pub use bitboard::{Bitboard, BitboardIter};
pub use castling::CastlingRights;
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::Square;

// Re-export internal utilities
pub(crate) use bitboard::bit_for_square;
pub(crate) use piece::PROMOTION_PIECES;
