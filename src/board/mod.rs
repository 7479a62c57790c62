//! Chess position representation and legal move generation.
//!
//! Uses bitboards throughout: each side is an [`Army`] of six piece
//! bitboards, and the [`Board`] composes the two armies into check
//! detection and occupancy-aware legal move generation.
//!
//! # Example
//! ```
//! use bitchess::board::Board;
//!
//! let board = Board::new();
//! let moves = board.generate_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod army;
mod builder;
mod error;
mod fen;
mod make_move;
mod masks;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use army::Army;
pub use builder::BoardBuilder;
pub use error::{FenError, SquareError};
pub use state::Board;
pub use types::{
    Bitboard, BitboardIter, CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece, Square,
};

pub(crate) use types::PROMOTION_PIECES;
