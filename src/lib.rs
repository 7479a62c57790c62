pub mod board;
pub mod engine;

pub use board::{Bitboard, Board, Color, Move, Piece, Square};
pub use engine::{Engine, RandomEngine};
