//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `geometry.rs` - squares, bitboard algebra, shifts, neighbours
//! - `army.rs` - per-side controlled/possible cell generation
//! - `legality.rs` - check detection, legal move generation, move application
//! - `perft.rs` - node-count validation of the move generator
//! - `proptest.rs` - property-based tests

mod legality;
mod perft;
