//! Move-selection strategies.
//!
//! The core only produces legal move lists; anything that picks one is a
//! strategy behind the [`Engine`] trait. Strategies are interchangeable and
//! live entirely outside the board model.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Move};

/// A strategy that, given a position, produces a move.
///
/// Implementations return [`Move::NULL`] when the position has no legal
/// moves (checkmate or stalemate).
pub trait Engine {
    fn select_move(&mut self, board: &Board) -> Move;
}

/// Selects a legal move uniformly at random.
#[derive(Debug)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    #[must_use]
    pub fn new() -> Self {
        RandomEngine {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic selector for reproducible games and tests
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        RandomEngine {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        RandomEngine::new()
    }
}

impl Engine for RandomEngine {
    fn select_move(&mut self, board: &Board) -> Move {
        let moves = board.generate_moves();
        if moves.is_empty() {
            return Move::NULL;
        }
        let idx = self.rng.gen_range(0..moves.len());
        moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_engine_selects_a_legal_move() {
        let board = Board::new();
        let legal = board.generate_moves();
        let mut engine = RandomEngine::with_seed(42);

        for _ in 0..20 {
            let mv = engine.select_move(&board);
            assert!(legal.find(mv).is_some(), "engine chose {mv:?} off-list");
        }
    }

    #[test]
    fn random_engine_returns_null_when_no_moves() {
        // Stalemate: White king cornered by the queen
        let board: Board = "8/8/8/3k4/8/8/5q2/7K w - - 0 1".parse().unwrap();
        let mut engine = RandomEngine::with_seed(7);
        assert_eq!(engine.select_move(&board), Move::NULL);
    }

    #[test]
    fn seeded_engines_agree() {
        let board = Board::new();
        let mut a = RandomEngine::with_seed(123);
        let mut b = RandomEngine::with_seed(123);
        assert_eq!(a.select_move(&board), b.select_move(&board));
    }
}
