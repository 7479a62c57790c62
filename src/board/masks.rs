//! Precomputed geometry and attack tables.
//!
//! Rank, file, and diagonal masks plus leaper attack tables and the eight
//! ray tables used for sliding-piece attacks. Everything is built once on
//! first use and never mutated.

use once_cell::sync::Lazy;

/// Mask of each a1-h8 diagonal, indexed by `file - rank + 7`
pub(crate) static DIAGONAL_MASKS: Lazy<[u64; 15]> = Lazy::new(|| {
    let mut masks = [0u64; 15];
    for sq in 0..64 {
        let r = sq / 8;
        let f = sq % 8;
        masks[f + 7 - r] |= 1u64 << sq;
    }
    masks
});

/// Mask of each a8-h1 anti-diagonal, indexed by `file + rank`
pub(crate) static ANTI_DIAGONAL_MASKS: Lazy<[u64; 15]> = Lazy::new(|| {
    let mut masks = [0u64; 15];
    for sq in 0..64 {
        let r = sq / 8;
        let f = sq % 8;
        masks[f + r] |= 1u64 << sq;
    }
    masks
});

pub(crate) static KNIGHT_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    let mut attacks = [0u64; 64];
    let deltas = [
        (2, 1),
        (1, 2),
        (-1, 2),
        (-2, 1),
        (-2, -1),
        (-1, -2),
        (1, -2),
        (2, -1),
    ];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        let r = (sq / 8) as isize;
        let f = (sq % 8) as isize;
        let mut mask = 0u64;
        for (dr, df) in deltas {
            let nr = r + dr;
            let nf = f + df;
            if (0..8).contains(&nr) && (0..8).contains(&nf) {
                let idx = (nr as usize) * 8 + (nf as usize);
                mask |= 1u64 << idx;
            }
        }
        *slot = mask;
    }
    attacks
});

pub(crate) static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| {
    let mut attacks = [0u64; 64];
    let deltas = [
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        let r = (sq / 8) as isize;
        let f = (sq % 8) as isize;
        let mut mask = 0u64;
        for (dr, df) in deltas {
            let nr = r + dr;
            let nf = f + df;
            if (0..8).contains(&nr) && (0..8).contains(&nf) {
                let idx = (nr as usize) * 8 + (nf as usize);
                mask |= 1u64 << idx;
            }
        }
        *slot = mask;
    }
    attacks
});

/// `PAWN_ATTACKS[color][square]`: the diagonal capture cells only, never the
/// forward push square
pub(crate) static PAWN_ATTACKS: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    let mut attacks = [[0u64; 64]; 2];
    for sq in 0..64 {
        let r = (sq / 8) as isize;
        let f = (sq % 8) as isize;
        let mut white = 0u64;
        let wr = r + 1;
        if (0..8).contains(&wr) {
            for df in [-1, 1] {
                let wf = f + df;
                if (0..8).contains(&wf) {
                    white |= 1u64 << ((wr as usize) * 8 + (wf as usize));
                }
            }
        }
        attacks[0][sq] = white;
        let mut black = 0u64;
        let br = r - 1;
        if (0..8).contains(&br) {
            for df in [-1, 1] {
                let bf = f + df;
                if (0..8).contains(&bf) {
                    black |= 1u64 << ((br as usize) * 8 + (bf as usize));
                }
            }
        }
        attacks[1][sq] = black;
    }
    attacks
});

pub(crate) const DIR_N: usize = 0;
pub(crate) const DIR_S: usize = 1;
pub(crate) const DIR_E: usize = 2;
pub(crate) const DIR_W: usize = 3;
pub(crate) const DIR_NE: usize = 4;
pub(crate) const DIR_NW: usize = 5;
pub(crate) const DIR_SE: usize = 6;
pub(crate) const DIR_SW: usize = 7;

static RAYS: Lazy<[[u64; 64]; 8]> = Lazy::new(|| {
    let mut rays = [[0u64; 64]; 8];
    let dirs = [
        (1, 0),   // N
        (-1, 0),  // S
        (0, 1),   // E
        (0, -1),  // W
        (1, 1),   // NE
        (1, -1),  // NW
        (-1, 1),  // SE
        (-1, -1), // SW
    ];
    for sq in 0..64 {
        let r = (sq / 8) as isize;
        let f = (sq % 8) as isize;
        for (d, (dr, df)) in dirs.iter().enumerate() {
            let mut mask = 0u64;
            let mut nr = r + dr;
            let mut nf = f + df;
            while (0..8).contains(&nr) && (0..8).contains(&nf) {
                let idx = (nr as usize) * 8 + (nf as usize);
                mask |= 1u64 << idx;
                nr += dr;
                nf += df;
            }
            rays[d][sq] = mask;
        }
    }
    rays
});

fn is_increasing_dir(dir: usize) -> bool {
    matches!(dir, DIR_N | DIR_E | DIR_NE | DIR_NW)
}

fn nearest_blocker_idx(dir: usize, blockers: u64) -> usize {
    if is_increasing_dir(dir) {
        blockers.trailing_zeros() as usize
    } else {
        63 - blockers.leading_zeros() as usize
    }
}

/// Cells controlled along one ray: up to and including the first occupied
/// cell, nothing beyond it.
pub(crate) fn ray_attacks(from_idx: usize, dir: usize, occupancy: u64) -> u64 {
    let ray = RAYS[dir][from_idx];
    let blockers = ray & occupancy;
    if blockers == 0 {
        return ray;
    }
    let blocker_idx = nearest_blocker_idx(dir, blockers);
    ray ^ RAYS[dir][blocker_idx]
}

/// Sliding-piece controlled cells for all four diagonal (bishop) or four
/// straight (rook) directions.
pub(crate) fn slider_attacks(from_idx: usize, occupancy: u64, bishop: bool) -> u64 {
    let mut attacks = 0u64;
    let dirs: &[usize] = if bishop {
        &[DIR_NE, DIR_NW, DIR_SE, DIR_SW]
    } else {
        &[DIR_N, DIR_S, DIR_E, DIR_W]
    };

    for &dir in dirs {
        attacks |= ray_attacks(from_idx, dir, occupancy);
    }
    attacks
}
