//! Scrambling by random walk of the empty cell.
//!
//! Every step is the reverse of a legal move, so the result is always
//! solvable. The walk is lazy (steps into the edge are wasted, not retried)
//! and is not uniform over permutations; for long walks it only approaches
//! uniformity over the solvable half.

use rand::Rng;

use crate::puzzle::{Board, Direction};

pub const DEFAULT_SHUFFLE_MOVES: u32 = 1000;

/// Performs `moves` random-walk attempts on `board`. Returns how many of
/// them actually moved the empty cell.
pub fn shuffle<R: Rng + ?Sized>(board: &mut Board, moves: u32, rng: &mut R) -> u32 {
    let mut applied = 0;
    for _ in 0..moves {
        let dir = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        if board.step_empty(dir) {
            applied += 1;
        }
    }

    debug_assert!(board.is_consistent());
    debug_assert!(board.is_solvable());
    log::debug!("shuffled {applied}/{moves} steps:\n{board}");
    applied
}
