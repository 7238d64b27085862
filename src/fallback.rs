//! Uniform random move selection.
//!
//! Used by the session when the search reports no move. The generator is
//! passed in so a seeded session replays the same choices.

use crate::board::Board;

/// Pick an empty cell uniformly at random, or `None` if the board is full.
pub fn random_move(board: &Board, rng: &mut fastrand::Rng) -> Option<usize> {
    let candidates: Vec<usize> = board.empty_cells().collect();
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.usize(..candidates.len())])
}
