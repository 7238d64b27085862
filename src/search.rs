//! Exhaustive minimax search for the computer's move.
//!
//! The computer is the maximizing side and the human the minimizing side.
//! Terminal positions score:
//! - `WIN_SCORE - depth` for a computer win
//! - `-WIN_SCORE + depth` for a player win
//! - `DRAW_SCORE` for a draw
//!
//! so quicker computer wins and slower player wins are preferred. The whole
//! tree is searched; there is no pruning and no memoization.
//!
//! The search works on a private copy of the caller's board and simulates
//! moves on it with [`Board::with_mark`], which undoes every placement.

use crate::board::{Board, Mark};
use crate::constants::{CELLS, DRAW_SCORE, WIN_SCORE};
use crate::evaluator::{GameOutcome, evaluate};

/// The chosen cell (if any) and its minimax score.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub cell: Option<usize>,
    pub score: i32,
}

/// Minimax value of `board` with `depth` plies already simulated.
///
/// `is_maximizing` says whose turn it is: `true` simulates computer moves and
/// takes the maximum, `false` simulates player moves and takes the minimum.
/// The flag flips at every ply. `board` holds the same cells on return.
pub fn minimax(board: &mut Board, depth: i32, is_maximizing: bool) -> i32 {
    let mut nodes = 0;
    minimax_counted(board, depth, is_maximizing, &mut nodes)
}

fn minimax_counted(board: &mut Board, depth: i32, is_maximizing: bool, nodes: &mut u64) -> i32 {
    *nodes += 1;

    match evaluate(board) {
        GameOutcome::Win(Mark::Player) => return -WIN_SCORE + depth,
        GameOutcome::Win(Mark::Computer) => return WIN_SCORE - depth,
        GameOutcome::Draw => return DRAW_SCORE,
        GameOutcome::Ongoing => {}
    }

    let (mark, mut best) = if is_maximizing {
        (Mark::Computer, i32::MIN)
    } else {
        (Mark::Player, i32::MAX)
    };

    for cell in 0..CELLS {
        if !board.is_empty_at(cell) {
            continue;
        }
        let value = board.with_mark(cell, mark, |b| {
            minimax_counted(b, depth + 1, !is_maximizing, nodes)
        });
        best = if is_maximizing { best.max(value) } else { best.min(value) };
    }

    best
}

/// Root score of every empty cell, in ascending cell order.
///
/// Each cell is scored by placing the computer's mark there and searching
/// with the player to move at depth 0.
pub fn score_moves(board: &Board) -> Vec<(usize, i32)> {
    let mut nodes = 0;
    score_moves_counted(board, &mut nodes)
}

fn score_moves_counted(board: &Board, nodes: &mut u64) -> Vec<(usize, i32)> {
    let mut work = *board;
    let mut scores = Vec::with_capacity(CELLS);

    for cell in 0..CELLS {
        if !work.is_empty_at(cell) {
            continue;
        }
        let value = work.with_mark(cell, Mark::Computer, |b| minimax_counted(b, 0, false, nodes));
        scores.push((cell, value));
    }

    scores
}

/// Search `board` for the computer's best move.
///
/// Among equally scored cells the lowest index wins: a candidate replaces
/// the current best only when its score is strictly greater. A full board
/// yields `cell: None` with a draw score.
pub fn search(board: &Board) -> SearchResult {
    let mut nodes = 0;
    let mut best = SearchResult {
        cell: None,
        score: DRAW_SCORE,
    };
    let mut best_score = i32::MIN;

    for (cell, value) in score_moves_counted(board, &mut nodes) {
        if value > best_score {
            best_score = value;
            best = SearchResult {
                cell: Some(cell),
                score: value,
            };
        }
    }

    log::debug!(
        "{:<24}{:<8}{:<8}{:<8}",
        "search",
        format!("n={nodes}"),
        format!("move={}", best.cell.map_or("none".to_string(), |c| c.to_string())),
        format!("score={}", best.score),
    );

    best
}

/// The computer's move for `board`, or `None` when every cell is taken.
#[inline]
pub fn choose_computer_move(board: &Board) -> Option<usize> {
    search(board).cell
}
