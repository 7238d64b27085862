//! Terminal-state detection.
//!
//! A line wins when its three cells hold the same mark. Lines are checked in
//! the fixed order of [`WIN_LINES`] (rows, columns, diagonals) and the first
//! match decides the outcome. A board with no winning line is a draw once
//! every cell is filled, and ongoing otherwise.

use std::fmt;

use crate::board::{Board, Mark};
use crate::constants::{WIN_LINES, WinLine};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    Ongoing,
    Win(Mark),
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::Ongoing
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            GameOutcome::Win(mark) => Some(mark),
            _ => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Ongoing => write!(f, "ongoing"),
            GameOutcome::Win(mark) => write!(f, "win {mark}"),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// Classify `board` as ongoing, won or drawn.
#[inline]
pub fn evaluate(board: &Board) -> GameOutcome {
    evaluate_with_line(board).0
}

/// Like [`evaluate`], but also reports the winning line for highlighting.
pub fn evaluate_with_line(board: &Board) -> (GameOutcome, Option<WinLine>) {
    if let Some((mark, line)) = winning_line(board) {
        return (GameOutcome::Win(mark), Some(line));
    }
    if board.is_full() {
        (GameOutcome::Draw, None)
    } else {
        (GameOutcome::Ongoing, None)
    }
}

/// True if `mark` holds any complete line, regardless of the other side.
pub fn has_line(board: &Board, mark: Mark) -> bool {
    let cells = board.cells();
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&i| cells[i].mark() == Some(mark)))
}

fn winning_line(board: &Board) -> Option<(Mark, WinLine)> {
    let cells = board.cells();
    WIN_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = cells[a].mark()?;
        (cells[b] == cells[a] && cells[c] == cells[a]).then_some((mark, line))
    })
}
