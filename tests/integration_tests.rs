//! Integration tests for tictactoe-rust
//!
//! Evaluator properties are checked over whole families of boards rather than
//! single samples, and the search is checked for optimal play by walking every
//! possible line of human replies.

use tictactoe_rust::board::{Board, Cell, Mark};
use tictactoe_rust::constants::{CELLS, WIN_LINES};
use tictactoe_rust::evaluator::{GameOutcome, evaluate, evaluate_with_line};
use tictactoe_rust::search::{choose_computer_move, search};

// =============================================================================
// Helper functions
// =============================================================================

const FILL: [Cell; 3] = [Cell::Empty, Cell::Player, Cell::Computer];

/// Every board whose `line` is held by `mark`, with the other six cells
/// filled in every possible way.
fn boards_with_line(line: [usize; 3], mark: Mark) -> Vec<Board> {
    let others: Vec<usize> = (0..CELLS).filter(|i| !line.contains(i)).collect();
    let mut boards = Vec::new();
    for code in 0..3usize.pow(others.len() as u32) {
        let mut cells = [Cell::Empty; CELLS];
        for &i in &line {
            cells[i] = mark.into();
        }
        let mut rest = code;
        for &i in &others {
            cells[i] = FILL[rest % 3];
            rest /= 3;
        }
        boards.push(Board::from_cells(cells));
    }
    boards
}

/// Every board with cells drawn from {Empty, X, O}.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(CELLS as u32)).map(|code| {
        let mut cells = [Cell::Empty; CELLS];
        let mut rest = code;
        for cell in cells.iter_mut() {
            *cell = FILL[rest % 3];
            rest /= 3;
        }
        Board::from_cells(cells)
    })
}

fn has_any_line(board: &Board) -> bool {
    let cells = board.cells();
    WIN_LINES.iter().any(|&[a, b, c]| {
        !cells[a].is_empty() && cells[a] == cells[b] && cells[a] == cells[c]
    })
}

/// Play every human reply from `board` with the computer answering through
/// the search. Returns the worst outcome reached for the computer.
fn worst_outcome_for_computer(board: &mut Board, computer_to_move: bool) -> GameOutcome {
    let outcome = evaluate(board);
    if outcome.is_terminal() {
        return outcome;
    }

    if computer_to_move {
        let cell = choose_computer_move(board).expect("non-terminal board has a move");
        assert!(board.is_empty_at(cell), "search picked occupied cell {cell}");
        return board.with_mark(cell, Mark::Computer, |b| worst_outcome_for_computer(b, false));
    }

    let mut worst = GameOutcome::Win(Mark::Computer);
    for cell in 0..CELLS {
        if !board.is_empty_at(cell) {
            continue;
        }
        let result = board.with_mark(cell, Mark::Player, |b| worst_outcome_for_computer(b, true));
        worst = match (worst, result) {
            (_, GameOutcome::Win(Mark::Player)) => return result,
            (GameOutcome::Win(Mark::Computer), GameOutcome::Draw) => GameOutcome::Draw,
            _ => worst,
        };
    }
    worst
}

// =============================================================================
// Evaluator
// =============================================================================

#[test]
fn test_completed_line_wins_regardless_of_other_cells() {
    for (n, &line) in WIN_LINES.iter().enumerate() {
        for mark in [Mark::Player, Mark::Computer] {
            for board in boards_with_line(line, mark) {
                let (outcome, found) = evaluate_with_line(&board);
                // An earlier line may also be complete; it must then hold
                // the same mark or the position is impossible. Skip those.
                let earlier_other = WIN_LINES[..n].iter().any(|l| {
                    l.iter().all(|&i| board.cells()[i] == Cell::from(mark.opponent()))
                });
                if earlier_other {
                    continue;
                }
                assert_eq!(outcome, GameOutcome::Win(mark), "line {line:?} on\n{board}");
                let found = found.expect("winning line reported");
                assert!(WIN_LINES[..=n].contains(&found));
            }
        }
    }
}

#[test]
fn test_full_boards_without_line_are_draws() {
    let mut draws = 0;
    for board in all_boards().filter(|b| b.is_full() && !has_any_line(b)) {
        assert_eq!(evaluate(&board), GameOutcome::Draw, "\n{board}");
        draws += 1;
    }
    assert!(draws > 0);
}

#[test]
fn test_partial_boards_without_line_are_ongoing() {
    for board in all_boards().filter(|b| !b.is_full() && !has_any_line(b)) {
        assert_eq!(evaluate(&board), GameOutcome::Ongoing, "\n{board}");
    }
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_never_picks_occupied_cell() {
    for board in all_boards().filter(|b| {
        let x = b.cells().iter().filter(|&&c| c == Cell::Player).count();
        let o = b.cells().iter().filter(|&&c| c == Cell::Computer).count();
        (x == o || x == o + 1) && evaluate(b) == GameOutcome::Ongoing && b.filled() >= 3
    }) {
        let cell = choose_computer_move(&board).expect("ongoing board has a move");
        assert!(board.is_empty_at(cell), "picked {cell} on\n{board}");
    }
}

#[test]
fn test_computer_first_never_loses() {
    let mut board = Board::new();
    let worst = worst_outcome_for_computer(&mut board, true);
    assert_ne!(worst, GameOutcome::Win(Mark::Player));
    assert_eq!(board, Board::new());
}

#[test]
fn test_player_first_never_loses() {
    for opening in 0..CELLS {
        let mut board = Board::new();
        board.set(opening, Mark::Player);
        let worst = worst_outcome_for_computer(&mut board, true);
        assert_ne!(
            worst,
            GameOutcome::Win(Mark::Player),
            "computer lost after X opened at {opening}"
        );
    }
}

#[test]
fn test_empty_board_is_a_draw_with_first_cell() {
    // Every opening draws under perfect play, so the first cell is kept.
    let result = search(&Board::new());
    assert_eq!(result.score, 0);
    assert_eq!(result.cell, Some(0));
}

#[test]
fn test_idempotent_and_non_mutating() {
    let board = Board::parse("X.. .O. ..X").unwrap();
    let snapshot = board;
    let first = choose_computer_move(&board);
    assert_eq!(board, snapshot);
    let second = choose_computer_move(&board);
    assert_eq!(board, snapshot);
    assert_eq!(first, second);
    assert!(first.is_some());
}
