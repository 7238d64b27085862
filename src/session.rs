//! Game session: board, turn bookkeeping, and the running score.
//!
//! A front end owns one [`GameSession`] and drives it with
//! [`GameSession::play_player`] and [`GameSession::play_computer`]. The
//! session asks the search for the computer's move and falls back to a
//! random empty cell when the search has none.

use std::fmt;

use thiserror::Error;

use crate::board::{Board, Mark};
use crate::config::Config;
use crate::constants::{CELLS, WinLine};
use crate::evaluator::{GameOutcome, evaluate_with_line, has_line};
use crate::fallback::random_move;
use crate::search::choose_computer_move;

/// Reasons a move or position is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Error Illegal move: cell {0} is not in 0-8")]
    InvalidCell(usize),
    #[error("Error Illegal move: cell {0} not EMPTY")]
    Occupied(usize),
    #[error("Error Illegal move: game is over")]
    GameOver,
    #[error("Error Illegal board: both sides have a winning line")]
    ImpossiblePosition,
}

/// Games won by each side since the session started.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub player: u32,
    pub computer: u32,
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player: {} - Computer: {}", self.player, self.computer)
    }
}

/// What a single move did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub cell: usize,
    pub mark: Mark,
    pub outcome: GameOutcome,
    /// The cell came from the random fallback rather than the search.
    pub fallback: bool,
}

pub struct GameSession {
    board: Board,
    moves: usize,
    active: bool,
    outcome: GameOutcome,
    winning_line: Option<WinLine>,
    score: Scoreboard,
    rng: fastrand::Rng,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl GameSession {
    pub fn new(config: &Config) -> Self {
        Self {
            board: Board::new(),
            moves: 0,
            active: true,
            outcome: GameOutcome::Ongoing,
            winning_line: None,
            score: Scoreboard::default(),
            rng: config.rng(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plies played in the current game.
    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    pub fn score(&self) -> Scoreboard {
        self.score
    }

    /// Status line for a finished game.
    pub fn message(&self) -> Option<String> {
        match self.outcome {
            GameOutcome::Ongoing => None,
            GameOutcome::Win(Mark::Player) => Some(format!("{} wins!", Mark::Player)),
            GameOutcome::Win(Mark::Computer) => Some("Computer wins!".to_string()),
            GameOutcome::Draw => Some("It's a draw!".to_string()),
        }
    }

    /// Place the human's mark at `cell`.
    pub fn play_player(&mut self, cell: usize) -> Result<MoveReport, SessionError> {
        if !self.active {
            return Err(SessionError::GameOver);
        }
        if cell >= CELLS {
            return Err(SessionError::InvalidCell(cell));
        }
        if !self.board.is_empty_at(cell) {
            return Err(SessionError::Occupied(cell));
        }
        Ok(self.apply(cell, Mark::Player, false))
    }

    /// Let the computer move. A full board has no move and yields `Ok(None)`,
    /// even though the finished game would otherwise refuse with `GameOver`.
    pub fn play_computer(&mut self) -> Result<Option<MoveReport>, SessionError> {
        if self.board.is_full() {
            return Ok(None);
        }
        if !self.active {
            return Err(SessionError::GameOver);
        }

        let searched = choose_computer_move(&self.board);
        let Some((cell, fallback)) = self.resolve_move(searched) else {
            return Ok(None);
        };
        Ok(Some(self.apply(cell, Mark::Computer, fallback)))
    }

    /// Take the searched cell, or a random empty cell when the search had
    /// none. The flag is true when the random fallback was used.
    fn resolve_move(&mut self, searched: Option<usize>) -> Option<(usize, bool)> {
        if let Some(cell) = searched {
            return Some((cell, false));
        }
        let cell = random_move(&self.board, &mut self.rng)?;
        log::warn!("search found no move, falling back to random cell {cell}");
        Some((cell, true))
    }

    /// Clear the board for a new game. Scores carry over.
    pub fn restart(&mut self) {
        self.board.clear();
        self.moves = 0;
        self.active = true;
        self.outcome = GameOutcome::Ongoing;
        self.winning_line = None;
        log::info!("{:<32}{}", "restart", self.score);
    }

    /// Replace the current position, e.g. to analyze a given board.
    /// Scores are not touched.
    pub fn load(&mut self, board: Board) -> Result<(), SessionError> {
        if has_line(&board, Mark::Player) && has_line(&board, Mark::Computer) {
            return Err(SessionError::ImpossiblePosition);
        }
        let (outcome, line) = evaluate_with_line(&board);
        self.board = board;
        self.moves = board.filled();
        self.outcome = outcome;
        self.winning_line = line;
        self.active = !outcome.is_terminal();
        Ok(())
    }

    fn apply(&mut self, cell: usize, mark: Mark, fallback: bool) -> MoveReport {
        self.board.set(cell, mark);
        self.moves += 1;
        debug_assert_eq!(self.moves, self.board.filled());

        let (outcome, line) = evaluate_with_line(&self.board);
        self.outcome = outcome;
        self.winning_line = line;

        match outcome {
            GameOutcome::Win(Mark::Player) => self.score.player += 1,
            GameOutcome::Win(Mark::Computer) => self.score.computer += 1,
            _ => {}
        }
        if outcome.is_terminal() {
            self.active = false;
            log::info!("{:<32}{:<16}{}", "game over", outcome, self.score);
        }

        MoveReport {
            cell,
            mark,
            outcome,
            fallback,
        }
    }
}
