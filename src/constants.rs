//! Constants for board geometry, win lines, scoring, and front-end pacing.
//!
//! The board is a flat array of 9 cells in row-major order:
//!
//! ```text
//! 0 | 1 | 2
//! --+---+--
//! 3 | 4 | 5
//! --+---+--
//! 6 | 7 | 8
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Board side length.
pub const SIDE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// A line of three cell indices that wins when held by one mark.
pub type WinLine = [usize; 3];

/// All winning lines, in evaluation order: rows, then columns, then diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

// =============================================================================
// Minimax Scoring
// =============================================================================

/// Score of a computer win at the searched position. A win `d` plies deeper
/// scores `WIN_SCORE - d`; a player win scores `-WIN_SCORE + d`.
pub const WIN_SCORE: i32 = 10;

/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

// =============================================================================
// Cell Symbols
// =============================================================================

/// Human player's mark.
pub const SYMBOL_PLAYER: char = 'X';

/// Computer's mark.
pub const SYMBOL_COMPUTER: char = 'O';

/// Empty cell when printing a board. `_` is also accepted when parsing.
pub const SYMBOL_EMPTY: char = '.';

// =============================================================================
// Front-End Pacing
// =============================================================================

/// Default pause before the computer answers a human move, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 200;
