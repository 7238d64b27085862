//! The 3×3 board, its cells and marks.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{CELLS, SIDE, SYMBOL_COMPUTER, SYMBOL_EMPTY, SYMBOL_PLAYER};

/// The two sides. The human plays `X`, the computer plays `O`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Player,
    Computer,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::Player => Mark::Computer,
            Mark::Computer => Mark::Player,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::Player => SYMBOL_PLAYER,
            Mark::Computer => SYMBOL_COMPUTER,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Player,
    Computer,
}

impl Cell {
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Player => Some(Mark::Player),
            Cell::Computer => Some(Mark::Computer),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn from_symbol(ch: char) -> Option<Cell> {
        match ch {
            'X' | 'x' => Some(Cell::Player),
            'O' | 'o' => Some(Cell::Computer),
            '.' | '_' | '-' => Some(Cell::Empty),
            _ => None,
        }
    }

    fn symbol(self) -> char {
        self.mark().map(Mark::symbol).unwrap_or(SYMBOL_EMPTY)
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Player => Cell::Player,
            Mark::Computer => Cell::Computer,
        }
    }
}

/// Reasons a textual board is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Error Illegal board: expected 9 cells, got {0}")]
    WrongLength(usize),
    #[error("Error Illegal board: unrecognized symbol '{0}'")]
    InvalidSymbol(char),
}

/// Nine cells, row-major. Cheap to copy, so search works on its own copy.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn from_cells(cells: [Cell; CELLS]) -> Self {
        Self { cells }
    }

    /// Parse a board from 9 symbols: `X`, `O`, and `.`/`_`/`-` for empty.
    /// Whitespace and `|` separators are ignored, so `"OO. XX. ..."` works.
    pub fn parse(s: &str) -> Result<Self, BoardError> {
        let mut cells = [Cell::Empty; CELLS];
        let mut n = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let cell = Cell::from_symbol(ch).ok_or(BoardError::InvalidSymbol(ch))?;
            if n < CELLS {
                cells[n] = cell;
            }
            n += 1;
        }
        if n != CELLS {
            return Err(BoardError::WrongLength(n));
        }
        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Cell at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Cell::Empty)
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
    }

    /// Number of non-empty cells, i.e. plies played.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Write `mark` into `index`. The caller checks the cell is empty.
    ///
    /// # Panics
    /// Panics if `index` is not in `0..9`.
    pub fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark.into();
    }

    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; CELLS];
    }

    /// Place `mark` at `index`, run `f` on the modified board, then restore
    /// the cell to what it held before. Every return path out of `f` goes
    /// through the restore.
    ///
    /// # Panics
    /// Panics if `index` is not in `0..9`.
    pub fn with_mark<R>(&mut self, index: usize, mark: Mark, f: impl FnOnce(&mut Board) -> R) -> R {
        let previous = self.cells[index];
        self.cells[index] = mark.into();
        let result = f(self);
        self.cells[index] = previous;
        result
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::parse(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(SIDE) {
            for cell in row {
                write!(f, "{} ", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
