//! Tictactoe-Rust: tic-tac-toe against an exhaustive minimax opponent.
//!
//! The engine takes a board and returns the computer's cell. A front end
//! (terminal, GUI, or another program through [`protocol`]) owns the game
//! and calls into it after every human move.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, win lines, and scoring constants
//! - [`board`] - Board, cell and mark types
//! - [`evaluator`] - Win/draw detection
//! - [`search`] - Full-depth minimax move selection
//! - [`fallback`] - Random move selection when the search has no answer
//! - [`session`] - Game session with score keeping
//! - [`config`] - Runtime settings
//! - [`protocol`] - Text protocol for GUI integration
//!
//! ## Example
//!
//! ```
//! use tictactoe_rust::board::Board;
//! use tictactoe_rust::evaluator::{evaluate, GameOutcome};
//! use tictactoe_rust::search::choose_computer_move;
//!
//! // Computer (O) to move with two in a row on top.
//! let board = Board::parse("OO. XX. ...").unwrap();
//! assert_eq!(evaluate(&board), GameOutcome::Ongoing);
//! assert_eq!(choose_computer_move(&board), Some(2));
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod evaluator;
pub mod fallback;
pub mod protocol;
pub mod search;
pub mod session;

pub use board::{Board, Cell, Mark};
pub use evaluator::{GameOutcome, evaluate};
pub use search::{SearchResult, choose_computer_move};
