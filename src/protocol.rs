//! Line-oriented text protocol for driving the engine from another program.
//!
//! The framing follows GTP: a command line may start with a numeric id, and
//! each response is `=[id] result` on success or `?[id] message` on failure,
//! followed by a blank line. Blank lines and `#` comments are skipped.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `clear_board` - Start a new game, keeping the score
//! - `play <cell>` - Human move at cell 0-8
//! - `genmove` - Computer move; replies with the cell or `none`
//! - `showboard` - Current board as a 3×3 grid
//! - `setboard <cells>` - Load a position, e.g. `setboard OO. XX. ...`
//! - `evaluate` - `ongoing`, `draw`, or `win <mark> <a> <b> <c>`
//! - `analyze` - Minimax score of every empty cell, as `cell:score`
//! - `score` - Games won by each side
//!
//! ## Example
//!
//! ```ignore
//! use tictactoe_rust::protocol::ProtocolEngine;
//! let mut engine = ProtocolEngine::new();
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};

use crate::board::Board;
use crate::config::Config;
use crate::evaluator::{GameOutcome, evaluate_with_line};
use crate::search::score_moves;
use crate::session::GameSession;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "analyze",
    "clear_board",
    "evaluate",
    "genmove",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "score",
    "setboard",
    "showboard",
    "version",
];

/// Protocol engine state.
pub struct ProtocolEngine {
    session: GameSession,
}

impl Default for ProtocolEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtocolEngine {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            session: GameSession::new(config),
        }
    }

    /// Run the command loop on stdin and stdout.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("reading command")?;

            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (prefix, message) = match self.execute(&command, args) {
                Ok(message) => ('=', message),
                Err(err) => ('?', err.to_string()),
            };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command id from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());

        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }

        (None, trimmed)
    }

    fn execute(&mut self, command: &str, args: &[&str]) -> Result<String> {
        match command {
            "name" => Ok(env!("CARGO_PKG_NAME").to_string()),

            "version" => Ok(env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => Ok("1".to_string()),

            "list_commands" => Ok(KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(name) = args.first() else {
                    bail!("missing argument");
                };
                let known = KNOWN_COMMANDS.contains(&name.to_lowercase().as_str());
                Ok(known.to_string())
            }

            "quit" => Ok(String::new()),

            "clear_board" => {
                self.session.restart();
                Ok(String::new())
            }

            "play" => {
                let Some(arg) = args.first() else {
                    bail!("missing argument");
                };
                let cell: usize = arg
                    .parse()
                    .with_context(|| format!("invalid cell '{arg}'"))?;
                self.session.play_player(cell)?;
                Ok(self.session.message().unwrap_or_default())
            }

            "genmove" => match self.session.play_computer()? {
                Some(report) => Ok(report.cell.to_string()),
                None => Ok("none".to_string()),
            },

            "showboard" => Ok(format!("\n{}", self.session.board().to_string().trim_end())),

            "setboard" => {
                if args.is_empty() {
                    bail!("missing argument");
                }
                let board = Board::parse(&args.concat())?;
                self.session.load(board)?;
                Ok(String::new())
            }

            "evaluate" => {
                let (outcome, line) = evaluate_with_line(self.session.board());
                Ok(match (outcome, line) {
                    (GameOutcome::Win(mark), Some([a, b, c])) => format!("win {mark} {a} {b} {c}"),
                    _ => outcome.to_string(),
                })
            }

            "analyze" => {
                let scores: Vec<String> = score_moves(self.session.board())
                    .into_iter()
                    .map(|(cell, score)| format!("{cell}:{score}"))
                    .collect();
                Ok(scores.join(" "))
            }

            "score" => Ok(self.session.score().to_string()),

            _ => bail!("unknown command: {command}"),
        }
    }
}
