//! Tictactoe-Rust: play tic-tac-toe against a minimax opponent.
//!
//! ## Usage
//!
//! - `tictactoe-rust` - Play in the terminal
//! - `tictactoe-rust play` - Same, with options such as `--computer-first`
//! - `tictactoe-rust protocol` - Start the text protocol for GUI integration
//! - `tictactoe-rust demo` - Let the engine play a random opponent

use std::io::{self, BufRead, Write};
use std::thread;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use tictactoe_rust::config::Config;
use tictactoe_rust::constants::{CELLS, DEFAULT_DELAY_MS};
use tictactoe_rust::fallback::random_move;
use tictactoe_rust::protocol::ProtocolEngine;
use tictactoe_rust::session::GameSession;

/// Tictactoe-Rust: tic-tac-toe against an exhaustive minimax opponent
#[derive(Parser)]
#[command(name = "tictactoe-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Milliseconds to wait before the computer answers
    #[arg(long, global = true, default_value_t = DEFAULT_DELAY_MS)]
    delay_ms: u64,

    /// Seed for the random fallback and the demo opponent
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Let the computer open each game
    #[arg(long, global = true)]
    computer_first: bool,

    /// Number cells 1-9 instead of 0-8
    #[arg(long, global = true)]
    one_based: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal
    Play,
    /// Start the text protocol server on stdin/stdout
    Protocol,
    /// Play the engine against a random opponent and report the score
    Demo {
        /// Number of games to play
        #[arg(long, default_value_t = 10)]
        games: u32,
    },
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            delay_ms: self.delay_ms,
            seed: self.seed,
            computer_first: self.computer_first,
            one_based: self.one_based,
        }
    }
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let config = cli.config();

    match cli.command {
        Some(Commands::Protocol) => ProtocolEngine::with_config(&config).run(),
        Some(Commands::Demo { games }) => run_demo(&config, games),
        Some(Commands::Play) | None => run_play(&config),
    }
}

fn run_play(config: &Config) -> Result<()> {
    let mut session = GameSession::new(config);
    let (lo, hi) = if config.one_based { (1, CELLS) } else { (0, CELLS - 1) };
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    println!("{}", session.score());
    if config.computer_first {
        computer_turn(&mut session)?;
    }

    loop {
        print!("{}Your move ({lo}-{hi}, r restart, q quit): ", session.board());
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();

        match input {
            "" | "q" | "quit" => break,
            "r" | "restart" => {
                session.restart();
                println!("{}", session.score());
                if config.computer_first {
                    computer_turn(&mut session)?;
                }
                continue;
            }
            _ => {}
        }

        let cell = match input.parse::<usize>() {
            Ok(n) if config.one_based && n >= 1 => n - 1,
            Ok(n) if !config.one_based => n,
            _ => {
                println!("Not a cell: {input}");
                continue;
            }
        };

        if let Err(err) = session.play_player(cell) {
            println!("{err}");
            continue;
        }

        if !session.is_active() {
            report_game_over(&session);
            continue;
        }

        thread::sleep(config.delay());
        computer_turn(&mut session)?;
    }

    println!("{}", session.score());
    Ok(())
}

fn computer_turn(session: &mut GameSession) -> Result<()> {
    if let Some(report) = session.play_computer()? {
        println!("Computer plays {}", report.cell);
    }
    if !session.is_active() {
        report_game_over(session);
    }
    Ok(())
}

fn report_game_over(session: &GameSession) {
    print!("{}", session.board());
    if let Some(message) = session.message() {
        println!("{message}");
    }
    println!("{}", session.score());
    println!("Enter r to restart or q to quit.");
}

fn run_demo(config: &Config, games: u32) -> Result<()> {
    println!("Tictactoe-Rust: minimax vs. random opponent\n");

    let mut session = GameSession::new(config);
    let mut opponent = config.opponent_rng();
    let mut draws = 0;

    for game in 1..=games {
        let computer_opens = config.computer_first || game % 2 == 0;
        if computer_opens {
            session.play_computer()?;
        }
        while session.is_active() {
            let Some(cell) = random_move(session.board(), &mut opponent) else {
                break;
            };
            session.play_player(cell)?;
            if session.is_active() {
                session.play_computer()?;
            }
        }

        if session.outcome().winner().is_none() {
            draws += 1;
        }
        println!(
            "=== Game {game} ({} opens) ===",
            if computer_opens { "computer" } else { "player" }
        );
        print!("{}", session.board());
        println!("{}\n", session.message().unwrap_or_default());
        session.restart();
    }

    println!("{} - Draws: {draws}", session.score());
    Ok(())
}
