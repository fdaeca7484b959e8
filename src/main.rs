//! Entry point for `card-ring`.
//!
//! Collects the player count and pack path (from flags, or prompting on
//! stdin when a flag is missing), runs the game, and prints the winner.
//! All game work is delegated to the library; `main.rs` owns only process
//! setup (logging, argument parsing, user-facing messages).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use card_ring::core::{GameConfig, GameError, DEFAULT_MAX_TURNS};
use card_ring::engine::play;
use card_ring::setup::Pack;

/// Concurrent ring card game simulation.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Number of players (prompted for if omitted).
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    players: Option<i64>,

    /// Pack file, one card value per line (prompted for if omitted).
    #[arg(short, long)]
    pack: Option<PathBuf>,

    /// Directory for the player and deck log files.
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Maximum turns per player; 0 disables the cap. A player that reaches
    /// the cap stops, so a game where every player stops this way ends with
    /// no winner.
    #[arg(long, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: u64,

    /// Print the full game report as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Write a random valid pack in which every player can win.
    GeneratePack {
        /// Number of players the pack is for.
        #[arg(short = 'n', long)]
        players: usize,

        /// RNG seed.
        #[arg(short, long, default_value_t = 42)]
        seed: u64,

        /// Output file.
        #[arg(short, long)]
        out: PathBuf,
    },
}

fn main() -> ExitCode {
    // Initialise env_logger; set RUST_LOG to control verbosity.
    env_logger::init();

    let mut cli = Cli::parse();
    let outcome = match cli.command.take() {
        Some(Command::GeneratePack { players, seed, out }) => generate_pack(players, seed, out),
        None => run_game(cli),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<GameError>() {
                Some(GameError::InvalidPlayerCount(_) | GameError::UnparsablePlayerCount(_)) => {
                    println!("Invalid number of players. Please enter a positive integer.");
                }
                Some(e) if e.is_startup_error() => {
                    println!("Invalid pack file. Please provide a valid pack file.");
                }
                _ => {}
            }
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_game(cli: Cli) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let config = match cli.players {
        Some(n) => GameConfig::from_player_count(n)?,
        None => {
            let answer = prompt(&mut input, "Please enter the number of players:")?;
            GameConfig::parse_player_count(&answer)?
        }
    }
    .with_output_dir(cli.output_dir)
        .with_max_turns(Some(cli.max_turns).filter(|&m| m > 0));

    let pack_path = match cli.pack {
        Some(path) => path,
        None => PathBuf::from(prompt(&mut input, "Please enter the location of the pack to load:")?),
    };

    log::info!(
        "playing with {} players, pack {}",
        config.player_count,
        pack_path.display()
    );
    let report = play(config, &pack_path)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match report.winner() {
            Some(winner) => println!("player {} wins", winner.number()),
            None => println!("no player won"),
        }
    }
    for err in &report.log_errors {
        eprintln!("warning: log write failed for {err}");
    }
    Ok(())
}

fn generate_pack(players: usize, seed: u64, out: PathBuf) -> Result<()> {
    let pack = Pack::generate(players, seed)?;
    std::fs::write(&out, pack.to_text())
        .with_context(|| format!("writing pack to {}", out.display()))?;
    println!("wrote {} cards to {}", pack.len(), out.display());
    Ok(())
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    println!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("reading from stdin")?;
    Ok(line.trim().to_string())
}
