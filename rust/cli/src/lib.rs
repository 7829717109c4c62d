//! # Koi-Koi CLI Library
//!
//! This library provides the command-line interface for the Koi-Koi engine.
//! It exposes subcommands for playing, simulating and inspecting hanafuda rounds.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["koikoi", "play", "--rounds", "3"];
//! let code = koikoi_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play a match against an automated opponent
//! - `sim`: Simulate automated matches and record rounds as JSONL
//! - `deal`: Deal a single round for inspection
//! - `yaku`: Evaluate yaku for a set of captured cards
//! - `rng`: Print a sample of the shuffle RNG
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, KoikoiCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_rng_command,
    handle_sim_command, handle_yaku_command,
};

pub use error::CliError;

/// Subcommand names, listed in the usage text on parse errors.
pub const COMMANDS: &[&str] = &["play", "sim", "deal", "yaku", "rng", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["koikoi", "deal", "--seed", "42"];
/// let code = koikoi_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
///
/// # Available Commands
///
/// - `play [--rounds N] [--seed S] [--ai NAME]`: Interactive match on stdin
/// - `sim [--matches N] [--rounds N] [--seed S] [--output FILE]`: Automated matches
/// - `deal [--seed S]`: Deal one round
/// - `yaku CARD...`: Evaluate card slugs
/// - `rng [--seed S]`: RNG sample
/// - `cfg`: Display configuration settings
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match KoikoiCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Koi-Koi CLI");
                    write_or_exit!(err, "Usage: koikoi <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: koikoi --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let command = cli.cmd.name();
    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Play { rounds, seed, ai } => {
            // Use stdin for real input (supports both TTY and piped stdin)
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(rounds, seed, ai, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            matches,
            rounds,
            seed,
            output,
        } => handle_sim_command(matches, rounds, seed, output, out, err),
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Yaku { cards } => handle_yaku_command(&cards, out),
        Commands::Rng { seed } => handle_rng_command(seed, out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            tracing::info!(command, reason = %msg, "command interrupted");
            exit_code::INTERRUPTED
        }
        Err(e) => {
            tracing::debug!(command, error = %e, "command failed");
            if ui::write_error(err, &e.to_string()).is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}
