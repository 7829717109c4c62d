//! Command-line argument definitions (clap derive).

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "koikoi",
    version,
    about = "Koi-Koi hanafuda engine: play, simulate and inspect"
)]
pub struct KoikoiCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a match against an automated opponent
    Play {
        /// Rounds in the match (default from configuration)
        #[arg(long)]
        rounds: Option<u32>,
        /// Base seed of the match
        #[arg(long)]
        seed: Option<u32>,
        /// Opponent AI name
        #[arg(long)]
        ai: Option<String>,
    },
    /// Simulate automated matches
    Sim {
        /// Number of matches to run
        #[arg(long, default_value_t = 1)]
        matches: u32,
        /// Rounds per match (default from configuration)
        #[arg(long)]
        rounds: Option<u32>,
        /// Base seed; match m uses seed + m * rounds
        #[arg(long)]
        seed: Option<u32>,
        /// Write one JSONL round record per settled round
        #[arg(long)]
        output: Option<String>,
    },
    /// Deal one round and show hands and field
    Deal {
        #[arg(long)]
        seed: Option<u32>,
    },
    /// Evaluate yaku for a set of captured cards
    Yaku {
        /// Card slugs, e.g. 01-light-crane 08-light-moon
        #[arg(required = true)]
        cards: Vec<String>,
    },
    /// Print a sample of the shuffle RNG stream
    Rng {
        #[arg(long)]
        seed: Option<u32>,
    },
    /// Show the resolved configuration and its sources
    Cfg,
}

impl Commands {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Play { .. } => "play",
            Commands::Sim { .. } => "sim",
            Commands::Deal { .. } => "deal",
            Commands::Yaku { .. } => "yaku",
            Commands::Rng { .. } => "rng",
            Commands::Cfg => "cfg",
        }
    }
}
