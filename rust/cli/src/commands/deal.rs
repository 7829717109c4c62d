//! Deal command handler.
//!
//! Deals one two-player round and prints both hands, the field and the
//! number of redeals the seed needed. Nothing is played.

use crate::error::CliError;
use crate::formatters::format_cards;
use koikoi_engine::player::SeatConfig;
use koikoi_engine::round::{RoundConfig, RoundState};
use std::io::Write;

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - Optional seed for deterministic dealing (random when absent)
/// * `out` - Output stream for command results
///
/// # Errors
///
/// `CliError::Engine` when the deal exhausts its redeal attempts,
/// `CliError::Io` on write failures.
pub fn handle_deal_command(seed: Option<u32>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let round = RoundState::new(RoundConfig {
        seed: Some(seed),
        players: vec![SeatConfig::new("p1", "P1"), SeatConfig::new("p2", "P2")],
    })?;

    writeln!(out, "Seed: {}", round.seed())?;
    for id in round.player_ids() {
        let player = round.player(&id)?;
        writeln!(out, "Hand {}: {}", id, format_cards(player.hand()))?;
    }
    writeln!(out, "Field: {}", format_cards(round.field().cards()))?;
    writeln!(out, "Deck: {} cards", round.deck_remaining())?;
    writeln!(out, "Redeals: {}", round.redeal_count())?;
    Ok(())
}
