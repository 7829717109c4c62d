//! Yaku command handler.
//!
//! Evaluates a hand-picked captured pile, given as card slugs, and prints
//! every yaku it forms with the base points.

use crate::error::CliError;
use crate::validation::parse_card_list;
use koikoi_engine::cards::Card;
use koikoi_engine::yaku::{evaluate, sum_points};
use std::io::Write;

/// Handle the yaku command.
///
/// # Arguments
///
/// * `cards` - Card slugs such as `01-light-crane`
/// * `out` - Output stream for the evaluation
///
/// # Errors
///
/// `CliError::InvalidInput` for unknown or repeated slugs.
pub fn handle_yaku_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let ids = parse_card_list(cards).map_err(CliError::InvalidInput)?;
    let captured: Vec<Card> = ids.iter().map(|id| id.card()).collect();
    let yaku = evaluate(&captured);

    writeln!(out, "Cards: {}", captured.len())?;
    if yaku.is_empty() {
        writeln!(out, "No yaku")?;
    }
    for y in &yaku {
        writeln!(out, "{} [{}]: {}", y.name(), y.key, y.points)?;
    }
    writeln!(out, "Base points: {}", sum_points(&yaku))?;
    Ok(())
}
