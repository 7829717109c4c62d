//! Play command handler for interactive matches.
//!
//! A human seat plays a full Koi-Koi match against one automated opponent.
//! The human seat leads round 1. Moves are chosen by number from the listed
//! legal moves, koikoi prompts are answered with `koikoi` or `stop`, and `q`
//! (or EOF) ends the session.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_card, format_cards, format_move, format_yaku_list};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_koikoi_answer, parse_move_choice};
use koikoi_ai::create_ai;
use koikoi_engine::game::{GameEvent, GameService, MatchConfig, PlayerTotal, Seat};
use koikoi_engine::player::PlayerId;
use koikoi_engine::round::{EndReason, KoikoiDecision, TurnOutcome};
use std::io::{BufRead, Write};

pub const HUMAN_ID: &str = "player";
pub const OPPONENT_ID: &str = "opponent";

/// Handle the play command.
///
/// Arguments left as `None` fall back to the resolved configuration.
///
/// # Arguments
///
/// * `rounds` - Number of rounds in the match
/// * `seed` - Base seed of the match
/// * `ai` - Opponent AI name
/// * `out` - Output stream for game output
/// * `err` - Output stream for warnings and errors
/// * `stdin` - Input stream for the human's choices
///
/// # Returns
///
/// `Ok(())` when the match finishes or the user quits, otherwise `CliError`.
pub fn handle_play_command(
    rounds: Option<u32>,
    seed: Option<u32>,
    ai: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let rounds = rounds.unwrap_or(cfg.rounds);
    if rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let ai_name = ai.unwrap_or(cfg.ai);
    let opponent = create_ai(&ai_name)?;
    let opponent_name = opponent.name().to_string();

    let mut service = GameService::new(
        MatchConfig {
            seed: seed.or(cfg.seed),
            total_rounds: rounds,
            ..MatchConfig::default()
        },
        vec![
            Seat::external(HUMAN_ID, cfg.player_name),
            Seat::new(OPPONENT_ID, opponent_name.clone(), opponent),
        ],
    )?;

    writeln!(
        out,
        "Koi-Koi: {} rounds vs {} (seed {})",
        rounds,
        opponent_name,
        service.seed()
    )?;
    let response = service.start_match()?;
    write_events(out, &response.events, rounds)?;

    let human = PlayerId::from(HUMAN_ID);
    loop {
        if service.is_match_finished() {
            break;
        }
        if service.is_round_finished() {
            let response = service.start_next_round()?;
            write_events(out, &response.events, rounds)?;
            continue;
        }
        let Some(round) = service.round() else {
            break;
        };

        if let Some(pending) = round.pending_koikoi().cloned() {
            if pending.player_id != human {
                return Err(CliError::Engine(format!(
                    "koikoi decision pending for automated seat {}",
                    pending.player_id
                )));
            }
            writeln!(
                out,
                "Yaku: {} (base {}, x{} = {})",
                format_yaku_list(&pending.all_yaku),
                pending.score.base,
                pending.score.multiplier,
                pending.score.total
            )?;
            write!(out, "Koikoi or stop? ")?;
            out.flush()?;
            let Some(line) = read_stdin_line(stdin) else {
                return end_session(&service, out);
            };
            match parse_koikoi_answer(&line) {
                ParseResult::Decision(decision) => {
                    let response = service.resolve_koikoi(&human, decision)?;
                    write_events(out, &response.events, rounds)?;
                }
                ParseResult::Quit => return end_session(&service, out),
                ParseResult::Invalid(msg) => ui::display_warning(err, &msg)?,
                ParseResult::Move(_) => ui::display_warning(err, "answer koikoi or stop")?,
            }
            continue;
        }

        let Some(current) = service.current_player_id().cloned() else {
            break;
        };
        if current != human {
            let response = service.advance_cpu_turn()?;
            if response.events.is_empty() {
                return Err(CliError::Engine(format!("seat {} did not act", current)));
            }
            write_events(out, &response.events, rounds)?;
            continue;
        }

        let moves = service.available_moves(&human)?;
        if moves.is_empty() {
            return Err(CliError::Engine(format!("no moves available for {}", human)));
        }
        if let Some(round) = service.round() {
            let me = round.player(&human)?;
            writeln!(out, "Field: {}", format_cards(round.field().cards()))?;
            writeln!(out, "Hand: {}", format_cards(me.hand()))?;
            writeln!(out, "Captured: {}", me.captured().len())?;
            writeln!(out, "Deck: {}", round.deck_remaining())?;
        }
        for (i, mv) in moves.iter().enumerate() {
            writeln!(out, "  {}) {}", i + 1, format_move(mv))?;
        }
        write!(out, "Move> ")?;
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            return end_session(&service, out);
        };
        match parse_move_choice(&line, moves.len()) {
            ParseResult::Move(idx) => {
                let response = service.play_card(&moves[idx])?;
                write_events(out, &response.events, rounds)?;
            }
            ParseResult::Quit => return end_session(&service, out),
            ParseResult::Invalid(msg) => ui::display_warning(err, &msg)?,
            ParseResult::Decision(_) => ui::display_warning(err, "no koikoi decision pending")?,
        }
    }

    let completed = service.snapshot().match_state.completed_rounds;
    writeln!(out, "Rounds played: {} (completed)", completed)?;
    Ok(())
}

fn end_session(service: &GameService, out: &mut dyn Write) -> Result<(), CliError> {
    let snapshot = service.snapshot().match_state;
    writeln!(out)?;
    writeln!(out, "Session ended by user")?;
    writeln!(
        out,
        "Rounds played: {}/{}",
        snapshot.completed_rounds, snapshot.total_rounds
    )?;
    writeln!(out, "Totals: {}", format_totals(&snapshot.totals))?;
    Ok(())
}

fn write_events(
    out: &mut dyn Write,
    events: &[GameEvent],
    total_rounds: u32,
) -> Result<(), CliError> {
    for event in events {
        match event {
            GameEvent::RoundStart {
                round,
                seed,
                first_player_id,
                redeal_count,
            } => {
                writeln!(out)?;
                ui::write_heading(out, &format!("Round {}/{}", round, total_rounds))?;
                writeln!(out, "Seed: {}  First: {}", seed, first_player_id)?;
                if *redeal_count > 0 {
                    writeln!(out, "Redeals: {}", redeal_count)?;
                }
            }
            GameEvent::Turn(turn) => write_turn(out, turn)?,
            GameEvent::KoikoiPrompt(pending) => {
                writeln!(
                    out,
                    "{} formed {}",
                    pending.player_id,
                    format_yaku_list(&pending.new_yaku)
                )?;
            }
            GameEvent::KoikoiDecision {
                player_id,
                decision,
                level,
            } => match decision {
                KoikoiDecision::Continue => {
                    writeln!(out, "{} calls koikoi (level {})", player_id, level)?
                }
                KoikoiDecision::Stop => writeln!(out, "{} stops", player_id)?,
            },
            GameEvent::RoundEnd(summary) => {
                let reason = match summary.reason {
                    EndReason::NaturalComplete => "all cards played",
                    EndReason::KoikoiStop => "stop",
                };
                let winner = summary
                    .winner_id
                    .as_ref()
                    .map_or_else(|| "none".to_string(), PlayerId::to_string);
                writeln!(
                    out,
                    "Round {} over ({}), winner: {}",
                    summary.round, reason, winner
                )?;
                for p in &summary.points {
                    writeln!(out, "  {}: +{}", p.player_id, p.points)?;
                }
            }
            GameEvent::MatchEnd { totals, winner_id } => {
                writeln!(out)?;
                ui::write_heading(out, "Match over")?;
                writeln!(out, "Totals: {}", format_totals(totals))?;
                match winner_id {
                    Some(id) => writeln!(out, "Winner: {}", id)?,
                    None => writeln!(out, "Result: draw")?,
                }
            }
        }
    }
    Ok(())
}

fn write_turn(out: &mut dyn Write, turn: &TurnOutcome) -> Result<(), CliError> {
    let played = format_card(&turn.hand_card_id.card());
    if turn.captured_from_hand.is_empty() {
        writeln!(out, "{} plays {}", turn.player_id, played)?;
    } else {
        writeln!(
            out,
            "{} plays {} and takes {} card(s)",
            turn.player_id,
            played,
            turn.captured_from_hand.len()
        )?;
    }
    if let Some(drawn) = turn.drawn_card_id {
        let drawn = format_card(&drawn.card());
        if turn.captured_from_deck.is_empty() {
            writeln!(out, "{} draws {}", turn.player_id, drawn)?;
        } else {
            writeln!(
                out,
                "{} draws {} and takes {} card(s)",
                turn.player_id,
                drawn,
                turn.captured_from_deck.len()
            )?;
        }
    }
    Ok(())
}

fn format_totals(totals: &[PlayerTotal]) -> String {
    totals
        .iter()
        .map(|t| format!("{}={}", t.player_id, t.points))
        .collect::<Vec<_>>()
        .join(" ")
}
