//! Input parsing and validation for interactive commands.
//!
//! This module provides functions for parsing and validating user input in
//! interactive CLI commands. It handles:
//! - Move selection and koikoi answers during `play`
//! - Card slug lists for the `yaku` command
//!
//! ## Error Handling
//!
//! Validation functions return structured `Result` types or custom enums
//! (like `ParseResult`) to provide clear error messages to users.

use std::collections::HashSet;

use koikoi_engine::cards::CardId;
use koikoi_engine::round::KoikoiDecision;

/// Result of parsing one line typed at the play prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Zero-based index into the listed moves
    Move(usize),
    /// Answer to an open koikoi prompt
    Decision(KoikoiDecision),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input typed while choosing a move.
///
/// Accepts a one-based move number out of `move_count` listed moves, or
/// `q`/`quit`.
///
/// # Example
///
/// ```rust
/// # use koikoi_cli::validation::{parse_move_choice, ParseResult};
/// assert_eq!(parse_move_choice("2", 3), ParseResult::Move(1));
/// assert_eq!(parse_move_choice("q", 3), ParseResult::Quit);
/// assert!(matches!(parse_move_choice("4", 3), ParseResult::Invalid(_)));
/// ```
pub fn parse_move_choice(input: &str, move_count: usize) -> ParseResult {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    if input == "q" || input == "quit" {
        return ParseResult::Quit;
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=move_count).contains(&n) => ParseResult::Move(n - 1),
        Ok(n) => ParseResult::Invalid(format!(
            "Move {} out of range (choose 1-{})",
            n, move_count
        )),
        Err(_) => ParseResult::Invalid(format!("Unrecognized input: {}", input)),
    }
}

/// Parse an answer to a koikoi prompt: `koikoi`/`continue`/`k`, `stop`/`s`,
/// or `q`/`quit`.
pub fn parse_koikoi_answer(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" => ParseResult::Invalid("Empty input".to_string()),
        "q" | "quit" => ParseResult::Quit,
        "k" => ParseResult::Decision(KoikoiDecision::Continue),
        "s" => ParseResult::Decision(KoikoiDecision::Stop),
        other => match other.parse::<KoikoiDecision>() {
            Ok(decision) => ParseResult::Decision(decision),
            Err(_) => ParseResult::Invalid(format!(
                "Unrecognized input: {} (answer koikoi or stop)",
                other
            )),
        },
    }
}

/// Parse card slugs for the `yaku` command. Duplicates are rejected since a
/// captured pile can hold each card once.
pub fn parse_card_list(slugs: &[String]) -> Result<Vec<CardId>, String> {
    if slugs.is_empty() {
        return Err("at least one card is required".to_string());
    }
    let mut seen = HashSet::new();
    let mut ids = Vec::with_capacity(slugs.len());
    for slug in slugs {
        let id: CardId = slug.trim().parse().map_err(|e| format!("{}", e))?;
        if !seen.insert(id) {
            return Err(format!("duplicate card: {}", id));
        }
        ids.push(id);
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_choice_rejects_zero_and_words() {
        assert!(matches!(parse_move_choice("0", 2), ParseResult::Invalid(_)));
        assert!(matches!(parse_move_choice("play", 2), ParseResult::Invalid(_)));
        assert!(matches!(parse_move_choice("  ", 2), ParseResult::Invalid(_)));
    }

    #[test]
    fn move_choice_is_case_insensitive_for_quit() {
        assert_eq!(parse_move_choice("QUIT", 5), ParseResult::Quit);
    }

    #[test]
    fn koikoi_answers() {
        assert_eq!(
            parse_koikoi_answer("koikoi"),
            ParseResult::Decision(KoikoiDecision::Continue)
        );
        assert_eq!(
            parse_koikoi_answer(" Stop "),
            ParseResult::Decision(KoikoiDecision::Stop)
        );
        assert_eq!(
            parse_koikoi_answer("k"),
            ParseResult::Decision(KoikoiDecision::Continue)
        );
        assert_eq!(parse_koikoi_answer("q"), ParseResult::Quit);
        assert!(matches!(parse_koikoi_answer("maybe"), ParseResult::Invalid(_)));
    }

    #[test]
    fn card_list_parses_slugs() {
        let ids = parse_card_list(&["01-light-crane".into(), "08-light-moon".into()]).unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[1].slug(), "08-light-moon");
    }

    #[test]
    fn card_list_rejects_unknown_and_duplicates() {
        let err = parse_card_list(&["13-light-sun".into()]).unwrap_err();
        assert!(err.contains("13-light-sun"));

        let err = parse_card_list(&["01-chaff-a".into(), "01-chaff-a".into()]).unwrap_err();
        assert!(err.contains("duplicate"));

        assert!(parse_card_list(&[]).is_err());
    }
}
