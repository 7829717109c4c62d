//! Card, field and yaku formatters for terminal display.
//!
//! Pure functions. Month labels use kanji where the terminal can render
//! them and fall back to the English flower name otherwise.
//!
//! ## Example
//!
//! ```rust
//! use koikoi_cli::formatters::format_card;
//! use koikoi_engine::cards::CardId;
//!
//! let crane: CardId = "01-light-crane".parse().unwrap();
//! assert!(format_card(&crane.card()).contains("Pine with Crane"));
//! ```

use koikoi_engine::cards::{Card, Category, Month};
use koikoi_engine::round::Move;
use koikoi_engine::yaku::Yaku;

/// Check if the terminal supports Unicode by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// `01松` in Unicode mode, `01 Pine` otherwise.
pub fn format_month(month: Month) -> String {
    if supports_unicode() {
        format!("{:02}{}", month.value(), month.kanji())
    } else {
        format!("{:02} {}", month.value(), month.label())
    }
}

fn category_marker(category: Category) -> &'static str {
    match category {
        Category::Light => "L",
        Category::Animal => "A",
        Category::Ribbon => "R",
        Category::Chaff => "C",
    }
}

/// One card as `[01松 L] Pine with Crane`.
pub fn format_card(card: &Card) -> String {
    format!(
        "[{} {}] {}",
        format_month(card.month),
        category_marker(card.category),
        card.name
    )
}

/// Cards joined on one line; `(empty)` when there are none.
pub fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(", ")
}

/// `Pine with Crane -> Pine Chaff` for a capture, `Pine with Crane -> field`
/// for a discard.
pub fn format_move(mv: &Move) -> String {
    let played = mv.hand_card_id.card();
    if mv.field_card_ids.is_empty() {
        format!("{} -> field", format_card(&played))
    } else {
        let targets: Vec<_> = mv
            .field_card_ids
            .iter()
            .map(|id| format_card(&id.card()))
            .collect();
        format!("{} -> {}", format_card(&played), targets.join(", "))
    }
}

/// `Three Lights (Sanko) 5` per line item, comma-joined.
pub fn format_yaku_list(yaku: &[Yaku]) -> String {
    if yaku.is_empty() {
        return "none".to_string();
    }
    yaku.iter()
        .map(|y| format!("{} {}", y.name(), y.points))
        .collect::<Vec<_>>()
        .join(", ")
}
