//! # koikoi-engine: Koi-Koi Rule Engine Core
//!
//! A deterministic hanafuda Koi-Koi engine for two to five players.
//! Provides the fixed 48-card catalog, seeded dealing with redeal on
//! four-of-a-month, the turn state machine with koikoi prompts, yaku
//! evaluation, scoring, and match orchestration.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card catalog (Month, Category, Tag, CardId, Card)
//! - [`random`] - xorshift32 generator used for shuffling
//! - [`deck`] - Seeded draw pile
//! - [`field`] - Shared face-up cards and capture resolution
//! - [`player`] - Player identity, hand and captured pile
//! - [`round`] - RoundState: deal, moves, draws, koikoi, finalization
//! - [`yaku`] - Yaku evaluation over a captured pile
//! - [`score`] - Koikoi multipliers and round point assignment
//! - [`actor`] - Seat decision makers (external or automated)
//! - [`game`] - GameService: multi-round match orchestration
//! - [`logger`] - RoundRecord serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use koikoi_engine::cards::CardId;
//! use koikoi_engine::yaku::{evaluate, sum_points};
//!
//! let captured: Vec<_> = ["01-light-crane", "08-light-moon", "12-light-phoenix"]
//!     .iter()
//!     .map(|s| s.parse::<CardId>().unwrap().card())
//!     .collect();
//!
//! let yaku = evaluate(&captured);
//! assert_eq!(sum_points(&yaku), 5);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All deals are reproducible from the seed:
//!
//! ```rust
//! use koikoi_engine::deck::Deck;
//!
//! let deck1 = Deck::create(42);
//! let deck2 = Deck::create(42);
//! assert_eq!(deck1.card_ids(), deck2.card_ids());
//! ```
//!
//! ## Playing a Round
//!
//! ```rust
//! use koikoi_engine::player::SeatConfig;
//! use koikoi_engine::round::{KoikoiDecision, RoundConfig, RoundState};
//!
//! let mut round = RoundState::new(RoundConfig {
//!     seed: Some(7),
//!     players: vec![SeatConfig::new("a", "A"), SeatConfig::new("b", "B")],
//! })
//! .unwrap();
//!
//! while !round.is_complete() {
//!     if let Some(pending) = round.pending_koikoi().cloned() {
//!         round.handle_koikoi_decision(&pending.player_id, KoikoiDecision::Stop).unwrap();
//!         continue;
//!     }
//!     let current = round.current_player_id().cloned().unwrap();
//!     let moves = round.available_moves(&current).unwrap();
//!     round.apply_move(&moves[0]).unwrap();
//! }
//! assert!(round.result().is_some());
//! ```

pub mod actor;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod field;
pub mod game;
pub mod logger;
pub mod player;
pub mod random;
pub mod round;
pub mod score;
pub mod yaku;
