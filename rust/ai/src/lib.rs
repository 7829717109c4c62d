//! # koikoi-ai: Automated Koi-Koi Opponents
//!
//! Provides automated seats for the Koi-Koi engine. Every opponent
//! implements the engine's [`Actor`] trait, so the game service drives it
//! the same way regardless of strategy.
//!
//! ## Core Components
//!
//! - [`baseline`] - Deterministic capture-first opponent
//! - [`create_ai`] - Factory function for creating opponents by name
//!
//! ## Quick Start
//!
//! ```rust
//! use koikoi_ai::create_ai;
//! use koikoi_engine::game::{GameService, MatchConfig, Seat};
//!
//! let seats = vec![
//!     Seat::new("a", "CPU A", create_ai("baseline").unwrap()),
//!     Seat::new("b", "CPU B", create_ai("baseline").unwrap()),
//! ];
//! let config = MatchConfig { seed: Some(42), total_rounds: 1, ..MatchConfig::default() };
//! let mut service = GameService::new(config, seats).unwrap();
//!
//! service.start_match().unwrap();
//! assert!(service.is_match_finished());
//! ```
//!
//! ## AI Types
//!
//! Currently supported AI types:
//! - `"baseline"` - Capture-first play, stops at 7 base points

pub use koikoi_engine::actor::Actor;
use thiserror::Error;

pub mod baseline;

/// Names accepted by [`create_ai`].
pub const AI_TYPES: &[&str] = &["baseline"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AiError {
    #[error("Unknown AI type: {0} (available: {available})", available = AI_TYPES.join(", "))]
    UnknownType(String),
}

/// Factory function to create opponents by type string.
///
/// # Example
///
/// ```rust
/// use koikoi_ai::create_ai;
///
/// let ai = create_ai("baseline").unwrap();
/// assert_eq!(ai.name(), "BaselineAI");
/// assert!(create_ai("oracle").is_err());
/// ```
///
/// # Errors
///
/// [`AiError::UnknownType`] for names outside [`AI_TYPES`].
pub fn create_ai(ai_type: &str) -> Result<Box<dyn Actor>, AiError> {
    match ai_type.trim().to_ascii_lowercase().as_str() {
        "baseline" => Ok(Box::new(baseline::BaselineAI::new())),
        _ => Err(AiError::UnknownType(ai_type.to_string())),
    }
}
