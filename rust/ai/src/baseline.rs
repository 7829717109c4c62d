//! Baseline opponent for Koi-Koi.
//!
//! Plays the same way every time for the same position, which keeps
//! simulations reproducible from the seed alone.

use koikoi_engine::round::{KoikoiDecision, Move, PendingKoikoi, RoundSnapshot};

use crate::Actor;

/// Base yaku points at which the baseline AI stops instead of declaring koikoi.
pub const STOP_THRESHOLD: u32 = 7;

/// Simple deterministic opponent.
///
/// # Strategy
///
/// **Moves:** the first move (hand order, then field order) that captures;
/// a pure discard of the first hand card when nothing captures.
///
/// **Koikoi:** stop once the pending base points reach [`STOP_THRESHOLD`],
/// otherwise continue.
///
/// # Example
///
/// ```rust
/// use koikoi_ai::baseline::BaselineAI;
/// use koikoi_ai::Actor;
///
/// let ai = BaselineAI::new();
/// assert_eq!(ai.name(), "BaselineAI");
/// assert!(!ai.requires_input());
/// ```
#[derive(Debug, Clone)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }

    fn pick(moves: &[Move]) -> Option<&Move> {
        moves.iter().find(|m| m.captures()).or_else(|| moves.first())
    }

    fn should_stop(pending: &PendingKoikoi) -> bool {
        pending.score.base >= STOP_THRESHOLD
    }
}

impl Default for BaselineAI {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor for BaselineAI {
    fn choose_move(&self, _snapshot: &RoundSnapshot, moves: &[Move]) -> Option<Move> {
        Self::pick(moves).cloned()
    }

    fn decide_koikoi(
        &self,
        _snapshot: &RoundSnapshot,
        pending: &PendingKoikoi,
    ) -> Option<KoikoiDecision> {
        if Self::should_stop(pending) {
            Some(KoikoiDecision::Stop)
        } else {
            Some(KoikoiDecision::Continue)
        }
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}
