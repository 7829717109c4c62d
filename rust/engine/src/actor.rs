use crate::round::{KoikoiDecision, Move, PendingKoikoi, RoundSnapshot};

/// Decision maker for one seat.
///
/// The game service asks automated actors for moves and koikoi decisions;
/// seats whose actor [`requires_input`](Actor::requires_input) wait for the
/// host to call `play_card` / `resolve_koikoi` instead.
///
/// # Example Implementation
///
/// ```rust
/// use koikoi_engine::actor::Actor;
/// use koikoi_engine::round::{KoikoiDecision, Move, PendingKoikoi, RoundSnapshot};
///
/// struct AlwaysStop;
///
/// impl Actor for AlwaysStop {
///     fn choose_move(&self, _snapshot: &RoundSnapshot, moves: &[Move]) -> Option<Move> {
///         moves.first().cloned()
///     }
///
///     fn decide_koikoi(
///         &self,
///         _snapshot: &RoundSnapshot,
///         _pending: &PendingKoikoi,
///     ) -> Option<KoikoiDecision> {
///         Some(KoikoiDecision::Stop)
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysStop"
///     }
/// }
/// ```
pub trait Actor: Send + Sync {
    /// Whether this seat is driven from outside the service.
    fn requires_input(&self) -> bool {
        false
    }

    /// Picks one of `moves`, which is never empty. `None` declines.
    fn choose_move(&self, snapshot: &RoundSnapshot, moves: &[Move]) -> Option<Move>;

    /// Answers an open koikoi prompt. `None` declines.
    fn decide_koikoi(
        &self,
        snapshot: &RoundSnapshot,
        pending: &PendingKoikoi,
    ) -> Option<KoikoiDecision>;

    fn name(&self) -> &str;
}

/// A seat controlled by the host, typically a human.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalActor;

impl Actor for ExternalActor {
    fn requires_input(&self) -> bool {
        true
    }

    fn choose_move(&self, _snapshot: &RoundSnapshot, _moves: &[Move]) -> Option<Move> {
        None
    }

    fn decide_koikoi(
        &self,
        _snapshot: &RoundSnapshot,
        _pending: &PendingKoikoi,
    ) -> Option<KoikoiDecision> {
        None
    }

    fn name(&self) -> &str {
        "External"
    }
}
