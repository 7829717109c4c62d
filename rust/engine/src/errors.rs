use thiserror::Error;

use crate::cards::CardId;
use crate::player::PlayerId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Round is already complete")]
    RoundComplete,
    #[error("It's not player {actual}'s turn (expected {expected})")]
    NotPlayersTurn { expected: String, actual: PlayerId },
    #[error("Koikoi decision pending for player {0}")]
    KoikoiPending(PlayerId),
    #[error("Field selection required: card {card} matches {matches} field cards")]
    FieldSelectionRequired { card: CardId, matches: usize },
    #[error("Field card {selected} is not a valid match for {card}")]
    InvalidFieldSelection { card: CardId, selected: String },
    #[error("Unknown card: {0}")]
    UnknownCard(String),
    #[error("Card {card} not found in hand of {player}")]
    CardNotInHand { card: CardId, player: PlayerId },
    #[error("Field card not found: {0}")]
    FieldCardNotFound(CardId),
    #[error("Unknown player: {0}")]
    UnknownPlayer(PlayerId),
    #[error("Invalid koikoi decision: {0}")]
    InvalidKoikoiDecision(String),
    #[error("No koikoi decision pending for player {0}")]
    NoKoikoiPending(PlayerId),
    #[error("Redeal attempts exhausted after {attempts} deals")]
    RedealLimitExceeded { attempts: u32 },
    #[error("Invalid player count: {count} (expected 2 to 5)")]
    InvalidPlayerCount { count: usize },
    #[error("Duplicate player id: {0}")]
    DuplicatePlayer(PlayerId),
    #[error("Invalid round count: {0} (must be >= 1)")]
    InvalidRoundCount(u32),
    #[error("Match has not started")]
    MatchNotStarted,
    #[error("Match is already finished")]
    MatchFinished,
    #[error("Current round is still in progress")]
    RoundInProgress,
    #[error("Player {0} is not controlled by external input")]
    NotExternalActor(PlayerId),
    #[error("Actor for player {0} did not produce a decision")]
    ActorDeclined(PlayerId),
    #[error("No moves available for player {0}")]
    NoMovesAvailable(PlayerId),
}

impl GameError {
    /// Invariant violations propagate to the host; everything else is a
    /// caller mistake that can be corrected and reissued.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GameError::RedealLimitExceeded { .. }
                | GameError::UnknownPlayer(_)
                | GameError::ActorDeclined(_)
                | GameError::NoMovesAvailable(_)
        )
    }
}
