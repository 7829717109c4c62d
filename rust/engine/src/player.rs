use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};
use crate::errors::GameError;

/// Stable identifier of a seated player.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Identity of a player at the table.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatConfig {
    pub id: PlayerId,
    pub name: String,
}

impl SeatConfig {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
        }
    }
}

/// One player's hand and captured pile for the lifetime of a round.
#[derive(Debug, Clone)]
pub struct PlayerState {
    id: PlayerId,
    name: String,
    hand: Vec<Card>,
    captured: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub name: String,
    pub hand: Vec<Card>,
    pub captured: Vec<Card>,
}

impl PlayerState {
    pub fn new(seat: &SeatConfig) -> Self {
        Self {
            id: seat.id.clone(),
            name: seat.name.clone(),
            hand: Vec::with_capacity(8),
            captured: Vec::new(),
        }
    }

    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn captured(&self) -> &[Card] {
        &self.captured
    }

    pub fn receive_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn hand_card(&self, id: CardId) -> Option<Card> {
        self.hand.iter().find(|c| c.id == id).copied()
    }

    pub fn remove_hand_card(&mut self, id: CardId) -> Result<Card, GameError> {
        let idx = self
            .hand
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| GameError::CardNotInHand {
                card: id,
                player: self.id.clone(),
            })?;
        Ok(self.hand.remove(idx))
    }

    pub fn capture_cards(&mut self, cards: &[Card]) {
        self.captured.extend_from_slice(cards);
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            hand: self.hand.clone(),
            captured: self.captured.clone(),
        }
    }
}
