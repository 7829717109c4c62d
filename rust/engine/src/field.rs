use serde::Serialize;

use crate::cards::{Card, CardId, Month};
use crate::errors::GameError;

/// Face-up cards shared by every player.
#[derive(Debug, Clone, Default)]
pub struct Field {
    cards: Vec<Card>,
    discard: Vec<Card>,
}

/// Owned copy of the field for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSnapshot {
    pub cards: Vec<Card>,
    pub discard: Vec<Card>,
}

impl Field {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn remove_card(&mut self, id: CardId) -> Result<Card, GameError> {
        let idx = self
            .cards
            .iter()
            .position(|c| c.id == id)
            .ok_or(GameError::FieldCardNotFound(id))?;
        Ok(self.cards.remove(idx))
    }

    /// Field cards sharing `month`, in field order.
    pub fn matches(&self, month: Month) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|c| c.month == month)
            .copied()
            .collect()
    }

    /// Places `card` face-up when nothing matches, otherwise captures it
    /// together with one matching field card.
    ///
    /// A single match is captured automatically. Several matches require
    /// `selected`; the field never picks among them on its own.
    ///
    /// # Errors
    ///
    /// - [`GameError::FieldSelectionRequired`] with several matches and no selection
    /// - [`GameError::InvalidFieldSelection`] when `selected` is not one of the matches
    pub fn place_or_capture(
        &mut self,
        card: Card,
        selected: Option<CardId>,
    ) -> Result<Vec<Card>, GameError> {
        let matches = self.matches(card.month);
        if matches.is_empty() {
            if let Some(sel) = selected {
                return Err(GameError::InvalidFieldSelection {
                    card: card.id,
                    selected: sel.to_string(),
                });
            }
            self.add_card(card);
            return Ok(Vec::new());
        }

        let target = match selected {
            Some(sel) => sel,
            None if matches.len() == 1 => matches[0].id,
            None => {
                return Err(GameError::FieldSelectionRequired {
                    card: card.id,
                    matches: matches.len(),
                })
            }
        };
        if !matches.iter().any(|m| m.id == target) {
            return Err(GameError::InvalidFieldSelection {
                card: card.id,
                selected: target.to_string(),
            });
        }
        let field_card = self.remove_card(target)?;
        Ok(vec![card, field_card])
    }

    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            cards: self.cards.clone(),
            discard: self.discard.clone(),
        }
    }
}
