use std::collections::{HashSet, VecDeque};

use crate::cards::{full_deck, Card, CardId};
use crate::random::XorShift32;

/// Draw pile for one round attempt. Cards leave from the front.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Builds the full catalog and shuffles it once with the given seed.
    pub fn create(seed: u32) -> Self {
        let mut rng = XorShift32::new(seed);
        let mut cards = full_deck();
        rng.shuffle(&mut cards);
        Self::from_cards(cards)
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// The given cards first, in order, then every remaining catalog card in
    /// catalog order. Repeated ids in `prefix` are kept once.
    pub fn stacked(prefix: &[CardId]) -> Self {
        let mut seen = HashSet::new();
        let mut cards = Vec::with_capacity(full_deck().len());
        for id in prefix {
            if seen.insert(*id) {
                cards.push(id.card());
            }
        }
        for c in full_deck() {
            if !seen.contains(&c.id) {
                cards.push(c);
            }
        }
        Self::from_cards(cards)
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card_ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id).collect()
    }
}
