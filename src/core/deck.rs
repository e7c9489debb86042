//! Ordered draw pile
//!
//! The deck is a stack of cards drawn from the top (the end of the Vec).
//! Shuffling is a uniform Fisher-Yates permutation driven by the caller's
//! RNG so games are reproducible from a seed. Drawing from an empty deck
//! yields `None` - that is the deck-out loss signal, not an error.

use crate::core::{Card, CardId};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    /// Uniform in-place shuffle.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.cards.shuffle(rng);
    }

    /// Pop the top card. `None` means the pile is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw up to `n` cards; stops early if the deck runs out.
    pub fn draw_multiple(&mut self, n: usize) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(n);
        for _ in 0..n {
            match self.draw() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    /// Look at the top card without removing it.
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Put a card on top of the pile.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove a specific card by id, preserving the order of the rest.
    pub fn remove_card(&mut self, id: CardId) -> Option<Card> {
        let pos = self.cards.iter().position(|c| c.id() == id)?;
        Some(self.cards.remove(pos))
    }

    /// Replace the contents and reshuffle.
    pub fn reset(&mut self, cards: Vec<Card>, rng: &mut impl Rng) {
        self.cards = cards;
        self.shuffle(rng);
    }

    /// Card ids in pile order, bottom first (for diffing and tests).
    pub fn card_ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id()).collect()
    }
}
