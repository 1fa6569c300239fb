//! The single-deck shoe cards are dealt from.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyShoeError;

/// Builds the 52-card deck in canonical order (suit-major, rank-minor).
#[must_use]
pub fn new_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

/// An ordered pile of cards dealt from the front.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: VecDeque<Card>,
}

impl Shoe {
    /// Creates an unshuffled shoe holding one full deck.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: new_deck().into(),
        }
    }

    /// Creates a shoe that deals exactly `cards`, first element first.
    ///
    /// Useful to stack the shoe for deterministic play.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Applies a uniform random permutation to the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe is empty.
    pub fn deal(&mut self) -> Result<Card, EmptyShoeError> {
        self.cards.pop_front().ok_or(EmptyShoeError {
            needed: 1,
            remaining: 0,
        })
    }

    /// Fails unless at least `needed` cards remain.
    ///
    /// # Errors
    ///
    /// Returns an error describing the shortfall.
    pub fn ensure(&self, needed: usize) -> Result<(), EmptyShoeError> {
        let remaining = self.cards.len();
        if remaining < needed {
            return Err(EmptyShoeError { needed, remaining });
        }
        Ok(())
    }

    /// Puts cards back at the bottom of the shoe, restored face-up.
    pub fn return_cards<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards.into_iter().map(|mut card| {
            card.reset();
            card
        }));
    }

    /// Returns the remaining cards in deal order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Shoe {
    fn default() -> Self {
        Self::new()
    }
}
