//! Hand representation and soft-ace valuation.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Value of a perfect hand.
pub const BLACKJACK: u8 = 21;

/// Computes the total of `cards` without touching them.
///
/// Face-down cards count 0. Face-up aces that are not yet demoted start at
/// 11 and are counted as 1, in hand order, while the total exceeds 21.
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    let mut value: u8 = 0;
    let mut soft_aces: u8 = 0;

    for card in cards {
        if card.is_soft_ace() {
            soft_aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > BLACKJACK && soft_aces > 0 {
        value -= 10;
        soft_aces -= 1;
    }

    value
}

/// Sums `cards` and demotes soft aces in hand order until the total is 21 or
/// less or no soft ace remains. Returns the final total.
fn settle_aces(cards: &mut [Card]) -> u8 {
    let mut value = cards
        .iter()
        .fold(0u8, |total, card| total.saturating_add(card.value()));

    for card in cards.iter_mut() {
        if value <= BLACKJACK {
            break;
        }
        if card.demote() {
            value -= 10;
        }
    }

    value
}

/// An ordered hand of cards with its total kept in sync.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
    total: u8,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            total: 0,
        }
    }

    /// Adds a card and returns the new total.
    pub fn add_card(&mut self, card: Card) -> u8 {
        self.cards.push(card);
        self.revalue()
    }

    /// Flips the card at `index` and returns the new total.
    ///
    /// Returns `None` if there is no card at `index`.
    pub fn flip_card(&mut self, index: usize) -> Option<u8> {
        self.cards.get_mut(index)?.flip();
        Some(self.revalue())
    }

    fn revalue(&mut self) -> u8 {
        self.total = settle_aces(&mut self.cards);
        self.total
    }

    /// Returns the cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the hand total.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Returns `21 - total`. Negative when bust.
    #[must_use]
    pub fn distance_from_blackjack(&self) -> i16 {
        i16::from(BLACKJACK) - i16::from(self.total)
    }

    /// Returns whether the total exceeds 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > BLACKJACK
    }

    /// Returns whether an ace is still counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.cards.iter().any(Card::is_soft_ace)
    }

    /// Returns whether any card is face-down.
    #[must_use]
    pub fn has_hidden_card(&self) -> bool {
        self.cards.iter().any(Card::is_face_down)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Empties the hand, returning the cards restored face-up.
    pub fn take_cards(&mut self) -> Vec<Card> {
        self.total = 0;
        let mut cards = core::mem::take(&mut self.cards);
        for card in &mut cards {
            card.reset();
        }
        cards
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("(empty)");
        }
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
