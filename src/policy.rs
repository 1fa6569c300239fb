//! Hit/stand decision policies.

use core::fmt;

use crate::card::Card;
use crate::participant::Participant;

/// A choice offered to a participant during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit => f.write_str("hit"),
            Self::Stand => f.write_str("stand"),
        }
    }
}

/// What a policy can see when asked to decide.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    /// The participant whose turn it is.
    pub participant: &'a Participant,
    /// The dealer's face-up card, if one is showing.
    pub dealer_up_card: Option<&'a Card>,
}

/// Source of hit/stand decisions.
///
/// The table calls [`decide`](Self::decide) once per decision point and
/// blocks until it returns. Implementations may prompt a human, follow a
/// fixed rule, or replay a script.
pub trait DecisionPolicy {
    /// Chooses whether to hit or stand.
    fn decide(&mut self, turn: &TurnView<'_>) -> Decision;
}

impl<P: DecisionPolicy + ?Sized> DecisionPolicy for &mut P {
    fn decide(&mut self, turn: &TurnView<'_>) -> Decision {
        (**self).decide(turn)
    }
}

/// Hits below a threshold and stands at or above it. Used by the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedThresholdPolicy {
    /// Lowest total the policy stands on.
    pub stand_at: u8,
}

impl FixedThresholdPolicy {
    /// Creates a policy standing on `stand_at` or more.
    #[must_use]
    pub const fn new(stand_at: u8) -> Self {
        Self { stand_at }
    }

    /// Decision for a bare total.
    #[must_use]
    pub const fn decide_total(&self, total: u8) -> Decision {
        if total >= self.stand_at {
            Decision::Stand
        } else {
            Decision::Hit
        }
    }
}

impl Default for FixedThresholdPolicy {
    fn default() -> Self {
        Self::new(17)
    }
}

impl DecisionPolicy for FixedThresholdPolicy {
    fn decide(&mut self, turn: &TurnView<'_>) -> Decision {
        self.decide_total(turn.participant.hand().total())
    }
}
