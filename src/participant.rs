//! Players and the dealer.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;

/// Seat identifier assigned to a player when the table is created.
pub type PlayerId = u8;

/// Which side of the table a participant sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Human-controlled player.
    Player,
    /// House dealer.
    Dealer,
}

/// Money available to a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bankroll {
    /// A finite balance.
    Funds(usize),
    /// The house; matches any stake without drawing from a balance.
    Unlimited,
}

impl Bankroll {
    /// Returns the balance, or `None` for the house.
    #[must_use]
    pub const fn funds(&self) -> Option<usize> {
        match self {
            Self::Funds(amount) => Some(*amount),
            Self::Unlimited => None,
        }
    }

    /// Returns whether `amount` can be staked.
    #[must_use]
    pub const fn covers(&self, amount: usize) -> bool {
        match self {
            Self::Funds(balance) => *balance >= amount,
            Self::Unlimited => true,
        }
    }

    /// Removes `amount`. Returns `false` without changing anything if the
    /// balance is too small.
    pub const fn debit(&mut self, amount: usize) -> bool {
        match self {
            Self::Funds(balance) => {
                if *balance < amount {
                    return false;
                }
                *balance -= amount;
                true
            }
            Self::Unlimited => true,
        }
    }

    /// Adds `amount`.
    pub const fn credit(&mut self, amount: usize) {
        if let Self::Funds(balance) = self {
            *balance = balance.saturating_add(amount);
        }
    }
}

/// Someone seated at the table.
#[derive(Debug, Clone)]
pub struct Participant {
    id: PlayerId,
    name: String,
    role: Role,
    bankroll: Bankroll,
    pub(crate) hand: Hand,
    pub(crate) bust: bool,
    pub(crate) bet: usize,
    pub(crate) pot: usize,
}

impl Participant {
    /// Creates a player with a finite bankroll.
    #[must_use]
    pub fn player(id: PlayerId, name: String, bankroll: usize) -> Self {
        Self::seated(id, name, Role::Player, Bankroll::Funds(bankroll))
    }

    /// Creates the dealer.
    #[must_use]
    pub fn dealer() -> Self {
        Self::seated(0, String::from("Dealer"), Role::Dealer, Bankroll::Unlimited)
    }

    const fn seated(id: PlayerId, name: String, role: Role, bankroll: Bankroll) -> Self {
        Self {
            id,
            name,
            role,
            bankroll,
            hand: Hand::new(),
            bust: false,
            bet: 0,
            pot: 0,
        }
    }

    /// Returns the seat identifier. The dealer is always 0.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> Bankroll {
        self.bankroll
    }

    pub(crate) const fn bankroll_mut(&mut self) -> &mut Bankroll {
        &mut self.bankroll
    }

    /// Returns the current hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns whether the participant busted this round.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.bust
    }

    /// Returns the bet placed this round (0 before betting).
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the player's share of the pot: their stake plus the dealer's match.
    #[must_use]
    pub const fn pot(&self) -> usize {
        self.pot
    }

    /// Clears per-round state, returning the hand's cards.
    pub(crate) fn reset_round(&mut self) -> Vec<Card> {
        self.bust = false;
        self.bet = 0;
        self.pot = 0;
        self.hand.take_cards()
    }
}
