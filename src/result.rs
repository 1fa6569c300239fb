//! Round result types for settlement.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::participant::PlayerId;

/// Result of a player's hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins the whole pot (dealer busts or player is closer to 21).
    Win,
    /// Player forfeits the pot (player busts or dealer is closer to 21).
    Lose,
    /// Tie; the player's own stake comes back and the house keeps the match.
    Push,
}

/// Settlement for a single player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player ID.
    pub player_id: PlayerId,
    /// The player's name.
    pub name: String,
    /// The outcome.
    pub outcome: HandOutcome,
    /// The player's bet.
    pub bet: usize,
    /// The pot at stake (bet plus the dealer's match).
    pub pot: usize,
    /// Amount paid back to the player.
    pub payout: usize,
    /// Amount retained by the house.
    pub house_share: usize,
    /// The player's final hand total.
    pub player_total: u8,
    /// Bankroll after settlement.
    pub bankroll: usize,
}

impl PlayerResult {
    /// Net change to the player's bankroll over the round, saturating at
    /// the bounds of `isize`.
    #[must_use]
    pub fn net(&self) -> isize {
        if self.payout >= self.bet {
            isize::try_from(self.payout - self.bet).unwrap_or(isize::MAX)
        } else {
            isize::try_from(self.bet - self.payout).map_or(isize::MIN, |loss| -loss)
        }
    }
}

/// How the dealer's turn ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerOutcome {
    /// Cards drawn after the hole card was revealed.
    pub drawn: Vec<Card>,
    /// Final dealer total.
    pub total: u8,
    /// Whether the dealer busted.
    pub bust: bool,
}

/// A player removed from the table for lack of funds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elimination {
    /// The player ID.
    pub player_id: PlayerId,
    /// The player's name.
    pub name: String,
    /// Remaining bankroll.
    pub bankroll: usize,
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player in seat order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final hand total.
    pub dealer_total: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer turn was skipped because every player busted.
    pub dealer_skipped: bool,
    /// Players removed for falling below the minimum bet.
    pub eliminated: Vec<Elimination>,
}

impl RoundResult {
    /// Total retained by the house this round.
    #[must_use]
    pub fn house_take(&self) -> usize {
        self.players
            .iter()
            .fold(0usize, |total, p| total.saturating_add(p.house_share))
    }
}
