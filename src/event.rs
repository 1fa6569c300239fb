//! Notifications the table emits for a display layer.

use alloc::string::String;
use core::fmt;

use crate::card::Card;
use crate::participant::PlayerId;
use crate::result::{HandOutcome, PlayerResult};

/// Who an event is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seat {
    /// A player, by ID and name.
    Player(PlayerId, String),
    /// The dealer.
    Dealer,
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player(_, name) => f.write_str(name),
            Self::Dealer => f.write_str("Dealer"),
        }
    }
}

/// Something that happened at the table.
///
/// Formatting is informational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// Cards were collected and the shoe shuffled.
    Shuffled {
        /// Cards in the shoe afterwards.
        cards: usize,
    },
    /// A bet was accepted and matched by the dealer.
    BetPlaced {
        /// The bettor.
        seat: Seat,
        /// Bet amount.
        amount: usize,
        /// Pot after the dealer's match.
        pot: usize,
        /// Bankroll left.
        bankroll: usize,
    },
    /// A card was dealt.
    CardDealt {
        /// Recipient.
        seat: Seat,
        /// The card as the table sees it (face-down shows as unknown).
        card: Card,
        /// Visible total afterwards.
        total: u8,
    },
    /// The dealer turned the hole card face-up.
    HoleCardRevealed {
        /// The hole card.
        card: Card,
        /// Dealer total afterwards.
        total: u8,
    },
    /// A participant chose to hit.
    Hit {
        /// Who hit.
        seat: Seat,
    },
    /// A participant stood.
    Stood {
        /// Who stood.
        seat: Seat,
        /// Final total.
        total: u8,
    },
    /// A participant went over 21.
    Busted {
        /// Who busted.
        seat: Seat,
        /// Final total.
        total: u8,
        /// Pot forfeited (0 for the dealer).
        forfeited: usize,
    },
    /// Every player busted, so the dealer does not draw.
    AllPlayersBusted,
    /// A player's hand was settled.
    Settled(PlayerResult),
    /// A player left the table for lack of funds.
    Eliminated {
        /// Who left.
        seat: Seat,
        /// Remaining bankroll.
        bankroll: usize,
    },
}

impl fmt::Display for TableEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shuffled { cards } => write!(f, "Shuffled {cards} cards."),
            Self::BetPlaced {
                seat,
                amount,
                pot,
                bankroll,
            } => write!(
                f,
                "{seat} bets ${amount}. The dealer matches; pot is ${pot}. ${bankroll} remaining."
            ),
            Self::CardDealt { seat, card, total } => {
                write!(f, "{seat} is dealt {card}. Hand value: {total}.")
            }
            Self::HoleCardRevealed { card, total } => {
                write!(f, "Dealer reveals {card}. Hand value: {total}.")
            }
            Self::Hit { seat } => write!(f, "{seat} hits."),
            Self::Stood { seat, total } => write!(f, "{seat} stands on {total}."),
            Self::Busted {
                seat: Seat::Dealer,
                total,
                ..
            } => write!(f, "Dealer busts with {total}! Dealer loses all hands in play."),
            Self::Busted {
                seat,
                total,
                forfeited,
            } => write!(f, "{seat} busts with {total} and loses a pot of ${forfeited}."),
            Self::AllPlayersBusted => f.write_str("All players busted!"),
            Self::Settled(result) => match result.outcome {
                HandOutcome::Win => write!(
                    f,
                    "{} beats the dealer and collects ${}. Bankroll: ${}.",
                    result.name, result.payout, result.bankroll
                ),
                HandOutcome::Lose => write!(
                    f,
                    "{} loses; the house takes the pot of ${}. Bankroll: ${}.",
                    result.name, result.house_share, result.bankroll
                ),
                HandOutcome::Push => write!(
                    f,
                    "Push! {}'s bet of ${} is returned. Bankroll: ${}.",
                    result.name, result.payout, result.bankroll
                ),
            },
            Self::Eliminated { seat, bankroll } => write!(
                f,
                "{seat} has ${bankroll}, below the minimum bet, and leaves the table."
            ),
        }
    }
}
