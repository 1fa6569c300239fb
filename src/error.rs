//! Error types for table operations.

use thiserror::Error;

use crate::participant::PlayerId;

/// The shoe cannot supply the cards a deal needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not enough cards in the shoe: {needed} needed, {remaining} remaining")]
pub struct EmptyShoeError {
    /// Cards the deal required.
    pub needed: usize,
    /// Cards left in the shoe.
    pub remaining: usize,
}

/// Errors that can occur while seating a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// No players were given.
    #[error("at least one player is required")]
    NoPlayers,
    /// More players than seats.
    #[error("too many players: {count} (max {max})")]
    TooManyPlayers {
        /// Players requested.
        count: usize,
        /// Seats available.
        max: usize,
    },
    /// Minimum bet is zero.
    #[error("minimum bet must be positive")]
    ZeroMinimumBet,
    /// Players could not afford a single hand.
    #[error("starting bankroll {bankroll} is below the minimum bet {minimum}")]
    BankrollBelowMinimum {
        /// Configured starting bankroll.
        bankroll: usize,
        /// Configured minimum bet.
        minimum: usize,
    },
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid round phase for starting a round or restacking the shoe.
    #[error("invalid round phase for this operation")]
    InvalidState,
    /// Every player has been eliminated.
    #[error("no players left at the table")]
    NoPlayers,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid round phase for betting.
    #[error("invalid round phase for betting")]
    InvalidState,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet below the table minimum.
    #[error("bet is below the minimum of {minimum}")]
    BelowMinimum {
        /// Table minimum bet.
        minimum: usize,
    },
    /// Bet exceeds the player's bankroll.
    #[error("insufficient funds: {available} available")]
    InsufficientFunds {
        /// Player bankroll.
        available: usize,
    },
    /// Player already bet this round.
    #[error("bet already placed this round")]
    AlreadyPlaced,
    /// The dealer's match would overflow the pot.
    #[error("bet exceeds the table maximum of {maximum}")]
    TooLarge {
        /// Largest bet the dealer can match.
        maximum: usize,
    },
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round phase for dealing.
    #[error("invalid round phase for dealing")]
    InvalidState,
    /// A seated player has not bet.
    #[error("player {0} has not placed a bet")]
    MissingBet(PlayerId),
    /// Not enough cards in the shoe.
    #[error(transparent)]
    EmptyShoe(#[from] EmptyShoeError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round phase for this action.
    #[error("invalid round phase for this action")]
    InvalidState,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// No cards left in the shoe.
    #[error(transparent)]
    EmptyShoe(#[from] EmptyShoeError),
}

/// Errors that can occur during the dealer turn and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid round phase for showdown.
    #[error("invalid round phase for showdown")]
    InvalidState,
    /// No cards left in the shoe.
    #[error(transparent)]
    EmptyShoe(#[from] EmptyShoeError),
}

/// Errors that can occur while playing a round end to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The dealer turn or settlement failed.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
}
