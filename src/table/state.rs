//! Round phase types.

/// Where the table is within a round.
///
/// Phases advance strictly in declaration order and wrap from
/// [`RoundEnd`](Self::RoundEnd) back to [`Betting`](Self::Betting).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    /// Accepting bets for the next round.
    Betting,
    /// Dealing the initial two cards each.
    Dealing,
    /// Players act one at a time in seat order.
    PlayerTurns,
    /// Dealer reveals the hole card and plays out the hand.
    DealerTurn,
    /// Hands are compared and pots paid out.
    Settlement,
    /// Round is finished; hands stay on the table until the next round.
    RoundEnd,
}

impl RoundPhase {
    /// Returns whether a deal is in progress.
    #[must_use]
    pub const fn is_round_active(self) -> bool {
        !matches!(self, Self::Betting | Self::RoundEnd)
    }
}
