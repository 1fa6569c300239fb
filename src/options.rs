//! Table configuration options.

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_minimum_bet(50)
///     .with_starting_bankroll(1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Smallest accepted bet. Players whose bankroll drops below it leave.
    pub minimum_bet: usize,
    /// Bankroll each player is seated with.
    pub starting_bankroll: usize,
    /// Lowest total the dealer stands on.
    pub dealer_stands_at: u8,
    /// Maximum number of players.
    pub max_players: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            minimum_bet: 25,
            starting_bankroll: 500,
            dealer_stands_at: 17,
            max_players: 4,
        }
    }
}

impl TableOptions {
    /// Sets the minimum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_minimum_bet(50);
    /// assert_eq!(options.minimum_bet, 50);
    /// ```
    #[must_use]
    pub const fn with_minimum_bet(mut self, minimum_bet: usize) -> Self {
        self.minimum_bet = minimum_bet;
        self
    }

    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_bankroll(200);
    /// assert_eq!(options.starting_bankroll, 200);
    /// ```
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: usize) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Sets the total the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_stands_at(18);
    /// assert_eq!(options.dealer_stands_at, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, total: u8) -> Self {
        self.dealer_stands_at = total;
        self
    }

    /// Sets the maximum number of players.
    #[must_use]
    pub const fn with_max_players(mut self, max_players: usize) -> Self {
        self.max_players = max_players;
        self
    }
}
