use crate::error::{BetError, DealError};
use crate::event::{Seat, TableEvent};
use crate::participant::PlayerId;

use super::{RoundPhase, Table};

impl Table {
    /// Places a bet for the specified player. The dealer matches it, so the
    /// player's pot becomes twice the bet.
    ///
    /// Returns the player's pot.
    ///
    /// # Errors
    ///
    /// Returns an error if betting is not open, the player cannot be found,
    /// has already bet, the amount is zero, below the minimum or too large
    /// for the dealer to match, or the player lacks funds.
    pub fn place_bet(&mut self, player_id: PlayerId, amount: usize) -> Result<usize, BetError> {
        if self.phase != RoundPhase::Betting {
            return Err(BetError::InvalidState);
        }
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        let minimum = self.options.minimum_bet;
        let index = self
            .player_index(player_id)
            .ok_or(BetError::PlayerNotFound)?;
        let player = &mut self.players[index];

        if player.bet > 0 {
            return Err(BetError::AlreadyPlaced);
        }
        if amount < minimum {
            return Err(BetError::BelowMinimum { minimum });
        }
        let Some(pot) = amount.checked_mul(2) else {
            return Err(BetError::TooLarge {
                maximum: usize::MAX / 2,
            });
        };

        let bankroll = player.bankroll_mut();
        if !bankroll.debit(amount) {
            return Err(BetError::InsufficientFunds {
                available: bankroll.funds().unwrap_or(0),
            });
        }
        let remaining = bankroll.funds().unwrap_or(0);

        player.bet = amount;
        player.pot = pot;

        log::debug!("{} bets {amount}, pot {pot}", player.name());
        let seat = Self::seat_of(player);
        self.emit(TableEvent::BetPlaced {
            seat,
            amount,
            pot,
            bankroll: remaining,
        });

        Ok(pot)
    }

    /// Deals two cards to every player and the dealer, one at a time in seat
    /// order with the dealer last. The dealer's first card is the face-down
    /// hole card.
    ///
    /// # Errors
    ///
    /// Returns an error if betting is not open, a player has not bet, or the
    /// shoe cannot cover the deal.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.phase != RoundPhase::Betting {
            return Err(DealError::InvalidState);
        }

        if let Some(player) = self.players.iter().find(|p| p.bet == 0) {
            return Err(DealError::MissingBet(player.id()));
        }

        self.shoe.ensure((self.players.len() + 1) * 2)?;
        self.phase = RoundPhase::Dealing;

        for pass in 0..2 {
            for index in 0..self.players.len() {
                let card = self.shoe.deal()?;
                let player = &mut self.players[index];
                let total = player.hand.add_card(card);
                let seat = Self::seat_of(player);
                self.emit(TableEvent::CardDealt { seat, card, total });
            }

            let mut card = self.shoe.deal()?;
            let mut total = self.dealer.hand.add_card(card);
            if pass == 0 {
                total = self.dealer.hand.flip_card(0).unwrap_or(total);
                card.flip();
            }
            self.emit(TableEvent::CardDealt {
                seat: Seat::Dealer,
                card,
                total,
            });
        }

        log::debug!(
            "dealt {} hands, dealer shows {:?}",
            self.players.len(),
            self.dealer_up_card()
        );

        self.turn = 0;
        self.phase = RoundPhase::PlayerTurns;
        Ok(())
    }
}
