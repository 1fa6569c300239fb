use crate::card::Card;
use crate::error::ActionError;
use crate::event::TableEvent;
use crate::hand::BLACKJACK;
use crate::participant::PlayerId;
use crate::result::{HandOutcome, PlayerResult};

use super::{RoundPhase, Table};

impl Table {
    fn ensure_player_turn(&self, player_id: PlayerId) -> Result<usize, ActionError> {
        if self.phase != RoundPhase::PlayerTurns {
            return Err(ActionError::InvalidState);
        }

        let index = self
            .player_index(player_id)
            .ok_or(ActionError::PlayerNotFound)?;
        if index != self.turn {
            return Err(ActionError::NotYourTurn);
        }

        Ok(index)
    }

    /// Player action: Hit (draw a card).
    ///
    /// A total over 21 busts the player, forfeits their pot to the house
    /// immediately, and ends their turn.
    ///
    /// # Errors
    ///
    /// Returns an error if players are not acting, the player cannot be
    /// found, it is not their turn, or the shoe is empty.
    pub fn hit(&mut self, player_id: PlayerId) -> Result<Card, ActionError> {
        let index = self.ensure_player_turn(player_id)?;
        let card = self.shoe.deal()?;

        let player = &mut self.players[index];
        let total = player.hand.add_card(card);
        let seat = Self::seat_of(player);
        log::debug!("{} hits: {card}, total {total}", player.name());

        self.emit(TableEvent::Hit { seat: seat.clone() });
        self.emit(TableEvent::CardDealt {
            seat,
            card,
            total,
        });

        if total > BLACKJACK {
            self.forfeit(index);
            self.advance_turn();
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if players are not acting, the player cannot be
    /// found, or it is not their turn.
    pub fn stand(&mut self, player_id: PlayerId) -> Result<(), ActionError> {
        let index = self.ensure_player_turn(player_id)?;

        let player = &self.players[index];
        let total = player.hand.total();
        let seat = Self::seat_of(player);
        log::debug!("{} stands on {total}", player.name());

        self.emit(TableEvent::Stood { seat, total });
        self.advance_turn();

        Ok(())
    }

    /// Marks the player bust and moves their pot to the house.
    fn forfeit(&mut self, index: usize) {
        let player = &mut self.players[index];
        player.bust = true;
        let forfeited = player.pot;
        player.pot = 0;

        let result = PlayerResult {
            player_id: player.id(),
            name: player.name().into(),
            outcome: HandOutcome::Lose,
            bet: player.bet,
            pot: forfeited,
            payout: 0,
            house_share: forfeited,
            player_total: player.hand.total(),
            bankroll: player.bankroll().funds().unwrap_or(0),
        };
        let seat = Self::seat_of(player);
        log::info!("{} busts, house keeps {forfeited}", player.name());

        self.house_take = self.house_take.saturating_add(forfeited);
        self.emit(TableEvent::Busted {
            seat,
            total: result.player_total,
            forfeited,
        });
        self.forfeits.push(result);
    }

    /// Passes the turn to the next player, or ends player turns.
    ///
    /// When every player has busted there is nothing for the dealer to beat,
    /// so the table goes straight to settlement.
    fn advance_turn(&mut self) {
        self.turn += 1;
        if self.turn < self.players.len() {
            return;
        }

        if self.players.iter().all(|p| p.bust) {
            self.emit(TableEvent::AllPlayersBusted);
            self.phase = RoundPhase::Settlement;
        } else {
            self.phase = RoundPhase::DealerTurn;
        }
    }
}
