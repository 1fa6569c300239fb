use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::event::{Seat, TableEvent};
use crate::hand::BLACKJACK;
use crate::policy::{Decision, DecisionPolicy, FixedThresholdPolicy, TurnView};
use crate::result::{DealerOutcome, Elimination, HandOutcome, PlayerResult, RoundResult};

use super::{RoundPhase, Table};

impl Table {
    /// Turns the hole card face-up, if it is still hidden.
    fn reveal_hole(&mut self) {
        let Some(index) = self
            .dealer
            .hand
            .cards()
            .iter()
            .position(Card::is_face_down)
        else {
            return;
        };

        let Some(total) = self.dealer.hand.flip_card(index) else {
            return;
        };
        if let Some(&card) = self.dealer.hand.cards().get(index) {
            log::debug!("dealer reveals {card}, total {total}");
            self.emit(TableEvent::HoleCardRevealed { card, total });
        }
    }

    /// Dealer plays their hand according to the fixed threshold policy.
    ///
    /// The dealer reveals the hole card, then busts over 21, stands at
    /// [`TableOptions::dealer_stands_at`](crate::TableOptions::dealer_stands_at)
    /// or more (soft or hard), and otherwise draws.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the shoe is empty
    /// while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<DealerOutcome, ShowdownError> {
        if self.phase != RoundPhase::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        self.reveal_hole();

        let mut policy = FixedThresholdPolicy::new(self.options.dealer_stands_at);
        let mut drawn = Vec::new();

        loop {
            let total = self.dealer.hand.total();
            if total > BLACKJACK {
                self.dealer.bust = true;
                log::debug!("dealer busts with {total}");
                self.emit(TableEvent::Busted {
                    seat: Seat::Dealer,
                    total,
                    forfeited: 0,
                });
                break;
            }

            let view = TurnView {
                participant: &self.dealer,
                dealer_up_card: None,
            };
            if policy.decide(&view) == Decision::Stand {
                log::debug!("dealer stands on {total}");
                self.emit(TableEvent::Stood {
                    seat: Seat::Dealer,
                    total,
                });
                break;
            }

            self.emit(TableEvent::Hit { seat: Seat::Dealer });
            let card = self.shoe.deal()?;
            let total = self.dealer.hand.add_card(card);
            drawn.push(card);
            self.emit(TableEvent::CardDealt {
                seat: Seat::Dealer,
                card,
                total,
            });
        }

        self.phase = RoundPhase::Settlement;

        Ok(DealerOutcome {
            drawn,
            total: self.dealer.hand.total(),
            bust: self.dealer.bust,
        })
    }

    /// Settles every pot still at stake, then removes players who can no
    /// longer cover the minimum bet.
    ///
    /// Each player still in the hand is resolved against the one dealer hand:
    /// a dealer bust pays every such player their whole pot; otherwise the
    /// hand closer to 21 wins, and a tie returns the player's stake while
    /// the house keeps the dealer's match. Players who busted were settled
    /// when they busted and appear in the result as losses.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the settlement phase.
    pub fn settle(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.phase != RoundPhase::Settlement {
            return Err(ShowdownError::InvalidState);
        }

        let dealer_skipped = self.dealer.hand.has_hidden_card();
        self.reveal_hole();

        let dealer_total = self.dealer.hand.total();
        let dealer_bust = self.dealer.bust;
        let dealer_distance = self.dealer.hand.distance_from_blackjack();

        let mut results = core::mem::take(&mut self.forfeits);
        let mut settled = Vec::new();

        for player in self.players.iter_mut().filter(|p| !p.bust) {
            let outcome = if dealer_bust {
                HandOutcome::Win
            } else {
                match player.hand.distance_from_blackjack().cmp(&dealer_distance) {
                    Ordering::Less => HandOutcome::Win,
                    Ordering::Greater => HandOutcome::Lose,
                    Ordering::Equal => HandOutcome::Push,
                }
            };

            let pot = player.pot;
            let payout = match outcome {
                HandOutcome::Win => pot,
                HandOutcome::Lose => 0,
                HandOutcome::Push => player.bet,
            };
            let house_share = pot - payout;

            player.bankroll_mut().credit(payout);
            player.pot = 0;
            self.house_take = self.house_take.saturating_add(house_share);

            log::info!(
                "{} {outcome:?}: {} against dealer {dealer_total}, paid {payout}",
                player.name(),
                player.hand.total()
            );

            settled.push(PlayerResult {
                player_id: player.id(),
                name: player.name().into(),
                outcome,
                bet: player.bet,
                pot,
                payout,
                house_share,
                player_total: player.hand.total(),
                bankroll: player.bankroll().funds().unwrap_or(0),
            });
        }

        for result in &settled {
            self.emit(TableEvent::Settled(result.clone()));
        }
        results.extend(settled);
        results.sort_by_key(|r| r.player_id);

        self.rounds_played += 1;
        let eliminated = self.eliminate_broke_players();
        self.phase = RoundPhase::RoundEnd;

        Ok(RoundResult {
            players: results,
            dealer_total,
            dealer_bust,
            dealer_skipped,
            eliminated,
        })
    }

    /// Removes every player whose bankroll is below the minimum bet.
    fn eliminate_broke_players(&mut self) -> Vec<Elimination> {
        let minimum = self.options.minimum_bet;
        let mut eliminated = Vec::new();
        let mut index = 0;

        while index < self.players.len() {
            let funds = self.players[index].bankroll().funds().unwrap_or(0);
            if funds >= minimum {
                index += 1;
                continue;
            }

            let mut player = self.players.remove(index);
            self.shoe.return_cards(player.reset_round());
            log::info!(
                "{} eliminated with {funds}, minimum bet is {minimum}",
                player.name()
            );
            self.emit(TableEvent::Eliminated {
                seat: Self::seat_of(&player),
                bankroll: funds,
            });
            eliminated.push(Elimination {
                player_id: player.id(),
                name: player.name().into(),
                bankroll: funds,
            });
        }

        eliminated
    }
}
