use crate::error::PlayError;
use crate::policy::{Decision, DecisionPolicy};
use crate::result::RoundResult;

use super::{RoundPhase, Table};

impl Table {
    /// Plays out a round whose bets have been placed.
    ///
    /// Deals, asks `policy` for each player's decisions in seat order until
    /// that player stands or busts, runs the dealer, and settles.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by dealing, a player action, or the
    /// dealer turn. The round is left where it failed; call
    /// [`abort_round`](Self::abort_round) to recover.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{FixedThresholdPolicy, Table, TableOptions};
    ///
    /// let mut table = Table::new(TableOptions::default(), ["Ann"], 7).unwrap();
    /// table.start_round().unwrap();
    /// table.place_bet(1, 50).unwrap();
    ///
    /// let result = table.play_round(&mut FixedThresholdPolicy::new(15)).unwrap();
    /// assert_eq!(result.players.len(), 1);
    /// assert_eq!(table.pot(), 0);
    /// ```
    pub fn play_round<P: DecisionPolicy + ?Sized>(
        &mut self,
        policy: &mut P,
    ) -> Result<RoundResult, PlayError> {
        self.deal()?;

        while let Some(view) = self.turn_view() {
            let player_id = view.participant.id();
            let decision = policy.decide(&view);
            log::debug!("player {player_id} decides to {decision}");

            match decision {
                Decision::Hit => {
                    self.hit(player_id)?;
                }
                Decision::Stand => self.stand(player_id)?,
            }
        }

        if self.phase == RoundPhase::DealerTurn {
            self.dealer_play()?;
        }

        Ok(self.settle()?)
    }
}
