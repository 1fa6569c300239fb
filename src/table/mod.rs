//! Round engine and session state.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::{RoundError, SetupError};
use crate::event::{Seat, TableEvent};
use crate::options::TableOptions;
use crate::participant::{Participant, PlayerId, Role};
use crate::policy::TurnView;
use crate::result::PlayerResult;
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
mod round;
pub mod state;

pub use state::RoundPhase;

/// A blackjack table: one dealer, up to four players, one shoe.
///
/// The table owns every piece of round state and moves through
/// [`RoundPhase`]s via explicit operations. Each operation checks the phase
/// it needs and fails with an `InvalidState` error otherwise.
#[derive(Debug)]
pub struct Table {
    /// Table options.
    pub options: TableOptions,
    shoe: Shoe,
    dealer: Participant,
    players: Vec<Participant>,
    phase: RoundPhase,
    /// Index into `players` of the player to act.
    turn: usize,
    /// Results of players who busted before settlement.
    forfeits: Vec<PlayerResult>,
    house_take: usize,
    rounds_played: usize,
    events: Vec<TableEvent>,
    rng: ChaCha8Rng,
}

impl Table {
    /// Seats one player per name and shuffles a fresh shoe with `seed`.
    ///
    /// Empty names are replaced with `Player N`. Player IDs start at 1 in
    /// seat order.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no players or more than
    /// `options.max_players`, the minimum bet is zero, or the starting
    /// bankroll cannot cover the minimum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), ["Ann", "Bo"], 42).unwrap();
    /// assert_eq!(table.players().len(), 2);
    /// ```
    pub fn new<I, S>(options: TableOptions, names: I, seed: u64) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(SetupError::NoPlayers);
        }
        if names.len() > options.max_players || names.len() > usize::from(PlayerId::MAX) {
            return Err(SetupError::TooManyPlayers {
                count: names.len(),
                max: options.max_players,
            });
        }
        if options.minimum_bet == 0 {
            return Err(SetupError::ZeroMinimumBet);
        }
        if options.starting_bankroll < options.minimum_bet {
            return Err(SetupError::BankrollBelowMinimum {
                bankroll: options.starting_bankroll,
                minimum: options.minimum_bet,
            });
        }

        let players = names
            .into_iter()
            .zip(1..=PlayerId::MAX)
            .map(|(name, id)| {
                let name = if name.trim().is_empty() {
                    format!("Player {id}")
                } else {
                    name
                };
                Participant::player(id, name, options.starting_bankroll)
            })
            .collect();

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut shoe = Shoe::new();
        shoe.shuffle(&mut rng);

        log::debug!("table seated with options {options:?}");

        Ok(Self {
            options,
            shoe,
            dealer: Participant::dealer(),
            players,
            phase: RoundPhase::RoundEnd,
            turn: 0,
            forfeits: Vec::new(),
            house_take: 0,
            rounds_played: 0,
            events: Vec::new(),
            rng,
        })
    }

    /// Starts a new round: collects every hand into the shoe, resets
    /// per-round state, shuffles, and opens betting.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is still in progress or every player has
    /// been eliminated.
    pub fn start_round(&mut self) -> Result<(), RoundError> {
        if self.phase != RoundPhase::RoundEnd {
            return Err(RoundError::InvalidState);
        }
        if self.players.is_empty() {
            return Err(RoundError::NoPlayers);
        }

        for participant in self.players.iter_mut().chain(core::iter::once(&mut self.dealer)) {
            self.shoe.return_cards(participant.reset_round());
        }
        self.forfeits.clear();
        self.turn = 0;
        self.shoe.shuffle(&mut self.rng);
        self.emit(TableEvent::Shuffled {
            cards: self.shoe.len(),
        });

        self.phase = RoundPhase::Betting;
        Ok(())
    }

    /// Abandons the current round after a fatal error such as an empty shoe.
    ///
    /// Stakes still in the pot are returned to their players; pots already
    /// forfeited by a bust stay with the house. The table ends in
    /// [`RoundPhase::RoundEnd`].
    pub fn abort_round(&mut self) {
        for player in &mut self.players {
            if player.pot > 0 {
                let stake = player.bet;
                player.bankroll_mut().credit(stake);
                player.pot = 0;
            }
        }
        log::warn!("round {} aborted, open stakes refunded", self.rounds_played + 1);
        self.phase = RoundPhase::RoundEnd;
    }

    /// Replaces the shoe, e.g. to stack the deck for a deterministic round.
    ///
    /// Only allowed while betting is open, before any card is dealt. The
    /// caller is responsible for the new shoe holding one complete deck if
    /// later rounds should see all 52 cards.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] outside the betting phase or if
    /// any hand still holds cards.
    pub fn set_shoe(&mut self, shoe: Shoe) -> Result<(), RoundError> {
        let hands_empty = self
            .players
            .iter()
            .chain(core::iter::once(&self.dealer))
            .all(|p| p.hand().is_empty());
        if self.phase != RoundPhase::Betting || !hands_empty {
            return Err(RoundError::InvalidState);
        }
        log::debug!("shoe replaced with {} cards", shoe.len());
        self.shoe = shoe;
        Ok(())
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the seated players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Participant] {
        &self.players
    }

    /// Returns the player with `id`.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Participant> {
        self.players.iter().find(|p| p.id() == id)
    }

    fn player_index(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id() == id)
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Returns the dealer's first face-up card.
    #[must_use]
    pub fn dealer_up_card(&self) -> Option<&Card> {
        self.dealer.hand().cards().iter().find(|c| !c.is_face_down())
    }

    /// Returns the total at stake: every player's bet plus the dealer's match.
    #[must_use]
    pub fn pot(&self) -> usize {
        self.players
            .iter()
            .fold(0usize, |total, p| total.saturating_add(p.pot()))
    }

    /// Returns everything the house has retained this session.
    #[must_use]
    pub const fn house_take(&self) -> usize {
        self.house_take
    }

    /// Returns the number of settled rounds.
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Returns whether every player has left the table.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.players.is_empty()
    }

    /// Returns the ID of the player who must act next.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        if self.phase != RoundPhase::PlayerTurns {
            return None;
        }
        self.players.get(self.turn).map(Participant::id)
    }

    /// Returns what the current player can see, if a player is to act.
    #[must_use]
    pub fn turn_view(&self) -> Option<TurnView<'_>> {
        if self.phase != RoundPhase::PlayerTurns {
            return None;
        }
        let participant = self.players.get(self.turn)?;
        Some(TurnView {
            participant,
            dealer_up_card: self.dealer_up_card(),
        })
    }

    /// Drains the queued notifications.
    pub fn take_events(&mut self) -> Vec<TableEvent> {
        core::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: TableEvent) {
        self.events.push(event);
    }

    fn seat_of(participant: &Participant) -> Seat {
        match participant.role() {
            Role::Player => {
                Seat::Player(participant.id(), String::from(participant.name()))
            }
            Role::Dealer => Seat::Dealer,
        }
    }
}
