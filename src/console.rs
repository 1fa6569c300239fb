//! Line-oriented console front end.
//!
//! [`Console`] is the human side of the table: it reads answers from any
//! [`BufRead`], writes prompts and table notifications to any [`Write`], and
//! implements [`DecisionPolicy`] so a [`Table`] can ask it for hit/stand
//! decisions. Unparseable input is reported and asked again; it never
//! reaches the table.

use alloc::string::{String, ToString};
use core::fmt::Display;
use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::event::TableEvent;
use crate::participant::{Participant, PlayerId};
use crate::policy::{Decision, DecisionPolicy, TurnView};
use crate::table::Table;

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Nothing was entered.
    #[error("please enter something")]
    Empty,
    /// Expected a whole number.
    #[error("'{0}' is not a whole number")]
    NotANumber(String),
    /// Number outside the accepted range.
    #[error("please choose between {min} and {max}")]
    OutOfRange {
        /// Smallest accepted value.
        min: usize,
        /// Largest accepted value.
        max: usize,
    },
    /// Expected one of a fixed set of answers.
    #[error("please enter either '{expected}'")]
    Unrecognized {
        /// The accepted answers.
        expected: &'static str,
    },
}

/// Parses a hit/stand answer: `h`, `hit`, `s`, `stand` or `stay`, any case.
///
/// # Errors
///
/// Returns an error for anything else.
pub fn parse_decision(input: &str) -> Result<Decision, InputError> {
    match input.trim().to_lowercase().as_str() {
        "" => Err(InputError::Empty),
        "h" | "hit" => Ok(Decision::Hit),
        "s" | "stand" | "stay" => Ok(Decision::Stand),
        _ => Err(InputError::Unrecognized {
            expected: "h' or 's",
        }),
    }
}

/// Parses a non-negative whole amount.
///
/// # Errors
///
/// Returns an error if the input is empty or not a whole number.
pub fn parse_amount(input: &str) -> Result<usize, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InputError::Empty);
    }
    input
        .parse()
        .map_err(|_| InputError::NotANumber(input.to_string()))
}

/// Parses a yes/no answer.
///
/// # Errors
///
/// Returns an error for anything other than `y`, `yes`, `n` or `no`.
pub fn parse_yes_no(input: &str) -> Result<bool, InputError> {
    match input.trim().to_lowercase().as_str() {
        "" => Err(InputError::Empty),
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(InputError::Unrecognized { expected: "y' or 'n" }),
    }
}

/// Prompts on a writer and reads answers from a reader.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Writes one line.
    ///
    /// # Errors
    ///
    /// Returns any write error.
    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Prompts and reads one line. `None` means end of input.
    fn ask(&mut self, prompt: impl Display) -> io::Result<Option<String>> {
        write!(self.output, "{prompt} ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks how many players are seated, between 1 and `max`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error.
    pub fn ask_player_count(&mut self, max: usize) -> io::Result<Option<usize>> {
        loop {
            let Some(line) = self.ask(format_args!("How many players? (1-{max})"))? else {
                return Ok(None);
            };
            match parse_amount(&line) {
                Ok(count) if (1..=max).contains(&count) => return Ok(Some(count)),
                Ok(_) => self.say(InputError::OutOfRange { min: 1, max })?,
                Err(err) => self.say(err)?,
            }
        }
    }

    /// Asks for the name of the player in `seat`. Blank answers are kept
    /// blank so the table can pick a default.
    ///
    /// # Errors
    ///
    /// Returns any I/O error.
    pub fn ask_name(&mut self, seat: usize) -> io::Result<Option<String>> {
        self.ask(format_args!("Please enter a name for player {seat}:"))
    }

    /// Asks `player_id` for a bet until the table accepts one.
    ///
    /// Returns the player's pot, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns any I/O error.
    pub fn ask_bet(&mut self, table: &mut Table, player_id: PlayerId) -> io::Result<Option<usize>> {
        let minimum = table.options.minimum_bet;
        loop {
            let (name, funds) = match table.player(player_id) {
                Some(player) => (
                    player.name().to_string(),
                    player.bankroll().funds().unwrap_or(0),
                ),
                None => return Ok(None),
            };
            self.say(format_args!("Minimum bet: ${minimum}. {name} has ${funds}."))?;

            let Some(line) = self.ask(format_args!("{name}, how much would you like to bet?"))?
            else {
                return Ok(None);
            };
            let amount = match parse_amount(&line) {
                Ok(amount) => amount,
                Err(err) => {
                    self.say(err)?;
                    continue;
                }
            };

            match table.place_bet(player_id, amount) {
                Ok(pot) => return Ok(Some(pot)),
                Err(err) => self.say(format_args!("Bet rejected: {err}."))?,
            }
        }
    }

    /// Asks whether to play another round. End of input means no.
    ///
    /// # Errors
    ///
    /// Returns any I/O error.
    pub fn ask_restart(&mut self) -> io::Result<bool> {
        loop {
            let Some(line) = self.ask("Would you like to play another hand? (y/n)")? else {
                return Ok(false);
            };
            match parse_yes_no(&line) {
                Ok(answer) => return Ok(answer),
                Err(err) => self.say(err)?,
            }
        }
    }

    /// Prints table notifications, one per line.
    ///
    /// # Errors
    ///
    /// Returns any write error.
    pub fn report<I: IntoIterator<Item = TableEvent>>(&mut self, events: I) -> io::Result<()> {
        for event in events {
            self.say(event)?;
        }
        Ok(())
    }

    /// Prints a participant's hand and total.
    ///
    /// # Errors
    ///
    /// Returns any write error.
    pub fn show_hand(&mut self, participant: &Participant) -> io::Result<()> {
        self.say("++++++++++++++++++++++++++++++")?;
        self.say(format_args!("{}'s Hand:", participant.name()))?;
        self.say(participant.hand())?;
        self.say(format_args!("Hand value: {}.", participant.hand().total()))?;
        self.say("++++++++++++++++++++++++++++++")
    }
}

impl<R: BufRead, W: Write> DecisionPolicy for Console<R, W> {
    fn decide(&mut self, turn: &TurnView<'_>) -> Decision {
        let player = turn.participant;
        loop {
            let shown = self.show_hand(player).and_then(|()| {
                if let Some(card) = turn.dealer_up_card {
                    self.say(format_args!("Dealer shows {card}."))?;
                }
                self.ask(format_args!(
                    "{}, would you like to [h]it or [s]tand?",
                    player.name()
                ))
            });
            let line = match shown {
                Ok(Some(line)) => line,
                Ok(None) => {
                    log::warn!("input closed during {}'s turn, standing", player.name());
                    return Decision::Stand;
                }
                Err(err) => {
                    log::warn!("console error during {}'s turn: {err}, standing", player.name());
                    return Decision::Stand;
                }
            };

            match parse_decision(&line) {
                Ok(decision) => return decision,
                Err(err) => {
                    if let Err(err) = self.say(err) {
                        log::warn!("console error: {err}, standing");
                        return Decision::Stand;
                    }
                }
            }
        }
    }
}
