//! A single-deck blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that runs rounds of blackjack between
//! up to four players and a dealer: betting, dealing, player decisions,
//! the dealer's fixed hit/stand policy, and settlement of each pot.
//! Player decisions come from any [`DecisionPolicy`]; with the `std` feature
//! [`console::Console`] provides one backed by line-oriented I/O.
//!
//! # Example
//!
//! ```
//! use bjtable::{FixedThresholdPolicy, Table, TableOptions};
//!
//! let mut table = Table::new(TableOptions::default(), ["Player"], 42).unwrap();
//! table.start_round().unwrap();
//! table.place_bet(1, 25).unwrap();
//! let result = table.play_round(&mut FixedThresholdPolicy::default()).unwrap();
//! assert_eq!(result.players[0].bet, 25);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod error;
pub mod event;
pub mod hand;
pub mod options;
pub mod participant;
pub mod policy;
pub mod result;
pub mod shoe;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{
    ActionError, BetError, DealError, EmptyShoeError, PlayError, RoundError, SetupError,
    ShowdownError,
};
pub use event::{Seat, TableEvent};
pub use hand::{BLACKJACK, Hand, hand_value};
pub use options::TableOptions;
pub use participant::{Bankroll, Participant, PlayerId, Role};
pub use policy::{Decision, DecisionPolicy, FixedThresholdPolicy, TurnView};
pub use result::{DealerOutcome, Elimination, HandOutcome, PlayerResult, RoundResult};
pub use shoe::{Shoe, new_deck};
pub use table::{RoundPhase, Table};
